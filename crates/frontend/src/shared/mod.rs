pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod messages;
pub mod navigation;
pub mod page_frame;
pub mod page_standard;
