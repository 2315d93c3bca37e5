pub mod app_tabs;
pub mod card_animated;
pub mod top_toolbar;
