//! Rulebook details page
//!
//! - model.rs: API functions (fetch rulebook, fetch rule sets)
//! - state.rs: keyed load state
//! - navigation.rs: tabs, breadcrumbs and sub-view selection from the path
//! - view_model.rs: ViewModel driving the load
//! - page.rs: Leptos component
//! - tabs/: sub-views

pub mod model;
pub mod navigation;
pub mod page;
pub mod state;
pub mod tabs;
pub mod view_model;

pub use page::RulebookPage;
pub use view_model::RulebookDetailsVm;
