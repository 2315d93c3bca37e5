use crate::domain::a025_rulebook::ui::details::RulebookPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__content">"404"</div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    // One parent route for the whole rulebook so switching tabs keeps the
    // same page instance; the page picks its sub-view from the path itself.
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("/rulebook/:id") view=RulebookPage>
                    <Route path=path!("") view=|| () />
                    <Route path=path!("*tab") view=|| () />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
