use crate::shared::navigation::Breadcrumb;
use leptos::prelude::*;

/// TopToolbar - breadcrumb trail above a detail page title
///
/// Crumbs with a target render as links, the rest as plain text.
#[component]
pub fn TopToolbar(
    #[prop(into)] breadcrumbs: Signal<Vec<Breadcrumb>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <nav class="breadcrumbs" aria-label="breadcrumb">
                    <For
                        each=move || breadcrumbs.get()
                        key=|crumb| (crumb.key, crumb.title.clone(), crumb.to.clone())
                        children=move |crumb| {
                            let title = crumb.title.unwrap_or_default();
                            match crumb.to {
                                Some(to) => view! {
                                    <a class="breadcrumbs__item" href=to>{title}</a>
                                }.into_any(),
                                None => view! {
                                    <span class="breadcrumbs__item breadcrumbs__item--current">{title}</span>
                                }.into_any(),
                            }
                        }
                    />
                </nav>
                {children()}
            </div>
        </div>
    }
}
