use crate::shared::icons::icon;
use crate::shared::navigation::TabDescriptor;
use leptos::prelude::*;

/// AppTabs - route-backed tab strip
///
/// Each tab is a link to its path; the tab whose title equals `active` is
/// highlighted.
#[component]
pub fn AppTabs(
    #[prop(into)] tabs: Signal<Vec<TabDescriptor>>,
    #[prop(into)] active: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="page__tabs">
            <For
                each=move || tabs.get()
                key=|tab| (tab.event_key, tab.name.clone(), tab.title.clone())
                children=move |tab| {
                    let title_text = tab.title.text.clone();
                    view! {
                        <a
                            class="page__tab"
                            class:page__tab--active=move || active.get() == title_text
                            href=tab.name
                        >
                            {tab.title.icon.map(icon)}
                            " "
                            {tab.title.text}
                        </a>
                    }
                }
            />
        </div>
    }
}
