//! Rulebook page: header with breadcrumbs, tab strip and the sub-view picked
//! from the current path.

use super::model;
use super::navigation::{RulebookNavigation, RulebookSubView};
use super::tabs::{RulebookDetails, RulebookRulesets};
use super::view_model::RulebookDetailsVm;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::app_tabs::AppTabs;
use crate::shared::components::top_toolbar::TopToolbar;
use crate::shared::messages::{use_labels, LabelProvider, MessageKey};
use crate::shared::navigation::NavigationPath;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

#[component]
pub fn RulebookPage() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let labels = use_labels();
    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_location);

    let rulebook_id = Signal::derive(move || params.with(|p| p.get("id")).unwrap_or_default());

    let vm = RulebookDetailsVm::new(api, model::http_fetcher());
    vm.bind_id(rulebook_id);

    let path = Memo::new(move |_| NavigationPath::parse(&location.pathname.get()));
    let rulebook = vm.rulebook();
    let navigation = Memo::new({
        let labels = labels.clone();
        move |_| {
            let current = path.get();
            rulebook.with(|rb| {
                let loaded = rb.as_ref().map(|rb| (rb.id.as_str(), rb.display_name()));
                RulebookNavigation::derive(loaded, &current, &labels)
            })
        }
    });
    let sub_view = Memo::new(move |_| navigation.with(|n| n.sub_view));

    let breadcrumbs = Signal::derive(move || navigation.with(|n| n.breadcrumbs.clone()));
    let tabs = Signal::derive(move || navigation.with(|n| n.tabs.clone()));
    let active_title = Signal::derive(move || navigation.with(|n| n.active_title.clone()));
    let title = Signal::derive(move || {
        rulebook.with(|rb| {
            rb.as_ref()
                .and_then(|rb| rb.name.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <PageFrame page_id="a025_rulebook--detail" category=PAGE_CAT_DETAIL>
            <TopToolbar breadcrumbs=breadcrumbs>
                <h2 class="page__title">{move || title.get()}</h2>
            </TopToolbar>
            <AppTabs tabs=tabs active=active_title />
            <div class="page__content">
                <ErrorDisplay error={vm.error()} label={labels.label(MessageKey::LoadFailed)} />
                {move || {
                    rulebook.get().map(|rb| match sub_view.get() {
                        RulebookSubView::Rulesets => view! {
                            <RulebookRulesets rulebook=rb />
                        }.into_any(),
                        RulebookSubView::Details => view! {
                            <RulebookDetails rulebook=rb />
                        }.into_any(),
                    })
                }}
            </div>
        </PageFrame>
    }
}

// ── Error display ─────────────────────────────────────────────────────────────

#[component]
fn ErrorDisplay(error: Signal<Option<String>>, label: String) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div
                class="warning-box"
                style="background: var(--color-error-50); border-color: var(--color-error-100); margin-bottom: var(--spacing-md);"
            >
                <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                <span class="warning-box__text" style="color: var(--color-error);">
                    {format!("{}: {}", label, e)}
                </span>
            </div>
        })}
    }
}
