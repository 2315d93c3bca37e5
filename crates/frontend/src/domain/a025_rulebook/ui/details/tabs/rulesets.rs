//! Rule sets tab - rule sets attached to the rulebook with their fire statistics

use super::super::model;
use super::super::state::LoadState;
use crate::shared::api_utils::ApiConfig;
use crate::shared::date_utils::format_datetime;
use crate::shared::messages::{use_labels, LabelProvider, MessageKey};
use contracts::domain::a025_rulebook::aggregate::{Rulebook, RulesetSummary};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn RulebookRulesets(rulebook: Rulebook) -> impl IntoView {
    let labels = use_labels();
    let api = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_location);
    let rows: RwSignal<LoadState<Vec<RulesetSummary>>> = RwSignal::new(LoadState::Unloaded);

    let rulebook_id = rulebook.id;
    leptos::task::spawn_local(async move {
        let state = match model::fetch_rulesets(&api, &rulebook_id).await {
            Ok(items) => {
                log::debug!(
                    "a025_rulebook: {} rule sets for rulebook '{}'",
                    items.len(),
                    rulebook_id
                );
                LoadState::Loaded(items)
            }
            Err(e) => {
                log::error!(
                    "a025_rulebook: failed to load rule sets of '{}': {}",
                    rulebook_id,
                    e
                );
                LoadState::Failed(e.to_string())
            }
        };
        // Tab may already be unmounted.
        let _ = rows.try_set(state);
    });

    let rulesets_label = labels.label(MessageKey::Rulesets);
    let title = move || match rows.with(|r| r.loaded().map(Vec::len)) {
        Some(count) => format!("{} ({})", rulesets_label, count),
        None => rulesets_label.clone(),
    };
    let no_rulesets = labels.label(MessageKey::NoRulesets);
    let name_header = labels.label(MessageKey::Name);
    let fire_count_header = labels.label(MessageKey::FireCount);
    let last_fired_header = labels.label(MessageKey::LastFiredDate);

    view! {
        <div class="details-section">
            <h4 class="details-section__title">{title}</h4>

            {move || match rows.get() {
                LoadState::Unloaded => view! {
                    <div style="padding: var(--spacing-md); display: flex; align-items: center; gap: var(--spacing-sm);">
                        <Spinner size=SpinnerSize::Small />
                    </div>
                }.into_any(),
                LoadState::Failed(e) => view! {
                    <div class="warning-box">
                        <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                        <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                    </div>
                }.into_any(),
                LoadState::Loaded(items) if items.is_empty() => {
                    let no_rulesets = no_rulesets.clone();
                    view! {
                        <div style="padding: var(--spacing-md); color: var(--color-text-tertiary);">
                            {no_rulesets}
                        </div>
                    }.into_any()
                }
                LoadState::Loaded(items) => {
                    let name_header = name_header.clone();
                    let fire_count_header = fire_count_header.clone();
                    let last_fired_header = last_fired_header.clone();
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=true min_width=220.0>{name_header}</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=110.0>{fire_count_header}</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=160.0>{last_fired_header}</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {items
                                    .into_iter()
                                    .map(|ruleset| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {ruleset.name}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {ruleset.fire_count.unwrap_or_else(|| "0".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {ruleset
                                                        .last_fired_date
                                                        .map(|d| format_datetime(&d))
                                                        .unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any()
                }
            }}
        </div>
    }
}
