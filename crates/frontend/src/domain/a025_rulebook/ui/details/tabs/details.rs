//! Details tab - read-only rulebook fields

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::date_utils::format_datetime;
use crate::shared::messages::{use_labels, LabelProvider, MessageKey};
use contracts::domain::a025_rulebook::aggregate::Rulebook;
use leptos::prelude::*;

const EMPTY: &str = "—";

fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| EMPTY.to_string())
}

#[component]
pub fn RulebookDetails(rulebook: Rulebook) -> impl IntoView {
    let labels = use_labels();

    let fields = vec![
        (MessageKey::Name, or_dash(rulebook.name)),
        (MessageKey::Description, or_dash(rulebook.description)),
        (MessageKey::NumberOfRulesets, or_dash(rulebook.number_of_rulesets)),
        (MessageKey::FireCount, or_dash(rulebook.fire_count)),
        (
            MessageKey::CreatedAt,
            or_dash(rulebook.created_at.map(|d| format_datetime(&d))),
        ),
        (
            MessageKey::LastModified,
            or_dash(rulebook.last_modified.map(|d| format_datetime(&d))),
        ),
    ];

    view! {
        <CardAnimated title={labels.label(MessageKey::Details)} delay_ms=0>
            <div class="details-grid--3col">
                {fields
                    .into_iter()
                    .map(|(key, value)| view! {
                        <div class="form__group">
                            <label class="form__label">{labels.label(key)}</label>
                            <span class="form__value" style="padding: 4px 0; display: block;">
                                {value}
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </CardAnimated>
    }
}
