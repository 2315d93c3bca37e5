//! CardAnimated - Thaw `Card` with the `card-appear` entry animation.
//!
//! ```rust,ignore
//! <CardAnimated title="Details" delay_ms=0>
//!     <p>"Content"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

fn appear_style(delay_ms: u32) -> String {
    format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
}

#[component]
pub fn CardAnimated(
    /// Animation delay, for staggering several cards.
    #[prop(optional)]
    delay_ms: u32,
    /// Section title rendered above the content.
    #[prop(optional, into)]
    title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:style={appear_style(delay_ms)}>
            {title.map(|t| view! { <h4 class="details-section__title">{t}</h4> })}
            {children()}
        </Card>
    }
}
