//! Tab and breadcrumb model for the rulebook page, derived from the rulebook id
//! and the current browser path.

use crate::shared::messages::{LabelProvider, MessageKey};
use crate::shared::navigation::{
    get_tab_from_path, Breadcrumb, NavigationPath, RoutePattern, TabDescriptor, TabTitle,
};

pub const RULEBOOKS_PATH: &str = "/rulebooks";
pub const RULESETS_ROUTE: &str = "/rulebook/:id/rulesets";

pub fn rulebook_path(rulebook_id: &str, tab: &str) -> String {
    format!("/rulebook/{}/{}", rulebook_id, tab)
}

/// Tabs of the rulebook page, always three: back to list, details, rule sets.
///
/// The id is embedded verbatim.
pub fn build_rulebook_tabs(rulebook_id: &str, labels: &impl LabelProvider) -> Vec<TabDescriptor> {
    vec![
        TabDescriptor {
            event_key: 0,
            title: TabTitle::with_icon(
                "caret-left",
                labels.label(MessageKey::BackToRulebooks),
            ),
            name: RULEBOOKS_PATH.to_string(),
        },
        TabDescriptor {
            event_key: 1,
            title: TabTitle::text(labels.label(MessageKey::Details)),
            name: rulebook_path(rulebook_id, "details"),
        },
        TabDescriptor {
            event_key: 2,
            title: TabTitle::text(labels.label(MessageKey::Rulesets)),
            name: rulebook_path(rulebook_id, "rulesets"),
        },
    ]
}

/// `[Rulebooks → list, rulebook name → its details, active tab]`.
pub fn build_breadcrumbs(
    rulebook_id: Option<&str>,
    rulebook_name: Option<&str>,
    active_title: &str,
    labels: &impl LabelProvider,
) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb {
            title: Some(labels.label(MessageKey::Rulebooks)),
            key: "rulebooks",
            to: Some(RULEBOOKS_PATH.to_string()),
        },
        Breadcrumb {
            title: rulebook_name.map(str::to_string),
            key: "details",
            to: rulebook_id.map(|id| rulebook_path(id, "details")),
        },
        Breadcrumb {
            title: Some(active_title.to_string()),
            key: "current_tab",
            to: None,
        },
    ]
}

/// Sub-view shown below the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulebookSubView {
    Details,
    Rulesets,
}

impl RulebookSubView {
    /// Exactly `/rulebook/:id/rulesets` selects the rule sets, anything else
    /// falls back to details.
    pub fn from_path(path: &NavigationPath) -> Self {
        if RoutePattern::parse(RULESETS_ROUTE).matches(path).is_some() {
            Self::Rulesets
        } else {
            Self::Details
        }
    }
}

/// Everything the page header needs for one rulebook/path snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulebookNavigation {
    pub tabs: Vec<TabDescriptor>,
    pub active_title: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub sub_view: RulebookSubView,
}

impl RulebookNavigation {
    /// `loaded` is `(id, name)` of the loaded rulebook, `None` while unloaded.
    pub fn derive(
        loaded: Option<(&str, Option<&str>)>,
        path: &NavigationPath,
        labels: &impl LabelProvider,
    ) -> Self {
        let fallback = labels.label(MessageKey::Details);
        let (tabs, active_title) = match loaded {
            Some((id, _)) if !id.is_empty() => {
                let tabs = build_rulebook_tabs(id, labels);
                let active = get_tab_from_path(&tabs, path)
                    .map(|title| title.text.clone())
                    .unwrap_or(fallback);
                (tabs, active)
            }
            Some((id, _)) => (build_rulebook_tabs(id, labels), fallback),
            None => (Vec::new(), fallback),
        };

        let breadcrumbs = build_breadcrumbs(
            loaded.map(|(id, _)| id),
            loaded.and_then(|(_, name)| name),
            &active_title,
            labels,
        );

        Self {
            tabs,
            active_title,
            breadcrumbs,
            sub_view: RulebookSubView::from_path(path),
        }
    }
}
