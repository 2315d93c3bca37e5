//! Navigation primitives shared by detail pages: structured paths, exact route
//! patterns, tab descriptors and breadcrumbs.
//!
//! Paths are handled as segment sequences rather than raw strings:
//! `"/rulebook/42/rulesets/"` and `"rulebook//42/rulesets"` both parse to
//! `["rulebook", "42", "rulesets"]`.

use std::collections::HashMap;

const SEPARATOR: char = '/';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPath {
    segments: Vec<String>,
    trailing_separator: bool,
}

impl NavigationPath {
    pub fn parse(path: &str) -> Self {
        Self {
            trailing_separator: path.ends_with(SEPARATOR),
            segments: path
                .split(SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final segment, `None` for the root path.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Text after the last separator of the raw path: empty for `"/"` and
    /// for paths ending in a separator.
    pub fn final_element(&self) -> &str {
        if self.trailing_separator {
            ""
        } else {
            self.last_segment().unwrap_or_default()
        }
    }

    pub fn to_path_string(&self) -> String {
        format!("{SEPARATOR}{}", self.segments.join("/"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    Literal(String),
    Param(String),
}

/// Route pattern such as `/rulebook/:id/rulesets`.
///
/// Matching is exact: the path must have the same number of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<PatternSegment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Self {
        Self {
            segments: pattern
                .split(SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(|s| match s.strip_prefix(':') {
                    Some(name) => PatternSegment::Param(name.to_string()),
                    None => PatternSegment::Literal(s.to_string()),
                })
                .collect(),
        }
    }

    /// Captured params on match, `None` otherwise.
    pub fn matches(&self, path: &NavigationPath) -> Option<HashMap<String, String>> {
        if self.segments.len() != path.segments().len() {
            return None;
        }
        let mut params = HashMap::new();
        for (pattern, actual) in self.segments.iter().zip(path.segments()) {
            match pattern {
                PatternSegment::Literal(lit) if lit == actual => {}
                PatternSegment::Literal(_) => return None,
                PatternSegment::Param(name) => {
                    params.insert(name.clone(), actual.clone());
                }
            }
        }
        Some(params)
    }
}

/// Rendered tab title: optional icon followed by text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabTitle {
    pub icon: Option<&'static str>,
    pub text: String,
}

impl TabTitle {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            icon: None,
            text: text.into(),
        }
    }

    pub fn with_icon(icon: &'static str, text: impl Into<String>) -> Self {
        Self {
            icon: Some(icon),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    /// Position in the strip, used as the render key.
    pub event_key: usize,
    pub title: TabTitle,
    /// Full logical path the tab navigates to.
    pub name: String,
}

impl TabDescriptor {
    /// Final segment of the tab path, compared against the browser path.
    pub fn route_suffix(&self) -> &str {
        self.name.rsplit(SEPARATOR).next().unwrap_or_default()
    }
}

/// Title of the first tab whose last path element equals the final element of
/// `path`.
///
/// Only the final element is compared, so `/details` and `/rulebook/1/details`
/// select the same tab, while `/rulebook/1/details/` selects none.
pub fn get_tab_from_path<'a>(
    tabs: &'a [TabDescriptor],
    path: &NavigationPath,
) -> Option<&'a TabTitle> {
    let current = path.final_element();
    tabs.iter()
        .find(|tab| tab.route_suffix() == current)
        .map(|tab| &tab.title)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// `None` renders as an empty crumb.
    pub title: Option<String>,
    pub key: &'static str,
    pub to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_empty_segments() {
        let path = NavigationPath::parse("/rulebook//42/rulesets/");
        assert_eq!(path.segments(), ["rulebook", "42", "rulesets"]);
        assert_eq!(path.last_segment(), Some("rulesets"));
        assert_eq!(path.to_path_string(), "/rulebook/42/rulesets");
    }

    #[test]
    fn test_final_element_keeps_trailing_separator() {
        assert_eq!(NavigationPath::parse("/rulebook/42/rulesets").final_element(), "rulesets");
        assert_eq!(NavigationPath::parse("/rulebook/42/rulesets/").final_element(), "");
        assert_eq!(NavigationPath::parse("/").final_element(), "");
        assert_eq!(NavigationPath::parse("").final_element(), "");
    }

    #[test]
    fn test_root_has_no_last_segment() {
        assert_eq!(NavigationPath::parse("/").last_segment(), None);
        assert_eq!(NavigationPath::parse("").last_segment(), None);
        assert_eq!(NavigationPath::parse("").to_path_string(), "/");
    }

    #[test]
    fn test_pattern_captures_params() {
        let pattern = RoutePattern::parse("/rulebook/:id/rulesets");
        let params = pattern
            .matches(&NavigationPath::parse("/rulebook/42/rulesets"))
            .expect("should match");
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_pattern_is_exact() {
        let pattern = RoutePattern::parse("/rulebook/:id/rulesets");
        assert!(pattern.matches(&NavigationPath::parse("/rulebook/42")).is_none());
        assert!(pattern
            .matches(&NavigationPath::parse("/rulebook/42/rulesets/extra"))
            .is_none());
        assert!(pattern
            .matches(&NavigationPath::parse("/rulebooks/42/rulesets"))
            .is_none());
        assert!(pattern.matches(&NavigationPath::parse("/rulesets")).is_none());
    }

    fn tab(key: usize, title: &str, name: &str) -> TabDescriptor {
        TabDescriptor {
            event_key: key,
            title: TabTitle::text(title),
            name: name.into(),
        }
    }

    #[test]
    fn test_route_suffix() {
        assert_eq!(tab(0, "x", "/rulebook/42/details").route_suffix(), "details");
        assert_eq!(tab(0, "x", "/rulebooks").route_suffix(), "rulebooks");
        assert_eq!(tab(0, "x", "plain").route_suffix(), "plain");
    }

    #[test]
    fn test_first_match_wins() {
        let tabs = vec![tab(0, "first", "/a/details"), tab(1, "second", "/b/details")];
        assert_eq!(
            get_tab_from_path(&tabs, &NavigationPath::parse("/c/details")).map(|t| t.text.as_str()),
            Some("first")
        );
    }

    #[test]
    fn test_no_match_on_root_or_unknown() {
        let tabs = vec![tab(0, "details", "/a/details")];
        assert_eq!(get_tab_from_path(&tabs, &NavigationPath::parse("/")), None);
        assert_eq!(get_tab_from_path(&tabs, &NavigationPath::parse("/a")), None);
        assert_eq!(get_tab_from_path(&tabs, &NavigationPath::parse("/a/details/")), None);
        assert_eq!(get_tab_from_path(&[], &NavigationPath::parse("/a/details")), None);
    }
}
