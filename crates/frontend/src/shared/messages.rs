//! Shared UI message catalog.
//!
//! Views look labels up by [`MessageKey`] through the [`LabelProvider`] trait so
//! the navigation logic can be exercised with any catalog.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Rulebooks,
    BackToRulebooks,
    Details,
    Rulesets,
    Name,
    Description,
    NumberOfRulesets,
    FireCount,
    CreatedAt,
    LastModified,
    LastFiredDate,
    NoRulesets,
    LoadFailed,
}

/// Label lookup. Always succeeds.
pub trait LabelProvider {
    fn label(&self, key: MessageKey) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub rulebooks: &'static str,
    pub back_to_rulebooks: &'static str,
    pub details: &'static str,
    pub rulesets: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub number_of_rulesets: &'static str,
    pub fire_count: &'static str,
    pub created_at: &'static str,
    pub last_modified: &'static str,
    pub last_fired_date: &'static str,
    pub no_rulesets: &'static str,
    pub load_failed: &'static str,
}

impl Labels {
    pub fn en() -> Self {
        Self {
            rulebooks: "Rulebooks",
            back_to_rulebooks: "Back to Rulebooks",
            details: "Details",
            rulesets: "Rule Sets",
            name: "Name",
            description: "Description",
            number_of_rulesets: "Number of rule sets",
            fire_count: "Fire count",
            created_at: "Created",
            last_modified: "Last modified",
            last_fired_date: "Last fired date",
            no_rulesets: "There are no rule sets in this rulebook",
            load_failed: "Failed to load rulebook",
        }
    }

    pub fn ru() -> Self {
        Self {
            rulebooks: "Сборники правил",
            back_to_rulebooks: "Назад к сборникам правил",
            details: "Основное",
            rulesets: "Наборы правил",
            name: "Наименование",
            description: "Описание",
            number_of_rulesets: "Количество наборов",
            fire_count: "Срабатываний",
            created_at: "Создан",
            last_modified: "Изменён",
            last_fired_date: "Последнее срабатывание",
            no_rulesets: "В сборнике нет наборов правил",
            load_failed: "Ошибка загрузки сборника правил",
        }
    }
}

impl Labels {
    /// Catalog for a BCP 47 language tag, English for anything unknown.
    pub fn for_language(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ru") {
            Self::ru()
        } else {
            Self::en()
        }
    }

    /// Catalog matching the browser language.
    pub fn from_navigator() -> Self {
        web_sys::window()
            .and_then(|w| w.navigator().language())
            .map(|lang| Self::for_language(&lang))
            .unwrap_or_default()
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::en()
    }
}

impl LabelProvider for Labels {
    fn label(&self, key: MessageKey) -> String {
        let text = match key {
            MessageKey::Rulebooks => self.rulebooks,
            MessageKey::BackToRulebooks => self.back_to_rulebooks,
            MessageKey::Details => self.details,
            MessageKey::Rulesets => self.rulesets,
            MessageKey::Name => self.name,
            MessageKey::Description => self.description,
            MessageKey::NumberOfRulesets => self.number_of_rulesets,
            MessageKey::FireCount => self.fire_count,
            MessageKey::CreatedAt => self.created_at,
            MessageKey::LastModified => self.last_modified,
            MessageKey::LastFiredDate => self.last_fired_date,
            MessageKey::NoRulesets => self.no_rulesets,
            MessageKey::LoadFailed => self.load_failed,
        };
        text.to_string()
    }
}

/// Catalog from context, English when none was provided.
pub fn use_labels() -> Labels {
    use_context::<Labels>().unwrap_or_default()
}
