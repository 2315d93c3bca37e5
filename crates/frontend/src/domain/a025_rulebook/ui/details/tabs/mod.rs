pub mod details;
pub mod rulesets;

pub use details::RulebookDetails;
pub use rulesets::RulebookRulesets;
