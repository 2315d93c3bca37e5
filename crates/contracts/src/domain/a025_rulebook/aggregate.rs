use serde::Serialize;
use serde_json::Value;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Rulebook as returned by `GET /api/rulebooks/{id}`.
///
/// The server payload is not validated: every field except `id` is optional and
/// counts may arrive either as strings or as JSON numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Rulebook {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_rulesets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fire_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl Rulebook {
    /// Build a rulebook from an arbitrary JSON value.
    ///
    /// Never fails: a non-object payload gives an empty id and no optional fields.
    pub fn from_raw(v: &Value) -> Self {
        Self {
            id: scalar(&v["id"]).unwrap_or_default(),
            name: scalar(&v["name"]),
            description: scalar(&v["description"]),
            number_of_rulesets: scalar(&v["number_of_rulesets"]),
            created_at: scalar(&v["created_at"]),
            fire_count: scalar(&v["fire_count"]),
            last_modified: scalar(&v["last_modified"]),
        }
    }

    /// Name for headers and breadcrumbs, `None` when the server sent none.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

// ============================================================================
// Rule set rows
// ============================================================================

/// One rule set attached to a rulebook (`GET /api/rulebooks/{id}/rulesets`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RulesetSummary {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fire_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_fired_date: Option<String>,
}

impl RulesetSummary {
    pub fn from_raw(v: &Value) -> Self {
        Self {
            id: scalar(&v["id"]).unwrap_or_default(),
            name: scalar(&v["name"]).unwrap_or_default(),
            fire_count: scalar(&v["fire_count"]),
            last_fired_date: scalar(&v["last_fired_date"])
                .or_else(|| scalar(&v["list_fired_date"])),
        }
    }

    /// Parse a list payload. Anything other than a JSON array is an empty list.
    pub fn list_from_raw(v: &Value) -> Vec<Self> {
        v.as_array()
            .map(|items| items.iter().map(Self::from_raw).collect())
            .unwrap_or_default()
    }
}

/// Strings are taken as-is, numbers and booleans keep their JSON text.
fn scalar(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_raw_full_payload() {
        let rb = Rulebook::from_raw(&json!({
            "id": "42",
            "name": "hello_events",
            "description": "demo",
            "number_of_rulesets": 3,
            "created_at": "2022-05-01T10:00:00.000Z",
            "fire_count": "17",
            "last_modified": "2022-05-02T11:30:00Z"
        }));

        assert_eq!(rb.id, "42");
        assert_eq!(rb.display_name(), Some("hello_events"));
        assert_eq!(rb.number_of_rulesets.as_deref(), Some("3"));
        assert_eq!(rb.fire_count.as_deref(), Some("17"));
        assert_eq!(rb.last_modified.as_deref(), Some("2022-05-02T11:30:00Z"));
    }

    #[test]
    fn test_from_raw_without_name() {
        let rb = Rulebook::from_raw(&json!({ "id": "7" }));
        assert_eq!(rb.id, "7");
        assert_eq!(rb.display_name(), None);
        assert_eq!(rb.description, None);
    }

    #[test]
    fn test_from_raw_numeric_id_and_garbage() {
        assert_eq!(Rulebook::from_raw(&json!({ "id": 5 })).id, "5");
        assert_eq!(Rulebook::from_raw(&json!("nope")), Rulebook::default());
        assert_eq!(Rulebook::from_raw(&Value::Null), Rulebook::default());
    }

    #[test]
    fn test_null_fields_are_absent() {
        let rb = Rulebook::from_raw(&json!({ "id": "1", "name": null, "fire_count": [] }));
        assert_eq!(rb.name, None);
        assert_eq!(rb.fire_count, None);
    }

    #[test]
    fn test_ruleset_list() {
        let rows = RulesetSummary::list_from_raw(&json!([
            { "id": 1, "name": "Demo rules", "fire_count": 4, "last_fired_date": "2022-06-01T08:00:00Z" },
            { "id": "2" }
        ]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[0].fire_count.as_deref(), Some("4"));
        assert_eq!(rows[1].name, "");
        assert_eq!(rows[1].last_fired_date, None);

        assert!(RulesetSummary::list_from_raw(&json!({ "detail": "Not found" })).is_empty());
    }

    #[test]
    fn test_ruleset_accepts_list_fired_date_key() {
        let row = RulesetSummary::from_raw(&json!({
            "id": "3",
            "name": "legacy",
            "list_fired_date": "2022-06-01T08:00:00Z"
        }));
        assert_eq!(row.last_fired_date.as_deref(), Some("2022-06-01T08:00:00Z"));

        let both = RulesetSummary::from_raw(&json!({
            "id": "4",
            "last_fired_date": "2022-07-01T00:00:00Z",
            "list_fired_date": "2022-06-01T08:00:00Z"
        }));
        assert_eq!(both.last_fired_date.as_deref(), Some("2022-07-01T00:00:00Z"));
    }

    #[test]
    fn test_serialize_skips_missing() {
        let rb = Rulebook {
            id: "9".into(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&rb).unwrap(), json!({ "id": "9" }));
    }
}
