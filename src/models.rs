//! Frontend Models
//!
//! Request bodies sent to the backend and the records it returns.

use serde::{Deserialize, Serialize};

/// Body of `POST /items`, built from the item form.
///
/// `quantity` stays a string: the form value is sent verbatim and the
/// server does the typing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemSubmission {
    pub name: String,
    pub email: String,
    pub item_name: String,
    pub quantity: String,
    pub expiry_date: String,
}

/// Body of `POST /clock-in`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClockInSubmission {
    pub email: String,
    pub location: String,
}

/// Stored item as returned by `GET /items/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub item_name: String,
    /// Whatever the server stored; normally an integer
    pub quantity: serde_json::Value,
    pub expiry_date: String,
    #[serde(default)]
    pub insert_date: Option<String>,
}

/// Stored clock-in as returned by `GET /clock-in/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockInRecord {
    pub id: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub insert_datetime: Option<String>,
}

/// `{"message": ...}` acknowledgement from create/update/delete
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `PUT /items/{id}`. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

impl ItemUpdate {
    /// Build from raw form values; blank inputs mean "leave unchanged".
    pub fn from_form(name: &str, email: &str, item_name: &str, quantity: &str, expiry_date: &str) -> Self {
        Self {
            name: non_blank(name),
            email: non_blank(email),
            item_name: non_blank(item_name),
            quantity: non_blank(quantity),
            expiry_date: non_blank(expiry_date),
        }
    }
}

/// Body of `PUT /clock-in/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClockInUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ClockInUpdate {
    pub fn from_form(email: &str, location: &str) -> Self {
        Self {
            email: non_blank(email),
            location: non_blank(location),
        }
    }
}

/// Query for `GET /items/filter`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub email: String,
    pub expiry_date: String,
    pub insert_date: String,
    pub quantity: String,
    pub id: String,
}

impl ItemFilter {
    /// Non-empty parameters in a stable order
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        collect_params(&[
            ("email", &self.email),
            ("expiry_date", &self.expiry_date),
            ("insert_date", &self.insert_date),
            ("quantity", &self.quantity),
            ("id", &self.id),
        ])
    }
}

/// Query for `GET /clock-in/filter`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockInFilter {
    pub email: String,
    pub location: String,
    pub insert_datetime: String,
}

impl ClockInFilter {
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        collect_params(&[
            ("email", &self.email),
            ("location", &self.location),
            ("insert_datetime", &self.insert_datetime),
        ])
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn collect_params<'a>(pairs: &[(&'static str, &'a String)]) -> Vec<(&'static str, &'a str)> {
    pairs
        .iter()
        .map(|(key, value)| (*key, value.trim()))
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_submission_keys() {
        let submission = ItemSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            item_name: "Milk".to_string(),
            quantity: "3".to_string(),
            expiry_date: "2024-06-01".to_string(),
        };
        let value = serde_json::to_value(&submission).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "email", "item_name", "quantity", "expiry_date"]);
        // quantity is not coerced to a number
        assert_eq!(value["quantity"], json!("3"));
    }

    #[test]
    fn test_empty_submission_sends_empty_strings() {
        let value = serde_json::to_value(ClockInSubmission::default()).unwrap();
        assert_eq!(value, json!({"email": "", "location": ""}));
    }

    #[test]
    fn test_item_update_omits_blank_fields() {
        let update = ItemUpdate::from_form("", " bob@example.com ", "", "7", "  ");
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"email": "bob@example.com", "quantity": "7"}));
    }

    #[test]
    fn test_empty_update_is_empty_object() {
        let value = serde_json::to_value(ClockInUpdate::from_form("", "")).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_filter_params_skip_empty() {
        let filter = ItemFilter {
            email: "a@b.com".to_string(),
            quantity: "2".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.params(), vec![("email", "a@b.com"), ("quantity", "2")]);
        assert!(ClockInFilter::default().params().is_empty());
    }

    #[test]
    fn test_record_decodes_with_integer_quantity() {
        let record: ItemRecord = serde_json::from_value(json!({
            "id": "65f0c0ffee",
            "name": "Ada",
            "email": "ada@example.com",
            "item_name": "Milk",
            "quantity": 3,
            "expiry_date": "2024-06-01",
            "insert_date": "2024-05-01"
        }))
        .unwrap();
        assert_eq!(record.quantity, json!(3));
        assert_eq!(record.insert_date.as_deref(), Some("2024-05-01"));
    }
}
