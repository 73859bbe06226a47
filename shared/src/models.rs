//! Shared data models.

use serde::Serialize;

/// A school's schedule, keyed by `school_id`.
///
/// Serialized with the field names clients already send (`School_id`, `Hours`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    #[serde(rename = "School_id")]
    pub school_id: i64,
    #[serde(rename = "Hours")]
    pub hours: String,
}

impl Schedule {
    pub fn new(school_id: i64, hours: impl Into<String>) -> Self {
        Self {
            school_id,
            hours: hours.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_client_field_names() {
        let json = serde_json::to_value(Schedule::new(42, "9-5")).unwrap();
        assert_eq!(json, serde_json::json!({"School_id": 42, "Hours": "9-5"}));
    }
}
