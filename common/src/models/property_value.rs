use anyhow::{Result, anyhow};
use mongodb::bson::Bson;
use serde::Deserialize;
use utoipa::ToSchema;

/// Single PATCH operation: set `propName` to `value`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PropertyValue {
    #[serde(rename = "propName")]
    pub property_name: String,
    /// Raw JSON value; the target field decides the accepted type.
    #[schema(value_type = Object)]
    pub value: serde_json::Value,
}

/// Value type a mutable document field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Double,
    Long,
}

impl FieldType {
    pub fn to_bson(&self, value: &serde_json::Value) -> Result<Bson> {
        match self {
            FieldType::Text => value
                .as_str()
                .map(|s| Bson::String(s.to_string()))
                .ok_or_else(|| anyhow!("expected a string, got: {}", value)),
            FieldType::Double => value
                .as_f64()
                .map(Bson::Double)
                .ok_or_else(|| anyhow!("expected a number, got: {}", value)),
            FieldType::Long => value
                .as_i64()
                .map(Bson::Int64)
                .ok_or_else(|| anyhow!("expected an integer, got: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_accepts_strings_only() {
        assert_eq!(FieldType::Text.to_bson(&json!("Wakanda")).unwrap(), Bson::String("Wakanda".into()));
        assert!(FieldType::Text.to_bson(&json!(42)).is_err());
    }

    #[test]
    fn double_accepts_any_json_number() {
        assert_eq!(FieldType::Double.to_bson(&json!(25.5)).unwrap(), Bson::Double(25.5));
        assert_eq!(FieldType::Double.to_bson(&json!(25)).unwrap(), Bson::Double(25.0));
        assert!(FieldType::Double.to_bson(&json!("25")).is_err());
    }

    #[test]
    fn long_rejects_fractions() {
        assert_eq!(FieldType::Long.to_bson(&json!(500)).unwrap(), Bson::Int64(500));
        assert!(FieldType::Long.to_bson(&json!(500.5)).is_err());
        assert!(FieldType::Long.to_bson(&json!("500")).is_err());
    }

    #[test]
    fn property_value_deserializes_prop_name() {
        let op: PropertyValue = serde_json::from_value(json!({ "propName": "population", "value": 500 })).unwrap();
        assert_eq!(op.property_name, "population");
        assert_eq!(op.value, json!(500));
    }
}
