use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    pub name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<ScaleDomainSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<ScaleRangeSpec>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleDomainSpec {
    FieldReference(ScaleDataReferenceSpec),
    Array(Vec<Value>),
    Value(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleDataReferenceSpec {
    pub data: String,
    pub field: String,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl ScaleDataReferenceSpec {
    pub fn new(data: &str, field: &str) -> Self {
        Self {
            data: data.to_string(),
            field: field.to_string(),
            extra: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleRangeSpec {
    Array(Vec<Value>),
    Value(Value),
}

impl ScaleSpec {
    pub fn field_domain(name: &str, type_: &str, data: &str, field: &str) -> Self {
        Self {
            name: name.to_string(),
            type_: Some(type_.to_string()),
            domain: Some(ScaleDomainSpec::FieldReference(
                ScaleDataReferenceSpec::new(data, field),
            )),
            range: None,
            extra: Default::default(),
        }
    }

    pub fn with_range(mut self, range: Value) -> Self {
        self.range = Some(ScaleRangeSpec::Value(range));
        self
    }

    pub fn with_extra(mut self, key: &str, value: Value) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_domain_scale_shape() {
        let scale = ScaleSpec::field_domain("x", "linear", "main", "Age")
            .with_range(json!("width"))
            .with_extra("nice", json!(true));

        let value = serde_json::to_value(&scale).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "x",
                "type": "linear",
                "domain": {"data": "main", "field": "Age"},
                "range": "width",
                "nice": true
            })
        );
    }

    #[test]
    fn test_domain_array_round_trip() {
        let s = r#"{"name":"color","type":"ordinal","domain":["a","b"]}"#;
        let scale: ScaleSpec = serde_json::from_str(s).unwrap();
        assert!(matches!(scale.domain, Some(ScaleDomainSpec::Array(_))));
        let value = serde_json::to_value(&scale).unwrap();
        assert_eq!(value, serde_json::from_str::<Value>(s).unwrap());
    }
}
