use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSpec {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<Value>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl SignalSpec {
    pub fn new(name: &str, value: Value) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value),
            bind: None,
            extra: Default::default(),
        }
    }

    pub fn with_bind(mut self, bind: Value) -> Self {
        self.bind = Some(bind);
        self
    }
}
