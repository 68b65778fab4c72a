use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub scale: String,

    pub orient: AxisOrientSpec,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "formatType", skip_serializing_if = "Option::is_none")]
    pub format_type: Option<AxisFormatTypeSpec>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl AxisSpec {
    pub fn new(scale: &str, orient: AxisOrientSpec, title: Option<&str>) -> Self {
        Self {
            scale: scale.to_string(),
            orient,
            title: title.map(String::from),
            format_type: None,
            extra: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientSpec {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisFormatTypeSpec {
    Number,
    Time,
    Utc,
}
