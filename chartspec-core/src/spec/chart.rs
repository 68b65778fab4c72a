use crate::error::{Result, ResultWithContext};
use crate::spec::axis::AxisSpec;
use crate::spec::data::DataSpec;
use crate::spec::mark::MarkSpec;
use crate::spec::scale::ScaleSpec;
use crate::spec::signal::SignalSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema", default = "default_schema")]
    pub schema: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<DataSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signals: Vec<SignalSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scales: Vec<ScaleSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub axes: Vec<AxisSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<MarkSpec>,

    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

pub fn default_schema() -> String {
    String::from("https://vega.github.io/schema/vega/v5.json")
}

impl ChartSpec {
    pub fn get_scale(&self, name: &str) -> Result<&ScaleSpec> {
        self.scales
            .iter()
            .find(|scale| scale.name == name)
            .with_context(|| format!("No scale named {name}"))
    }

    pub fn get_axis_for_scale(&self, scale: &str) -> Result<&AxisSpec> {
        self.axes
            .iter()
            .find(|axis| axis.scale == scale)
            .with_context(|| format!("No axis referencing scale {scale}"))
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_defaulted_on_deserialize() {
        let chart: ChartSpec = serde_json::from_value(json!({
            "scales": [{"name": "x"}],
            "axes": [{"scale": "x", "orient": "bottom"}]
        }))
        .unwrap();
        assert_eq!(chart.schema, default_schema());
        assert!(chart.get_scale("x").is_ok());
        assert!(chart.get_scale("y").is_err());
    }

    #[test]
    fn test_unknown_top_level_fields_preserved() {
        let value = json!({
            "$schema": default_schema(),
            "width": 400,
            "height": 300,
            "axes": [{"scale": "x", "orient": "bottom"}]
        });
        let chart = ChartSpec::from_json(value.clone()).unwrap();
        assert_eq!(chart.extra["width"], json!(400));
        assert_eq!(chart.to_json().unwrap(), value);
    }
}
