use crate::column::SpecColumns;
use serde::{Deserialize, Serialize};

/// Global view options consumed by the axis builder and the spec
/// assemblers. Rebuilt whenever the theme or user configuration changes,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecViewOptions {
    /// Color of axis domain lines and ticks
    pub axis_color: String,

    /// Color of axis labels and titles
    pub text_color: String,

    pub tick_size: f64,

    /// Suggested tick count for quantitative axes
    pub quantitative_tick_count: u32,

    pub show_grid: bool,

    /// Label rotation applied to categorical bottom axes
    pub categorical_label_angle: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl Default for SpecViewOptions {
    fn default() -> Self {
        Self {
            axis_color: "black".to_string(),
            text_color: "black".to_string(),
            tick_size: 5.0,
            quantitative_tick_count: 10,
            show_grid: true,
            categorical_label_angle: 90.0,
            font_family: None,
        }
    }
}

/// Read-only input to a chart-spec builder; constructed once per render
/// pass and discarded after the spec is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecContext {
    pub columns: SpecColumns,
    pub options: SpecViewOptions,
}

impl SpecContext {
    pub fn new(columns: SpecColumns, options: SpecViewOptions) -> Self {
        Self { columns, options }
    }
}
