use crate::context::SpecViewOptions;
use crate::spec::axis::{AxisFormatTypeSpec, AxisOrientSpec, AxisSpec};
use itertools::Itertools;
use serde_json::{json, Value};
use std::collections::HashMap;

/// A reusable fragment of axis configuration keyed by screen direction.
/// Merged into a final axis spec by an assembler; it never defines scales,
/// only formatting hints.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPartial {
    pub orient: AxisOrientSpec,
    pub format_type: Option<AxisFormatTypeSpec>,
    pub tick_count: Option<u32>,
    pub tick_size: f64,
    pub grid: bool,
    pub label_angle: Option<f64>,
    pub label_padding: f64,
    pub title_padding: f64,
    pub extra: HashMap<String, Value>,
}

impl AxisPartial {
    /// Copy this partial onto a final axis spec. The explicit `scale`,
    /// `title`, and `orient` of the final object always win; same-named
    /// fields arriving through `extra` are skipped.
    pub fn apply_to(&self, axis: &mut AxisSpec) {
        axis.format_type = self.format_type;
        axis.extra.insert("tickSize".to_string(), json!(self.tick_size));
        axis.extra.insert("grid".to_string(), json!(self.grid));
        axis.extra
            .insert("labelPadding".to_string(), json!(self.label_padding));
        axis.extra
            .insert("titlePadding".to_string(), json!(self.title_padding));
        if let Some(tick_count) = self.tick_count {
            axis.extra.insert("tickCount".to_string(), json!(tick_count));
        }
        if let Some(label_angle) = self.label_angle {
            axis.extra.insert("labelAngle".to_string(), json!(label_angle));
        }
        for key in self.extra.keys().sorted() {
            if matches!(key.as_str(), "scale" | "title" | "orient") {
                continue;
            }
            axis.extra.insert(key.clone(), self.extra[key].clone());
        }
    }
}

/// Directional partial-axis fragments. Bottom and left are always
/// produced; top and right stay empty until a chart type needs them.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct PartialAxes {
    pub top: Option<AxisPartial>,
    pub bottom: Option<AxisPartial>,
    pub left: Option<AxisPartial>,
    pub right: Option<AxisPartial>,
}

/// Compute partial axis definitions from global view options and the
/// quantitative/categorical flags of the X and Y columns. Pure function
/// of its inputs.
pub fn partial_axes(
    options: &SpecViewOptions,
    x_quantitative: bool,
    y_quantitative: bool,
) -> PartialAxes {
    PartialAxes {
        top: None,
        bottom: Some(directional_partial(
            options,
            AxisOrientSpec::Bottom,
            x_quantitative,
        )),
        left: Some(directional_partial(
            options,
            AxisOrientSpec::Left,
            y_quantitative,
        )),
        right: None,
    }
}

fn directional_partial(
    options: &SpecViewOptions,
    orient: AxisOrientSpec,
    quantitative: bool,
) -> AxisPartial {
    let mut extra = HashMap::new();
    extra.insert("domainColor".to_string(), json!(options.axis_color));
    extra.insert("tickColor".to_string(), json!(options.axis_color));
    extra.insert("labelColor".to_string(), json!(options.text_color));
    extra.insert("titleColor".to_string(), json!(options.text_color));
    if let Some(font) = &options.font_family {
        extra.insert("labelFont".to_string(), json!(font));
        extra.insert("titleFont".to_string(), json!(font));
    }

    // Categorical labels keep the insertion order of the underlying
    // domain; rotation only applies along the bottom edge.
    let label_angle = if !quantitative && orient == AxisOrientSpec::Bottom {
        Some(options.categorical_label_angle)
    } else {
        None
    };

    AxisPartial {
        orient,
        format_type: quantitative.then_some(AxisFormatTypeSpec::Number),
        tick_count: quantitative.then_some(options.quantitative_tick_count),
        tick_size: options.tick_size,
        grid: options.show_grid && quantitative,
        label_angle,
        label_padding: 2.0,
        title_padding: 4.0,
        extra,
    }
}
