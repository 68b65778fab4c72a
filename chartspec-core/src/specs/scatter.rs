use crate::axes::partial_axes;
use crate::constants::{
    DATA_MAIN, SCALE_COLOR, SCALE_SIZE, SCALE_X, SCALE_Y, SIGNAL_MARK_SIZE,
};
use crate::context::SpecContext;
use crate::error::Result;
use crate::spec::axis::{AxisOrientSpec, AxisSpec};
use crate::spec::chart::{default_schema, ChartSpec};
use crate::spec::data::DataSpec;
use crate::spec::mark::{MarkEncodeSpec, MarkEncodingSpec, MarkEncodingsSpec, MarkFromSpec, MarkSpec};
use crate::spec::scale::ScaleSpec;
use crate::spec::signal::SignalSpec;
use crate::specs::{validate_scale_references, SpecBuilder};
use serde_json::json;

/// 2D scatter plot assembler: one symbol mark, linear or point scales for
/// the spatial channels, optional color and size encodings.
#[derive(Default, Debug, Clone, Copy)]
pub struct ScatterSpecBuilder;

impl SpecBuilder for ScatterSpecBuilder {
    fn build_axes(&self, context: &SpecContext) -> Result<Vec<AxisSpec>> {
        let columns = &context.columns;
        let pa = partial_axes(
            &context.options,
            columns.x.quantitative,
            columns.y.quantitative,
        );
        let mut x_axis = AxisSpec::new(SCALE_X, AxisOrientSpec::Bottom, Some(&columns.x.name));
        if let Some(bottom) = &pa.bottom {
            bottom.apply_to(&mut x_axis);
        }
        let mut y_axis = AxisSpec::new(SCALE_Y, AxisOrientSpec::Left, Some(&columns.y.name));
        if let Some(left) = &pa.left {
            left.apply_to(&mut y_axis);
        }
        Ok(vec![x_axis, y_axis])
    }

    fn build(&self, context: &SpecContext) -> Result<ChartSpec> {
        let columns = &context.columns;

        let mut scales = vec![
            spatial_scale(SCALE_X, columns.x.quantitative, &columns.x.name, "width"),
            spatial_scale(SCALE_Y, columns.y.quantitative, &columns.y.name, "height"),
        ];
        if let Some(color) = &columns.color {
            scales.push(color_scale(color.quantitative, &color.name));
        }
        if let Some(size) = &columns.size {
            scales.push(
                ScaleSpec::field_domain(SCALE_SIZE, "linear", DATA_MAIN, &size.name)
                    .with_range(json!([16, 1024]))
                    .with_extra("nice", json!(false))
                    .with_extra("zero", json!(true)),
            );
        }

        let mut update = MarkEncodingsSpec::default();
        update.channels.insert(
            "x".to_string(),
            MarkEncodingSpec::scaled_field(SCALE_X, &columns.x.name),
        );
        update.channels.insert(
            "y".to_string(),
            MarkEncodingSpec::scaled_field(SCALE_Y, &columns.y.name),
        );
        update.channels.insert(
            "fill".to_string(),
            match &columns.color {
                Some(color) => MarkEncodingSpec::scaled_field(SCALE_COLOR, &color.name),
                None => MarkEncodingSpec::value(json!("steelblue")),
            },
        );
        update.channels.insert(
            "size".to_string(),
            match &columns.size {
                Some(size) => MarkEncodingSpec::scaled_field(SCALE_SIZE, &size.name),
                None => MarkEncodingSpec::signal(SIGNAL_MARK_SIZE),
            },
        );
        let mut encode = MarkEncodeSpec::default();
        encode.encodings.insert("update".to_string(), update);

        let chart = ChartSpec {
            schema: default_schema(),
            data: vec![DataSpec::named(DATA_MAIN)],
            signals: vec![SignalSpec::new(SIGNAL_MARK_SIZE, json!(30))
                .with_bind(json!({"input": "range", "min": 1, "max": 400, "step": 1}))],
            scales,
            axes: self.build_axes(context)?,
            marks: vec![MarkSpec {
                type_: "symbol".to_string(),
                name: Some("marks".to_string()),
                from: Some(MarkFromSpec {
                    data: Some(DATA_MAIN.to_string()),
                }),
                encode: Some(encode),
                extra: Default::default(),
            }],
            extra: Default::default(),
        };

        validate_scale_references(&chart)?;
        log::debug!(
            "assembled scatter spec: {} scales, {} axes",
            chart.scales.len(),
            chart.axes.len()
        );
        Ok(chart)
    }
}

fn spatial_scale(name: &str, quantitative: bool, field: &str, extent: &str) -> ScaleSpec {
    if quantitative {
        ScaleSpec::field_domain(name, "linear", DATA_MAIN, field)
            .with_range(json!(extent))
            .with_extra("nice", json!(true))
            .with_extra("zero", json!(false))
    } else {
        // Categorical domains keep the insertion order of the data
        ScaleSpec::field_domain(name, "point", DATA_MAIN, field)
            .with_range(json!(extent))
            .with_extra("padding", json!(0.5))
    }
}

fn color_scale(quantitative: bool, field: &str) -> ScaleSpec {
    if quantitative {
        ScaleSpec::field_domain(SCALE_COLOR, "linear", DATA_MAIN, field)
            .with_range(json!({"scheme": "blues"}))
    } else {
        ScaleSpec::field_domain(SCALE_COLOR, "ordinal", DATA_MAIN, field)
            .with_range(json!("category"))
    }
}
