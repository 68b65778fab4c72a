use crate::axes::partial_axes;
use crate::constants::{DATA_MAIN, SCALE_COLOR, SCALE_X, SCALE_Y};
use crate::context::SpecContext;
use crate::error::Result;
use crate::spec::axis::{AxisOrientSpec, AxisSpec};
use crate::spec::chart::{default_schema, ChartSpec};
use crate::spec::data::DataSpec;
use crate::spec::mark::{MarkEncodeSpec, MarkEncodingSpec, MarkEncodingsSpec, MarkFromSpec, MarkSpec};
use crate::spec::scale::ScaleSpec;
use crate::specs::{validate_scale_references, SpecBuilder};
use serde_json::json;

/// Vertical bar chart assembler: band scale along the categorical axis,
/// linear scale along the quantitative axis, one rect mark.
#[derive(Default, Debug, Clone, Copy)]
pub struct BarSpecBuilder;

impl SpecBuilder for BarSpecBuilder {
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

        let x_scale = if columns.x.quantitative {
            ScaleSpec::field_domain(SCALE_X, "linear", DATA_MAIN, &columns.x.name)
                .with_range(json!("width"))
                .with_extra("nice", json!(true))
        } else {
            ScaleSpec::field_domain(SCALE_X, "band", DATA_MAIN, &columns.x.name)
                .with_range(json!("width"))
                .with_extra("padding", json!(0.1))
        };
        let y_scale = ScaleSpec::field_domain(SCALE_Y, "linear", DATA_MAIN, &columns.y.name)
            .with_range(json!("height"))
            .with_extra("nice", json!(true))
            .with_extra("zero", json!(true));
        let mut scales = vec![x_scale, y_scale];
        if let Some(color) = &columns.color {
            let color_scale = if color.quantitative {
                ScaleSpec::field_domain(SCALE_COLOR, "linear", DATA_MAIN, &color.name)
                    .with_range(json!({"scheme": "blues"}))
            } else {
                ScaleSpec::field_domain(SCALE_COLOR, "ordinal", DATA_MAIN, &color.name)
                    .with_range(json!("category"))
            };
            scales.push(color_scale);
        }

        let mut update = MarkEncodingsSpec::default();
        update.channels.insert(
            "x".to_string(),
            MarkEncodingSpec::scaled_field(SCALE_X, &columns.x.name),
        );
        update.channels.insert("width".to_string(), {
            let mut width = MarkEncodingSpec::default();
            width.scale = Some(SCALE_X.to_string());
            width.band = Some(1.into());
            width
        });
        update.channels.insert(
            "y".to_string(),
            MarkEncodingSpec::scaled_field(SCALE_Y, &columns.y.name),
        );
        update.channels.insert("y2".to_string(), {
            let mut y2 = MarkEncodingSpec::value(json!(0));
            y2.scale = Some(SCALE_Y.to_string());
            y2
        });
        update.channels.insert(
            "fill".to_string(),
            match &columns.color {
                Some(color) => MarkEncodingSpec::scaled_field(SCALE_COLOR, &color.name),
                None => MarkEncodingSpec::value(json!("steelblue")),
            },
        );
        let mut encode = MarkEncodeSpec::default();
        encode.encodings.insert("update".to_string(), update);

        let chart = ChartSpec {
            schema: default_schema(),
            data: vec![DataSpec::named(DATA_MAIN)],
            signals: vec![],
            scales,
            axes: self.build_axes(context)?,
            marks: vec![MarkSpec {
                type_: "rect".to_string(),
                name: Some("bars".to_string()),
                from: Some(MarkFromSpec {
                    data: Some(DATA_MAIN.to_string()),
                }),
                encode: Some(encode),
                extra: Default::default(),
            }],
            extra: Default::default(),
        };

        validate_scale_references(&chart)?;
        Ok(chart)
    }
}
