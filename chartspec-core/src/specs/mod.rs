pub mod bar;
pub mod scatter;

use crate::context::SpecContext;
use crate::error::{ChartSpecError, Result};
use crate::spec::axis::AxisSpec;
use crate::spec::chart::ChartSpec;
use itertools::Itertools;

/// Common contract implemented once per chart type. `build_axes` produces
/// the ordered axis list on its own so it can be reused and tested without
/// assembling the full specification.
pub trait SpecBuilder {
    fn build_axes(&self, context: &SpecContext) -> Result<Vec<AxisSpec>>;

    fn build(&self, context: &SpecContext) -> Result<ChartSpec>;
}

/// Every axis must reference a scale defined in the same specification,
/// and each spatial scale carries exactly one axis.
pub fn validate_scale_references(chart: &ChartSpec) -> Result<()> {
    for axis in &chart.axes {
        if !chart.scales.iter().any(|scale| scale.name == axis.scale) {
            return Err(ChartSpecError::specification(format!(
                "Axis references undefined scale {}",
                axis.scale
            )));
        }
    }
    let duplicates: Vec<_> = chart
        .axes
        .iter()
        .map(|axis| axis.scale.as_str())
        .duplicates()
        .collect();
    if !duplicates.is_empty() {
        return Err(ChartSpecError::specification(format!(
            "Multiple axes reference scale {}",
            duplicates.join(", ")
        )));
    }
    Ok(())
}
