pub mod host;
pub mod options;
pub mod state;

pub use chartspec_core::error::{ChartSpecError, Result};
