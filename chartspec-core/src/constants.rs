//! Symbolic names linking axes, marks, and signals to the scales and
//! datasets defined elsewhere in an assembled specification.

pub const SCALE_X: &str = "x";
pub const SCALE_Y: &str = "y";
pub const SCALE_COLOR: &str = "color";
pub const SCALE_SIZE: &str = "size";

pub const DATA_MAIN: &str = "main";

pub const SIGNAL_MARK_SIZE: &str = "mark_size";
