pub mod axis;
pub mod chart;
pub mod data;
pub mod mark;
pub mod scale;
pub mod signal;
