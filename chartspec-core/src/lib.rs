#[macro_use]
extern crate lazy_static;

pub mod axes;
pub mod column;
pub mod constants;
pub mod context;
pub mod error;
pub mod spec;
pub mod specs;
pub mod theme;
