// Errors reported against template source text

mod display;

pub use display::*;
