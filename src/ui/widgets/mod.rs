//! Custom widgets shared across sections

pub mod meter;

pub use meter::PercentMeter;
