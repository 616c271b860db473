//! Sensor Board Drivers
//!
//! Per-chip-family drivers built on the acquisition core. Each driver is a
//! thin parameterization of [`crate::measure::AnalogChannel`] (reference
//! voltage, resolution, averaging window, and calibration policy) plus the
//! engineering-unit conversions for its chip family.

pub mod current;
pub mod light;
pub mod pressure;
