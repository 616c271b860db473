//! Sensor Hub Firmware Library
//!
//! This library provides the core functionality for an STM32G474-based
//! acquisition hub carrying mikroBUS-style analog and I2C sensor boards
//! (Hall-effect current sensors, piezoresistive manometers, ambient light
//! sensors). All of them share one measurement pattern: sample a channel,
//! average it over a bounded time window, and map the averaged voltage to an
//! engineering unit through a two-point linear calibration.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │            Measurement loop  │  Fault monitoring             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                     DRIVER LAYER                             │
//! │  Hall current  │  Ambient light  │  Manometer                │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  ACQUISITION CORE                            │
//! │  Timed averaging  │  Linear calibration  │  Fault surface    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / TRANSPORT LAYER                      │
//! │  ADC  │  I2C  │  Bus mux  │  GPIO  │  Clock                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (async/await executor)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Per-device state**: every sensor instance owns its context (bus
//!   handle, calibration, active range); no module-level statics
//! - **Type-driven design**: custom types enforce invariants at compile time
//! - **No unsafe in application code**: all unsafe isolated in HAL/FFI layers
//! - **Blocking acquisition**: one bus transaction in flight at a time,
//!   serialized by exclusive ownership
//! - **Explicit error handling**: all fallible operations return `Result`,
//!   and calibration preconditions fail closed instead of computing garbage

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// Provides safe abstractions over STM32G474 peripherals and implements
/// the acquisition-core transport seams for real buses.
#[cfg(feature = "embedded")]
pub mod hal;

/// Sensor Board Drivers
///
/// Per-chip-family instantiations of the averaged analog channel reader.
pub mod drivers;

/// Timed Sample Acquisition
///
/// Transport seam, settle/timeout policy, and the averaged channel reader.
pub mod measure;

/// Linear Calibration
///
/// Two-point (offset, gain) voltage-to-engineering-unit mapping.
pub mod calib;

/// Fault/Alert Surface
///
/// Immediate digital fault-pin reads accompanying a measurement.
pub mod fault;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::measure::{AnalogChannel, Clock, SampleSource};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::digital::InputPin;

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
