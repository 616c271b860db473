//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the sensor hub hardware.
//! All pin mappings, bus parameters, and acquisition defaults are
//! centralized here.

use crate::measure::AveragingConfig;
use crate::types::AdcResolution;

/// System clock frequency (STM32G474 @ 170MHz)
pub const SYSTEM_CLOCK_HZ: u32 = 170_000_000;

/// ADC reference voltage in volts (VDDA on the carrier board)
pub const VREF_VOLTS: f32 = 3.3;

/// ADC resolution used for the on-chip converter
pub const ADC_RESOLUTION: AdcResolution = AdcResolution::Bits12;

/// I2C bus frequency for sensor boards and the channel mux
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Ambient light sensor I2C address
pub const LIGHT_I2C_ADDR: u8 = 0x4A;

/// I2C channel mux address (TCA9548A-compatible, all address pins low)
pub const MUX_I2C_ADDR: u8 = 0x70;

/// Default number of conversions folded into one averaged reading
pub const DEFAULT_SAMPLE_COUNT: u16 = 200;

/// Default per-sample settle delay in milliseconds
pub const DEFAULT_SETTLE_MS: u32 = 1;

/// Default acquisition timeout budget in milliseconds
pub const DEFAULT_TIMEOUT_MS: u32 = 2_000;

/// Hall sensor zero-current output as a fraction of vref
///
/// Ratiometric Hall elements idle at mid-rail; runtime offset calibration
/// replaces this estimate with the measured value.
pub const HALL_MIDPOINT_RATIO: f32 = 0.5;

/// Pin assignments for GPIO
pub mod pins {
    //! mikroBUS socket pin assignments matching the carrier schematic

    /// Status LED (directly on MCU)
    pub const LED_STATUS: &str = "PA5";

    /// I2C1 SCL (sensor boards, mux)
    pub const I2C1_SCL: &str = "PB8";

    /// I2C1 SDA (sensor boards, mux)
    pub const I2C1_SDA: &str = "PB9";

    /// Socket 1 analog input (Hall current sensor OUT)
    pub const SOCKET1_AN: &str = "PA0";

    /// Socket 1 interrupt line (overcurrent fault, active low)
    pub const SOCKET1_INT: &str = "PA10";

    /// Socket 1 reset/enable line
    pub const SOCKET1_RST: &str = "PA9";

    /// Socket 2 analog input (manometer bridge output)
    pub const SOCKET2_AN: &str = "PA1";

    /// Socket 2 interrupt line
    pub const SOCKET2_INT: &str = "PC7";

    /// Socket 3 interrupt line (light sensor ALERT)
    pub const SOCKET3_INT: &str = "PB10";
}

/// I2C mux channel assignments
pub mod mux {
    //! Downstream channel numbers on the I2C mux

    /// Ambient light sensor channel
    pub const LIGHT: u8 = 0;

    /// Spare socket channel
    pub const SPARE: u8 = 1;
}

/// Build the default averaging configuration
#[must_use]
pub const fn default_averaging() -> AveragingConfig {
    AveragingConfig {
        samples: DEFAULT_SAMPLE_COUNT,
        settle_ms: DEFAULT_SETTLE_MS,
        timeout_ms: DEFAULT_TIMEOUT_MS,
    }
}
