//! Shared types used across the sensor hub firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

/// ADC code width for a device class
///
/// The resolution is fixed per device class at configuration time and
/// determines the full-scale code used for voltage conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AdcResolution {
    /// 10-bit codes (0-1023)
    Bits10,
    /// 12-bit codes (0-4095)
    #[default]
    Bits12,
    /// 14-bit codes (0-16383)
    Bits14,
    /// 16-bit codes (0-65535)
    Bits16,
}

impl AdcResolution {
    /// Get the code width in bits
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Bits10 => 10,
            Self::Bits12 => 12,
            Self::Bits14 => 14,
            Self::Bits16 => 16,
        }
    }

    /// Get the maximum representable code (`2^bits - 1`)
    #[must_use]
    pub const fn full_scale(self) -> u16 {
        match self {
            Self::Bits10 => 1023,
            Self::Bits12 => 4095,
            Self::Bits14 => 16383,
            Self::Bits16 => 65535,
        }
    }

    /// Mask a transport-layer code down to this resolution
    #[must_use]
    pub const fn mask(self, code: u16) -> u16 {
        code & self.full_scale()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for AdcResolution {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}-bit", self.bits());
    }
}

/// One raw transport-layer reading
///
/// The code is masked to the device's declared resolution at construction,
/// so a `RawSample` is always within `[0, full_scale]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSample {
    /// Masked conversion code
    code: u16,
    /// Resolution the code was acquired at
    resolution: AdcResolution,
}

impl RawSample {
    /// Create a new sample, masking the code to the given resolution
    #[must_use]
    pub const fn new(code: u16, resolution: AdcResolution) -> Self {
        Self {
            code: resolution.mask(code),
            resolution,
        }
    }

    /// Get the raw code
    #[must_use]
    pub const fn code(self) -> u16 {
        self.code
    }

    /// Get the resolution this sample was acquired at
    #[must_use]
    pub const fn resolution(self) -> AdcResolution {
        self.resolution
    }

    /// Convert to voltage against a reference voltage
    ///
    /// `voltage(0) = 0` and `voltage(full_scale) = vref`; the mapping is
    /// monotonic in between.
    #[must_use]
    pub fn as_voltage(self, vref: f32) -> f32 {
        f32::from(self.code) * vref / f32::from(self.resolution.full_scale())
    }

    /// Reinterpret the code as a two's-complement value at this resolution
    ///
    /// Used by chips that report signed quantities (bidirectional current,
    /// differential pressure) in an n-bit field.
    #[must_use]
    pub const fn as_signed(self) -> i16 {
        let bits = self.resolution.bits();
        let sign = 1u16 << (bits - 1);
        if self.code & sign != 0 {
            (self.code as i32 - (1i32 << bits)) as i16
        } else {
            self.code as i16
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RawSample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ADC({})", self.code);
    }
}

/// Bus-level failure while acquiring one sample
///
/// Transport errors are transient: the averaging loop retries them until
/// its timeout budget runs out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportError {
    /// Device did not acknowledge the transfer
    Nack,
    /// Bus busy, arbitration lost, or electrical fault
    BusBusy,
    /// Conversion not ready within the transaction
    NotReady,
}

#[cfg(feature = "embedded")]
impl defmt::Format for TransportError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Nack => defmt::write!(f, "NACK"),
            Self::BusBusy => defmt::write!(f, "BUS-BUSY"),
            Self::NotReady => defmt::write!(f, "NOT-READY"),
        }
    }
}

/// Measurement pipeline error
///
/// Distinguishes "could not talk to the chip" from "talked to the chip,
/// but the request was not in a valid state".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureError {
    /// The underlying bus transaction failed
    Transport(TransportError),
    /// The requested sample count could not be gathered within the
    /// timeout budget; likely a disconnected sensor or dead bus
    Timeout,
    /// A measurement or gain calibration was requested before the
    /// prerequisite offset calibration
    NotCalibrated,
    /// The selected operating range does not support measurements
    UnsupportedRange,
}

impl From<TransportError> for MeasureError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(_) => write!(f, "bus transport failure"),
            Self::Timeout => write!(f, "acquisition timeout"),
            Self::NotCalibrated => write!(f, "device not calibrated"),
            Self::UnsupportedRange => write!(f, "unsupported operating range"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for MeasureError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Transport(e) => defmt::write!(f, "transport: {}", e),
            Self::Timeout => defmt::write!(f, "timeout"),
            Self::NotCalibrated => defmt::write!(f, "not calibrated"),
            Self::UnsupportedRange => defmt::write!(f, "unsupported range"),
        }
    }
}

/// Operating range of a multi-range light sensor
///
/// The active range selects both the device's analog gain and the
/// lux-per-volt constant applied when converting a reading. `Shutdown` is
/// the power-on state; reading in it is an error, not a dark reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GainRange {
    /// Device disabled; measurements are rejected
    #[default]
    Shutdown,
    /// Low gain, brightest scenes (up to ~40 klx)
    Low,
    /// Mid gain (up to ~4 klx)
    Mid,
    /// High gain, dim scenes (up to ~400 lx)
    High,
}

impl GainRange {
    /// Get the control-register / gain-select encoding for this range
    #[must_use]
    pub const fn select_bits(self) -> u8 {
        match self {
            Self::Shutdown => 0b00,
            Self::Low => 0b01,
            Self::Mid => 0b10,
            Self::High => 0b11,
        }
    }

    /// Get the lux-per-volt constant for this range, if it can measure
    #[must_use]
    pub const fn lux_per_volt(self) -> Option<f32> {
        match self {
            Self::Shutdown => None,
            Self::Low => Some(12_000.0),
            Self::Mid => Some(1_200.0),
            Self::High => Some(120.0),
        }
    }

    /// Check whether measurements are possible in this range
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Shutdown)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for GainRange {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Shutdown => defmt::write!(f, "SHUTDOWN"),
            Self::Low => defmt::write!(f, "LOW"),
            Self::Mid => defmt::write!(f, "MID"),
            Self::High => defmt::write!(f, "HIGH"),
        }
    }
}
