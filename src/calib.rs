//! Two-point linear calibration
//!
//! Maps an averaged voltage to an engineering unit through
//! `value = (volts - offset) * gain`. The two points come either from the
//! datasheet (fixed transfer function, e.g. a pressure bridge) or from an
//! explicit runtime sequence: capture the offset at a known-zero condition,
//! then derive the gain at a known-load condition.
//!
//! Gain derivation depends on the offset already being captured, so the
//! sequence is enforced: gain calibration or conversion against an
//! uncalibrated model fails with [`MeasureError::NotCalibrated`] instead of
//! silently producing a meaningless value.

use crate::types::MeasureError;

/// Progress of the runtime calibration sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CalState {
    /// Neither point captured
    Uncalibrated,
    /// Offset captured, gain still unknown
    OffsetOnly,
    /// Both points valid; conversion allowed
    Calibrated,
}

/// Two-point (offset, gain) linear model
#[derive(Clone, Copy, Debug)]
pub struct LinearCal {
    /// Voltage reported at the zero condition
    offset: f32,
    /// Engineering units per volt above the offset
    gain: f32,
    state: CalState,
}

impl LinearCal {
    /// Create a model awaiting runtime calibration
    #[must_use]
    pub const fn uncalibrated() -> Self {
        Self {
            offset: 0.0,
            gain: 0.0,
            state: CalState::Uncalibrated,
        }
    }

    /// Create a model from datasheet constants
    ///
    /// `offset` is the output voltage at the zero condition and `gain` the
    /// engineering units per volt. The model is immediately usable.
    #[must_use]
    pub const fn from_datasheet(offset: f32, gain: f32) -> Self {
        Self {
            offset,
            gain,
            state: CalState::Calibrated,
        }
    }

    /// Capture the offset point from a known-zero condition
    ///
    /// A previously derived or datasheet gain stays valid: re-zeroing an
    /// already calibrated model only trims its offset.
    pub fn set_offset(&mut self, volts: f32) {
        self.offset = volts;
        if self.state == CalState::Uncalibrated {
            self.state = CalState::OffsetOnly;
        }
    }

    /// Derive the gain from a known-load condition
    ///
    /// `known_value` is the engineering quantity present while `volts` was
    /// measured. Returns the derived gain in units per volt.
    ///
    /// # Errors
    ///
    /// [`MeasureError::NotCalibrated`] if the offset point has not been
    /// captured yet; the derivation would divide against an unset zero.
    pub fn set_gain_from(&mut self, known_value: f32, volts: f32) -> Result<f32, MeasureError> {
        if self.state == CalState::Uncalibrated {
            return Err(MeasureError::NotCalibrated);
        }
        self.gain = known_value / (volts - self.offset);
        self.state = CalState::Calibrated;
        Ok(self.gain)
    }

    /// Convert an averaged voltage to engineering units
    ///
    /// # Errors
    ///
    /// [`MeasureError::NotCalibrated`] until both points are established.
    pub fn convert(&self, volts: f32) -> Result<f32, MeasureError> {
        if self.state != CalState::Calibrated {
            return Err(MeasureError::NotCalibrated);
        }
        Ok((volts - self.offset) * self.gain)
    }

    /// Get the offset point in volts
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Get the gain in engineering units per volt
    #[must_use]
    pub const fn gain(&self) -> f32 {
        self.gain
    }

    /// Check whether the offset point has been captured
    #[must_use]
    pub fn has_offset(&self) -> bool {
        self.state != CalState::Uncalibrated
    }

    /// Check whether conversion is allowed
    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.state == CalState::Calibrated
    }
}

impl Default for LinearCal {
    fn default() -> Self {
        Self::uncalibrated()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinearCal {
    fn format(&self, f: defmt::Formatter) {
        match self.state {
            CalState::Uncalibrated => defmt::write!(f, "Cal(uncalibrated)"),
            CalState::OffsetOnly => defmt::write!(f, "Cal(offset-only)"),
            CalState::Calibrated => defmt::write!(f, "Cal(ready)"),
        }
    }
}
