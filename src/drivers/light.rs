//! Ambient Light Sensor Driver
//!
//! Photodiode front-end behind an I2C interface with four selectable gain
//! ranges. The active range sets both the device's analog gain (via its
//! control register) and the lux-per-volt constant applied to a reading.
//! The chip powers on in shutdown; a range must be selected before the
//! first measurement, and a read attempted in shutdown is rejected rather
//! than reported as darkness.

use crate::measure::{AnalogChannel, Clock, ModeSelect, SampleSource};
use crate::types::{GainRange, MeasureError};

/// Register addresses of the light sensor front-end
pub mod reg {
    /// Control register (gain select field in bits 1:0)
    pub const CONTROL: u8 = 0x00;
    /// Conversion result, two bytes MSB first
    pub const DATA: u8 = 0x02;
}

/// Ambient light sensor over one I2C analog channel
pub struct AmbientLight<S, C> {
    channel: AnalogChannel<S, C>,
    range: GainRange,
}

impl<S: SampleSource + ModeSelect, C: Clock> AmbientLight<S, C> {
    /// Create a sensor in its power-on shutdown state
    #[must_use]
    pub fn new(channel: AnalogChannel<S, C>) -> Self {
        Self {
            channel,
            range: GainRange::Shutdown,
        }
    }

    /// Select an operating range and push it to the control register
    ///
    /// Selecting [`GainRange::Shutdown`] powers the front-end down;
    /// subsequent reads fail until an active range is selected again.
    ///
    /// # Errors
    ///
    /// [`MeasureError::Transport`] when the control-register write fails;
    /// the tracked range is left unchanged in that case.
    pub fn set_range(&mut self, range: GainRange) -> Result<(), MeasureError> {
        self.channel.source_mut().select_mode(range.select_bits())?;
        self.range = range;
        Ok(())
    }

    /// Get the active range
    #[must_use]
    pub const fn range(&self) -> GainRange {
        self.range
    }

    /// Read the illuminance in lux
    ///
    /// Averages a window of conversions and applies the active range's
    /// lux-per-volt constant.
    ///
    /// # Errors
    ///
    /// [`MeasureError::UnsupportedRange`] while the device is in shutdown,
    /// distinct from a valid reading of zero lux, plus any
    /// averaging-window error.
    pub fn read_lux(&mut self) -> Result<f32, MeasureError> {
        let lux_per_volt = self
            .range
            .lux_per_volt()
            .ok_or(MeasureError::UnsupportedRange)?;
        let avg = self.channel.read_voltage()?;
        Ok(avg.volts * lux_per_volt)
    }

    /// Power the front-end down
    ///
    /// # Errors
    ///
    /// [`MeasureError::Transport`] when the control-register write fails.
    pub fn shutdown(&mut self) -> Result<(), MeasureError> {
        self.set_range(GainRange::Shutdown)
    }

    /// Get the underlying channel
    #[must_use]
    pub const fn channel(&self) -> &AnalogChannel<S, C> {
        &self.channel
    }
}
