//! Manometer Driver
//!
//! Piezoresistive bridge sensor with a fixed, datasheet-specified transfer
//! function: the output sits at a small offset voltage at zero pressure and
//! rises linearly at the rated sensitivity. No runtime calibration is
//! needed or supported; the gain and offset never change.

#[cfg(feature = "embedded")]
use micromath::F32Ext;

use crate::calib::LinearCal;
use crate::measure::{AnalogChannel, AveragingConfig, Clock, SampleSource};
use crate::types::MeasureError;

/// Bridge output at zero pressure in volts
pub const OFFSET_VOLTS: f32 = 0.2;

/// Rated sensitivity in volts per kilopascal
pub const SENSITIVITY_V_PER_KPA: f32 = 0.045;

/// Conversion factor from kilopascals to millimeters of mercury
pub const MMHG_PER_KPA: f32 = 7.500_62;

/// Standard-atmosphere sea-level pressure in kilopascals
pub const SEA_LEVEL_KPA: f32 = 101.325;

/// Manometer over one analog channel, calibrated from the datasheet
pub struct Manometer<S, C> {
    channel: AnalogChannel<S, C>,
}

impl<S: SampleSource, C: Clock> Manometer<S, C> {
    /// Create a manometer with the datasheet transfer function baked in
    #[must_use]
    pub fn new(source: S, clock: C, vref: f32, averaging: AveragingConfig) -> Self {
        let cal = LinearCal::from_datasheet(OFFSET_VOLTS, 1.0 / SENSITIVITY_V_PER_KPA);
        Self {
            channel: AnalogChannel::with_calibration(source, clock, vref, averaging, cal),
        }
    }

    /// Read the pressure in kilopascals
    ///
    /// # Errors
    ///
    /// Propagates the averaging window's [`MeasureError::Timeout`].
    pub fn read_kpa(&mut self) -> Result<f32, MeasureError> {
        self.channel.read_value()
    }

    /// Read the pressure in millimeters of mercury
    ///
    /// # Errors
    ///
    /// Propagates the averaging window's [`MeasureError::Timeout`].
    pub fn read_mmhg(&mut self) -> Result<f32, MeasureError> {
        Ok(self.read_kpa()? * MMHG_PER_KPA)
    }

    /// Get the underlying channel
    #[must_use]
    pub const fn channel(&self) -> &AnalogChannel<S, C> {
        &self.channel
    }
}

/// Estimate altitude from barometric pressure
///
/// Standard-atmosphere model; `sea_level_kpa` is the local QNH reference
/// (use [`SEA_LEVEL_KPA`] when none is known).
#[must_use]
pub fn altitude_m(pressure_kpa: f32, sea_level_kpa: f32) -> f32 {
    44_330.0 * (1.0 - (pressure_kpa / sea_level_kpa).powf(0.190_295))
}
