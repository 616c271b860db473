//! Hall-Effect Current Sensor Driver
//!
//! Ratiometric Hall elements output a voltage centered near mid-rail at
//! zero current, moving linearly with the measured current. Board-to-board
//! spread makes the datasheet midpoint an estimate only, so this driver
//! supports the full runtime sequence: capture the offset at a known zero
//! current, then derive the gain against a known load.
//!
//! Boards with an overcurrent comparator expose it as an active-low fault
//! pin; pair the driver with a [`crate::fault::FaultLine`] on the socket's
//! interrupt line.

use crate::calib::LinearCal;
use crate::config::HALL_MIDPOINT_RATIO;
use crate::measure::{AnalogChannel, AveragedReading, AveragingConfig, Clock, SampleSource};
use crate::types::MeasureError;

/// Hall-effect current sensor over one analog channel
pub struct HallCurrent<S, C> {
    channel: AnalogChannel<S, C>,
}

impl<S: SampleSource, C: Clock> HallCurrent<S, C> {
    /// Create a sensor awaiting runtime calibration
    ///
    /// Both calibration points must be established with
    /// [`calibrate_offset`](Self::calibrate_offset) and
    /// [`calibrate_gain`](Self::calibrate_gain) before
    /// [`read_current`](Self::read_current) succeeds.
    #[must_use]
    pub fn new(source: S, clock: C, vref: f32, averaging: AveragingConfig) -> Self {
        Self {
            channel: AnalogChannel::new(source, clock, vref, averaging),
        }
    }

    /// Create a sensor from a datasheet sensitivity
    ///
    /// `volts_per_amp` is the element's rated sensitivity; the offset is
    /// assumed at the ratiometric midpoint. Usable immediately, and the
    /// offset can still be trimmed later with
    /// [`calibrate_offset`](Self::calibrate_offset).
    #[must_use]
    pub fn with_sensitivity(
        source: S,
        clock: C,
        vref: f32,
        averaging: AveragingConfig,
        volts_per_amp: f32,
    ) -> Self {
        let cal = LinearCal::from_datasheet(vref * HALL_MIDPOINT_RATIO, 1.0 / volts_per_amp);
        Self {
            channel: AnalogChannel::with_calibration(source, clock, vref, averaging, cal),
        }
    }

    /// Capture the zero-current offset
    ///
    /// Call with no load on the conductor. Returns the captured offset in
    /// volts.
    ///
    /// # Errors
    ///
    /// Propagates the averaging window's [`MeasureError::Timeout`].
    pub fn calibrate_offset(&mut self) -> Result<f32, MeasureError> {
        self.channel.calibrate_offset()
    }

    /// Derive the gain against a known load current
    ///
    /// Call while `known_amps` flows through the conductor. Returns the
    /// derived gain in amperes per volt.
    ///
    /// # Errors
    ///
    /// [`MeasureError::NotCalibrated`] when called before
    /// [`calibrate_offset`](Self::calibrate_offset).
    pub fn calibrate_gain(&mut self, known_amps: f32) -> Result<f32, MeasureError> {
        self.channel.calibrate_gain(known_amps)
    }

    /// Read the current in amperes
    ///
    /// # Errors
    ///
    /// [`MeasureError::NotCalibrated`] before both calibration points are
    /// established, plus any averaging-window error.
    pub fn read_current(&mut self) -> Result<f32, MeasureError> {
        self.channel.read_value()
    }

    /// Read the averaged element voltage without conversion
    ///
    /// # Errors
    ///
    /// Propagates the averaging window's [`MeasureError::Timeout`].
    pub fn read_voltage(&mut self) -> Result<AveragedReading, MeasureError> {
        self.channel.read_voltage()
    }

    /// Get the underlying channel
    #[must_use]
    pub const fn channel(&self) -> &AnalogChannel<S, C> {
        &self.channel
    }

    /// Get mutable access to the underlying channel
    pub fn channel_mut(&mut self) -> &mut AnalogChannel<S, C> {
        &mut self.channel
    }
}
