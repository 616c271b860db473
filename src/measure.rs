//! Timed sample acquisition
//!
//! The acquisition core is generic over two seams: a [`SampleSource`] that
//! performs one blocking bus transaction (ADC pin read or I2C register
//! read), and a [`Clock`] that provides the settle delay and the monotonic
//! time base for the timeout budget. [`AnalogChannel`] combines both with a
//! reference voltage and a [`LinearCal`] model into one per-device context.
//!
//! Averaging tolerates isolated transport failures (they are expected
//! electrical noise and are retried), but a window that cannot gather its
//! requested sample count within the timeout budget fails with
//! [`MeasureError::Timeout`] and discards the partial sum. A partial average
//! is never returned silently.

use crate::calib::LinearCal;
use crate::types::{MeasureError, RawSample, TransportError};

/// One blocking raw-sample acquisition
///
/// Implementations mask the code to their declared resolution before
/// returning it, so every sample is within `[0, full_scale]`. The
/// hardware implementations live in the HAL layer (`hal::adc::HallAdc`,
/// `hal::adc::BridgeAdc`, `hal::i2c::I2cSource`); host tests substitute
/// scripted sources.
pub trait SampleSource {
    /// Acquire one raw sample
    ///
    /// # Errors
    ///
    /// [`TransportError`] when the bus transaction itself fails. A transport
    /// error does not invalidate the device context.
    fn sample(&mut self) -> Result<RawSample, TransportError>;
}

/// Mode/control register access for transports that have one
///
/// Multi-range devices push their active range to a control register; the
/// driver tracks the range, the transport applies it.
pub trait ModeSelect {
    /// Write the device's mode/control field
    ///
    /// # Errors
    ///
    /// [`TransportError`] when the write transaction fails.
    fn select_mode(&mut self, bits: u8) -> Result<(), TransportError>;
}

/// Blocking time source for settle delays and timeout deadlines
///
/// The acquisition loop is strictly sequential; `delay_ms` blocks the
/// calling context and `now_ms` reads a monotonic millisecond tick.
pub trait Clock {
    /// Current monotonic time in milliseconds
    fn now_ms(&self) -> u64;

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Averaging window parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AveragingConfig {
    /// Number of valid conversions folded into one reading
    pub samples: u16,
    /// Per-iteration settle delay in milliseconds
    pub settle_ms: u32,
    /// Wall-clock budget for the whole window in milliseconds
    pub timeout_ms: u32,
}

impl Default for AveragingConfig {
    fn default() -> Self {
        crate::config::default_averaging()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for AveragingConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Avg({}x, settle {}ms, budget {}ms)",
            self.samples,
            self.settle_ms,
            self.timeout_ms
        );
    }
}

/// The result of an averaging window
#[derive(Clone, Copy, Debug)]
pub struct AveragedReading {
    /// Mean voltage over the window
    pub volts: f32,
    /// Number of samples actually averaged
    pub samples: u16,
}

#[cfg(feature = "embedded")]
impl defmt::Format for AveragedReading {
    fn format(&self, f: defmt::Formatter) {
        let mv = (self.volts * 1000.0) as i32;
        defmt::write!(f, "{}.{:03} V ({}x)", mv / 1000, (mv % 1000).unsigned_abs(), self.samples);
    }
}

/// One analog channel bound to a transport, clock, and calibration model
///
/// This is the per-device context: all mutable state (calibration points,
/// averaging parameters) lives here, never in statics, so multiple device
/// instances cannot alias each other.
pub struct AnalogChannel<S, C> {
    source: S,
    clock: C,
    vref: f32,
    averaging: AveragingConfig,
    cal: LinearCal,
}

impl<S: SampleSource, C: Clock> AnalogChannel<S, C> {
    /// Create a channel awaiting runtime calibration
    #[must_use]
    pub fn new(source: S, clock: C, vref: f32, averaging: AveragingConfig) -> Self {
        Self::with_calibration(source, clock, vref, averaging, LinearCal::uncalibrated())
    }

    /// Create a channel with a pre-established calibration model
    #[must_use]
    pub fn with_calibration(
        source: S,
        clock: C,
        vref: f32,
        averaging: AveragingConfig,
        cal: LinearCal,
    ) -> Self {
        Self {
            source,
            clock,
            vref,
            averaging,
            cal,
        }
    }

    /// Acquire a single raw sample, bypassing the averaging window
    ///
    /// # Errors
    ///
    /// [`MeasureError::Transport`] when the bus transaction fails.
    pub fn read_raw(&mut self) -> Result<RawSample, MeasureError> {
        Ok(self.source.sample()?)
    }

    /// Acquire one averaged voltage reading
    ///
    /// Samples until the requested count is reached, waiting `settle_ms`
    /// between iterations. The deadline is computed once from the monotonic
    /// clock at loop entry; transport failures inside the window are
    /// retried until the deadline passes.
    ///
    /// # Errors
    ///
    /// [`MeasureError::Timeout`] when the window's budget elapses before
    /// the requested count is gathered. The partial sum is discarded.
    pub fn read_voltage(&mut self) -> Result<AveragedReading, MeasureError> {
        let samples = self.averaging.samples.max(1);
        let deadline = self.clock.now_ms() + u64::from(self.averaging.timeout_ms);

        let mut sum = 0.0f32;
        let mut count: u16 = 0;
        loop {
            if let Ok(raw) = self.source.sample() {
                sum += raw.as_voltage(self.vref);
                count += 1;
                if count == samples {
                    return Ok(AveragedReading {
                        volts: sum / f32::from(samples),
                        samples,
                    });
                }
            }

            self.clock.delay_ms(self.averaging.settle_ms);
            if self.clock.now_ms() >= deadline {
                return Err(MeasureError::Timeout);
            }
        }
    }

    /// Capture the calibration offset at a known-zero condition
    ///
    /// Averages a full window and stores its voltage as the new offset
    /// point. Returns the captured offset in volts.
    ///
    /// # Errors
    ///
    /// Propagates the averaging window's [`MeasureError::Timeout`].
    pub fn calibrate_offset(&mut self) -> Result<f32, MeasureError> {
        let avg = self.read_voltage()?;
        self.cal.set_offset(avg.volts);
        Ok(avg.volts)
    }

    /// Derive the calibration gain at a known-load condition
    ///
    /// Averages a full window and derives the gain against the previously
    /// captured offset. Returns the derived gain in units per volt.
    ///
    /// # Errors
    ///
    /// [`MeasureError::NotCalibrated`] when the offset point has not been
    /// captured; the window is not even started in that case.
    pub fn calibrate_gain(&mut self, known_value: f32) -> Result<f32, MeasureError> {
        if !self.cal.has_offset() {
            return Err(MeasureError::NotCalibrated);
        }
        let avg = self.read_voltage()?;
        self.cal.set_gain_from(known_value, avg.volts)
    }

    /// Acquire one averaged reading converted to engineering units
    ///
    /// # Errors
    ///
    /// [`MeasureError::NotCalibrated`] before both calibration points are
    /// established, plus any averaging-window error.
    pub fn read_value(&mut self) -> Result<f32, MeasureError> {
        if !self.cal.is_calibrated() {
            return Err(MeasureError::NotCalibrated);
        }
        let avg = self.read_voltage()?;
        self.cal.convert(avg.volts)
    }

    /// Get the reference voltage
    #[must_use]
    pub const fn vref(&self) -> f32 {
        self.vref
    }

    /// Get the averaging window parameters
    #[must_use]
    pub const fn averaging(&self) -> AveragingConfig {
        self.averaging
    }

    /// Replace the averaging window parameters
    pub fn set_averaging(&mut self, averaging: AveragingConfig) {
        self.averaging = averaging;
    }

    /// Get the calibration model
    #[must_use]
    pub const fn calibration(&self) -> &LinearCal {
        &self.cal
    }

    /// Get mutable access to the transport (mode writes, bus handback)
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Tear the channel apart, returning transport and clock to the caller
    #[must_use]
    pub fn into_parts(self) -> (S, C) {
        (self.source, self.clock)
    }
}
