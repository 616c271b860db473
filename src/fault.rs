//! Fault/Alert Surface
//!
//! Sensor boards accompany their analog output with immediate digital
//! signals: overcurrent fault pins, alert/interrupt lines. These are read
//! synchronously with no debouncing: the pin state at the instant of the
//! call is the answer. The last observed state is kept on the line's own
//! context for callers that want the most recent reading without another
//! pin access.

use embedded_hal::digital::InputPin;

/// State of a fault/alert line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FaultState {
    /// No fault asserted
    #[default]
    Clear,
    /// Fault asserted
    Fault,
}

impl FaultState {
    /// Check whether a fault is asserted
    #[must_use]
    pub const fn is_fault(self) -> bool {
        matches!(self, Self::Fault)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for FaultState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Clear => defmt::write!(f, "CLEAR"),
            Self::Fault => defmt::write!(f, "FAULT"),
        }
    }
}

/// One digital fault/alert input
///
/// Most sensor fault outputs are open-drain and idle high, so the
/// active-low constructor is the common case.
pub struct FaultLine<P> {
    pin: P,
    active_low: bool,
    last: FaultState,
}

impl<P: InputPin> FaultLine<P> {
    /// Create a fault line asserted when the pin reads low
    #[must_use]
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            active_low: true,
            last: FaultState::Clear,
        }
    }

    /// Create a fault line asserted when the pin reads high
    #[must_use]
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            active_low: false,
            last: FaultState::Clear,
        }
    }

    /// Read the line state immediately
    ///
    /// # Errors
    ///
    /// Propagates the pin driver's error unchanged.
    pub fn poll(&mut self) -> Result<FaultState, P::Error> {
        let asserted = if self.active_low {
            self.pin.is_low()?
        } else {
            self.pin.is_high()?
        };

        self.last = if asserted {
            FaultState::Fault
        } else {
            FaultState::Clear
        };
        Ok(self.last)
    }

    /// Check whether a fault is currently asserted
    ///
    /// # Errors
    ///
    /// Propagates the pin driver's error unchanged.
    pub fn is_fault(&mut self) -> Result<bool, P::Error> {
        Ok(self.poll()?.is_fault())
    }

    /// Get the last observed state without touching the pin
    #[must_use]
    pub const fn last(&self) -> FaultState {
        self.last
    }

    /// Release the underlying pin
    #[must_use]
    pub fn release(self) -> P {
        self.pin
    }
}
