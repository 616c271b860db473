//! GPIO Abstractions
//!
//! Type-safe wrappers for the carrier board's discrete pins. Fault/alert
//! inputs are not wrapped here, since `embassy_stm32::gpio::Input` implements
//! `embedded_hal::digital::InputPin` and plugs straight into
//! [`crate::fault::FaultLine`].

use embassy_stm32::gpio::Output;

/// Status LED state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LedState {
    /// LED is off
    #[default]
    Off,
    /// LED is on
    On,
}

impl LedState {
    /// Toggle the LED state
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }
}

impl defmt::Format for LedState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Off => defmt::write!(f, "OFF"),
            Self::On => defmt::write!(f, "ON"),
        }
    }
}

/// Status LED driver
pub struct StatusLed<'d> {
    pin: Output<'d>,
    state: LedState,
}

impl<'d> StatusLed<'d> {
    /// Create a new status LED (initially off)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        Self {
            pin,
            state: LedState::Off,
        }
    }

    /// Turn LED on
    pub fn on(&mut self) {
        self.pin.set_high();
        self.state = LedState::On;
    }

    /// Turn LED off
    pub fn off(&mut self) {
        self.pin.set_low();
        self.state = LedState::Off;
    }

    /// Toggle LED state
    pub fn toggle(&mut self) {
        match self.state {
            LedState::Off => self.on(),
            LedState::On => self.off(),
        }
    }

    /// Get current state
    #[must_use]
    pub const fn state(&self) -> LedState {
        self.state
    }
}

/// Sensor board enable/reset line
///
/// Drives a socket's RST pin as an active-high enable. Boards start
/// disabled so their outputs stay quiet until the application brings
/// them up deliberately.
pub struct EnablePin<'d> {
    pin: Output<'d>,
    enabled: bool,
}

impl<'d> EnablePin<'d> {
    /// Create the enable line (board held disabled)
    #[must_use]
    pub fn new(pin: Output<'d>) -> Self {
        let mut this = Self {
            pin,
            enabled: false,
        };
        this.disable();
        this
    }

    /// Bring the board up
    pub fn enable(&mut self) {
        self.pin.set_high();
        self.enabled = true;
    }

    /// Hold the board in reset/shutdown
    pub fn disable(&mut self) {
        self.pin.set_low();
        self.enabled = false;
    }

    /// Check if the board is enabled
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}
