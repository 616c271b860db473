//! Shared host-test doubles
//!
//! Scripted transports and a simulated clock for driving the acquisition
//! core without hardware. Both hand out cheap clones sharing the same
//! state, so a test can keep a probe while the device under test owns the
//! "hardware".

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, InputPin};
use sense_firmware::measure::{Clock, ModeSelect, SampleSource};
use sense_firmware::types::{AdcResolution, RawSample, TransportError};

/// Simulated millisecond clock; delays advance it instantly
#[derive(Clone, Default)]
pub struct SimClock {
    now: Rc<RefCell<u64>>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time, readable from a probe clone
    pub fn elapsed_ms(&self) -> u64 {
        *self.now.borrow()
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        *self.now.borrow()
    }

    fn delay_ms(&mut self, ms: u32) {
        *self.now.borrow_mut() += u64::from(ms);
    }
}

struct SourceState {
    script: Vec<Result<u16, TransportError>>,
    cursor: usize,
    calls: usize,
    modes: Vec<u8>,
    mode_result: Result<(), TransportError>,
    resolution: AdcResolution,
}

/// Scripted sample source; past the end of the script the last step repeats
#[derive(Clone)]
pub struct ScriptedSource {
    state: Rc<RefCell<SourceState>>,
}

impl ScriptedSource {
    pub fn with_script(
        resolution: AdcResolution,
        script: Vec<Result<u16, TransportError>>,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(SourceState {
                script,
                cursor: 0,
                calls: 0,
                modes: Vec::new(),
                mode_result: Ok(()),
                resolution,
            })),
        }
    }

    /// Source that returns the same code forever
    pub fn constant(code: u16, resolution: AdcResolution) -> Self {
        Self::with_script(resolution, vec![Ok(code)])
    }

    /// Source whose every transaction fails
    pub fn always_fail(resolution: AdcResolution) -> Self {
        Self::with_script(resolution, vec![Err(TransportError::Nack)])
    }

    /// Make subsequent mode writes fail
    pub fn fail_mode_writes(&self, err: TransportError) {
        self.state.borrow_mut().mode_result = Err(err);
    }

    /// Number of sample transactions attempted so far
    pub fn calls(&self) -> usize {
        self.state.borrow().calls
    }

    /// Mode bytes written so far, in order
    pub fn modes(&self) -> Vec<u8> {
        self.state.borrow().modes.clone()
    }
}

impl SampleSource for ScriptedSource {
    fn sample(&mut self) -> Result<RawSample, TransportError> {
        let mut state = self.state.borrow_mut();
        state.calls += 1;

        let step = state
            .script
            .get(state.cursor)
            .or_else(|| state.script.last())
            .copied()
            .unwrap_or(Err(TransportError::Nack));
        if state.cursor < state.script.len() {
            state.cursor += 1;
        }

        let resolution = state.resolution;
        step.map(|code| RawSample::new(code, resolution))
    }
}

impl ModeSelect for ScriptedSource {
    fn select_mode(&mut self, bits: u8) -> Result<(), TransportError> {
        let mut state = self.state.borrow_mut();
        state.mode_result?;
        state.modes.push(bits);
        Ok(())
    }
}

/// Digital input double for fault-line tests
#[derive(Clone, Default)]
pub struct MockPin {
    level_high: Rc<RefCell<bool>>,
}

impl MockPin {
    pub fn new(level_high: bool) -> Self {
        Self {
            level_high: Rc::new(RefCell::new(level_high)),
        }
    }

    pub fn set_high(&self) {
        *self.level_high.borrow_mut() = true;
    }

    pub fn set_low(&self) {
        *self.level_high.borrow_mut() = false;
    }
}

impl ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(*self.level_high.borrow())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!*self.level_high.borrow())
    }
}
