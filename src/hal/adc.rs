//! ADC Transports
//!
//! Blocking single-sample acquisition from the on-chip converters. Each
//! socket's analog input is bound to one ADC instance at construction and
//! surfaces raw codes through the [`SampleSource`] seam.

use embassy_stm32::adc::{Adc, AdcChannel, SampleTime};
use embassy_stm32::peripherals::{ADC1, ADC2};

use crate::measure::SampleSource;
use crate::types::{AdcResolution, RawSample, TransportError};

/// Hall-sensor analog input on ADC1 (socket 1 AN line)
pub struct HallAdc<'d, CH> {
    adc: Adc<'d, ADC1>,
    channel: CH,
    resolution: AdcResolution,
}

impl<'d, CH: AdcChannel<ADC1>> HallAdc<'d, CH> {
    /// Create the transport and configure the converter
    ///
    /// Hall elements have a low-impedance buffered output, so a short
    /// sample time is enough.
    #[must_use]
    pub fn new(adc: ADC1, channel: CH, resolution: AdcResolution) -> Self {
        let mut adc = Adc::new(adc);
        adc.set_sample_time(SampleTime::CYCLES47_5);
        Self {
            adc,
            channel,
            resolution,
        }
    }
}

impl<CH: AdcChannel<ADC1>> SampleSource for HallAdc<'_, CH> {
    fn sample(&mut self) -> Result<RawSample, TransportError> {
        let raw = self.adc.blocking_read(&mut self.channel);
        Ok(RawSample::new(raw, self.resolution))
    }
}

/// Bridge-sensor analog input on ADC2 (socket 2 AN line)
pub struct BridgeAdc<'d, CH> {
    adc: Adc<'d, ADC2>,
    channel: CH,
    resolution: AdcResolution,
}

impl<'d, CH: AdcChannel<ADC2>> BridgeAdc<'d, CH> {
    /// Create the transport and configure the converter
    ///
    /// The piezoresistive bridge is high impedance; the long sample time
    /// lets the sampling capacitor settle.
    #[must_use]
    pub fn new(adc: ADC2, channel: CH, resolution: AdcResolution) -> Self {
        let mut adc = Adc::new(adc);
        adc.set_sample_time(SampleTime::CYCLES247_5);
        Self {
            adc,
            channel,
            resolution,
        }
    }
}

impl<CH: AdcChannel<ADC2>> SampleSource for BridgeAdc<'_, CH> {
    fn sample(&mut self) -> Result<RawSample, TransportError> {
        let raw = self.adc.blocking_read(&mut self.channel);
        Ok(RawSample::new(raw, self.resolution))
    }
}
