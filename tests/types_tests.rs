//! Types Module Tests
//!
//! Tests for domain types (AdcResolution, RawSample, GainRange, errors).
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test types_tests

use sense_firmware::types::{
    AdcResolution, GainRange, MeasureError, RawSample, TransportError,
};

// =============================================================================
// AdcResolution Tests
// =============================================================================

#[test]
fn resolution_bits() {
    assert_eq!(AdcResolution::Bits10.bits(), 10);
    assert_eq!(AdcResolution::Bits12.bits(), 12);
    assert_eq!(AdcResolution::Bits14.bits(), 14);
    assert_eq!(AdcResolution::Bits16.bits(), 16);
}

#[test]
fn resolution_full_scale() {
    assert_eq!(AdcResolution::Bits10.full_scale(), 1023);
    assert_eq!(AdcResolution::Bits12.full_scale(), 4095);
    assert_eq!(AdcResolution::Bits14.full_scale(), 16383);
    assert_eq!(AdcResolution::Bits16.full_scale(), 65535);
}

#[test]
fn resolution_mask_clips_high_bits() {
    assert_eq!(AdcResolution::Bits12.mask(0xFFFF), 4095);
    assert_eq!(AdcResolution::Bits12.mask(4095), 4095);
    assert_eq!(AdcResolution::Bits12.mask(0x1800), 0x0800);
    assert_eq!(AdcResolution::Bits16.mask(0xFFFF), 0xFFFF);
}

#[test]
fn resolution_default_is_12_bit() {
    assert_eq!(AdcResolution::default(), AdcResolution::Bits12);
}

// =============================================================================
// RawSample Tests
// =============================================================================

#[test]
fn raw_sample_masks_at_construction() {
    let sample = RawSample::new(0xFFFF, AdcResolution::Bits12);
    assert_eq!(sample.code(), 4095);
}

#[test]
fn voltage_at_zero_is_zero() {
    let sample = RawSample::new(0, AdcResolution::Bits12);
    assert_eq!(sample.as_voltage(3.3), 0.0);
}

#[test]
fn voltage_at_full_scale_is_vref() {
    let sample = RawSample::new(4095, AdcResolution::Bits12);
    assert!((sample.as_voltage(3.3) - 3.3).abs() < 0.0001);
}

#[test]
fn voltage_midscale_12bit() {
    // 12-bit code 2048 at 3.3V reference
    let sample = RawSample::new(2048, AdcResolution::Bits12);
    let v = sample.as_voltage(3.3);
    assert!((v - 1.6504).abs() < 0.0005, "Expected ~1.6504V, got {}", v);
}

#[test]
fn voltage_is_monotonic() {
    let mut last = -1.0;
    for code in [0u16, 1, 100, 1024, 2048, 3000, 4095] {
        let v = RawSample::new(code, AdcResolution::Bits12).as_voltage(3.3);
        assert!(v > last, "voltage({}) not above previous", code);
        last = v;
    }
}

#[test]
fn voltage_scales_with_resolution() {
    // The same relative level reads the same voltage at any width
    let v12 = RawSample::new(1024, AdcResolution::Bits12).as_voltage(3.3);
    let v10 = RawSample::new(256, AdcResolution::Bits10).as_voltage(3.3);
    assert!((v12 - v10).abs() < 0.002);
}

#[test]
fn signed_unpacking_positive() {
    assert_eq!(RawSample::new(0, AdcResolution::Bits12).as_signed(), 0);
    assert_eq!(RawSample::new(2047, AdcResolution::Bits12).as_signed(), 2047);
}

#[test]
fn signed_unpacking_negative_12bit() {
    assert_eq!(RawSample::new(0x800, AdcResolution::Bits12).as_signed(), -2048);
    assert_eq!(RawSample::new(0xFFF, AdcResolution::Bits12).as_signed(), -1);
}

#[test]
fn signed_unpacking_negative_14bit() {
    assert_eq!(RawSample::new(0x2000, AdcResolution::Bits14).as_signed(), -8192);
    assert_eq!(RawSample::new(0x3FFF, AdcResolution::Bits14).as_signed(), -1);
}

#[test]
fn signed_unpacking_16bit() {
    assert_eq!(RawSample::new(0x8000, AdcResolution::Bits16).as_signed(), -32768);
    assert_eq!(RawSample::new(0x7FFF, AdcResolution::Bits16).as_signed(), 32767);
}

// =============================================================================
// GainRange Tests
// =============================================================================

#[test]
fn gain_range_default_is_shutdown() {
    assert_eq!(GainRange::default(), GainRange::Shutdown);
}

#[test]
fn gain_range_select_bits() {
    assert_eq!(GainRange::Shutdown.select_bits(), 0b00);
    assert_eq!(GainRange::Low.select_bits(), 0b01);
    assert_eq!(GainRange::Mid.select_bits(), 0b10);
    assert_eq!(GainRange::High.select_bits(), 0b11);
}

#[test]
fn gain_range_shutdown_cannot_measure() {
    assert!(GainRange::Shutdown.lux_per_volt().is_none());
    assert!(!GainRange::Shutdown.is_active());
}

#[test]
fn gain_range_constants_ordered() {
    // Lower gain covers brighter scenes: more lux per volt
    let low = GainRange::Low.lux_per_volt().unwrap();
    let mid = GainRange::Mid.lux_per_volt().unwrap();
    let high = GainRange::High.lux_per_volt().unwrap();
    assert!(low > mid && mid > high);
    assert!(GainRange::Low.is_active());
}

// =============================================================================
// Error Taxonomy Tests
// =============================================================================

#[test]
fn transport_error_wraps_into_measure_error() {
    let err: MeasureError = TransportError::Nack.into();
    assert_eq!(err, MeasureError::Transport(TransportError::Nack));
}

#[test]
fn error_kinds_are_distinct() {
    // "Could not talk to the chip" is not "talked, but invalid request"
    assert_ne!(
        MeasureError::Transport(TransportError::BusBusy),
        MeasureError::Timeout
    );
    assert_ne!(MeasureError::Timeout, MeasureError::NotCalibrated);
    assert_ne!(MeasureError::NotCalibrated, MeasureError::UnsupportedRange);
}

#[test]
fn error_display_is_descriptive() {
    assert_eq!(MeasureError::Timeout.to_string(), "acquisition timeout");
    assert_eq!(
        MeasureError::NotCalibrated.to_string(),
        "device not calibrated"
    );
}
