//! Linear Calibration Tests
//!
//! Tests for the two-point (offset, gain) model and its state machine.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test calib_tests

use sense_firmware::calib::LinearCal;
use sense_firmware::types::MeasureError;

// =============================================================================
// State Machine Tests
// =============================================================================

#[test]
fn uncalibrated_rejects_conversion() {
    let cal = LinearCal::uncalibrated();
    assert_eq!(cal.convert(1.0), Err(MeasureError::NotCalibrated));
}

#[test]
fn gain_before_offset_is_rejected() {
    // Deriving gain against an unset zero would be meaningless
    let mut cal = LinearCal::uncalibrated();
    assert_eq!(
        cal.set_gain_from(2.0, 1.85),
        Err(MeasureError::NotCalibrated)
    );
    assert!(!cal.is_calibrated());
}

#[test]
fn offset_alone_does_not_allow_conversion() {
    let mut cal = LinearCal::uncalibrated();
    cal.set_offset(1.65);
    assert!(cal.has_offset());
    assert!(!cal.is_calibrated());
    assert_eq!(cal.convert(2.0), Err(MeasureError::NotCalibrated));
}

#[test]
fn default_is_uncalibrated() {
    let cal = LinearCal::default();
    assert!(!cal.has_offset());
    assert!(!cal.is_calibrated());
}

// =============================================================================
// Runtime Calibration Tests
// =============================================================================

#[test]
fn offset_then_gain_round_trip() {
    // Zero load reads 1.65V; 2.0A reads 1.85V -> 10.0 A/V
    let mut cal = LinearCal::uncalibrated();
    cal.set_offset(1.65);
    let gain = cal.set_gain_from(2.0, 1.85).unwrap();
    assert!((gain - 10.0).abs() < 0.0001, "Expected 10.0 A/V, got {}", gain);

    // A later reading at 2.05V is 4.0A
    let amps = cal.convert(2.05).unwrap();
    assert!((amps - 4.0).abs() < 0.0001, "Expected 4.0A, got {}", amps);
}

#[test]
fn gain_point_reproduces_its_known_value() {
    let mut cal = LinearCal::uncalibrated();
    cal.set_offset(0.5);
    cal.set_gain_from(7.5, 1.25).unwrap();
    let value = cal.convert(1.25).unwrap();
    assert!((value - 7.5).abs() < 0.0001);
}

#[test]
fn conversion_at_offset_reads_zero() {
    let mut cal = LinearCal::uncalibrated();
    cal.set_offset(1.65);
    cal.set_gain_from(2.0, 1.85).unwrap();
    let value = cal.convert(1.65).unwrap();
    assert!(value.abs() < 0.0001);
}

#[test]
fn negative_values_below_offset() {
    // Bidirectional sensors read below the zero point for reverse flow
    let mut cal = LinearCal::uncalibrated();
    cal.set_offset(1.65);
    cal.set_gain_from(2.0, 1.85).unwrap();
    let value = cal.convert(1.45).unwrap();
    assert!((value + 2.0).abs() < 0.0001, "Expected -2.0, got {}", value);
}

// =============================================================================
// Datasheet Calibration Tests
// =============================================================================

#[test]
fn datasheet_model_is_immediately_usable() {
    // Bridge sensor: 0.2V at zero, 45mV/kPa
    let cal = LinearCal::from_datasheet(0.2, 1.0 / 0.045);
    assert!(cal.is_calibrated());
    let kpa = cal.convert(0.65).unwrap();
    assert!((kpa - 10.0).abs() < 0.001, "Expected 10.0 kPa, got {}", kpa);
}

#[test]
fn rezeroing_keeps_datasheet_gain() {
    let mut cal = LinearCal::from_datasheet(1.65, 10.0);
    cal.set_offset(1.70);
    assert!(cal.is_calibrated());
    let value = cal.convert(1.90).unwrap();
    assert!((value - 2.0).abs() < 0.0001, "Expected 2.0, got {}", value);
}

#[test]
fn accessors_report_the_points() {
    let cal = LinearCal::from_datasheet(0.2, 22.2);
    assert!((cal.offset() - 0.2).abs() < f32::EPSILON);
    assert!((cal.gain() - 22.2).abs() < f32::EPSILON);
}

#[test]
fn recalibrating_gain_replaces_it() {
    let mut cal = LinearCal::from_datasheet(1.65, 10.0);
    cal.set_gain_from(1.0, 1.75).unwrap();
    let gain = cal.gain();
    assert!((gain - 10.0).abs() < 0.0001, "Expected rederived 10.0, got {}", gain);
}
