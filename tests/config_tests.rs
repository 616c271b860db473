//! Configuration and Constants Tests
//!
//! Tests to verify configuration values are valid and consistent.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test config_tests

use sense_firmware::config::*;
use sense_firmware::types::AdcResolution;

// =============================================================================
// Clock and Bus Tests
// =============================================================================

#[test]
fn system_clock_valid() {
    // STM32G474 max clock is 170 MHz
    assert_eq!(SYSTEM_CLOCK_HZ, 170_000_000);
}

#[test]
fn i2c_frequency_valid() {
    // Standard I2C speeds: 100kHz, 400kHz, 1MHz
    assert!(
        I2C_FREQUENCY_HZ == 100_000 || I2C_FREQUENCY_HZ == 400_000 || I2C_FREQUENCY_HZ == 1_000_000
    );
}

#[test]
fn device_addresses_are_7_bit() {
    assert!(LIGHT_I2C_ADDR < 0x78);
    assert!(LIGHT_I2C_ADDR >= 0x08);
}

#[test]
fn mux_address_in_tca9548_window() {
    // TCA9548A responds on 0x70-0x77 depending on address straps
    assert!((0x70..=0x77).contains(&MUX_I2C_ADDR));
}

#[test]
fn mux_channels_exist() {
    assert!(mux::LIGHT < 8);
    assert!(mux::SPARE < 8);
    assert_ne!(mux::LIGHT, mux::SPARE);
}

// =============================================================================
// Acquisition Defaults Tests
// =============================================================================

#[test]
fn reference_voltage_is_plausible() {
    assert!(VREF_VOLTS > 1.0 && VREF_VOLTS <= 5.0);
}

#[test]
fn adc_resolution_matches_on_chip_converter() {
    assert_eq!(ADC_RESOLUTION, AdcResolution::Bits12);
    assert_eq!(ADC_RESOLUTION.full_scale(), 4095);
}

#[test]
fn default_averaging_is_consistent() {
    let avg = default_averaging();
    assert!(avg.samples > 0);
    assert!(avg.timeout_ms >= avg.settle_ms);
    // The budget must cover a clean window's worth of settle delays
    assert!(u32::from(avg.samples) * avg.settle_ms <= avg.timeout_ms);
}

#[test]
fn hall_midpoint_is_mid_rail() {
    assert!((HALL_MIDPOINT_RATIO - 0.5).abs() < f32::EPSILON);
}
