//! Sensor Hub Main Application
//!
//! Entry point for the STM32G474-based acquisition hub firmware.
//! Brings up the sensor sockets, zeroes the current sensor, and runs the
//! periodic measurement loop.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::time::Hertz;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use sense_firmware::drivers::current::HallCurrent;
use sense_firmware::drivers::light::{reg as light_reg, AmbientLight};
use sense_firmware::drivers::pressure::Manometer;
use sense_firmware::fault::FaultLine;
use sense_firmware::hal::adc::{BridgeAdc, HallAdc};
use sense_firmware::hal::gpio::{EnablePin, StatusLed};
use sense_firmware::hal::i2c::{I2cAddress, I2cBus, I2cSource, MuxChannel};
use sense_firmware::hal::timer::SystemClock;
use sense_firmware::measure::{AnalogChannel, AveragingConfig};
use sense_firmware::prelude::*;

/// Hall element rated sensitivity in volts per amp
const HALL_SENSITIVITY_V_PER_A: f32 = 0.1;

/// The light sensor integrates on-chip; a short window is enough
const LIGHT_AVERAGING: AveragingConfig = AveragingConfig {
    samples: 16,
    settle_ms: 5,
    timeout_ms: 500,
};

type LightSensor = AmbientLight<I2cSource<MuxChannel<'static>>, SystemClock>;

static LIGHT: StaticCell<LightSensor> = StaticCell::new();

/// Latest illuminance published by the light task
static LUX_SIGNAL: Signal<CriticalSectionRawMutex, f32> = Signal::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sensor Hub Firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // Status LED (PA5 on Nucleo-style carriers)
    let led = StatusLed::new(Output::new(p.PA5, Level::Low, Speed::Low));
    spawner.spawn(heartbeat_task(led)).unwrap();

    // Socket 1: Hall current sensor. Bring the board up, then zero it --
    // nothing is drawing current at power-on, so boot is the known-zero
    // condition.
    let mut hall_enable = EnablePin::new(Output::new(p.PA9, Level::Low, Speed::Low));
    hall_enable.enable();

    let mut current = HallCurrent::with_sensitivity(
        HallAdc::new(p.ADC1, p.PA0, ADC_RESOLUTION),
        SystemClock::new(),
        VREF_VOLTS,
        default_averaging(),
        HALL_SENSITIVITY_V_PER_A,
    );
    match current.calibrate_offset() {
        Ok(offset) => info!("Current sensor zeroed at {} V", offset),
        Err(e) => warn!("Current sensor offset calibration failed: {}", e),
    }

    let mut overcurrent = FaultLine::active_low(Input::new(p.PA10, Pull::Up));

    // Socket 2: manometer, datasheet-calibrated
    let mut pressure = Manometer::new(
        BridgeAdc::new(p.ADC2, p.PA1, ADC_RESOLUTION),
        SystemClock::new(),
        VREF_VOLTS,
        default_averaging(),
    );

    // Socket 3: ambient light sensor behind the I2C mux
    let i2c = I2c::new_blocking(
        p.I2C1,
        p.PB8, // SCL
        p.PB9, // SDA
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );
    let mut bus = I2cBus::new(i2c);

    info!("I2C1 initialized at {}kHz", I2C_FREQUENCY_HZ / 1000);
    info!("I2C scan found {} device(s)", bus.scan().len());

    let muxed = MuxChannel::new(bus, I2cAddress::MUX, mux::LIGHT);
    let source = I2cSource::new(
        muxed,
        I2cAddress::LIGHT,
        light_reg::DATA,
        light_reg::CONTROL,
        AdcResolution::Bits14,
    );
    let mut light = AmbientLight::new(AnalogChannel::new(
        source,
        SystemClock::new(),
        VREF_VOLTS,
        LIGHT_AVERAGING,
    ));
    if let Err(e) = light.set_range(GainRange::Mid) {
        warn!("Light sensor range select failed: {}", e);
    }
    spawner.spawn(light_task(LIGHT.init(light))).unwrap();

    info!("Tasks spawned, entering measurement loop");

    loop {
        Timer::after(Duration::from_secs(2)).await;

        match current.read_current() {
            Ok(amps) => info!("Current: {} A", amps),
            Err(e) => warn!("Current read failed: {}", e),
        }

        match overcurrent.poll() {
            Ok(state) => info!("Overcurrent line: {}", state),
            Err(_) => {}
        }

        match pressure.read_kpa() {
            Ok(kpa) => info!("Pressure: {} kPa", kpa),
            Err(e) => warn!("Pressure read failed: {}", e),
        }

        if let Some(lux) = LUX_SIGNAL.try_take() {
            info!("Illuminance: {} lx", lux);
        }
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: StatusLed<'static>) {
    loop {
        led.on();
        Timer::after(Duration::from_millis(100)).await;
        led.off();
        Timer::after(Duration::from_millis(900)).await;
    }
}

/// Light sampling task - publishes illuminance for the main loop
#[embassy_executor::task]
async fn light_task(light: &'static mut LightSensor) {
    loop {
        Timer::after(Duration::from_secs(1)).await;
        match light.read_lux() {
            Ok(lux) => LUX_SIGNAL.signal(lux),
            Err(e) => warn!("Light read failed: {}", e),
        }
    }
}