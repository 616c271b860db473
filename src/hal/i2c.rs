//! I2C Bus Abstractions
//!
//! Blocking I2C communication for sensor boards and the channel mux.
//! The bus is owned exclusively by whoever drives it, so only one
//! transaction is ever in flight; the mux wrapper re-asserts its channel
//! select immediately before every dependent transfer.

use embassy_stm32::i2c::{Error as I2cError, I2c};
use embassy_stm32::mode::Blocking;

use crate::measure::{ModeSelect, SampleSource};
use crate::types::{AdcResolution, RawSample, TransportError};

/// I2C operation result
pub type I2cResult<T> = Result<T, I2cError>;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// Ambient light sensor front-end address
    pub const LIGHT: Self = Self(0x4A);

    /// Channel mux address (TCA9548A-compatible, address pins low)
    pub const MUX: Self = Self(0x70);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

impl From<I2cError> for TransportError {
    fn from(err: I2cError) -> Self {
        match err {
            I2cError::Nack => Self::Nack,
            I2cError::Timeout => Self::NotReady,
            _ => Self::BusBusy,
        }
    }
}

/// I2C bus wrapper for blocking register access
pub struct I2cBus<'d> {
    i2c: I2c<'d, Blocking>,
}

impl<'d> I2cBus<'d> {
    /// Create a new I2C bus wrapper
    #[must_use]
    pub fn new(i2c: I2c<'d, Blocking>) -> Self {
        Self { i2c }
    }

    /// Write bytes to a device
    pub fn write(&mut self, addr: I2cAddress, data: &[u8]) -> I2cResult<()> {
        self.i2c.blocking_write(addr.addr(), data)
    }

    /// Read bytes from a device
    pub fn read(&mut self, addr: I2cAddress, buffer: &mut [u8]) -> I2cResult<()> {
        self.i2c.blocking_read(addr.addr(), buffer)
    }

    /// Write then read (combined transaction)
    pub fn write_read(
        &mut self,
        addr: I2cAddress,
        write: &[u8],
        read: &mut [u8],
    ) -> I2cResult<()> {
        self.i2c.blocking_write_read(addr.addr(), write, read)
    }

    /// Write a single register
    pub fn write_reg(&mut self, addr: I2cAddress, reg: u8, value: u8) -> I2cResult<()> {
        self.i2c.blocking_write(addr.addr(), &[reg, value])
    }

    /// Read a single register
    pub fn read_reg(&mut self, addr: I2cAddress, reg: u8) -> I2cResult<u8> {
        let mut buf = [0u8];
        self.i2c.blocking_write_read(addr.addr(), &[reg], &mut buf)?;
        Ok(buf[0])
    }

    /// Read multiple registers starting at base address
    pub fn read_regs(
        &mut self,
        addr: I2cAddress,
        base_reg: u8,
        buffer: &mut [u8],
    ) -> I2cResult<()> {
        self.i2c.blocking_write_read(addr.addr(), &[base_reg], buffer)
    }

    /// Scan the I2C bus for devices
    pub fn scan(&mut self) -> heapless::Vec<I2cAddress, 16> {
        let mut devices = heapless::Vec::new();

        for addr in 0x08..0x78 {
            let mut buf = [0u8; 1];
            if self.i2c.blocking_read(addr, &mut buf).is_ok() {
                let _ = devices.push(I2cAddress::new(addr));
            }
        }

        devices
    }
}

/// Register-level access used by I2C sample transports
///
/// Implemented by the bare bus and by a mux channel, so a conversion chip
/// can sit either directly on the bus or behind one mux hop.
pub trait RegisterBus {
    /// Read registers starting at `base_reg`
    ///
    /// # Errors
    ///
    /// [`TransportError`] when the transaction fails.
    fn read_regs(
        &mut self,
        addr: I2cAddress,
        base_reg: u8,
        buffer: &mut [u8],
    ) -> Result<(), TransportError>;

    /// Write a single register
    ///
    /// # Errors
    ///
    /// [`TransportError`] when the transaction fails.
    fn write_reg(&mut self, addr: I2cAddress, reg: u8, value: u8) -> Result<(), TransportError>;
}

impl RegisterBus for I2cBus<'_> {
    fn read_regs(
        &mut self,
        addr: I2cAddress,
        base_reg: u8,
        buffer: &mut [u8],
    ) -> Result<(), TransportError> {
        self.i2c
            .blocking_write_read(addr.addr(), &[base_reg], buffer)
            .map_err(TransportError::from)
    }

    fn write_reg(&mut self, addr: I2cAddress, reg: u8, value: u8) -> Result<(), TransportError> {
        self.i2c
            .blocking_write(addr.addr(), &[reg, value])
            .map_err(TransportError::from)
    }
}

/// One downstream channel of an I2C mux
///
/// Mux selection state is bus-wide, not per-device. The wrapper owns the
/// bus and re-asserts its channel select immediately before every
/// dependent transfer, so no other traffic can interleave between the
/// select and the transaction.
pub struct MuxChannel<'d> {
    bus: I2cBus<'d>,
    mux: I2cAddress,
    channel: u8,
}

impl<'d> MuxChannel<'d> {
    /// Bind a mux channel, taking ownership of the bus
    #[must_use]
    pub fn new(bus: I2cBus<'d>, mux: I2cAddress, channel: u8) -> Self {
        Self {
            bus,
            mux,
            channel: channel & 0x07,
        }
    }

    fn select(&mut self) -> Result<(), TransportError> {
        self.bus
            .write(self.mux, &[1 << self.channel])
            .map_err(TransportError::from)
    }

    /// Get the channel number
    #[must_use]
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Release the underlying bus
    #[must_use]
    pub fn release(self) -> I2cBus<'d> {
        self.bus
    }
}

impl RegisterBus for MuxChannel<'_> {
    fn read_regs(
        &mut self,
        addr: I2cAddress,
        base_reg: u8,
        buffer: &mut [u8],
    ) -> Result<(), TransportError> {
        self.select()?;
        self.bus
            .read_regs(addr, base_reg, buffer)
            .map_err(TransportError::from)
    }

    fn write_reg(&mut self, addr: I2cAddress, reg: u8, value: u8) -> Result<(), TransportError> {
        self.select()?;
        self.bus
            .write_reg(addr, reg, value)
            .map_err(TransportError::from)
    }
}

/// Sample transport for register-mapped conversion chips
///
/// Reads a two-byte big-endian conversion result from `data_reg` and
/// masks it to the chip's declared resolution; mode writes go to
/// `ctrl_reg`.
pub struct I2cSource<B> {
    bus: B,
    addr: I2cAddress,
    data_reg: u8,
    ctrl_reg: u8,
    resolution: AdcResolution,
}

impl<B: RegisterBus> I2cSource<B> {
    /// Create a transport for one conversion chip
    #[must_use]
    pub fn new(
        bus: B,
        addr: I2cAddress,
        data_reg: u8,
        ctrl_reg: u8,
        resolution: AdcResolution,
    ) -> Self {
        Self {
            bus,
            addr,
            data_reg,
            ctrl_reg,
            resolution,
        }
    }

    /// Get the device address
    #[must_use]
    pub const fn address(&self) -> I2cAddress {
        self.addr
    }
}

impl<B: RegisterBus> SampleSource for I2cSource<B> {
    fn sample(&mut self) -> Result<RawSample, TransportError> {
        let mut buf = [0u8; 2];
        self.bus.read_regs(self.addr, self.data_reg, &mut buf)?;
        Ok(RawSample::new(u16::from_be_bytes(buf), self.resolution))
    }
}

impl<B: RegisterBus> ModeSelect for I2cSource<B> {
    fn select_mode(&mut self, bits: u8) -> Result<(), TransportError> {
        self.bus.write_reg(self.addr, self.ctrl_reg, bits)
    }
}
