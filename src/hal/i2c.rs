//! I2C Bus Abstractions
//!
//! The driver only needs to push bytes at an address, and optionally read
//! some back. These traits capture exactly that, and every
//! `embedded_hal::i2c::I2c` implementation satisfies both.

use embedded_hal::i2c::{ErrorType, I2c};

use crate::config::MCP4725_I2C_ADDR;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// MCP4725 default address (A0 low)
    pub const MCP4725: Self = Self(MCP4725_I2C_ADDR);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// MCP4725 address with the A0 pin strapped `high` or low
    #[must_use]
    pub const fn mcp4725_a0(high: bool) -> Self {
        Self(MCP4725_I2C_ADDR | high as u8)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

impl Default for I2cAddress {
    fn default() -> Self {
        Self::MCP4725
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// Byte-write transport
///
/// Errors are whatever the transport produces; the driver hands them back
/// untouched.
pub trait I2cWrite {
    /// Transport error
    type Error;

    /// Write `bytes` to the device at `addr`
    fn write(&mut self, addr: I2cAddress, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Byte-read transport, needed only for readback
pub trait I2cRead: I2cWrite {
    /// Fill `buffer` from the device at `addr`
    fn read(&mut self, addr: I2cAddress, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: I2c> I2cWrite for T {
    type Error = <T as ErrorType>::Error;

    fn write(&mut self, addr: I2cAddress, bytes: &[u8]) -> Result<(), Self::Error> {
        I2c::write(self, addr.addr(), bytes)
    }
}

impl<T: I2c> I2cRead for T {
    fn read(&mut self, addr: I2cAddress, buffer: &mut [u8]) -> Result<(), Self::Error> {
        I2c::read(self, addr.addr(), buffer)
    }
}
