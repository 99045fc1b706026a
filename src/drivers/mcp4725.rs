//! `MCP4725` 12-bit DAC Driver
//!
//! Blocking driver for the Microchip MCP4725 single-channel DAC with
//! onboard EEPROM. Every setter clamps its input into the 12-bit range,
//! encodes one frame and hands it to the bus; nothing is cached between
//! calls apart from the address and the VCC reference.
//!
//! ```
//! # use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//! use mcp4725_driver::drivers::mcp4725::Mcp4725;
//!
//! # let mut i2c = Mock::new(&[Transaction::write(0x60, vec![0x40, 0x80, 0x00])]);
//! let mut dac = Mcp4725::new(&mut i2c);
//! dac.set_value_norm(0.5).unwrap();
//! # i2c.done();
//! ```
//!
//! Bus errors are returned as-is. The driver never retries.

use embedded_hal::delay::DelayNs;

use crate::config::{DEFAULT_VCC, EEPROM_POLL_INTERVAL_US, EEPROM_POLL_LIMIT, READBACK_LEN};
use crate::hal::i2c::{I2cAddress, I2cRead, I2cWrite};
use crate::protocol::{self, Command, Readback};
use crate::types::{saturating_u8, DacCode, PowerDown};

/// Failure while waiting on an EEPROM write
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EepromWaitError<E> {
    /// Transport error while polling
    Bus(E),
    /// RDY/BSY never went high within the poll budget
    Timeout,
}

#[cfg(feature = "embedded")]
impl<E> defmt::Format for EepromWaitError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Bus(_) => defmt::write!(f, "EEPROM wait: bus error"),
            Self::Timeout => defmt::write!(f, "EEPROM wait: timeout"),
        }
    }
}

/// `MCP4725` driver
///
/// Generic over the bus so callers can hand in `&mut bus` and keep
/// ownership, or move the bus in and take it back with [`Self::release`].
#[derive(Debug)]
pub struct Mcp4725<B> {
    bus: B,
    address: I2cAddress,
    vcc: f32,
}

impl<B> Mcp4725<B> {
    /// Create a driver at the default address with a 3.3V reference
    #[must_use]
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, I2cAddress::MCP4725, DEFAULT_VCC)
    }

    /// Create a driver with an explicit address and supply voltage
    #[must_use]
    pub fn with_config(bus: B, address: I2cAddress, vcc: f32) -> Self {
        Self { bus, address, vcc }
    }

    /// Device address
    #[must_use]
    pub fn address(&self) -> I2cAddress {
        self.address
    }

    /// Supply voltage used for voltage conversions
    #[must_use]
    pub fn vcc(&self) -> f32 {
        self.vcc
    }

    /// Update the supply voltage reference
    pub fn set_vcc(&mut self, vcc: f32) {
        self.vcc = vcc;
    }

    /// Borrow the bus
    #[must_use]
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Destroy the driver and return the bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cWrite> Mcp4725<B> {
    /// Set the raw output code (clamped to 0-4095)
    pub fn set_value(&mut self, value: i32) -> Result<(), B::Error> {
        self.set_code(DacCode::saturating(value))
    }

    /// Set the output code
    pub fn set_code(&mut self, code: DacCode) -> Result<(), B::Error> {
        self.write_code(Command::WriteDac, code)
    }

    /// Set the output voltage relative to the VCC reference
    ///
    /// The chip cannot measure its output, so this only scales against
    /// [`Self::vcc`].
    pub fn set_voltage(&mut self, volts: f32) -> Result<(), B::Error> {
        self.set_code(DacCode::from_voltage(volts, self.vcc))
    }

    /// Set the output as a fraction of full scale (0.0 to 1.0)
    pub fn set_value_norm(&mut self, ratio: f32) -> Result<(), B::Error> {
        self.set_code(DacCode::from_ratio(ratio))
    }

    /// Set the output and store it in EEPROM as the power-on default
    ///
    /// Returns as soon as the bus write completes. The chip keeps writing
    /// EEPROM for up to 50ms afterwards; use [`Self::wait_eeprom_ready`]
    /// when the next command must not race it.
    pub fn set_value_eeprom(&mut self, value: i32) -> Result<(), B::Error> {
        self.write_code(Command::WriteDacAndEeprom, DacCode::saturating(value))
    }

    /// Set the output voltage and store it in EEPROM
    pub fn set_voltage_eeprom(&mut self, volts: f32) -> Result<(), B::Error> {
        self.write_code(Command::WriteDacAndEeprom, DacCode::from_voltage(volts, self.vcc))
    }

    /// Set the raw output code with a 2-byte fast mode frame
    ///
    /// For clones that reject the 3-byte write command.
    pub fn set_value_fast(&mut self, value: i32) -> Result<(), B::Error> {
        let frame = protocol::encode_fast(PowerDown::Normal, DacCode::saturating(value));
        self.send(&frame)
    }

    /// Non-standard: set only the upper 8 bits of the output (0-255)
    pub fn set_value_8bit(&mut self, value: i32) -> Result<(), B::Error> {
        let frame = protocol::encode_8bit(saturating_u8(value));
        self.send(&frame)
    }

    /// Non-standard: 2-byte 8-bit write without a command byte (0-255)
    pub fn set_value_8bit_legacy(&mut self, value: i32) -> Result<(), B::Error> {
        let frame = protocol::encode_8bit_legacy(saturating_u8(value));
        self.send(&frame)
    }

    fn write_code(&mut self, command: Command, code: DacCode) -> Result<(), B::Error> {
        #[cfg(feature = "embedded")]
        defmt::trace!("MCP4725 {} {} {}", self.address, command, code);

        let frame = protocol::encode_write(command, PowerDown::Normal, code);
        self.send(&frame)
    }

    fn send(&mut self, frame: &[u8]) -> Result<(), B::Error> {
        self.bus.write(self.address, frame)
    }
}

impl<B: I2cRead> Mcp4725<B> {
    /// Read and decode the 5-byte status frame
    pub fn read_status(&mut self) -> Result<Readback, B::Error> {
        let mut frame = [0u8; READBACK_LEN];
        self.bus.read(self.address, &mut frame)?;
        Ok(Readback::parse(&frame))
    }

    /// Current DAC register code (0-4095)
    pub fn get_value(&mut self) -> Result<u16, B::Error> {
        Ok(self.read_status()?.dac_code.raw())
    }

    /// Current output voltage derived from the VCC reference
    pub fn get_voltage(&mut self) -> Result<f32, B::Error> {
        let vcc = self.vcc;
        Ok(self.read_status()?.dac_code.voltage(vcc))
    }

    /// Current output as a fraction of full scale
    pub fn get_value_norm(&mut self) -> Result<f32, B::Error> {
        Ok(self.read_status()?.dac_code.ratio())
    }

    /// Code stored in EEPROM, restored at power-on
    pub fn get_eeprom(&mut self) -> Result<u16, B::Error> {
        Ok(self.read_status()?.eeprom_code.raw())
    }

    /// Whether an EEPROM write is still in progress
    pub fn is_eeprom_busy(&mut self) -> Result<bool, B::Error> {
        Ok(self.read_status()?.is_eeprom_busy())
    }

    /// Poll RDY/BSY until the last EEPROM write has finished
    ///
    /// Not part of any write; call it explicitly after
    /// [`Self::set_value_eeprom`] when completion matters.
    pub fn wait_eeprom_ready<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), EepromWaitError<B::Error>> {
        for _ in 0..EEPROM_POLL_LIMIT {
            if !self.is_eeprom_busy().map_err(EepromWaitError::Bus)? {
                return Ok(());
            }
            delay.delay_us(EEPROM_POLL_INTERVAL_US);
        }

        #[cfg(feature = "embedded")]
        defmt::warn!("MCP4725 {} EEPROM still busy after {} polls", self.address, EEPROM_POLL_LIMIT);

        Err(EepromWaitError::Timeout)
    }
}
