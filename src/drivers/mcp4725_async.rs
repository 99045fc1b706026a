//! Async `MCP4725` Driver
//!
//! Same frames as [`super::mcp4725::Mcp4725`], issued over
//! `embedded-hal-async` so it can share an executor with the rest of the
//! firmware (embassy, DMA-backed I2C).

use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use super::mcp4725::EepromWaitError;
use crate::config::{DEFAULT_VCC, EEPROM_POLL_INTERVAL_US, EEPROM_POLL_LIMIT, READBACK_LEN};
use crate::hal::i2c::I2cAddress;
use crate::protocol::{self, Command, Readback};
use crate::types::{saturating_u8, DacCode, PowerDown};

/// I2C operation result
pub type I2cResult<T, I> = Result<T, <I as embedded_hal_async::i2c::ErrorType>::Error>;

/// Async `MCP4725` driver
#[derive(Debug)]
pub struct Mcp4725Async<I> {
    i2c: I,
    address: I2cAddress,
    vcc: f32,
}

impl<I: I2c> Mcp4725Async<I> {
    /// Create a driver at the default address with a 3.3V reference
    #[must_use]
    pub fn new(i2c: I) -> Self {
        Self::with_config(i2c, I2cAddress::MCP4725, DEFAULT_VCC)
    }

    /// Create a driver with an explicit address and supply voltage
    #[must_use]
    pub fn with_config(i2c: I, address: I2cAddress, vcc: f32) -> Self {
        Self { i2c, address, vcc }
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
    pub fn bus(&self) -> &I {
        &self.i2c
    }

    /// Destroy the driver and return the bus
    pub fn release(self) -> I {
        self.i2c
    }

    /// Set the raw output code (clamped to 0-4095)
    pub async fn set_value(&mut self, value: i32) -> I2cResult<(), I> {
        self.set_code(DacCode::saturating(value)).await
    }

    /// Set the output code
    pub async fn set_code(&mut self, code: DacCode) -> I2cResult<(), I> {
        self.write_code(Command::WriteDac, code).await
    }

    /// Set the output voltage relative to the VCC reference
    pub async fn set_voltage(&mut self, volts: f32) -> I2cResult<(), I> {
        self.set_code(DacCode::from_voltage(volts, self.vcc)).await
    }

    /// Set the output as a fraction of full scale (0.0 to 1.0)
    pub async fn set_value_norm(&mut self, ratio: f32) -> I2cResult<(), I> {
        self.set_code(DacCode::from_ratio(ratio)).await
    }

    /// Set the output and store it in EEPROM as the power-on default
    pub async fn set_value_eeprom(&mut self, value: i32) -> I2cResult<(), I> {
        self.write_code(Command::WriteDacAndEeprom, DacCode::saturating(value))
            .await
    }

    /// Set the output voltage and store it in EEPROM
    pub async fn set_voltage_eeprom(&mut self, volts: f32) -> I2cResult<(), I> {
        self.write_code(Command::WriteDacAndEeprom, DacCode::from_voltage(volts, self.vcc))
            .await
    }

    /// Set the raw output code with a 2-byte fast mode frame
    pub async fn set_value_fast(&mut self, value: i32) -> I2cResult<(), I> {
        let frame = protocol::encode_fast(PowerDown::Normal, DacCode::saturating(value));
        self.i2c.write(self.address.addr(), &frame).await
    }

    /// Non-standard: set only the upper 8 bits of the output (0-255)
    pub async fn set_value_8bit(&mut self, value: i32) -> I2cResult<(), I> {
        let frame = protocol::encode_8bit(saturating_u8(value));
        self.i2c.write(self.address.addr(), &frame).await
    }

    /// Non-standard: 2-byte 8-bit write without a command byte (0-255)
    pub async fn set_value_8bit_legacy(&mut self, value: i32) -> I2cResult<(), I> {
        let frame = protocol::encode_8bit_legacy(saturating_u8(value));
        self.i2c.write(self.address.addr(), &frame).await
    }

    async fn write_code(&mut self, command: Command, code: DacCode) -> I2cResult<(), I> {
        #[cfg(feature = "embedded")]
        defmt::trace!("MCP4725 {} {} {}", self.address, command, code);

        let frame = protocol::encode_write(command, PowerDown::Normal, code);
        self.i2c.write(self.address.addr(), &frame).await
    }

    /// Read and decode the 5-byte status frame
    pub async fn read_status(&mut self) -> I2cResult<Readback, I> {
        let mut frame = [0u8; READBACK_LEN];
        self.i2c.read(self.address.addr(), &mut frame).await?;
        Ok(Readback::parse(&frame))
    }

    /// Current DAC register code (0-4095)
    pub async fn get_value(&mut self) -> I2cResult<u16, I> {
        Ok(self.read_status().await?.dac_code.raw())
    }

    /// Current output voltage derived from the VCC reference
    pub async fn get_voltage(&mut self) -> I2cResult<f32, I> {
        let vcc = self.vcc;
        Ok(self.read_status().await?.dac_code.voltage(vcc))
    }

    /// Current output as a fraction of full scale
    pub async fn get_value_norm(&mut self) -> I2cResult<f32, I> {
        Ok(self.read_status().await?.dac_code.ratio())
    }

    /// Code stored in EEPROM, restored at power-on
    pub async fn get_eeprom(&mut self) -> I2cResult<u16, I> {
        Ok(self.read_status().await?.eeprom_code.raw())
    }

    /// Whether an EEPROM write is still in progress
    pub async fn is_eeprom_busy(&mut self) -> I2cResult<bool, I> {
        Ok(self.read_status().await?.is_eeprom_busy())
    }

    /// Poll RDY/BSY until the last EEPROM write has finished
    pub async fn wait_eeprom_ready<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), EepromWaitError<I::Error>> {
        for _ in 0..EEPROM_POLL_LIMIT {
            if !self.is_eeprom_busy().await.map_err(EepromWaitError::Bus)? {
                return Ok(());
            }
            delay.delay_us(EEPROM_POLL_INTERVAL_US).await;
        }

        #[cfg(feature = "embedded")]
        defmt::warn!("MCP4725 {} EEPROM still busy after {} polls", self.address, EEPROM_POLL_LIMIT);

        Err(EepromWaitError::Timeout)
    }
}
