//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the MCP4725 and the
//! quickstart board. Addresses, reference voltages, timing and pin
//! mappings are centralized here.

/// DAC resolution in bits
pub const DAC_RESOLUTION_BITS: u32 = 12;

/// Largest DAC code (full scale)
pub const DAC_MAX_CODE: u16 = (1 << DAC_RESOLUTION_BITS) - 1;

/// Largest value accepted by the 8-bit compatibility writes
pub const DAC_8BIT_MAX: u8 = u8::MAX;

/// MCP4725 I2C address (A2 = A1 = 0 factory option, A0 pin low)
pub const MCP4725_I2C_ADDR: u8 = 0x60;

/// Default supply voltage used as the full-scale reference
pub const DEFAULT_VCC: f32 = 3.3;

/// I2C bus frequency (MCP4725 supports 100k, 400k and 3.4M)
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Length of the frame returned by an I2C read
pub const READBACK_LEN: usize = 5;

/// Typical EEPROM write time in milliseconds
pub const EEPROM_WRITE_TIME_MS: u32 = 25;

/// Maximum EEPROM write time in milliseconds (datasheet limit)
pub const EEPROM_WRITE_TIME_MAX_MS: u32 = 50;

/// Interval between RDY/BSY polls while waiting on an EEPROM write
pub const EEPROM_POLL_INTERVAL_US: u32 = 1_000;

/// Number of RDY/BSY polls before giving up on an EEPROM write
pub const EEPROM_POLL_LIMIT: u32 = 100;

/// Pin assignments for the quickstart board
pub mod pins {
    //! GPIO pin assignments matching the quickstart wiring

    /// Status LED (directly on MCU)
    pub const LED_STATUS: &str = "PA5";

    /// I2C1 SCL (MCP4725)
    pub const I2C1_SCL: &str = "PB8";

    /// I2C1 SDA (MCP4725)
    pub const I2C1_SDA: &str = "PB9";
}

/// DMA channel assignments
pub mod dma {
    //! DMA channel assignments for I2C transfers

    /// I2C1 TX DMA channel
    pub const I2C1_TX: u8 = 1;

    /// I2C1 RX DMA channel
    pub const I2C1_RX: u8 = 2;
}

/// Total time budget of the EEPROM ready poll in microseconds
#[must_use]
pub const fn eeprom_poll_budget_us() -> u32 {
    EEPROM_POLL_INTERVAL_US * EEPROM_POLL_LIMIT
}
