//! MCP4725 Wire Protocol
//!
//! Frame encoding for the chip's write commands and decoding of the
//! 5-byte read frame. Everything here is pure; the drivers only move
//! these bytes over the bus.
//!
//! Datasheet: <https://ww1.microchip.com/downloads/en/DeviceDoc/22039d.pdf>
//!
//! ```text
//! Write DAC / DAC+EEPROM (Figure 6-2):
//!   [C2 C1 C0 x x PD1 PD0 x] [D11..D4] [D3..D0 x x x x]
//! Fast mode (Figure 6-1):
//!   [0 0 PD1 PD0 D11..D8] [D7..D0]
//! Read (Figure 6-3):
//!   [RDY POR x x x PD1 PD0 x] [D11..D4] [D3..D0 x x x x]
//!   [x PD1 PD0 x E11..E8] [E7..E0]
//! ```

use crate::config::READBACK_LEN;
use crate::types::{DacCode, PowerDown};

/// Standard write frame length
pub const WRITE_FRAME_LEN: usize = 3;

/// Fast mode frame length
pub const FAST_FRAME_LEN: usize = 2;

/// Status byte: EEPROM write complete
const STATUS_READY: u8 = 0x80;

/// Status byte: power-on reset flag
const STATUS_POR: u8 = 0x40;

/// Write command selection (Table 6-2)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Write the DAC register only (volatile)
    WriteDac,
    /// Write the DAC register and the EEPROM
    WriteDacAndEeprom,
}

impl Command {
    /// Get the command byte with PD bits cleared
    #[must_use]
    pub const fn opcode(self) -> u8 {
        match self {
            Self::WriteDac => 0b0100_0000,
            Self::WriteDacAndEeprom => 0b0110_0000,
        }
    }

    /// Whether the chip keeps this value across power cycles
    #[must_use]
    pub const fn persists(self) -> bool {
        matches!(self, Self::WriteDacAndEeprom)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Command {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::WriteDac => defmt::write!(f, "WRITE_DAC"),
            Self::WriteDacAndEeprom => defmt::write!(f, "WRITE_DAC_EEPROM"),
        }
    }
}

/// Encode a standard 3-byte write
#[must_use]
pub const fn encode_write(command: Command, power_down: PowerDown, code: DacCode) -> [u8; WRITE_FRAME_LEN] {
    [
        command.opcode() | (power_down.bits() << 1),
        code.high_byte(),
        code.low_nibble() << 4,
    ]
}

/// Encode a 2-byte fast mode write
#[must_use]
pub const fn encode_fast(power_down: PowerDown, code: DacCode) -> [u8; FAST_FRAME_LEN] {
    [(power_down.bits() << 4) | code.high_nibble(), code.low_byte()]
}

/// Encode an 8-bit write for clones that only honour the upper byte
///
/// Uses the standard write command with D3..D0 zeroed.
#[must_use]
pub const fn encode_8bit(value: u8) -> [u8; WRITE_FRAME_LEN] {
    [Command::WriteDac.opcode(), value, 0x00]
}

/// Encode a 2-byte 8-bit write with no command byte
#[must_use]
pub const fn encode_8bit_legacy(value: u8) -> [u8; FAST_FRAME_LEN] {
    [value, 0x00]
}

/// Recover the code from a standard write frame
#[must_use]
pub const fn decode_write(frame: [u8; WRITE_FRAME_LEN]) -> DacCode {
    DacCode::masked(((frame[1] as u16) << 4) | ((frame[2] as u16) >> 4))
}

/// Recover the code from a fast mode frame
#[must_use]
pub const fn decode_fast(frame: [u8; FAST_FRAME_LEN]) -> DacCode {
    DacCode::masked((((frame[0] & 0x0F) as u16) << 8) | frame[1] as u16)
}

/// Decoded read frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Readback {
    /// EEPROM write finished (RDY/BSY high)
    pub ready: bool,
    /// Power-on reset flag
    pub power_on_reset: bool,
    /// Power-down mode of the DAC register
    pub dac_power_down: PowerDown,
    /// Current DAC register code
    pub dac_code: DacCode,
    /// Power-down mode stored in EEPROM
    pub eeprom_power_down: PowerDown,
    /// Code stored in EEPROM (power-on default)
    pub eeprom_code: DacCode,
}

impl Readback {
    /// Decode the 5-byte frame returned by an I2C read
    #[must_use]
    pub const fn parse(frame: &[u8; READBACK_LEN]) -> Self {
        let status = frame[0];
        Self {
            ready: status & STATUS_READY != 0,
            power_on_reset: status & STATUS_POR != 0,
            dac_power_down: PowerDown::from_bits(status >> 1),
            dac_code: decode_write([status, frame[1], frame[2]]),
            eeprom_power_down: PowerDown::from_bits(frame[3] >> 5),
            eeprom_code: DacCode::masked((((frame[3] & 0x0F) as u16) << 8) | frame[4] as u16),
        }
    }

    /// Whether an EEPROM write is still in progress
    #[must_use]
    pub const fn is_eeprom_busy(&self) -> bool {
        !self.ready
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Readback {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Readback(rdy={}, por={}, dac={} {}, eeprom={} {})",
            self.ready,
            self.power_on_reset,
            self.dac_code,
            self.dac_power_down,
            self.eeprom_code,
            self.eeprom_power_down
        );
    }
}
