//! Shared types used across the driver
//!
//! This module defines the value types that enforce the DAC's 12-bit
//! domain, so every encoder downstream can assume its input is in range.

use core::fmt;
#[cfg(feature = "embedded")]
use micromath::F32Ext;

use crate::config::{DAC_8BIT_MAX, DAC_MAX_CODE};

/// 12-bit DAC output code
///
/// Always in `0..=4095`. Every constructor saturates instead of wrapping,
/// so out-of-range input lands on the nearest end of the range.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DacCode(u16);

impl DacCode {
    /// Lowest output (0 V)
    pub const MIN: Self = Self(0);

    /// Mid-scale output
    pub const MID: Self = Self(2048);

    /// Full-scale output (VCC)
    pub const MAX: Self = Self(DAC_MAX_CODE);

    /// Create a code, returns None if out of range
    #[must_use]
    pub const fn new(code: u16) -> Option<Self> {
        if code <= DAC_MAX_CODE {
            Some(Self(code))
        } else {
            None
        }
    }

    /// Keep the lower 12 bits of a raw register value
    #[must_use]
    pub const fn masked(raw: u16) -> Self {
        Self(raw & DAC_MAX_CODE)
    }

    /// Create a code from any integer, clamping to `0..=4095`
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    pub const fn saturating(code: i32) -> Self {
        if code <= 0 {
            Self::MIN
        } else if code >= DAC_MAX_CODE as i32 {
            Self::MAX
        } else {
            Self(code as u16)
        }
    }

    /// Create a code from a normalized ratio (0.0 to 1.0)
    ///
    /// The ratio is clamped, then scaled and rounded to nearest with
    /// halves away from zero. NaN maps to zero.
    #[must_use]
    pub fn from_ratio(ratio: f32) -> Self {
        Self::from_unit(clamp_f32(ratio, 1.0))
    }

    /// Create a code from an output voltage relative to `vcc`
    ///
    /// The voltage is clamped to `0..=vcc` before scaling. A `vcc` that is
    /// not a positive number yields zero.
    #[must_use]
    pub fn from_voltage(volts: f32, vcc: f32) -> Self {
        if vcc.is_nan() || vcc <= 0.0 {
            return Self::MIN;
        }
        Self::from_unit(clamp_f32(volts, vcc) / vcc)
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn from_unit(unit: f32) -> Self {
        let scaled = (unit * f32::from(DAC_MAX_CODE)).round();
        // Float-to-int casts saturate, NaN becomes 0
        Self::saturating(scaled as i32)
    }

    /// Get the raw 12-bit value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Upper 8 bits (D11..D4)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn high_byte(self) -> u8 {
        (self.0 >> 4) as u8
    }

    /// Upper 4 bits (D11..D8)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn high_nibble(self) -> u8 {
        ((self.0 >> 8) & 0x0F) as u8
    }

    /// Lower 8 bits (D7..D0)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn low_byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Lower 4 bits (D3..D0)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn low_nibble(self) -> u8 {
        (self.0 & 0x0F) as u8
    }

    /// Get the code as a fraction of full scale
    #[must_use]
    pub fn ratio(self) -> f32 {
        f32::from(self.0) / f32::from(DAC_MAX_CODE)
    }

    /// Get the nominal output voltage for a given supply
    #[must_use]
    pub fn voltage(self, vcc: f32) -> f32 {
        self.ratio() * vcc
    }
}

impl fmt::Debug for DacCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DacCode({})", self.0)
    }
}

impl From<DacCode> for u16 {
    fn from(code: DacCode) -> Self {
        code.raw()
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DacCode {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "DAC({})", self.0);
    }
}

/// Clamp an integer into the 8-bit compatibility range
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn saturating_u8(value: i32) -> u8 {
    if value <= 0 {
        0
    } else if value >= DAC_8BIT_MAX as i32 {
        DAC_8BIT_MAX
    } else {
        value as u8
    }
}

/// Clamp to `0..=max`, NaN goes to zero
fn clamp_f32(value: f32, max: f32) -> f32 {
    if value > max {
        max
    } else if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Output power-down selection
///
/// When powered down the output amplifier is off and VOUT is pulled to
/// ground through the selected resistor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerDown {
    /// Normal operation
    #[default]
    Normal,
    /// 1 kΩ to ground
    Resistor1k,
    /// 100 kΩ to ground
    Resistor100k,
    /// 500 kΩ to ground
    Resistor500k,
}

impl PowerDown {
    /// Get the PD1:PD0 bit pair
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::Normal => 0b00,
            Self::Resistor1k => 0b01,
            Self::Resistor100k => 0b10,
            Self::Resistor500k => 0b11,
        }
    }

    /// Decode a PD1:PD0 bit pair (upper bits ignored)
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Normal,
            0b01 => Self::Resistor1k,
            0b10 => Self::Resistor100k,
            _ => Self::Resistor500k,
        }
    }

    /// Whether the output is disconnected
    #[must_use]
    pub const fn is_powered_down(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PowerDown {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Normal => defmt::write!(f, "ON"),
            Self::Resistor1k => defmt::write!(f, "PD-1k"),
            Self::Resistor100k => defmt::write!(f, "PD-100k"),
            Self::Resistor500k => defmt::write!(f, "PD-500k"),
        }
    }
}
