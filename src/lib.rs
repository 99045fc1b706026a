//! MCP4725 DAC Driver Library
//!
//! Driver for the Microchip MCP4725, a single-channel 12-bit DAC with an
//! I2C interface and onboard EEPROM. The output can be set as a raw code,
//! a voltage relative to the supply, or a normalized ratio; the value can
//! optionally be stored in EEPROM as the power-on default.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       DRIVER LAYER                          │
//! │        Mcp4725 (blocking)   │   Mcp4725Async                │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  PROTOCOL / VALUE TYPES                     │
//! │   DacCode clamping  │  write / fast / readback frames       │
//! ├─────────────────────────────────────────────────────────────┤
//! │                          HAL                                │
//! │   I2cWrite / I2cRead  (any embedded-hal 1.0 I2C bus)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Saturating input**: out-of-range values clamp, they never fail
//! - **Functional core, imperative shell**: frames are built by pure
//!   functions, drivers only move bytes
//! - **Transparent errors**: bus errors reach the caller unchanged
//! - **No hidden waits**: EEPROM completion is polled only on request

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Hardware Abstraction Layer
///
/// Narrow I2C traits the drivers depend on.
pub mod hal;

/// Peripheral Drivers
///
/// Blocking and async MCP4725 drivers.
pub mod drivers;

/// Wire Protocol
///
/// Command, fast mode and readback frame encoding.
pub mod protocol;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

pub use drivers::mcp4725::{EepromWaitError, Mcp4725};
pub use drivers::mcp4725_async::Mcp4725Async;
pub use hal::i2c::{I2cAddress, I2cRead, I2cWrite};
pub use types::{DacCode, PowerDown};

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::drivers::mcp4725::{EepromWaitError, Mcp4725};
    pub use crate::drivers::mcp4725_async::Mcp4725Async;
    pub use crate::hal::i2c::I2cAddress;
    pub use crate::protocol::Readback;
    pub use crate::types::*;

    // Embassy
    pub use embassy_time::{Delay, Duration, Instant, Timer};

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
