//! Hardware Abstraction Layer
//!
//! Narrow bus traits the drivers are written against. Any
//! `embedded-hal` 1.0 I2C implementation plugs in directly.

pub mod i2c;
