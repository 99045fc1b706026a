//! Peripheral Drivers
//!
//! High-level drivers for external ICs. Both flavours share the frame
//! encoders in [`crate::protocol`].

pub mod mcp4725;
pub mod mcp4725_async;
