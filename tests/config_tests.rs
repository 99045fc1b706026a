//! Configuration and Constants Tests
//!
//! Tests to verify configuration values are valid and consistent.
//! Run with: cargo test --no-default-features --features std --test config_tests

use mcp4725_driver::config::*;
use mcp4725_driver::hal::i2c::I2cAddress;

// =============================================================================
// DAC Range Tests
// =============================================================================

#[test]
fn resolution_is_twelve_bits() {
    assert_eq!(DAC_RESOLUTION_BITS, 12);
    assert_eq!(DAC_MAX_CODE, 4095);
}

#[test]
fn eight_bit_range() {
    assert_eq!(DAC_8BIT_MAX, 255);
    // Upper byte of a 12-bit code
    assert_eq!(u16::from(DAC_8BIT_MAX), DAC_MAX_CODE >> 4);
}

#[test]
fn default_vcc_reasonable() {
    // MCP4725 runs from 2.7V to 5.5V
    assert!(DEFAULT_VCC >= 2.7);
    assert!(DEFAULT_VCC <= 5.5);
}

// =============================================================================
// I2C Configuration Tests
// =============================================================================

#[test]
fn i2c_frequency_valid() {
    // Standard, fast and high-speed modes
    assert!(I2C_FREQUENCY_HZ == 100_000 || I2C_FREQUENCY_HZ == 400_000 || I2C_FREQUENCY_HZ == 3_400_000);
}

#[test]
fn mcp4725_address_valid() {
    // 0b1100_A2_A1_A0
    assert_eq!(MCP4725_I2C_ADDR & 0xF8, 0x60);
    assert_eq!(I2cAddress::MCP4725.addr(), MCP4725_I2C_ADDR);
    assert_eq!(I2cAddress::default(), I2cAddress::MCP4725);
}

#[test]
fn a0_strap_selects_address() {
    assert_eq!(I2cAddress::mcp4725_a0(false).addr(), 0x60);
    assert_eq!(I2cAddress::mcp4725_a0(true).addr(), 0x61);
}

#[test]
fn address_is_seven_bit() {
    assert_eq!(I2cAddress::new(0xE0).addr(), 0x60);
}

#[test]
fn readback_frame_length() {
    assert_eq!(READBACK_LEN, 5);
}

// =============================================================================
// EEPROM Timing Tests
// =============================================================================

#[test]
fn eeprom_write_time_within_datasheet() {
    assert!(EEPROM_WRITE_TIME_MS <= EEPROM_WRITE_TIME_MAX_MS);
    assert_eq!(EEPROM_WRITE_TIME_MAX_MS, 50);
}

#[test]
fn eeprom_poll_budget_covers_worst_case() {
    assert!(eeprom_poll_budget_us() >= EEPROM_WRITE_TIME_MAX_MS * 1_000);
}

#[test]
fn eeprom_poll_interval_reasonable() {
    assert!(EEPROM_POLL_INTERVAL_US >= 100);
    assert!(EEPROM_POLL_INTERVAL_US <= 10_000);
    assert!(EEPROM_POLL_LIMIT > 0);
}

// =============================================================================
// Pin Assignment Tests
// =============================================================================

#[test]
fn i2c_pins_distinct() {
    assert_ne!(pins::I2C1_SCL, pins::I2C1_SDA);
    assert_ne!(dma::I2C1_TX, dma::I2C1_RX);
}
