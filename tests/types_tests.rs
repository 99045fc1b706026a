//! Value Type Tests
//!
//! Tests for DAC code clamping and the voltage/ratio conversions.
//! Run with: cargo test --no-default-features --features std --test types_tests

use mcp4725_driver::types::{saturating_u8, DacCode, PowerDown};

// =============================================================================
// Integer Clamping Tests
// =============================================================================

#[test]
fn code_in_range_is_kept() {
    assert_eq!(DacCode::saturating(0).raw(), 0);
    assert_eq!(DacCode::saturating(1234).raw(), 1234);
    assert_eq!(DacCode::saturating(4095).raw(), 4095);
}

#[test]
fn code_above_range_saturates() {
    assert_eq!(DacCode::saturating(5000), DacCode::MAX);
    assert_eq!(DacCode::saturating(4096), DacCode::MAX);
    assert_eq!(DacCode::saturating(i32::MAX), DacCode::MAX);
}

#[test]
fn code_below_range_saturates() {
    assert_eq!(DacCode::saturating(-10), DacCode::MIN);
    assert_eq!(DacCode::saturating(-1), DacCode::MIN);
    assert_eq!(DacCode::saturating(i32::MIN), DacCode::MIN);
}

#[test]
fn code_clamp_matches_reference() {
    for code in -200..=4300 {
        let expected = code.clamp(0, 4095) as u16;
        assert_eq!(DacCode::saturating(code).raw(), expected, "code {}", code);
    }
}

#[test]
fn checked_constructor_rejects_out_of_range() {
    assert_eq!(DacCode::new(4095), Some(DacCode::MAX));
    assert_eq!(DacCode::new(4096), None);
    assert_eq!(DacCode::new(u16::MAX), None);
}

#[test]
fn masked_keeps_low_twelve_bits() {
    assert_eq!(DacCode::masked(0xFABC).raw(), 0x0ABC);
}

#[test]
fn eight_bit_clamp() {
    assert_eq!(saturating_u8(-5), 0);
    assert_eq!(saturating_u8(128), 128);
    assert_eq!(saturating_u8(300), 255);
}

// =============================================================================
// Ratio Conversion Tests
// =============================================================================

#[test]
fn ratio_endpoints() {
    assert_eq!(DacCode::from_ratio(0.0).raw(), 0);
    assert_eq!(DacCode::from_ratio(1.0).raw(), 4095);
}

#[test]
fn ratio_half_rounds_up() {
    // 0.5 * 4095 = 2047.5
    assert_eq!(DacCode::from_ratio(0.5).raw(), 2048);
}

#[test]
fn ratio_rounds_to_nearest() {
    // 0.75 * 4095 = 3071.25
    assert_eq!(DacCode::from_ratio(0.75).raw(), 3071);
    // 0.25 * 4095 = 1023.75
    assert_eq!(DacCode::from_ratio(0.25).raw(), 1024);
}

#[test]
fn ratio_out_of_range_clamps() {
    assert_eq!(DacCode::from_ratio(-0.5), DacCode::MIN);
    assert_eq!(DacCode::from_ratio(1.5), DacCode::MAX);
    assert_eq!(DacCode::from_ratio(f32::INFINITY), DacCode::MAX);
    assert_eq!(DacCode::from_ratio(f32::NEG_INFINITY), DacCode::MIN);
}

#[test]
fn ratio_nan_is_zero() {
    assert_eq!(DacCode::from_ratio(f32::NAN), DacCode::MIN);
}

// =============================================================================
// Voltage Conversion Tests
// =============================================================================

#[test]
fn voltage_at_3v3() {
    // 1.2 / 3.3 * 4095 = 1489.09
    assert_eq!(DacCode::from_voltage(1.2, 3.3).raw(), 1489);
}

#[test]
fn voltage_at_5v() {
    // 1.2 / 5.0 * 4095 = 982.8
    assert_eq!(DacCode::from_voltage(1.2, 5.0).raw(), 983);
}

#[test]
fn voltage_endpoints() {
    assert_eq!(DacCode::from_voltage(0.0, 3.3), DacCode::MIN);
    assert_eq!(DacCode::from_voltage(3.3, 3.3), DacCode::MAX);
}

#[test]
fn voltage_out_of_range_clamps() {
    assert_eq!(DacCode::from_voltage(-1.0, 3.3), DacCode::MIN);
    assert_eq!(DacCode::from_voltage(12.0, 3.3), DacCode::MAX);
}

#[test]
fn voltage_matches_reference_formula() {
    let vcc = 3.3_f32;
    for step in -100..=450 {
        let volts = step as f32 * 0.01;
        let expected = (volts.clamp(0.0, vcc) / vcc * 4095.0).round() as u16;
        assert_eq!(
            DacCode::from_voltage(volts, vcc).raw(),
            expected,
            "volts {}",
            volts
        );
    }
}

#[test]
fn voltage_with_invalid_vcc_is_zero() {
    assert_eq!(DacCode::from_voltage(1.0, 0.0), DacCode::MIN);
    assert_eq!(DacCode::from_voltage(1.0, -3.3), DacCode::MIN);
    assert_eq!(DacCode::from_voltage(1.0, f32::NAN), DacCode::MIN);
}

#[test]
fn voltage_nan_is_zero() {
    assert_eq!(DacCode::from_voltage(f32::NAN, 3.3), DacCode::MIN);
}

// =============================================================================
// Accessor Tests
// =============================================================================

#[test]
fn byte_split() {
    let code = DacCode::saturating(0xABC);
    assert_eq!(code.high_byte(), 0xAB);
    assert_eq!(code.high_nibble(), 0x0A);
    assert_eq!(code.low_byte(), 0xBC);
    assert_eq!(code.low_nibble(), 0x0C);
}

#[test]
fn code_to_voltage() {
    assert!((DacCode::MAX.voltage(3.3) - 3.3).abs() < 1e-6);
    assert_eq!(DacCode::MIN.voltage(3.3), 0.0);
    assert!((DacCode::MID.voltage(5.0) - 2.5).abs() < 0.002);
}

#[test]
fn code_to_ratio() {
    assert_eq!(DacCode::MAX.ratio(), 1.0);
    assert!((DacCode::saturating(3071).ratio() - 0.75).abs() < 0.001);
}

#[test]
fn code_debug_format() {
    assert_eq!(format!("{:?}", DacCode::MID), "DacCode(2048)");
}

// =============================================================================
// Power-Down Tests
// =============================================================================

#[test]
fn power_down_bits() {
    assert_eq!(PowerDown::Normal.bits(), 0b00);
    assert_eq!(PowerDown::Resistor1k.bits(), 0b01);
    assert_eq!(PowerDown::Resistor100k.bits(), 0b10);
    assert_eq!(PowerDown::Resistor500k.bits(), 0b11);
}

#[test]
fn power_down_from_bits_ignores_upper_bits() {
    assert_eq!(PowerDown::from_bits(0b1111_1101), PowerDown::Resistor1k);
    assert_eq!(PowerDown::from_bits(0b0000_0100), PowerDown::Normal);
}

#[test]
fn power_down_state() {
    assert!(!PowerDown::Normal.is_powered_down());
    assert!(PowerDown::Resistor500k.is_powered_down());
    assert_eq!(PowerDown::default(), PowerDown::Normal);
}
