//! MCP4725 Quickstart Firmware
//!
//! Walks through every driver feature on an STM32G474 board with an
//! MCP4725 on I2C1: raw, voltage and normalized writes, readback, the
//! EEPROM power-on default and the clone compatibility writes.
//!
//! Wiring: VDD to 3.3V, GND to GND, SCL to PB8, SDA to PB9.

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::time::Hertz;
use embassy_stm32::{bind_interrupts, peripherals};
use {defmt_rtt as _, panic_probe as _};

use mcp4725_driver::prelude::*;

// Bind interrupt handlers
bind_interrupts!(struct Irqs {
    I2C1_EV => embassy_stm32::i2c::EventInterruptHandler<peripherals::I2C1>;
    I2C1_ER => embassy_stm32::i2c::ErrorInterruptHandler<peripherals::I2C1>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("MCP4725 Quickstart v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    let led = Output::new(p.PA5, Level::Low, Speed::Low);

    let i2c = I2c::new(
        p.I2C1,
        p.PB8, // SCL
        p.PB9, // SDA
        Irqs,
        p.DMA1_CH1,
        p.DMA1_CH2,
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );

    info!("I2C1 initialized at {}Hz", I2C_FREQUENCY_HZ);

    unwrap!(spawner.spawn(heartbeat_task(led)));

    let mut dac = Mcp4725Async::with_config(i2c, I2cAddress::MCP4725, DEFAULT_VCC);

    // Setting the output: 50% by raw code, 1.2V (1489 at 3.3V), 75% normalized
    for step in 0..3u8 {
        let result = match step {
            0 => dac.set_value(2048).await,
            1 => dac.set_voltage(1.2).await,
            _ => dac.set_value_norm(0.75).await,
        };
        if result.is_err() {
            warn!("DAC write {} failed", step);
        }
        report(&mut dac).await;
        Timer::after(Duration::from_secs(1)).await;
    }

    // EEPROM: boot at 25% of VCC from now on
    match dac.get_eeprom().await {
        Ok(code) => info!("EEPROM holds {}", code),
        Err(_) => warn!("EEPROM read failed"),
    }
    if dac.set_value_eeprom(1024).await.is_ok() {
        match dac.wait_eeprom_ready(&mut Delay).await {
            Ok(()) => info!("EEPROM write complete"),
            Err(e) => warn!("{}", e),
        }
    }

    // Compatibility writes for clones that reject the 3-byte frame
    if dac.set_value_fast(3071).await.is_err() {
        warn!("Fast mode write failed");
    }
    Timer::after(Duration::from_secs(1)).await;
    if dac.set_value_8bit(128).await.is_err() {
        warn!("8-bit write failed");
    }
    Timer::after(Duration::from_secs(1)).await;
    if dac.set_value_8bit_legacy(191).await.is_err() {
        warn!("Legacy 8-bit write failed");
    }

    info!("Quickstart done, entering main loop");

    loop {
        Timer::after(Duration::from_secs(10)).await;
        report(&mut dac).await;
    }
}

/// Log the DAC state as the chip reports it
async fn report(dac: &mut Mcp4725Async<I2c<'static, embassy_stm32::mode::Async>>) {
    match dac.read_status().await {
        Ok(status) => {
            let vcc = dac.vcc();
            let mv = (status.dac_code.voltage(vcc) * 1000.0) as u32;
            info!("{} ({}mV)", status, mv);
        }
        Err(_) => warn!("DAC readback failed"),
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}
