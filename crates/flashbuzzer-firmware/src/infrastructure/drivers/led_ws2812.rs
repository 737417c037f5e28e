use esp_hal::xtensa_lx::interrupt;
use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
use flashbuzzer_composer::LedDriver;
use smart_leds::{RGB8, SmartLedsWrite, brightness};
use static_cell::make_static;

use crate::config::STRIP_LENGTH;

/// ESP-specific LED driver using RMT peripheral
///
/// This driver uses the ESP32's RMT (Remote Control) peripheral
/// to generate the precise timing signals required by WS2812B LEDs.
pub struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(STRIP_LENGTH) }>,
}

impl<'a> EspLedDriver<'a> {
    /// Create a new ESP LED driver
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    pub fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80)).expect("RMT must be available");

        let rmt_buffer = make_static!(smart_led_buffer!(STRIP_LENGTH));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Self { adapter }
    }
}

impl LedDriver<STRIP_LENGTH> for EspLedDriver<'static> {
    fn write(&mut self, colors: &[RGB8; STRIP_LENGTH], level: u8) {
        // WS2812 timing breaks if the transfer is interrupted
        let result =
            interrupt::free(|| self.adapter.write(brightness(colors.iter().copied(), level)));
        if result.is_err() {
            log::warn!("led: strip write failed");
        }
    }
}
