mod led_ws2812;
mod random;
pub mod wifi_ap;

pub use led_ws2812::EspLedDriver;
pub use wifi_ap::start_wifi_ap;
