#![allow(clippy::unreadable_literal)]

use core::net::Ipv4Addr;

use embassy_time::Duration;

pub struct AccessPointConfig {
    pub ssid: &'static str,
    pub password: &'static str,
    pub address: Ipv4Addr,
    pub prefix_len: u8,
}

pub struct StorageConfig {
    /// Flash offset of the parameter block, aligned to the erase size
    pub offset: u32,
    pub namespace: &'static str,
}

pub struct LightConfig {
    pub frame_period: Duration,
}

pub struct TriggerConfig {
    pub debounce: Duration,
}

pub struct FirmwareConfig {
    pub version: &'static str,
}

/// Number of pixels on the strip
pub const STRIP_LENGTH: usize = 300;

pub const ACCESS_POINT: AccessPointConfig = AccessPointConfig {
    ssid: "esp32_bob",
    password: "12345678",
    address: Ipv4Addr::new(8, 8, 8, 8),
    prefix_len: 24,
};

pub const STORAGE: StorageConfig = StorageConfig {
    offset: 0x3F0000,
    namespace: "webconfig",
};

pub const LIGHT: LightConfig = LightConfig {
    frame_period: Duration::from_millis(16),
};

pub const TRIGGER: TriggerConfig = TriggerConfig {
    debounce: Duration::from_millis(30),
};

/// Page title used until the `Title` parameter is changed
pub const DEFAULT_TITLE: &str = "ESP32 Device Configuration";

pub const FIRMWARE: FirmwareConfig = FirmwareConfig {
    version: env!("BUILD_VERSION"),
};

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO16
    };
}

#[macro_export]
macro_rules! trigger_gpio {
    ($p:expr) => {
        $p.GPIO13
    };
}
