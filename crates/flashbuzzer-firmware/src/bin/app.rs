//! Flashbuzzer Firmware
//!
//! - Restores the device parameters from flash (held trigger at boot resets them)
//! - Runs the dot animation on the LED strip, one dot per trigger press
//! - Starts a Wi-Fi Access Point with DHCP and catch-all DNS
//! - Serves the captive configuration portal on the AP address

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_storage::FlashStorage;
use flashbuzzer_firmware::{
    config,
    controllers::PortalHttpController,
    infrastructure::{
        adapters::TriggerButton,
        drivers::{EspLedDriver, start_wifi_ap},
        services::init_parameter_registry,
        tasks::{animation_task, http_server_task},
    },
    led_gpio,
    mk_static,
    trigger_gpio,
};
use flashbuzzer_portal::Portal;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Allocate heap memory (64 + 32 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );
    esp_alloc::heap_allocator!(size: 32 * 1024);

    // Start RTOS
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    log::info!("boot: flashbuzzer {}", config::FIRMWARE.version);

    let mut button = TriggerButton::new(trigger_gpio!(peripherals));
    // Let the pull-up settle before sampling
    Timer::after(Duration::from_millis(10)).await;
    let factory_reset = button.latch_level();
    if factory_reset {
        log::warn!("boot: trigger held, resetting parameters to defaults");
    }

    let registry = init_parameter_registry(FlashStorage::new(peripherals.FLASH), factory_reset);

    let driver = EspLedDriver::new(peripherals.RMT, led_gpio!(peripherals));
    spawner.spawn(animation_task(registry, driver, button)).ok();

    let stack = start_wifi_ap(spawner, peripherals.WIFI, &config::ACCESS_POINT).await;

    let portal = Portal::new(config::ACCESS_POINT.address);
    let controller = mk_static!(
        PortalHttpController,
        PortalHttpController::new(portal, registry)
    );
    spawner.spawn(http_server_task(stack, controller)).ok();

    log::info!(
        "boot: ready, join '{}' and open http://{}",
        config::ACCESS_POINT.ssid,
        config::ACCESS_POINT.address
    );

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
