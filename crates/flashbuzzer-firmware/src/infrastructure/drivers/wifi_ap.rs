use core::net::Ipv4Addr;

use embassy_executor::Spawner;
use embassy_net::{Ipv4Cidr, Runner, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_radio::wifi::{
    AccessPointConfig as RadioApConfig,
    AuthMethod,
    Config,
    ModeConfig,
    WifiController,
    WifiDevice,
};
use static_cell::make_static;

use super::random::get_seed;
use crate::config::AccessPointConfig;
use crate::infrastructure::tasks::{dhcp_server_task, dns_server_task};

/// DHCP, DNS and HTTP sockets plus headroom
const MAX_SOCKETS: usize = 6;

/// Bring up the access point and its network services.
///
/// The AP owns a static address and acts as router and name server for the
/// clients it leases addresses to. Returns once the link is up and the DHCP
/// and DNS responders are running.
pub async fn start_wifi_ap(
    spawner: Spawner,
    wifi_device: WIFI<'static>,
    config: &AccessPointConfig,
) -> Stack<'static> {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().expect("radio must initialize"));
    let (controller, interfaces) =
        esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default())
            .expect("wifi must initialize");

    let static_config = StaticConfigV4 {
        address: Ipv4Cidr::new(config.address, config.prefix_len),
        gateway: Some(config.address),
        dns_servers: heapless::Vec::default(),
    };
    let net_config = embassy_net::Config::ipv4_static(static_config);

    let network_resources = make_static!(StackResources::<MAX_SOCKETS>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.ap, net_config, network_resources, get_seed());

    spawner
        .spawn(wifi_ap_task(controller, config.ssid, config.password))
        .ok();
    spawner.spawn(network_runner_task(runner)).ok();

    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
    // Give some extra time
    Timer::after(Duration::from_millis(100)).await;
    log::info!("wifi_ap: link is up at {}", config.address);

    spawn_services(spawner, stack, config.address);
    stack
}

fn spawn_services(spawner: Spawner, stack: Stack<'static>, address: Ipv4Addr) {
    spawner.spawn(dhcp_server_task(stack, address)).ok();
    spawner.spawn(dns_server_task(stack, address)).ok();
}

/// Background task for running the Wi-Fi AP
///
/// Configures the controller as a WPA2 protected access point.
#[embassy_executor::task]
pub async fn wifi_ap_task(
    mut controller: WifiController<'static>,
    ssid: &'static str,
    password: &'static str,
) {
    log::info!("wifi_ap: starting AP with SSID '{}'", ssid);

    let ap_config = RadioApConfig::default()
        .with_ssid(ssid.into())
        .with_password(password.into())
        .with_auth_method(AuthMethod::Wpa2Personal);

    let mode_config = ModeConfig::AccessPoint(ap_config);
    if let Err(e) = controller.set_config(&mode_config) {
        log::error!("wifi_ap: invalid configuration: {:?}", e);
        return;
    }
    if let Err(e) = controller.start_async().await {
        log::error!("wifi_ap: failed to start: {:?}", e);
        return;
    }
    log::info!("wifi_ap: AP started");

    // Keep the AP running
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

/// Background task for running the network stack
#[embassy_executor::task]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}
