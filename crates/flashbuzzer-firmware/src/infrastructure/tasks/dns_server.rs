use core::net::Ipv4Addr;

use embassy_net::{
    Stack,
    udp::{PacketMetadata, UdpSocket},
};
use flashbuzzer_netutils::dns::{SERVER_PORT, build_dns_response};

/// Captive DNS task
///
/// Answers every address query with the access point address, so any
/// hostname a client looks up lands on the portal.
#[embassy_executor::task]
pub async fn dns_server_task(stack: Stack<'static>, ap_address: Ipv4Addr) {
    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(e) = socket.bind(SERVER_PORT) {
        log::error!("dns_server: failed to bind port {}: {:?}", SERVER_PORT, e);
        return;
    }
    log::info!("dns_server: bound to port {}", SERVER_PORT);

    let mut query = [0u8; 512];
    let mut response = [0u8; 512];

    loop {
        let (len, remote) = match socket.recv_from(&mut query).await {
            Ok(received) => received,
            Err(e) => {
                log::warn!("dns_server: recv error: {:?}", e);
                continue;
            }
        };

        let Some(response_len) = build_dns_response(&query[..len], ap_address, &mut response)
        else {
            continue;
        };

        if let Err(e) = socket.send_to(&response[..response_len], remote).await {
            log::warn!("dns_server: send error: {:?}", e);
        }
    }
}
