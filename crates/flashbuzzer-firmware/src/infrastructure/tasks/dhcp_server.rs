use core::net::Ipv4Addr;

use embassy_net::{
    Stack,
    udp::{PacketMetadata, UdpSocket},
};
use flashbuzzer_netutils::dhcp::{
    CLIENT_PORT,
    SERVER_PORT,
    allocate_ip,
    build_dhcp_response,
    parse_dhcp_request,
};

/// DHCP server task
///
/// Listens for DHCP discover/request messages and responds with offers/acks.
/// Uses a stateless allocation strategy based on client MAC address.
#[embassy_executor::task]
pub async fn dhcp_server_task(stack: Stack<'static>, ap_address: Ipv4Addr) {
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
        log::error!("dhcp_server: failed to bind port {}: {:?}", SERVER_PORT, e);
        return;
    }
    log::info!("dhcp_server: bound to port {}", SERVER_PORT);

    let mut packet = [0u8; 576];

    loop {
        let len = match socket.recv_from(&mut packet).await {
            Ok((len, _remote)) => len,
            Err(e) => {
                log::warn!("dhcp_server: recv error: {:?}", e);
                continue;
            }
        };

        let Some(request) = parse_dhcp_request(&packet[..len]) else {
            continue;
        };
        let Some(response_type) = request.response_type() else {
            log::debug!(
                "dhcp_server: ignoring message type {}",
                request.message_type
            );
            continue;
        };

        let offered_ip = allocate_ip(ap_address, &request.client_mac);
        let Some(response_len) =
            build_dhcp_response(ap_address, &mut packet, &request, offered_ip, response_type)
        else {
            continue;
        };
        log::debug!("dhcp_server: offering {}", offered_ip);

        // Clients have no address yet, answer on broadcast
        let dest = (Ipv4Addr::BROADCAST, CLIENT_PORT);
        if let Err(e) = socket.send_to(&packet[..response_len], dest).await {
            log::warn!("dhcp_server: send error: {:?}", e);
        }
    }
}
