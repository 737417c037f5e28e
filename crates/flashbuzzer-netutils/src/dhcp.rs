//! DHCP Protocol Implementation
//!
//! Provides DHCP message parsing and response building for a simple stateless
//! server. Clients get an address in the access point's /24, derived from
//! their MAC, so no lease table is kept.

use core::net::Ipv4Addr;

/// DHCP server port
pub const SERVER_PORT: u16 = 67;
/// DHCP client port
pub const CLIENT_PORT: u16 = 68;

/// DHCP message types
pub const DHCP_DISCOVER: u8 = 1;
pub const DHCP_OFFER: u8 = 2;
pub const DHCP_REQUEST: u8 = 3;
pub const DHCP_ACK: u8 = 5;

/// DHCP options
const DHCP_OPTION_MESSAGE_TYPE: u8 = 53;
const DHCP_OPTION_SERVER_ID: u8 = 54;
const DHCP_OPTION_LEASE_TIME: u8 = 51;
const DHCP_OPTION_SUBNET_MASK: u8 = 1;
const DHCP_OPTION_ROUTER: u8 = 3;
const DHCP_OPTION_DNS: u8 = 6;
const DHCP_OPTION_END: u8 = 255;

/// DHCP magic cookie
const DHCP_MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];

/// Lease configuration
const LEASE_TIME_SECS: u32 = 3600; // 1 hour
const SUBNET_MASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

/// Host numbers handed out: `POOL_START..POOL_START + POOL_SIZE`
const POOL_START: u8 = 2;
const POOL_SIZE: u8 = 49;

/// Minimum DHCP packet size (BOOTP header + magic cookie)
const MIN_DHCP_PACKET_SIZE: usize = 240;

/// Size of every response built by [`build_dhcp_response`]
pub const RESPONSE_SIZE: usize = MIN_DHCP_PACKET_SIZE + 3 + 5 * 6 + 1;

/// Parsed DHCP request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhcpRequest {
    /// Transaction ID
    pub xid: [u8; 4],
    /// Client MAC address
    pub client_mac: [u8; 6],
    /// Message type (DISCOVER, REQUEST, etc.)
    pub message_type: u8,
}

impl DhcpRequest {
    /// Message type to answer with, `None` if the request needs no answer
    pub fn response_type(&self) -> Option<u8> {
        match self.message_type {
            DHCP_DISCOVER => Some(DHCP_OFFER),
            DHCP_REQUEST => Some(DHCP_ACK),
            _ => None,
        }
    }
}

/// Parse a DHCP request from a raw packet
///
/// Returns `None` if the packet is invalid or not a BOOTREQUEST
pub fn parse_dhcp_request(packet: &[u8]) -> Option<DhcpRequest> {
    if packet.len() < MIN_DHCP_PACKET_SIZE {
        return None;
    }

    // op must be BOOTREQUEST
    if packet[0] != 1 {
        return None;
    }

    let mut xid = [0u8; 4];
    xid.copy_from_slice(&packet[4..8]);

    let mut client_mac = [0u8; 6];
    client_mac.copy_from_slice(&packet[28..34]);

    if packet[236..240] != DHCP_MAGIC_COOKIE {
        return None;
    }

    let options = &packet[240..];
    let message_type = find_dhcp_option(options, DHCP_OPTION_MESSAGE_TYPE)
        .and_then(|data| data.first().copied())?;

    Some(DhcpRequest {
        xid,
        client_mac,
        message_type,
    })
}

/// Allocate an IP address for a client based on their MAC address
///
/// Uses a simple stateless algorithm to derive a consistent IP from the MAC.
/// The address lies in the access point's /24, host numbers `2..=50`, and is
/// never the access point's own address.
pub fn allocate_ip(ap_ip_address: Ipv4Addr, mac: &[u8; 6]) -> Ipv4Addr {
    let [a, b, c, ap_host] = ap_ip_address.octets();
    let mut host = mac[5] % POOL_SIZE + POOL_START;
    if host == ap_host {
        host = POOL_START + (host - POOL_START + 1) % POOL_SIZE;
    }
    Ipv4Addr::new(a, b, c, host)
}

/// Build a DHCP response (OFFER or ACK)
///
/// Returns the length of the response packet, or `None` if `buffer` is
/// shorter than [`RESPONSE_SIZE`].
pub fn build_dhcp_response(
    ap_ip_address: Ipv4Addr,
    buffer: &mut [u8],
    request: &DhcpRequest,
    offered_ip: Ipv4Addr,
    response_type: u8,
) -> Option<usize> {
    let buffer = buffer.get_mut(..RESPONSE_SIZE)?;
    buffer.fill(0);

    // BOOTP header
    buffer[0] = 2; // op: BOOTREPLY
    buffer[1] = 1; // htype: Ethernet
    buffer[2] = 6; // hlen: MAC length
    buffer[4..8].copy_from_slice(&request.xid);
    buffer[10..12].copy_from_slice(&[0x80, 0x00]); // broadcast flag

    // yiaddr, siaddr
    buffer[16..20].copy_from_slice(&offered_ip.octets());
    buffer[20..24].copy_from_slice(&ap_ip_address.octets());

    buffer[28..34].copy_from_slice(&request.client_mac);
    buffer[236..240].copy_from_slice(&DHCP_MAGIC_COOKIE);

    let mut opt_idx = MIN_DHCP_PACKET_SIZE;

    buffer[opt_idx] = DHCP_OPTION_MESSAGE_TYPE;
    buffer[opt_idx + 1] = 1;
    buffer[opt_idx + 2] = response_type;
    opt_idx += 3;

    // The AP is server, router and DNS for its clients
    for (code, value) in [
        (DHCP_OPTION_SERVER_ID, ap_ip_address.octets()),
        (DHCP_OPTION_LEASE_TIME, LEASE_TIME_SECS.to_be_bytes()),
        (DHCP_OPTION_SUBNET_MASK, SUBNET_MASK.octets()),
        (DHCP_OPTION_ROUTER, ap_ip_address.octets()),
        (DHCP_OPTION_DNS, ap_ip_address.octets()),
    ] {
        buffer[opt_idx] = code;
        buffer[opt_idx + 1] = 4;
        buffer[opt_idx + 2..opt_idx + 6].copy_from_slice(&value);
        opt_idx += 6;
    }

    buffer[opt_idx] = DHCP_OPTION_END;
    opt_idx += 1;

    Some(opt_idx)
}

/// Find a DHCP option in the options section
///
/// The options slice should start AFTER the magic cookie (at offset 240 in the
/// packet)
pub fn find_dhcp_option(options: &[u8], option_code: u8) -> Option<&[u8]> {
    let mut i = 0;

    while i < options.len() {
        let code = options[i];
        if code == DHCP_OPTION_END {
            break;
        }
        if code == 0 {
            // Padding
            i += 1;
            continue;
        }
        if i + 1 >= options.len() {
            break;
        }
        let len = options[i + 1] as usize;
        if i + 2 + len > options.len() {
            break;
        }
        if code == option_code {
            return Some(&options[i + 2..i + 2 + len]);
        }
        i += 2 + len;
    }
    None
}
