//! Captive portal redirect rule.
//!
//! Operating systems check well-known hosts after joining a network. Every
//! request addressed to a name instead of the access point's IP literal is
//! sent to the portal.

use alloc::format;
use alloc::string::String;
use core::net::Ipv4Addr;

/// Check if a `Host` header value is an IP literal.
///
/// An optional `:port` suffix is ignored. A missing or empty host counts as
/// a literal, so plain HTTP/1.0 clients are served directly.
pub fn is_ip_literal(host: Option<&str>) -> bool {
    let Some(host) = host else {
        return true;
    };
    let host = host.rsplit_once(':').map_or(host, |(name, _port)| name);
    host.bytes().all(|byte| byte == b'.' || byte.is_ascii_digit())
}

/// Redirect target for requests to foreign hosts.
pub fn portal_location(address: Ipv4Addr) -> String {
    format!("http://{}", address)
}
