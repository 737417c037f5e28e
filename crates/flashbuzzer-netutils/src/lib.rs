#![no_std]

//! Network helpers for the captive access point
//!
//! - `dhcp` - Stateless DHCP server messages
//! - `dns` - DNS responder resolving every name to the access point

pub mod dhcp;
pub mod dns;
