//! IPv4 address <-> integer conversions
//!
//! Integers use network (big-endian) octet order, so `1.2.3.4` maps to
//! `0x01020304`. IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) count as IPv4.

use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Ipv4Error {
    #[error("Invalid IP address: {0}")]
    Invalid(String),

    #[error("Not an IPv4 address: {0}")]
    NotIpv4(String),
}

/// IPv4 view of `ip`, if it has one
fn as_ipv4(ip: IpAddr) -> Option<Ipv4Addr> {
    match ip {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}

/// Address whose big-endian integer form is `n`
pub fn ipv4_from_u32(n: u32) -> Ipv4Addr {
    Ipv4Addr::from(n)
}

/// Big-endian integer form of `ip`.
///
/// Returns 0 when `ip` is not representable as IPv4. 0 is also the value
/// of `0.0.0.0`; use [`parse_ipv4`] when the two must be told apart.
pub fn ipv4_to_u32(ip: IpAddr) -> u32 {
    match as_ipv4(ip) {
        Some(v4) => u32::from(v4),
        None => {
            log::debug!("{ip} is not an IPv4 address, using 0");
            0
        }
    }
}

/// True when both addresses are IPv4 and equal.
///
/// Two identical IPv6 addresses still compare false.
pub fn ipv4_equal(a: IpAddr, b: IpAddr) -> bool {
    match (as_ipv4(a), as_ipv4(b)) {
        (Some(a), Some(b)) => a == b,
        _ => {
            log::debug!("IPv4 comparison of {a} and {b} involves a non-IPv4 address");
            false
        }
    }
}

/// Parse a dotted-quad (or IPv4-mapped IPv6) string into its integer form
pub fn parse_ipv4(s: &str) -> Result<u32, Ipv4Error> {
    let ip: IpAddr = s
        .trim()
        .parse()
        .map_err(|_| Ipv4Error::Invalid(s.to_string()))?;
    let v4 = as_ipv4(ip).ok_or_else(|| Ipv4Error::NotIpv4(s.to_string()))?;

    let n = u32::from(v4);
    log::trace!("parsed {s} as {n:#010x}");
    Ok(n)
}

/// Dotted-quad form of `n`
pub fn format_ipv4(n: u32) -> String {
    ipv4_from_u32(n).to_string()
}
