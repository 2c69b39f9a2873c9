//! # IPv4 Helpers
//!
//! Stateless conversions between IPv4 addresses and their 32-bit
//! big-endian integer form, plus an IPv4-only equality check.
//!
//! ## Example
//!
//! ```rust
//! use checkbyte_net::{ipv4_from_u32, ipv4_to_u32, parse_ipv4};
//!
//! assert_eq!(parse_ipv4("1.2.3.4").unwrap(), 16909060);
//! assert_eq!(ipv4_from_u32(16909060).to_string(), "1.2.3.4");
//! assert_eq!(ipv4_to_u32("127.0.0.1".parse().unwrap()), 2130706433);
//! ```

mod ipv4;

pub use ipv4::{Ipv4Error, format_ipv4, ipv4_equal, ipv4_from_u32, ipv4_to_u32, parse_ipv4};

#[cfg(test)]
mod tests;
