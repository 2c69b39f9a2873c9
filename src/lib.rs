//! checkbyte
//!
//! Lightweight integrity and addressing helpers.
//!
//! # Overview
//!
//! - [`checksum`]: the Block Check Character (BCC), a one-byte XOR checksum
//!   behind the [`Hash`]/[`Hash8`] capability set
//! - [`net`]: IPv4 address <-> `u32` conversions
//!
//! The two share no code; they are bundled for convenience.
//!
//! # Example
//!
//! ```rust
//! use checkbyte::checksum::Bcc;
//! use checkbyte::net::parse_ipv4;
//!
//! let mut bcc = Bcc::new();
//! bcc.write(b"foobar");
//! assert_eq!(bcc.sum8(), 0x17);
//!
//! assert_eq!(parse_ipv4("127.0.0.1").unwrap(), 2130706433);
//! ```

// Re-export the member crates
pub use checkbyte_core as checksum;
pub use checkbyte_net as net;

// Convenience re-exports
pub use checksum::{Bcc, Hash, Hash8, Hash16, checksum};
