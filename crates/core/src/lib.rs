//! # Block Check Character (BCC) Checksum
//!
//! A one-byte checksum computed as the XOR of every byte in a message,
//! exposed through a small generic hashing interface so it can stand in
//! wherever another checksum with the same capability set is expected.
//!
//! ## Features
//!
//! - **Incremental**: feed bytes in any number of writes, query at any time
//! - **Allocation-free**: the running state is a single byte
//! - **Interchangeable**: [`Hash`], [`Hash8`] and [`Hash16`] describe the
//!   capability set shared by 8- and 16-bit checksum families
//! - **Ecosystem friendly**: `std::io::Write` and RustCrypto `digest` impls
//!
//! ## Not a cryptographic hash
//!
//! BCC has no collision resistance. Appending zero bytes never changes the
//! digest, byte order does not matter, and any sequence written twice
//! cancels to zero:
//!
//! ```text
//! checksum(b"\x01\x02")     == 0x03
//! checksum(b"\x01\x02\x03") == 0x00   // 0x03 undoes 0x01 ^ 0x02
//! checksum(b"abc\0\0\0")    == checksum(b"abc")
//! ```
//!
//! ## Example
//!
//! ```rust
//! use checkbyte_core::{Bcc, checksum};
//!
//! // Single-shot
//! assert_eq!(checksum(b"foobar"), 0x17);
//!
//! // Incremental
//! let mut bcc = Bcc::new();
//! bcc.write(b"foo");
//! bcc.write(b"bar");
//! assert_eq!(bcc.sum8(), 0x17);
//!
//! // Append the digest to a frame
//! let frame = bcc.sum(b"foobar".to_vec());
//! assert_eq!(frame.last(), Some(&0x17));
//! ```
//!
//! ## no_std Support
//!
//! Disable default features to build against `core` + `alloc`:
//!
//! ```toml
//! [dependencies]
//! checkbyte-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bcc;
mod hash;
mod params;

pub use bcc::{Bcc, checksum};
pub use hash::{Hash, Hash8, Hash16};
pub use params::*;
