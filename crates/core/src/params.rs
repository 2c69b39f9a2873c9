//! BCC Algorithm Parameters

/// Digest length in bytes
pub const DIGEST_SIZE: usize = 1;

/// Preferred write granularity in bytes (bytes are folded one at a time)
pub const BLOCK_SIZE: usize = 1;

/// State of a freshly created or reset accumulator (XOR identity)
pub const INITIAL_STATE: u8 = 0;
