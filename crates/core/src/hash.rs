//! Generic checksum capability set
//!
//! Every checksum family implements [`Hash`] plus the width-specific
//! accessor trait, so callers can be written against the capability they
//! need instead of a concrete algorithm.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Running checksum that can be written to repeatedly and queried at any time
pub trait Hash {
    /// Fold `data` into the running checksum.
    ///
    /// Never fails. Returns the number of bytes consumed, which is always
    /// `data.len()`.
    fn write(&mut self, data: &[u8]) -> usize;

    /// Append the current digest to `prefix` and return it.
    ///
    /// Multi-byte digests are appended big-endian. Does not change the
    /// running state.
    fn sum(&self, prefix: Vec<u8>) -> Vec<u8>;

    /// Return to the initial state
    fn reset(&mut self);

    /// Number of bytes [`Hash::sum`] appends
    fn size(&self) -> usize;

    /// Underlying block size.
    ///
    /// `write` accepts any amount of data, but may run faster when writes
    /// are a multiple of this.
    fn block_size(&self) -> usize;
}

/// Checksum with an 8-bit digest
pub trait Hash8: Hash {
    fn sum8(&self) -> u8;
}

/// Checksum with a 16-bit digest
pub trait Hash16: Hash {
    fn sum16(&self) -> u16;
}
