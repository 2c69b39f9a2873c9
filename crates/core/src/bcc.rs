//! Block Check Character accumulator
//!
//! The digest of `b0, b1, ..., bn-1` is `b0 ^ b1 ^ ... ^ bn-1`, and the
//! digest of the empty sequence is 0. Bytes are folded in as they arrive;
//! nothing is buffered.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::hash::{Hash, Hash8};
use crate::params::{BLOCK_SIZE, DIGEST_SIZE, INITIAL_STATE};

/// BCC checksum accumulator
///
/// Holds the XOR of every byte written since creation or the last
/// [`Bcc::reset`]. Copying an accumulator snapshots the running checksum;
/// the copy evolves independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Bcc {
    state: u8,
}

impl Bcc {
    /// Create an accumulator over the empty sequence
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
        }
    }

    /// Resume from a digest captured earlier with [`Bcc::sum8`].
    ///
    /// Writing `b` afterwards yields the checksum of `a ++ b`, where `a` is
    /// the input that produced `state`.
    pub const fn from_state(state: u8) -> Self {
        Self { state }
    }

    /// Fold `data` into the running checksum, returning `data.len()`
    pub fn write(&mut self, data: &[u8]) -> usize {
        self.state = data.iter().fold(self.state, |acc, &b| acc ^ b);
        data.len()
    }

    /// Current 8-bit digest
    pub const fn sum8(&self) -> u8 {
        self.state
    }

    /// Append the digest byte to `prefix`
    pub fn sum(&self, mut prefix: Vec<u8>) -> Vec<u8> {
        prefix.push(self.state);
        prefix
    }

    pub fn reset(&mut self) {
        self.state = INITIAL_STATE;
    }
}

impl Default for Bcc {
    fn default() -> Self {
        Self::new()
    }
}

impl Hash for Bcc {
    fn write(&mut self, data: &[u8]) -> usize {
        Bcc::write(self, data)
    }

    fn sum(&self, prefix: Vec<u8>) -> Vec<u8> {
        Bcc::sum(self, prefix)
    }

    fn reset(&mut self) {
        Bcc::reset(self)
    }

    fn size(&self) -> usize {
        DIGEST_SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

impl Hash8 for Bcc {
    fn sum8(&self) -> u8 {
        self.state
    }
}

impl Extend<u8> for Bcc {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.state = iter.into_iter().fold(self.state, |acc, b| acc ^ b);
    }
}

impl<'a> Extend<&'a u8> for Bcc {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

/// Writes never fail; `flush` has nothing to do.
#[cfg(feature = "std")]
impl std::io::Write for Bcc {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(Bcc::write(self, buf))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "digest")]
mod rustcrypto {
    use super::Bcc;
    use digest::consts::U1;
    use digest::{
        FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
    };

    impl HashMarker for Bcc {}

    impl OutputSizeUser for Bcc {
        type OutputSize = U1;
    }

    impl Update for Bcc {
        fn update(&mut self, data: &[u8]) {
            Bcc::write(self, data);
        }
    }

    impl FixedOutput for Bcc {
        fn finalize_into(self, out: &mut Output<Self>) {
            out[0] = self.state;
        }
    }

    impl FixedOutputReset for Bcc {
        fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
            out[0] = self.state;
            Bcc::reset(self);
        }
    }

    impl Reset for Bcc {
        fn reset(&mut self) {
            Bcc::reset(self);
        }
    }
}

/// Compute the BCC of `data` in one call
pub fn checksum(data: &[u8]) -> u8 {
    let mut bcc = Bcc::new();
    bcc.write(data);
    bcc.sum8()
}
