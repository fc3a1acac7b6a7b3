//! Buffering front end over the block-level state.

use crate::{Absorbing, Block, Digest, Sha512, BLOCK_SIZE};
use core::fmt;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Incremental SHA-512 hasher accepting input of any length.
///
/// Full blocks are passed straight to the underlying [`Sha512`] state;
/// at most one partial block is held back until the next call or
/// [`finalize`](Sha512Hasher::finalize).
///
/// ```
/// use sha512::Sha512Hasher;
///
/// let mut hasher = Sha512Hasher::new();
/// hasher.update(b"The quick brown ");
/// hasher.update(b"fox jumps over the lazy dog");
///
/// assert_eq!(hasher.finalize(), sha512::hash(b"The quick brown fox jumps over the lazy dog"));
/// ```
#[derive(Clone)]
pub struct Sha512Hasher {
    state: Sha512<Absorbing>,
    buffer: Block,
    pos: usize,
}

impl Sha512Hasher {
    /// Create a hasher over an empty message.
    pub fn new() -> Self {
        Self {
            state: Sha512::new(),
            buffer: [0u8; BLOCK_SIZE],
            pos: 0,
        }
    }

    /// Append `data` to the message.
    pub fn update(&mut self, mut data: &[u8]) {
        if self.pos != 0 {
            let n = core::cmp::min(BLOCK_SIZE - self.pos, data.len());
            self.buffer[self.pos..self.pos + n].copy_from_slice(&data[..n]);
            self.pos += n;
            data = &data[n..];

            if self.pos < BLOCK_SIZE {
                return;
            }
            self.state.update(&self.buffer);
            self.pos = 0;
        }

        let (blocks, rest) = data.split_at(data.len() - data.len() % BLOCK_SIZE);
        self.state.absorb(blocks);

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.pos = rest.len();
    }

    /// Number of message bytes fed in so far, modulo 2^125.
    pub fn len(&self) -> u128 {
        (self.state.bit_len() / 8).wrapping_add(self.pos as u128)
    }

    /// Whether no input has been fed in yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pad the buffered input and return the digest.
    pub fn finalize(mut self) -> Digest {
        let state = core::mem::take(&mut self.state);
        state.finalize_tail(&self.buffer[..self.pos]).finish()
    }
}

impl Default for Sha512Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Sha512Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha512Hasher { ... }")
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl Drop for Sha512Hasher {
    fn drop(&mut self) {
        self.buffer.zeroize();
        self.pos.zeroize();
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl ZeroizeOnDrop for Sha512Hasher {}
