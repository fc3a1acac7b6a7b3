//! Block-level SHA-512 state machine.

use crate::{
    compress::compress, consts::H0, words, Block, Digest, TailTooLong, UnalignedInput,
    BLOCK_SIZE, DIGEST_SIZE,
};
use core::{fmt, marker::PhantomData};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Offset of the 128-bit length field inside the last padded block.
const LEN_OFFSET: usize = BLOCK_SIZE - 16;

mod sealed {
    pub trait Sealed {}
}

/// Phase marker of a [`Sha512`] state.
pub trait Phase: sealed::Sealed {}

/// Full blocks may still be absorbed.
#[derive(Debug)]
pub enum Absorbing {}

/// Padding has been applied; only [`Sha512::finish`] remains.
#[derive(Debug)]
pub enum Finalized {}

impl sealed::Sealed for Absorbing {}
impl sealed::Sealed for Finalized {}
impl Phase for Absorbing {}
impl Phase for Finalized {}

/// SHA-512 state: eight accumulator words and a 128-bit message length.
///
/// The state absorbs whole 128-byte blocks only. The final partial block
/// goes through [`update_last`](Sha512::update_last), which consumes the
/// absorbing state and returns a [`Finalized`] one, so blocks can never be
/// added after padding and a digest can be read only once.
///
/// ```
/// use sha512::Sha512;
///
/// let msg = [0x61u8; 300];
/// let (blocks, tail) = msg.split_at(256);
///
/// let mut state = Sha512::new();
/// state.update_multi(blocks).unwrap();
/// let digest = state.update_last(tail).unwrap().finish();
///
/// assert_eq!(digest, sha512::hash(&msg));
/// ```
pub struct Sha512<P: Phase = Absorbing> {
    h: [u64; 8],
    bit_len: u128,
    phase: PhantomData<P>,
}

impl Sha512<Absorbing> {
    /// Create a state holding the SHA-512 initialization vector.
    pub fn new() -> Self {
        Self {
            h: H0,
            bit_len: 0,
            phase: PhantomData,
        }
    }

    /// Return to the freshly initialized state.
    pub fn reset(&mut self) {
        self.h = H0;
        self.bit_len = 0;
    }

    /// Number of message bits absorbed so far, modulo 2^128.
    pub fn bit_len(&self) -> u128 {
        self.bit_len
    }

    /// Absorb a single block.
    #[inline]
    pub fn update(&mut self, block: &Block) {
        self.absorb(block);
    }

    /// Absorb a sequence of blocks.
    pub fn update_blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            self.absorb(block);
        }
    }

    /// Absorb `data`, which must be a whole number of blocks.
    ///
    /// # Errors
    /// Returns [`UnalignedInput`] and leaves the state untouched if
    /// `data.len()` is not a multiple of [`BLOCK_SIZE`].
    pub fn update_multi(&mut self, data: &[u8]) -> Result<(), UnalignedInput> {
        if data.len() % BLOCK_SIZE != 0 {
            return Err(UnalignedInput);
        }
        self.absorb(data);
        Ok(())
    }

    /// Absorb the final `tail` (0 to 127 bytes) together with the padding
    /// and the length suffix.
    ///
    /// # Errors
    /// Returns [`TailTooLong`] if `tail` is a full block or longer; the
    /// state is consumed either way.
    pub fn update_last(self, tail: &[u8]) -> Result<Sha512<Finalized>, TailTooLong> {
        if tail.len() >= BLOCK_SIZE {
            return Err(TailTooLong);
        }
        Ok(self.finalize_tail(tail))
    }

    /// `data.len()` must be a multiple of [`BLOCK_SIZE`].
    pub(crate) fn absorb(&mut self, data: &[u8]) {
        compress(&mut self.h, data);

        let blocks = (data.len() / BLOCK_SIZE) as u128;
        self.bit_len = self.bit_len.wrapping_add(blocks * (BLOCK_SIZE as u128 * 8));
    }

    /// `tail.len()` must be less than [`BLOCK_SIZE`].
    pub(crate) fn finalize_tail(self, tail: &[u8]) -> Sha512<Finalized> {
        debug_assert!(tail.len() < BLOCK_SIZE);

        let mut h = self.h;
        let bit_len = self.bit_len.wrapping_add(tail.len() as u128 * 8);

        #[allow(unused_mut)]
        let (mut padded, len) = pad(tail, bit_len);
        compress(&mut h, &padded[..len]);

        #[cfg(feature = "zeroize")]
        padded.zeroize();

        Sha512 {
            h,
            bit_len,
            phase: PhantomData,
        }
    }
}

impl Sha512<Finalized> {
    /// Serialize the accumulator as the 64-byte big-endian digest.
    pub fn finish(self) -> Digest {
        let mut digest = [0u8; DIGEST_SIZE];
        words::store_be(&self.h, &mut digest);
        digest
    }
}

/// Append the `0x80` marker, zero fill and the big-endian `bit_len` to
/// `tail`, returning the padded bytes and how many of them are used
/// (one block, or two when `tail` leaves no room for the length field).
fn pad(tail: &[u8], bit_len: u128) -> ([u8; 2 * BLOCK_SIZE], usize) {
    let mut buf = [0u8; 2 * BLOCK_SIZE];
    buf[..tail.len()].copy_from_slice(tail);
    buf[tail.len()] = 0x80;

    let len = if tail.len() < LEN_OFFSET {
        BLOCK_SIZE
    } else {
        2 * BLOCK_SIZE
    };
    buf[len - 16..len].copy_from_slice(&bit_len.to_be_bytes());

    (buf, len)
}

impl Default for Sha512<Absorbing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Phase> Clone for Sha512<P> {
    fn clone(&self) -> Self {
        Self {
            h: self.h,
            bit_len: self.bit_len,
            phase: PhantomData,
        }
    }
}

impl<P: Phase> fmt::Debug for Sha512<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sha512 { ... }")
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl<P: Phase> Drop for Sha512<P> {
    fn drop(&mut self) {
        self.h.zeroize();
        self.bit_len.zeroize();
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl<P: Phase> ZeroizeOnDrop for Sha512<P> {}
