//! Implementation of the [Salsa20] stream cipher.
//!
//! Two interfaces are provided:
//!
//! - Counter-addressed free functions ([`keystream_block`], [`xor_ic`],
//!   [`xor`], [`stream`]) which compute every output as a pure function of
//!   key, nonce and block counter. Nothing is stored between calls.
//! - The [`Salsa20`] type (and its reduced-round siblings), which implements
//!   the stateful, seekable stream cipher traits of the re-exported
//!   [`cipher`] crate.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext integrity
//! is not verified, which can lead to serious vulnerabilities!
//!
//! USE AT YOUR OWN RISK!
//!
//! # Diagram
//!
//! This diagram illustrates the Salsa quarter round function.
//! Each round consists of four quarter-rounds:
//!
//! <img src="https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/img/stream-ciphers/salsa20.png" width="300px">
//!
//! Legend:
//!
//! - ⊞ add
//! - ‹‹‹ rotate
//! - ⊕ xor
//!
//! # Example
//! ```
//! use hex_literal::hex;
//!
//! let key = [0x42; 32];
//! let nonce = [0x24; 8];
//! let plaintext = hex!("00010203 04050607 08090A0B 0C0D0E0F");
//! let ciphertext = hex!("85843cc5 d58cce7b 5dd3dd04 fa005ded");
//!
//! // encrypt in place
//! let mut buffer = plaintext;
//! salsa20::xor(buffer.as_mut_slice().into(), &nonce, &key);
//! assert_eq!(buffer, ciphertext);
//!
//! // decrypt into a separate buffer; mismatched lengths are rejected
//! let mut recovered = [0u8; 16];
//! let buf = salsa20::InOutBuf::new(&buffer[..], &mut recovered[..]).unwrap();
//! salsa20::xor(buf, &nonce, &key);
//! assert_eq!(recovered, plaintext);
//! ```
//!
//! The same cipher through the [`cipher`] traits:
//! ```
//! use salsa20::Salsa20;
//! use salsa20::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
//!
//! let mut cipher = Salsa20::new(&[0x42; 32].into(), &[0x24; 8].into());
//! let mut buffer = *b"attack at dawn";
//! cipher.apply_keystream(&mut buffer);
//!
//! cipher.seek(0u32);
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(&buffer, b"attack at dawn");
//! ```
//!
//! [Salsa20]: https://cr.yp.to/snuffle/spec.pdf

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, trivial_casts, unused_qualifications)]

pub use cipher;
pub use cipher::inout::{InOutBuf, NotEqualError};

use cipher::{
    consts::{U10, U32, U4, U6, U64, U8},
    generic_array::{typenum::Unsigned, GenericArray},
    BlockSizeUser, IvSizeUser, KeyIvInit, KeySizeUser, StreamCipherCore, StreamCipherCoreWrapper,
    StreamCipherSeekCore, StreamClosure,
};
use core::marker::PhantomData;

#[cfg(feature = "zeroize")]
use cipher::zeroize::{Zeroize, ZeroizeOnDrop};

mod backends;
mod words;
mod xor;

pub use xor::{keystream_block, stream, xor, xor_ic};

/// Salsa20/8 stream cipher
/// (reduced-round variant of Salsa20 with 8 rounds, *not recommended*)
pub type Salsa8 = StreamCipherCoreWrapper<SalsaCore<U4>>;

/// Salsa20/12 stream cipher
/// (reduced-round variant of Salsa20 with 12 rounds, *not recommended*)
pub type Salsa12 = StreamCipherCoreWrapper<SalsaCore<U6>>;

/// Salsa20/20 stream cipher
/// (20 rounds; **recommended**)
pub type Salsa20 = StreamCipherCoreWrapper<SalsaCore<U10>>;

/// Key type used by all Salsa variants.
pub type Key = GenericArray<u8, U32>;

/// Nonce type used by all Salsa variants.
pub type Nonce = GenericArray<u8, U8>;

/// Size of a Salsa20 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a Salsa20 nonce in bytes.
pub const NONCE_SIZE: usize = 8;

/// Size of one keystream block in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the Salsa20 state
const STATE_WORDS: usize = 16;

/// State initialization constant ("expand 32-byte k")
const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// The Salsa20 core function.
///
/// `R` is the number of double rounds: [`U10`] for Salsa20/20.
pub struct SalsaCore<R: Unsigned> {
    /// Internal state of the core function
    state: [u32; STATE_WORDS],
    /// Number of rounds to perform
    rounds: PhantomData<R>,
}

impl<R: Unsigned> SalsaCore<R> {
    /// Create new Salsa core from raw state.
    ///
    /// This method is mainly intended for the `scrypt` crate.
    /// Other users generally should not use this method.
    pub fn from_raw_state(state: [u32; STATE_WORDS]) -> Self {
        Self {
            state,
            rounds: PhantomData,
        }
    }
}

impl<R: Unsigned> KeySizeUser for SalsaCore<R> {
    type KeySize = U32;
}

impl<R: Unsigned> IvSizeUser for SalsaCore<R> {
    type IvSize = U8;
}

impl<R: Unsigned> BlockSizeUser for SalsaCore<R> {
    type BlockSize = U64;
}

impl<R: Unsigned> KeyIvInit for SalsaCore<R> {
    fn new(key: &Key, iv: &Nonce) -> Self {
        let key: [u32; 8] = words::load_le(key);
        let iv: [u32; 2] = words::load_le(iv);

        Self::from_raw_state([
            CONSTANTS[0],
            key[0],
            key[1],
            key[2],
            key[3],
            CONSTANTS[1],
            iv[0],
            iv[1],
            0,
            0,
            CONSTANTS[2],
            key[4],
            key[5],
            key[6],
            key[7],
            CONSTANTS[3],
        ])
    }
}

impl<R: Unsigned> StreamCipherCore for SalsaCore<R> {
    #[inline(always)]
    fn remaining_blocks(&self) -> Option<usize> {
        let rem = u64::MAX - self.get_block_pos();
        rem.try_into().ok()
    }

    fn process_with_backend(&mut self, f: impl StreamClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::soft::Backend(self));
    }
}

impl<R: Unsigned> StreamCipherSeekCore for SalsaCore<R> {
    type Counter = u64;

    #[inline(always)]
    fn get_block_pos(&self) -> u64 {
        (self.state[8] as u64) + ((self.state[9] as u64) << 32)
    }

    #[inline(always)]
    fn set_block_pos(&mut self, pos: u64) {
        self.state[8] = (pos & 0xffff_ffff) as u32;
        self.state[9] = ((pos >> 32) & 0xffff_ffff) as u32;
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl<R: Unsigned> Drop for SalsaCore<R> {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl<R: Unsigned> ZeroizeOnDrop for SalsaCore<R> {}
