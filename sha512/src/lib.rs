//! Implementation of the [SHA-512] hash function.
//!
//! The core interface is block oriented. A [`Sha512`] state absorbs whole
//! 128-byte blocks, takes the final partial block (0 to 127 bytes) through
//! [`Sha512::update_last`], and yields the digest from
//! [`finish`](Sha512::finish). Phase markers on the state type make the
//! ordering `new → update* → update_last → finish` a compile-time
//! property.
//!
//! [`Sha512Hasher`] buffers arbitrary-length input on top of that, and
//! [`hash`] covers the common one-shot case.
//!
//! # Example
//! ```
//! use hex_literal::hex;
//!
//! let digest = sha512::hash(b"abc");
//! assert_eq!(digest, hex!(
//!     "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a"
//!     "2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
//! ));
//!
//! // the same digest, one block at a time
//! let mut state = sha512::Sha512::new();
//! state.update_multi(&[]).unwrap();
//! let digest2 = state.update_last(b"abc").unwrap().finish();
//! assert_eq!(digest, digest2);
//! ```
//!
//! [SHA-512]: https://doi.org/10.6028/NIST.FIPS.180-4

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, trivial_casts, unused_qualifications)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "zeroize")]
pub use zeroize;

mod compress;
mod consts;
mod errors;
mod hasher;
mod state;
mod words;

pub use errors::{TailTooLong, UnalignedInput};
pub use hasher::Sha512Hasher;
pub use state::{Absorbing, Finalized, Phase, Sha512};

/// Size of a SHA-512 input block in bytes.
pub const BLOCK_SIZE: usize = 128;

/// Size of a SHA-512 digest in bytes.
pub const DIGEST_SIZE: usize = 64;

/// Size of a SHA-512 state word in bytes.
pub const WORD_SIZE: usize = 8;

/// One SHA-512 input block.
pub type Block = [u8; BLOCK_SIZE];

/// A SHA-512 digest.
pub type Digest = [u8; DIGEST_SIZE];

/// Hash `input` in one call.
pub fn hash(input: &[u8]) -> Digest {
    let (blocks, tail) = input.split_at(input.len() - input.len() % BLOCK_SIZE);

    let mut state = Sha512::new();
    state.absorb(blocks);
    state.finalize_tail(tail).finish()
}
