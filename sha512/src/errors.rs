//! Error types.

use core::fmt;

/// Input to [`Sha512::update_multi`][crate::Sha512::update_multi] was not
/// a whole number of 128-byte blocks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnalignedInput;

/// The final chunk passed to [`Sha512::update_last`][crate::Sha512::update_last]
/// was 128 bytes or longer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TailTooLong;

impl fmt::Display for UnalignedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input length is not a multiple of the SHA-512 block size")
    }
}

impl fmt::Display for TailTooLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("final input must be shorter than one SHA-512 block")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnalignedInput {}

#[cfg(feature = "std")]
impl std::error::Error for TailTooLong {}
