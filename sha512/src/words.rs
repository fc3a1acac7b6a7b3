//! Big-endian conversion between byte buffers and 64-bit words.

/// Load `N` big-endian words from the front of `bytes`.
///
/// `bytes` must hold at least `8 * N` bytes.
#[inline]
pub(crate) fn load_be<const N: usize>(bytes: &[u8]) -> [u64; N] {
    debug_assert!(bytes.len() >= 8 * N);

    let mut words = [0u64; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *word = u64::from_be_bytes(buf);
    }
    words
}

/// Store `words` as big-endian bytes into the front of `out`.
#[inline]
pub(crate) fn store_be(words: &[u64], out: &mut [u8]) {
    debug_assert!(out.len() >= 8 * words.len());

    for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}
