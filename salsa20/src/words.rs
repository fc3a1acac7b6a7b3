//! Little-endian conversion between byte buffers and 32-bit words.

/// Load `N` little-endian words from the front of `bytes`.
///
/// `bytes` must hold at least `4 * N` bytes.
#[inline]
pub(crate) fn load_le<const N: usize>(bytes: &[u8]) -> [u32; N] {
    debug_assert!(bytes.len() >= 4 * N);

    let mut words = [0u32; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Store `words` as little-endian bytes into the front of `out`.
#[inline]
pub(crate) fn store_le(words: &[u32], out: &mut [u8]) {
    debug_assert!(out.len() >= 4 * words.len());

    for (chunk, word) in out.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}
