//! Counter-addressed Salsa20/20 operations.
//!
//! Every function here derives its output from the key, the nonce and an
//! explicit block counter alone, so independent counter ranges can be
//! processed in any order or in parallel. Counters wrap modulo 2^64.

use crate::{Key, Nonce, SalsaCore, BLOCK_SIZE, KEY_SIZE, NONCE_SIZE};
use cipher::{
    consts::{U10, U64},
    inout::InOutBuf,
    Block, KeyIvInit, StreamCipherCore, StreamCipherSeekCore,
};

type Core = SalsaCore<U10>;

#[inline]
fn core_at(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], counter: u64) -> Core {
    let mut core = Core::new(Key::from_slice(key), Nonce::from_slice(nonce));
    core.set_block_pos(counter);
    core
}

/// Compute the 64-byte keystream block at position `counter`.
pub fn keystream_block(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    counter: u64,
) -> [u8; BLOCK_SIZE] {
    let mut block = Block::<Core>::default();
    core_at(key, nonce, counter).write_keystream_block(&mut block);

    let mut out = [0u8; BLOCK_SIZE];
    out.copy_from_slice(&block);
    out
}

/// XOR `buf` with the keystream starting at block `ic`.
///
/// Block `i` of the buffer is combined with `keystream_block(key, nonce, ic + i)`;
/// a trailing partial block uses only the prefix of its keystream block.
/// Applying the same call twice restores the original input.
///
/// `buf` is either a single slice processed in place (`&mut [u8]` converts
/// with `.into()`) or a pair of equal-length buffers built with
/// [`InOutBuf::new`], which rejects mismatched lengths.
pub fn xor_ic(buf: InOutBuf<'_, '_, u8>, nonce: &[u8; NONCE_SIZE], ic: u64, key: &[u8; KEY_SIZE]) {
    let mut core = core_at(key, nonce, ic);

    let (blocks, mut tail) = buf.into_chunks::<U64>();
    core.apply_keystream_blocks_inout(blocks);

    if !tail.is_empty() {
        let mut block = Block::<Core>::default();
        core.write_keystream_block(&mut block);
        tail.xor_in2out(&block[..tail.len()]);
    }
}

/// XOR `buf` with the keystream starting at block 0.
#[inline]
pub fn xor(buf: InOutBuf<'_, '_, u8>, nonce: &[u8; NONCE_SIZE], key: &[u8; KEY_SIZE]) {
    xor_ic(buf, nonce, 0, key);
}

/// Fill `out` with raw keystream starting at block 0.
pub fn stream(out: &mut [u8], nonce: &[u8; NONCE_SIZE], key: &[u8; KEY_SIZE]) {
    out.fill(0);
    xor(out.into(), nonce, key);
}
