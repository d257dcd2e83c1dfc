//! The Fx hash function, restricted to a 32-bit state so that hashes do not
//! depend on the pointer width of the target platform.

use core::hash::Hasher;

const SEED: u32 = 0x9e37_79b9;

/// A fast, non-cryptographic hasher producing identical values on every platform.
#[derive(Default, Clone, Copy)]
pub struct FxHasher32 {
    hash: u32,
}

impl FxHasher32 {
    #[inline]
    fn mix(&mut self, word: u32) {
        self.hash = (self.hash.rotate_left(5) ^ word).wrapping_mul(SEED);
    }
}

impl Hasher for FxHasher32 {
    fn write(&mut self, bytes: &[u8]) {
        let mut chunks = bytes.chunks_exact(4);

        for chunk in &mut chunks {
            self.mix(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        // Remaining bytes are folded one at a time.
        for byte in chunks.remainder() {
            self.mix(*byte as u32);
        }
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.mix(i as u32);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.mix(i as u32);
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.mix(i);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.mix(i as u32);
        self.mix((i >> 32) as u32);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write_u64(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash as u64
    }
}
