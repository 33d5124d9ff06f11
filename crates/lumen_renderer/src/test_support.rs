//! Deterministic generators for tests that need exact samples.

use rand::{Error, RngCore};

/// Replays a fixed cycle of `u32` words.
pub(crate) struct SequenceRng {
    words: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    /// Build a generator whose `gen::<f32>()` draws return `floats` in order.
    ///
    /// rand turns the top 24 bits of a `u32` into an f32 in [0, 1), so each
    /// float must be a multiple of 2^-24.
    pub(crate) fn from_unit_floats(floats: &[f32]) -> Self {
        let words = floats
            .iter()
            .map(|f| ((f * (1u32 << 24) as f32) as u32) << 8)
            .collect();
        Self { words, next: 0 }
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.next % self.words.len()];
        self.next += 1;
        word
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
