// Seeded randomness for puzzle generation.
// One generator per round so a round's layout and tray order can be replayed from its seed.

/// SplitMix-style generator; tiny, seedable and good enough for shuffling a dozen pieces.
#[derive(Debug, Clone)]
pub struct PuzzleRng {
    state: u64,
}

impl PuzzleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Fair coin.
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        // Multiply-shift keeps the bias negligible for the tiny ranges used here.
        ((self.next_u32() as u64 * len as u64) >> 32) as usize
    }

    /// Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Seed for the next round, drawn from this stream.
    pub fn fork(&mut self) -> PuzzleRng {
        PuzzleRng::new(self.next_u64())
    }
}
