use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Logical consumer of a seed. Each domain gets its own stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamDomain {
    /// Palette colour generation.
    Palette,
    /// Palette choice followed by every draw a pattern maker makes.
    Pattern,
}

impl StreamDomain {
    /// Label mixed into the stream key; changing it changes every output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Palette => "delicacy/palette",
            Self::Pattern => "delicacy/pattern",
        }
    }
}

/// Seeded pseudo-random stream (ChaCha20).
///
/// One stream backs all draws made while producing one artifact. Draw order is part of the
/// output contract: reordering calls changes the generated image.
#[derive(Clone, Debug)]
pub struct RandomStream {
    rng: ChaCha20Rng,
}

impl RandomStream {
    /// Stream keyed by 32 raw bytes.
    pub fn from_key(key: [u8; 32]) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(key),
        }
    }

    /// Uniform integer in `[lo, hi]` (both inclusive). Returns `lo` without drawing if `hi <= lo`.
    pub fn int_in(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    /// Uniform index in `[0, n)`, or `0` without drawing when `n == 0`.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Pick one element uniformly.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.below(items.len());
        items.get(idx)
    }

    /// Pick `k` elements uniformly with replacement.
    pub fn choices<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        if items.is_empty() {
            return Vec::new();
        }
        (0..k)
            .filter_map(|_| self.choose(items).cloned())
            .collect()
    }

    /// `k` integers drawn uniformly from the half-open range `[lo, hi)`.
    pub fn ints_below(&mut self, lo: i64, hi: i64, k: usize) -> Vec<i64> {
        (0..k).map(|_| self.int_in(lo, hi - 1)).collect()
    }

    /// Short identifier derived from the current stream position, without consuming a draw.
    ///
    /// Two calls separated by at least one draw return different ids.
    pub fn fingerprint(&self) -> String {
        let mut h = sha3::Sha3_256::default();
        sha3::Digest::update(&mut h, self.rng.get_seed());
        sha3::Digest::update(&mut h, self.rng.get_stream().to_le_bytes());
        sha3::Digest::update(&mut h, self.rng.get_word_pos().to_le_bytes());
        let mut id = hex::encode(sha3::Digest::finalize(h));
        id.truncate(32);
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seed/stream.rs"]
mod tests;
