use std::fmt;

use unicode_normalization::UnicodeNormalization;

use crate::foundation::error::{DelicacyError, DelicacyResult};
use crate::seed::stream::{RandomStream, StreamDomain};

/// Longest accepted phrase, in Unicode scalar values after NFC normalisation.
pub const MAX_PHRASE_CHARS: usize = 32;

/// Incremental cryptographic hash used for seeding and hash chaining.
///
/// Orchestrators are generic over this trait so the algorithm can be swapped per call site
/// (and replaced with a fixed-output hash in tests). `digest` does not consume the state.
pub trait HashFunction: Clone + Default {
    /// Feed more bytes into the hash state.
    fn update(&mut self, data: &[u8]);

    /// Finalize a copy of the current state.
    fn digest(&self) -> Digest;

    /// Lowercase hex form of [`HashFunction::digest`].
    fn hex_digest(&self) -> String {
        self.digest().to_hex()
    }
}

macro_rules! impl_hash_function {
    ($($ty:ty),* $(,)?) => {$(
        impl HashFunction for $ty {
            fn update(&mut self, data: &[u8]) {
                sha3::Digest::update(self, data);
            }

            fn digest(&self) -> Digest {
                Digest::from_bytes(sha3::Digest::finalize(self.clone()).to_vec())
            }
        }
    )*};
}

impl_hash_function!(sha3::Sha3_512, sha2::Sha512);

/// Finalized hash output.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// The digest read as an unsigned big-endian integer, reduced modulo `n`.
    ///
    /// Returns `None` when `n == 0`.
    pub fn checked_rem(&self, n: u64) -> Option<u64> {
        be_rem(&self.bytes, n)
    }

    /// Interpret the digest as an unsigned big-endian integer seed.
    pub fn to_seed(&self) -> Seed {
        Seed::from_be_bytes(&self.bytes)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Arbitrary-width unsigned seed, stored as big-endian magnitude without leading zeros.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Seed {
    be: Vec<u8>,
}

impl Seed {
    /// Build a seed from big-endian bytes. Leading zero bytes do not change the value.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        Self {
            be: bytes[first..].to_vec(),
        }
    }

    /// A fresh 512-bit seed from the thread-local entropy source.
    pub fn random() -> Self {
        let mut bytes = [0u8; 64];
        rand::RngCore::fill_bytes(&mut rand::rng(), &mut bytes);
        Self::from_be_bytes(&bytes)
    }

    /// Minimal big-endian magnitude (empty for zero).
    pub fn as_be_bytes(&self) -> &[u8] {
        &self.be
    }

    /// `self mod n`, or `None` when `n == 0`.
    pub fn checked_rem(&self, n: u64) -> Option<u64> {
        be_rem(&self.be, n)
    }

    /// Open the random stream reserved for `domain`.
    ///
    /// Different domains yield unrelated streams for the same seed; the same
    /// `(seed, domain)` pair always yields the same stream.
    pub fn stream(&self, domain: StreamDomain) -> RandomStream {
        let mut h = sha3::Sha3_256::default();
        sha3::Digest::update(&mut h, &self.be);
        sha3::Digest::update(&mut h, domain.label().as_bytes());
        let out = sha3::Digest::finalize(h);

        let mut key = [0u8; 32];
        key.copy_from_slice(&out);
        RandomStream::from_key(key)
    }
}

impl From<u64> for Seed {
    fn from(v: u64) -> Self {
        Self::from_be_bytes(&v.to_be_bytes())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.be.is_empty() {
            return f.write_str("0x0");
        }
        write!(f, "0x{}", hex::encode(&self.be))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({self})")
    }
}

fn be_rem(bytes: &[u8], n: u64) -> Option<u64> {
    if n == 0 {
        return None;
    }
    let n = u128::from(n);
    let r = bytes
        .iter()
        .fold(0u128, |acc, &b| ((acc << 8) | u128::from(b)) % n);
    Some(r as u64)
}

/// Hash `key`, then the `Display` form of `context`, into one digest.
///
/// Used to fork one digest into independent sub-decisions: `keyed_hash(d, "robot")` and
/// `keyed_hash(d, "eyes")` are unrelated, yet both reproducible from `d`.
pub fn keyed_hash<H: HashFunction>(key: impl AsRef<[u8]>, context: impl fmt::Display) -> Digest {
    let mut h = H::default();
    h.update(key.as_ref());
    h.update(context.to_string().as_bytes());
    h.digest()
}

/// NFC-normalize `phrase`, rejecting anything longer than [`MAX_PHRASE_CHARS`].
pub fn normalize_phrase(phrase: &str) -> DelicacyResult<String> {
    let normalized: String = phrase.nfc().collect();
    let len = normalized.chars().count();
    if len > MAX_PHRASE_CHARS {
        return Err(DelicacyError::invalid_input(format!(
            "phrase is {len} characters long, at most {MAX_PHRASE_CHARS} are allowed"
        )));
    }
    Ok(normalized)
}

/// Derive the phrase digest and seed with the default hash (SHA3-512).
pub fn derive_seed(phrase: &str) -> DelicacyResult<(Digest, Seed)> {
    derive_seed_with::<sha3::Sha3_512>(phrase)
}

/// Derive the phrase digest and seed with hash function `H`.
pub fn derive_seed_with<H: HashFunction>(phrase: &str) -> DelicacyResult<(Digest, Seed)> {
    let normalized = normalize_phrase(phrase)?;
    let digest = keyed_hash::<H>(normalized.as_bytes(), "");
    let seed = digest.to_seed();
    Ok((digest, seed))
}

#[cfg(test)]
#[path = "../../tests/unit/seed/digest.rs"]
mod tests;
