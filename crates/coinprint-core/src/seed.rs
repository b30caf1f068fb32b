//! Coin seed domain types.
//!
//! A [`Seed`] is the 32-byte ed25519 secret seed of one coin. It is the
//! only ground truth; the [`EncodedSeed`] printed on the label and the
//! [`KeyPair`] whose public half goes to the contract are both derived
//! from it.

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::base58::{self, Base58Error};

pub const SEED_LEN: usize = 32;

/// Micro-units per displayed coin unit.
pub const MICRO_PER_UNIT: u64 = 1_000_000;

// ==============================================================================
// Seed
// ==============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Draw a fresh seed from a cryptographically secure RNG.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; SEED_LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    pub fn encode(&self) -> EncodedSeed {
        EncodedSeed(base58::encode(&self.0))
    }

    pub fn key_pair(&self) -> KeyPair {
        KeyPair(SigningKey::from_bytes(&self.0))
    }
}

// Seeds are secret material; keep them out of debug output and logs.
impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(..)")
    }
}

// ==============================================================================
// Encoded Seed
// ==============================================================================

/// The base58 text of a seed, as printed on a label and stored in the
/// seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedSeed(String);

impl EncodedSeed {
    /// Wrap an already-encoded string without validating it.
    pub fn new_unchecked(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn decode(&self) -> Result<Seed, Base58Error> {
        base58::decode_seed(&self.0).map(Seed)
    }

    /// Split into rows of at most `width` characters for printing.
    pub fn chunks(&self, width: usize) -> Vec<&str> {
        let width = width.max(1);
        let mut rows = Vec::with_capacity(self.0.len().div_ceil(width));
        let mut rest = self.0.as_str();
        while !rest.is_empty() {
            // Base58 text is ASCII, but don't panic on a hand-edited file.
            let cut = rest
                .char_indices()
                .nth(width)
                .map_or(rest.len(), |(idx, _)| idx);
            let (row, tail) = rest.split_at(cut);
            rows.push(row);
            rest = tail;
        }
        rows
    }
}

impl std::fmt::Display for EncodedSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ==============================================================================
// Key Pair
// ==============================================================================

pub struct KeyPair(SigningKey);

impl KeyPair {
    pub fn signing_key(&self) -> &SigningKey {
        &self.0
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.0.verifying_key()
    }

    /// Lower-case hex of the public verification key, as the contract
    /// input expects it.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.verifying_key().as_bytes())
    }
}

/// Whole display units of a micro-unit amount, truncated.
pub fn display_units(amount: u64) -> u64 {
    amount / MICRO_PER_UNIT
}
