//! Seed batch generation.
//!
//! Draws one fresh seed per requested amount and derives everything a
//! run persists from it: the encoded seed for the label and the seed
//! file, and the `[pubkey, amount]` pair for the contract input.

use rand::{CryptoRng, RngCore};

use crate::bundle::{write_bundle, BundlePaths, CoinEntry, ContractInput};
use crate::error::CoreError;
use crate::labels::LabelRecord;
use crate::seed::{EncodedSeed, Seed};

/// Output of one generation run. Raw seeds never leave this struct; only
/// their encodings and public keys are exposed.
pub struct SeedBatch {
    seeds: Vec<Seed>,
    amounts: Vec<u64>,
    encoded: Vec<EncodedSeed>,
    contract_input: ContractInput,
}

pub struct SeedBatchGenerator<R> {
    rng: R,
}

impl<R: RngCore + CryptoRng> SeedBatchGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, amounts: &[u64]) -> SeedBatch {
        let mut seeds = Vec::with_capacity(amounts.len());
        let mut encoded = Vec::with_capacity(amounts.len());
        let mut coins = Vec::with_capacity(amounts.len());

        for (index, &amount) in amounts.iter().enumerate() {
            let seed = Seed::random(&mut self.rng);
            let public_key = seed.key_pair().public_key_hex();
            tracing::debug!(index, amount, public_key = %public_key, "generated coin seed");

            encoded.push(seed.encode());
            coins.push(CoinEntry(public_key, amount.to_string()));
            seeds.push(seed);
        }

        SeedBatch {
            seeds,
            amounts: amounts.to_vec(),
            encoded,
            contract_input: ContractInput { coins },
        }
    }
}

impl SeedBatchGenerator<rand::rngs::OsRng> {
    /// Generator backed by the operating system's CSPRNG.
    pub fn from_os_rng() -> Self {
        Self::new(rand::rngs::OsRng)
    }
}

impl SeedBatch {
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn encoded_seeds(&self) -> &[EncodedSeed] {
        &self.encoded
    }

    pub fn contract_input(&self) -> &ContractInput {
        &self.contract_input
    }

    /// One label per seed, in generation order.
    pub fn label_records(&self) -> Vec<LabelRecord> {
        LabelRecord::from_pairs(self.encoded.iter().cloned().zip(self.amounts.iter().copied()))
    }

    pub fn write(&self, paths: &BundlePaths) -> Result<(), CoreError> {
        write_bundle(paths, &self.encoded, &self.contract_input)
    }
}
