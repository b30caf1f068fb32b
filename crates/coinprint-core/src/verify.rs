//! Cross-check a seed file against its contract-input file.
//!
//! Every encoded seed must decode to a seed whose public key is the one
//! at the same position in the contract input. A bundle that fails this
//! would print coins nobody can redeem.

use std::path::Path;

use crate::bundle::{load_contract_input, load_seeds, BundlePaths, ContractInput};
use crate::error::CoreError;
use crate::seed::EncodedSeed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The stored seed is not valid base58 for a 32-byte seed.
    Undecodable { index: usize, reason: String },
    /// The seed decodes, but to a different public key.
    WrongKey {
        index: usize,
        expected: String,
        derived: String,
    },
}

impl Mismatch {
    pub fn index(&self) -> usize {
        match self {
            Self::Undecodable { index, .. } | Self::WrongKey { index, .. } => *index,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub checked: usize,
    pub mismatches: Vec<Mismatch>,
    /// Sum of all contract amounts, in micro-units. `None` if an amount
    /// is not a number or the sum overflows.
    pub total_amount: Option<u128>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty() && self.total_amount.is_some()
    }
}

pub fn verify_files(paths: &BundlePaths) -> Result<VerifyReport, CoreError> {
    verify_paths(&paths.seeds, &paths.contract_input)
}

pub fn verify_paths(seeds: &Path, contract_input: &Path) -> Result<VerifyReport, CoreError> {
    let seeds = load_seeds(seeds)?;
    let contract_input = load_contract_input(contract_input)?;
    verify_bundle(&seeds, &contract_input)
}

pub fn verify_bundle(
    seeds: &[EncodedSeed],
    contract_input: &ContractInput,
) -> Result<VerifyReport, CoreError> {
    if seeds.len() != contract_input.coins.len() {
        return Err(CoreError::BundleLength {
            seeds: seeds.len(),
            coins: contract_input.coins.len(),
        });
    }

    let mut mismatches = Vec::new();
    for (index, (encoded, coin)) in seeds.iter().zip(&contract_input.coins).enumerate() {
        let seed = match encoded.decode() {
            Ok(seed) => seed,
            Err(err) => {
                tracing::warn!(index, error = %err, "stored seed does not decode");
                mismatches.push(Mismatch::Undecodable {
                    index,
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let derived = seed.key_pair().public_key_hex();
        if !derived.eq_ignore_ascii_case(coin.public_key_hex()) {
            tracing::warn!(index, expected = %coin.public_key_hex(), "public key mismatch");
            mismatches.push(Mismatch::WrongKey {
                index,
                expected: coin.public_key_hex().to_string(),
                derived,
            });
        }
    }

    let total_amount = contract_input
        .coins
        .iter()
        .try_fold(0u128, |sum, coin| {
            coin.amount()
                .parse::<u64>()
                .ok()
                .and_then(|amount| sum.checked_add(u128::from(amount)))
        });
    if total_amount.is_none() {
        tracing::warn!("contract input holds a non-numeric amount");
    }

    Ok(VerifyReport {
        checked: seeds.len(),
        mismatches,
        total_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::SeedBatchGenerator;
    use crate::bundle::CoinEntry;
    use crate::test_util::seeded_rng;

    #[test]
    fn generated_batch_verifies() {
        let batch = SeedBatchGenerator::new(seeded_rng(11)).generate(&[1_000_000_000; 10]);
        let report =
            verify_bundle(batch.encoded_seeds(), batch.contract_input()).expect("verify");

        assert!(report.is_ok());
        assert_eq!(report.checked, 10);
        assert_eq!(report.total_amount, Some(10_000_000_000));
    }

    #[test]
    fn swapped_keys_are_reported_by_position() {
        let batch = SeedBatchGenerator::new(seeded_rng(12)).generate(&[1, 2, 3]);
        let mut input = batch.contract_input().clone();
        input.coins.swap(0, 2);

        let report = verify_bundle(batch.encoded_seeds(), &input).expect("verify");
        let indices: Vec<_> = report.mismatches.iter().map(Mismatch::index).collect();
        assert_eq!(indices, [0, 2]);
        assert!(!report.is_ok());
    }

    #[test]
    fn undecodable_seed_is_a_mismatch_not_an_error() {
        let seeds = vec![EncodedSeed::new_unchecked("not base58: 0OIl")];
        let input = ContractInput {
            coins: vec![CoinEntry("00".into(), "1".into())],
        };

        let report = verify_bundle(&seeds, &input).expect("verify");
        assert!(matches!(
            report.mismatches.as_slice(),
            [Mismatch::Undecodable { index: 0, .. }]
        ));
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let batch = SeedBatchGenerator::new(seeded_rng(13)).generate(&[1, 2]);
        let mut input = batch.contract_input().clone();
        input.coins.pop();

        assert!(matches!(
            verify_bundle(batch.encoded_seeds(), &input),
            Err(CoreError::BundleLength { seeds: 2, coins: 1 })
        ));
    }

    #[test]
    fn non_numeric_amount_fails_the_report() {
        let batch = SeedBatchGenerator::new(seeded_rng(14)).generate(&[1]);
        let mut input = batch.contract_input().clone();
        input.coins[0].1 = "lots".into();

        let report = verify_bundle(batch.encoded_seeds(), &input).expect("verify");
        assert!(report.mismatches.is_empty());
        assert_eq!(report.total_amount, None);
        assert!(!report.is_ok());
    }
}
