//! Output bundle: the JSON files a generation run leaves behind.
//!
//! A bundle is a seed file (JSON array of encoded seeds) paired with a
//! contract-input file (`{"coins": [[pubkey_hex, amount], ...]}`). Both
//! are indexed by seed position. Files are overwritten on every run.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::seed::EncodedSeed;

// ==============================================================================
// File Names
// ==============================================================================

/// Which script flavour a bundle belongs to. Determines file names only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleKind {
    Plain,
    Qr,
}

impl BundleKind {
    pub fn seeds_file(self) -> &'static str {
        match self {
            Self::Plain => "coin-seeds.json",
            Self::Qr => "qr-coin-seeds.json",
        }
    }

    pub fn contract_input_file(self) -> &'static str {
        match self {
            Self::Plain => "sc-input.json",
            Self::Qr => "qr-sc-input.json",
        }
    }

    pub fn labels_file(self) -> &'static str {
        match self {
            Self::Plain => "coin-labels.pdf",
            Self::Qr => "qr-coin-labels.pdf",
        }
    }
}

// ==============================================================================
// Contract Input
// ==============================================================================

/// One contract entry: hex public key and amount, serialized as a
/// two-element JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinEntry(pub String, pub String);

impl CoinEntry {
    pub fn public_key_hex(&self) -> &str {
        &self.0
    }

    pub fn amount(&self) -> &str {
        &self.1
    }
}

/// Init parameter of the redemption contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInput {
    pub coins: Vec<CoinEntry>,
}

// ==============================================================================
// Bundle I/O
// ==============================================================================

/// Paths of the two JSON files of a bundle inside `dir`.
#[derive(Debug, Clone)]
pub struct BundlePaths {
    pub seeds: PathBuf,
    pub contract_input: PathBuf,
}

impl BundlePaths {
    pub fn in_dir(dir: &Path, kind: BundleKind) -> Self {
        Self {
            seeds: dir.join(kind.seeds_file()),
            contract_input: dir.join(kind.contract_input_file()),
        }
    }
}

pub fn write_bundle(
    paths: &BundlePaths,
    seeds: &[EncodedSeed],
    contract_input: &ContractInput,
) -> Result<(), CoreError> {
    write_json(&paths.seeds, &seeds)?;
    write_json(&paths.contract_input, contract_input)?;
    tracing::info!(
        seeds = %paths.seeds.display(),
        contract_input = %paths.contract_input.display(),
        count = seeds.len(),
        "wrote seed bundle"
    );
    Ok(())
}

pub fn load_seeds(path: &Path) -> Result<Vec<EncodedSeed>, CoreError> {
    read_json(path)
}

pub fn load_contract_input(path: &Path) -> Result<ContractInput, CoreError> {
    read_json(path)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CoreError> {
    let content = serde_json::to_string(value).map_err(|source| CoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, content)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| CoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_input_uses_nested_array_shape() {
        let input = ContractInput {
            coins: vec![CoinEntry("ab".into(), "1000000000".into())],
        };
        let json = serde_json::to_string(&input).expect("serialize");
        assert_eq!(json, r#"{"coins":[["ab","1000000000"]]}"#);

        let back: ContractInput = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, input);
    }

    #[test]
    fn bundle_files_are_written_and_reloaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let paths = BundlePaths::in_dir(dir.path(), BundleKind::Qr);
        let seeds = vec![
            EncodedSeed::new_unchecked("abc"),
            EncodedSeed::new_unchecked("def"),
        ];
        let input = ContractInput {
            coins: vec![
                CoinEntry("01".into(), "5".into()),
                CoinEntry("02".into(), "6".into()),
            ],
        };

        write_bundle(&paths, &seeds, &input).expect("write bundle");

        assert!(paths.seeds.ends_with("qr-coin-seeds.json"));
        assert_eq!(
            std::fs::read_to_string(&paths.seeds).expect("read seeds"),
            r#"["abc","def"]"#
        );
        assert_eq!(load_seeds(&paths.seeds).expect("load seeds"), seeds);
        assert_eq!(
            load_contract_input(&paths.contract_input).expect("load input"),
            input
        );
    }

    #[test]
    fn malformed_json_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("coin-seeds.json");
        std::fs::write(&path, "[\"abc\",").expect("write");

        let err = load_seeds(&path).expect_err("must fail");
        assert!(matches!(err, CoreError::Json { .. }));
        assert!(err.to_string().contains("coin-seeds.json"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_seeds(&dir.path().join("nope.json")).expect_err("must fail");
        assert!(matches!(err, CoreError::Io(_)));
    }
}
