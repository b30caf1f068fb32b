pub mod base58;
pub mod batch;
pub mod bundle;
pub mod error;
pub mod labels;
pub mod reprint;
pub mod seed;
pub mod sign;
#[cfg(test)]
mod test_util;
pub mod verify;

pub use batch::{SeedBatch, SeedBatchGenerator};
pub use bundle::{BundleKind, BundlePaths, ContractInput};
pub use error::CoreError;
pub use seed::{EncodedSeed, Seed};
