use std::path::PathBuf;

use crate::base58::Base58Error;
use crate::labels::StyleError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid seed encoding: {0}")]
    Seed(#[from] Base58Error),

    #[error("label style error: {0}")]
    Style(#[from] StyleError),

    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("QR encoding failed: {0}")]
    Qr(String),

    #[error("bundle mismatch: {seeds} seeds but {coins} contract entries")]
    BundleLength { seeds: usize, coins: usize },

    #[error("invalid account address: {0}")]
    Account(String),

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
