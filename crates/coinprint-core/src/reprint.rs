//! Reprint labels from a saved seed file without generating new seeds.
//!
//! Amounts are not stored in the seed file, so every reloaded seed gets
//! the same face value. Seeds are not re-validated; whatever is in the
//! file is printed after stray formatting is removed.

use std::path::{Path, PathBuf};

use crate::bundle::load_seeds;
use crate::error::CoreError;
use crate::labels::{LabelRecord, LabelStyle, QrPainter, RenderedSheet, Sheet, SheetSpec};
use crate::seed::EncodedSeed;

/// Face value assigned to reprinted coins, in micro-units.
pub const REPRINT_AMOUNT: u64 = 2_000_000_000;

/// Style and output file of each reprinted sheet, in render order.
pub const REPRINT_TARGETS: [(&str, &str); 2] = [
    ("coin-alt", "qr-coin-labels.pdf"),
    ("coin", "qr-coin-labels2.pdf"),
];

#[derive(Debug)]
pub struct ReprintedSheet {
    pub style: String,
    pub path: PathBuf,
    pub sheet: RenderedSheet,
}

/// Strip surrounding whitespace and a bytes-literal wrapper (`b'...'` or
/// `b"..."`) left behind by older seed files.
pub fn clean_seed(raw: &str) -> (EncodedSeed, bool) {
    let trimmed = raw.trim();
    let unwrapped = ['\'', '"'].iter().find_map(|&quote| {
        trimmed
            .strip_prefix('b')
            .and_then(|rest| rest.strip_prefix(quote))
            .and_then(|rest| rest.strip_suffix(quote))
    });
    match unwrapped {
        Some(inner) => (EncodedSeed::new_unchecked(inner), true),
        None => (EncodedSeed::new_unchecked(trimmed), trimmed.len() != raw.len()),
    }
}

/// Reload `seeds_path` and write one PDF per entry of [`REPRINT_TARGETS`]
/// into `out_dir`.
pub fn reprint(
    seeds_path: &Path,
    out_dir: &Path,
    amount: u64,
) -> Result<Vec<ReprintedSheet>, CoreError> {
    let stored = load_seeds(seeds_path)?;
    let mut stripped = 0;
    let seeds: Vec<EncodedSeed> = stored
        .iter()
        .map(|seed| {
            let (clean, changed) = clean_seed(seed.as_str());
            stripped += usize::from(changed);
            clean
        })
        .collect();
    if stripped > 0 {
        tracing::warn!(
            stripped,
            path = %seeds_path.display(),
            "removed stray formatting from stored seeds"
        );
    }
    tracing::info!(count = seeds.len(), amount, "reprinting labels");

    let mut records = LabelRecord::from_pairs(seeds.into_iter().map(|seed| (seed, amount)));
    LabelRecord::alternate(&mut records);

    REPRINT_TARGETS
        .iter()
        .map(|&(style_name, file_name)| -> Result<ReprintedSheet, CoreError> {
            let style = LabelStyle::resolve(style_name)?;
            let painter = QrPainter::new(style);
            let sheet = Sheet::new(SheetSpec::A4_COINS, "Coin labels").render(&records, &painter)?;
            let path = out_dir.join(file_name);
            sheet.write_to(&path)?;
            Ok(ReprintedSheet {
                style: style_name.to_string(),
                path,
                sheet,
            })
        })
        .collect()
}
