//! Printable coin labels.
//!
//! A [`Sheet`] lays label cells out on fixed-size pages and hands each
//! cell to a [`LabelPainter`]. Two painters exist: [`PlainPainter`]
//! prints the seed as text under a foldable lid, [`QrPainter`] prints it
//! as a QR code laid out by a [`LabelStyle`].

mod canvas;
mod plain;
mod qr;
mod sheet;
mod style;

pub use canvas::{Canvas, Paint};
pub use plain::PlainPainter;
pub use qr::QrPainter;
pub use sheet::{RenderedSheet, Sheet, SheetSpec};
pub use style::{
    AmountStyle, FontFace, FrameStyle, HeadingStyle, HexColor, LabelStyle, QrStyle,
    SeedTextStyle, StyleError, TextBlock,
};

use crate::error::CoreError;
use crate::seed::EncodedSeed;

/// One label to print: an encoded seed, its face value in micro-units,
/// and its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    pub seed: EncodedSeed,
    pub amount: u64,
    pub index: usize,
    /// Styles may mirror or shade flipped labels.
    pub flipped: bool,
}

impl LabelRecord {
    pub fn new(index: usize, seed: EncodedSeed, amount: u64) -> Self {
        Self {
            seed,
            amount,
            index,
            flipped: false,
        }
    }

    /// Flip every odd-indexed record so neighbouring labels alternate.
    pub fn alternate(records: &mut [Self]) {
        for record in records {
            record.flipped = record.index % 2 == 1;
        }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (EncodedSeed, u64)>) -> Vec<Self> {
        pairs
            .into_iter()
            .enumerate()
            .map(|(index, (seed, amount))| Self::new(index, seed, amount))
            .collect()
    }
}

/// Draws the body of one label into a cell.
pub trait LabelPainter {
    fn paint(&self, canvas: &Canvas<'_>, record: &LabelRecord) -> Result<(), CoreError>;
}
