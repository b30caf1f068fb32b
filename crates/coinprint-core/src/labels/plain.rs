//! Plain text coin label.
//!
//! The seed is printed in rows under a foldable lid; the fold-over half
//! carries a grey square that hides the seed and a coin showing the face
//! value. All measurements are in points from the cell's bottom-left.

use crate::error::CoreError;
use crate::seed::display_units;

use super::canvas::{Canvas, Paint};
use super::style::{FontFace, HexColor, TextBlock};
use super::{LabelPainter, LabelRecord};

/// Side length of the folded label.
const FOLD: f32 = 70.0;
const MARGIN: f32 = 5.0;
const LID: f32 = 10.0;
/// Bottom edge of the fold-over square.
const COVER_Y: f32 = 80.0;
const SEED_CHUNK: usize = 16;
const SEED_LINE_HEIGHT: f32 = 12.0;
/// Rows are laid out downwards from this row index.
const SEED_TOP_ROW: f32 = 4.0;
const SEED_X: f32 = 20.0;

const GREY: HexColor = HexColor::grey(0x66);

#[derive(Debug, Clone)]
pub struct PlainPainter {
    seed_text: TextBlock,
    amount_text: TextBlock,
}

impl Default for PlainPainter {
    fn default() -> Self {
        Self {
            seed_text: TextBlock {
                x: SEED_X,
                y: 0.0,
                size: 12.0,
                face: FontFace::Courier,
                color: HexColor::BLACK,
            },
            amount_text: TextBlock {
                x: MARGIN + 10.0,
                y: COVER_Y + FOLD / 2.0 - 5.0,
                size: 20.0,
                face: FontFace::Courier,
                color: HexColor::WHITE,
            },
        }
    }
}

impl PlainPainter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LabelPainter for PlainPainter {
    fn paint(&self, canvas: &Canvas<'_>, record: &LabelRecord) -> Result<(), CoreError> {
        let outline = Paint::stroke(HexColor::BLACK);
        canvas.rect(MARGIN, MARGIN, 2.0 * FOLD, FOLD, outline);
        canvas.rect(MARGIN, MARGIN, 2.0 * FOLD + LID, FOLD, outline);

        for (row, chunk) in record.seed.chunks(SEED_CHUNK).into_iter().enumerate() {
            let y = SEED_LINE_HEIGHT * (SEED_TOP_ROW - row as f32);
            canvas.text_at(&self.seed_text, self.seed_text.x, y, chunk);
        }

        canvas.rect(MARGIN, COVER_Y, FOLD, FOLD, Paint::fill_stroke(GREY, GREY));

        let centre_x = MARGIN + FOLD / 2.0;
        let centre_y = COVER_Y + FOLD / 2.0;
        let coin = Paint::fill_stroke(HexColor::BLACK, HexColor::WHITE);
        canvas.circle(centre_x, centre_y, FOLD / 2.0 - 1.0, coin);
        canvas.circle(centre_x, centre_y, FOLD / 2.0 - 5.0, coin);

        let amount = display_units(record.amount).to_string();
        canvas.text(&self.amount_text, &amount, false);
        Ok(())
    }
}
