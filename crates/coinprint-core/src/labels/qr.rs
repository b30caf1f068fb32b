//! QR coin label, laid out by a [`LabelStyle`].

use qrcode::{Color as Module, QrCode};

use crate::error::CoreError;
use crate::seed::display_units;

use super::canvas::{Canvas, Paint};
use super::style::{HexColor, LabelStyle};
use super::{LabelPainter, LabelRecord};

#[derive(Debug, Clone)]
pub struct QrPainter {
    style: LabelStyle,
}

impl QrPainter {
    pub fn new(style: LabelStyle) -> Self {
        Self { style }
    }

    fn paint_frame(&self, canvas: &Canvas<'_>, flipped: bool) {
        let frame = &self.style.frame;
        let fill = if flipped {
            frame.flipped_fill.or(frame.fill)
        } else {
            frame.fill
        };
        canvas.rect(
            0.0,
            0.0,
            canvas.width(),
            canvas.height(),
            Paint {
                fill,
                stroke: frame.stroke,
            },
        );
    }

    fn paint_code(&self, canvas: &Canvas<'_>, data: &str, flipped: bool) -> Result<(), CoreError> {
        let code = QrCode::new(data.as_bytes()).map_err(|e| CoreError::Qr(e.to_string()))?;
        let qr = &self.style.qr;
        let modules = code.width();
        let span = modules + 2 * qr.quiet_zone;
        let module_size = qr.size / span as f32;

        let left = if flipped {
            canvas.mirror_x(qr.x, qr.size)
        } else {
            qr.x
        };
        let top = qr.y + qr.size;
        let dark = Paint::fill(HexColor::BLACK);

        for (i, module) in code.to_colors().into_iter().enumerate() {
            if module != Module::Dark {
                continue;
            }
            let column = qr.quiet_zone + i % modules;
            let row = qr.quiet_zone + i / modules;
            canvas.rect(
                left + column as f32 * module_size,
                top - (row + 1) as f32 * module_size,
                module_size,
                module_size,
                dark,
            );
        }
        Ok(())
    }
}

impl LabelPainter for QrPainter {
    fn paint(&self, canvas: &Canvas<'_>, record: &LabelRecord) -> Result<(), CoreError> {
        let style = &self.style;
        let flipped = record.flipped;

        self.paint_frame(canvas, flipped);
        self.paint_code(canvas, record.seed.as_str(), flipped)?;

        if let Some(heading) = &style.heading {
            canvas.text(&heading.block, &heading.text, flipped);
        }

        let amount = format!("{}{}", display_units(record.amount), style.amount.suffix);
        canvas.text(&style.amount.block, &amount, flipped);

        if let Some(seed_text) = &style.seed {
            let rows = record.seed.chunks(seed_text.chunk);
            // Mirror the block as a whole so rows stay left-aligned.
            let block_width = rows
                .iter()
                .map(|row| seed_text.block.width_of(row))
                .fold(0.0, f32::max);
            let x = if flipped {
                canvas.mirror_x(seed_text.block.x, block_width)
            } else {
                seed_text.block.x
            };
            for (i, row) in rows.iter().enumerate() {
                let y = seed_text.block.y - i as f32 * seed_text.line_height;
                canvas.text_at(&seed_text.block, x, y, row);
            }
        }
        Ok(())
    }
}
