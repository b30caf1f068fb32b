//! Page geometry and the render loop that fills pages with labels.

use printpdf::{Mm, PdfDocument};

use crate::error::CoreError;

use super::canvas::{mm_to_pt, pdf_error, Canvas, Fonts, Paint, PdfSurface};
use super::style::HexColor;
use super::{LabelPainter, LabelRecord};

const LAYER_NAME: &str = "labels";

/// Page and label grid dimensions, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSpec {
    pub page_width: f32,
    pub page_height: f32,
    pub columns: usize,
    pub rows: usize,
    pub label_width: f32,
    pub label_height: f32,
    /// Draw the outline of every label cell.
    pub border: bool,
}

impl SheetSpec {
    /// A4 paper with 105 x 57 mm labels in 2 columns and 5 rows.
    pub const A4_COINS: Self = Self {
        page_width: 210.0,
        page_height: 297.0,
        columns: 2,
        rows: 5,
        label_width: 105.0,
        label_height: 57.0,
        border: true,
    };

    pub fn labels_per_page(&self) -> usize {
        self.columns * self.rows
    }

    pub fn pages_for(&self, labels: usize) -> usize {
        labels.div_ceil(self.labels_per_page()).max(1)
    }

    /// Bottom-left corner of the `slot`-th cell on a page, in points.
    /// Slots fill rows left to right, top row first; leftover page space
    /// is split evenly between opposite margins.
    pub fn cell_origin(&self, slot: usize) -> (f32, f32) {
        let column = slot % self.columns;
        let row = slot / self.columns;
        let margin_x = (self.page_width - self.columns as f32 * self.label_width) / 2.0;
        let margin_y = (self.page_height - self.rows as f32 * self.label_height) / 2.0;

        let x = margin_x + column as f32 * self.label_width;
        let y = self.page_height - margin_y - (row + 1) as f32 * self.label_height;
        (mm_to_pt(x), mm_to_pt(y))
    }
}

/// A rendered PDF plus what went into it.
#[derive(Debug)]
pub struct RenderedSheet {
    pub pdf: Vec<u8>,
    pub pages: usize,
    pub labels: usize,
}

impl RenderedSheet {
    pub fn write_to(&self, path: &std::path::Path) -> Result<(), CoreError> {
        std::fs::write(path, &self.pdf)?;
        tracing::info!(
            path = %path.display(),
            pages = self.pages,
            labels = self.labels,
            "wrote label sheet"
        );
        Ok(())
    }
}

pub struct Sheet {
    spec: SheetSpec,
    title: String,
}

impl Sheet {
    pub fn new(spec: SheetSpec, title: impl Into<String>) -> Self {
        Self {
            spec,
            title: title.into(),
        }
    }

    /// Render every record with `painter`. An empty record list still
    /// yields a single blank page.
    pub fn render(
        &self,
        records: &[LabelRecord],
        painter: &dyn LabelPainter,
    ) -> Result<RenderedSheet, CoreError> {
        let spec = &self.spec;
        let page_width = Mm(spec.page_width);
        let page_height = Mm(spec.page_height);
        let cell_width = mm_to_pt(spec.label_width);
        let cell_height = mm_to_pt(spec.label_height);

        let (doc, first_page, first_layer) =
            PdfDocument::new(self.title.as_str(), page_width, page_height, LAYER_NAME);
        let fonts = Fonts::register(&doc)?;
        let mut surface = PdfSurface {
            layer: doc.get_page(first_page).get_layer(first_layer),
            fonts: &fonts,
        };
        let mut pages = 1;

        for (position, record) in records.iter().enumerate() {
            let slot = position % spec.labels_per_page();
            if position > 0 && slot == 0 {
                let (page, page_layer) = doc.add_page(page_width, page_height, LAYER_NAME);
                surface.layer = doc.get_page(page).get_layer(page_layer);
                pages += 1;
                tracing::debug!(page = pages, "started label page");
            }

            let canvas = Canvas::new(&surface, spec.cell_origin(slot), cell_width, cell_height);
            if spec.border {
                canvas.rect(
                    0.0,
                    0.0,
                    cell_width,
                    cell_height,
                    Paint::stroke(HexColor::BLACK),
                );
            }
            painter.paint(&canvas, record)?;
        }

        let pdf = doc.save_to_bytes().map_err(pdf_error)?;
        Ok(RenderedSheet {
            pdf,
            pages,
            labels: records.len(),
        })
    }
}
