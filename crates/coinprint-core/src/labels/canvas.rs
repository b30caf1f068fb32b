//! Cell-local drawing on top of a `printpdf` layer.
//!
//! Painters work in PostScript points measured from the bottom-left
//! corner of their label cell; [`Canvas`] translates to page millimetres.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocumentReference, PdfLayerReference, Point,
    Polygon, Rgb,
};

use crate::error::CoreError;

use super::style::{FontFace, HexColor, TextBlock};

const MM_PER_PT: f32 = 25.4 / 72.0;
/// Straight segments used to approximate a circle.
const CIRCLE_SEGMENTS: usize = 72;

pub(super) fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * MM_PER_PT)
}

pub(super) fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

pub(super) fn pdf_error(err: impl std::fmt::Debug) -> CoreError {
    CoreError::Pdf(format!("{err:?}"))
}

/// Built-in fonts registered once per document.
pub(super) struct Fonts {
    courier: IndirectFontRef,
    courier_bold: IndirectFontRef,
}

impl Fonts {
    pub(super) fn register(doc: &PdfDocumentReference) -> Result<Self, CoreError> {
        Ok(Self {
            courier: doc.add_builtin_font(BuiltinFont::Courier).map_err(pdf_error)?,
            courier_bold: doc
                .add_builtin_font(BuiltinFont::CourierBold)
                .map_err(pdf_error)?,
        })
    }

    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Courier => &self.courier,
            FontFace::CourierBold => &self.courier_bold,
        }
    }
}

/// Fill and outline colours of a shape. A missing colour skips that part.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Paint {
    pub fill: Option<HexColor>,
    pub stroke: Option<HexColor>,
}

impl Paint {
    pub fn stroke(colour: HexColor) -> Self {
        Self {
            fill: None,
            stroke: Some(colour),
        }
    }

    pub fn fill(colour: HexColor) -> Self {
        Self {
            fill: Some(colour),
            stroke: None,
        }
    }

    pub fn fill_stroke(fill: HexColor, stroke: HexColor) -> Self {
        Self {
            fill: Some(fill),
            stroke: Some(stroke),
        }
    }
}

fn to_pdf_color(colour: HexColor) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(colour.r) / 255.0,
        f32::from(colour.g) / 255.0,
        f32::from(colour.b) / 255.0,
        None,
    ))
}

/// Receives drawing operations in page points.
pub(super) trait Surface {
    fn shape(&self, ring: &[(f32, f32)], paint: Paint);
    fn text(&self, block: &TextBlock, x: f32, y: f32, text: &str);
}

/// A `printpdf` layer plus the document's fonts.
pub(super) struct PdfSurface<'a> {
    pub(super) layer: PdfLayerReference,
    pub(super) fonts: &'a Fonts,
}

impl PdfSurface<'_> {
    /// Set colours for `paint` and return the matching paint mode, or
    /// `None` when there is nothing to draw.
    fn apply(&self, paint: Paint) -> Option<PaintMode> {
        if let Some(fill) = paint.fill {
            self.layer.set_fill_color(to_pdf_color(fill));
        }
        if let Some(stroke) = paint.stroke {
            self.layer.set_outline_color(to_pdf_color(stroke));
        }
        match (paint.fill, paint.stroke) {
            (Some(_), Some(_)) => Some(PaintMode::FillStroke),
            (Some(_), None) => Some(PaintMode::Fill),
            (None, Some(_)) => Some(PaintMode::Stroke),
            (None, None) => None,
        }
    }
}

impl Surface for PdfSurface<'_> {
    fn shape(&self, ring: &[(f32, f32)], paint: Paint) {
        let Some(mode) = self.apply(paint) else {
            return;
        };
        let ring = ring
            .iter()
            .map(|&(x, y)| (Point::new(pt_to_mm(x), pt_to_mm(y)), false))
            .collect();
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn text(&self, block: &TextBlock, x: f32, y: f32, text: &str) {
        self.layer.set_fill_color(to_pdf_color(block.color));
        self.layer
            .use_text(text, block.size, pt_to_mm(x), pt_to_mm(y), self.fonts.get(block.face));
    }
}

/// One label cell on the current page.
pub struct Canvas<'a> {
    surface: &'a dyn Surface,
    origin_x: f32,
    origin_y: f32,
    width: f32,
    height: f32,
}

impl<'a> Canvas<'a> {
    /// `origin`, `width` and `height` are in points, origin at the
    /// bottom-left corner of the cell.
    pub(super) fn new(surface: &'a dyn Surface, origin: (f32, f32), width: f32, height: f32) -> Self {
        Self {
            surface,
            origin_x: origin.0,
            origin_y: origin.1,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The x coordinate that places an element of width `w` at the same
    /// distance from the right edge as `x` is from the left edge.
    pub fn mirror_x(&self, x: f32, w: f32) -> f32 {
        self.width - x - w
    }

    fn shape(&self, ring: impl IntoIterator<Item = (f32, f32)>, paint: Paint) {
        if paint.fill.is_none() && paint.stroke.is_none() {
            return;
        }
        let ring: Vec<_> = ring
            .into_iter()
            .map(|(x, y)| (self.origin_x + x, self.origin_y + y))
            .collect();
        self.surface.shape(&ring, paint);
    }

    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32, paint: Paint) {
        self.shape([(x, y), (x + w, y), (x + w, y + h), (x, y + h)], paint);
    }

    pub fn circle(&self, cx: f32, cy: f32, radius: f32, paint: Paint) {
        let ring = (0..CIRCLE_SEGMENTS).map(|i| {
            let angle = i as f32 * std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        });
        self.shape(ring, paint);
    }

    /// Print `text` with the typeface of `block` at an explicit position.
    pub fn text_at(&self, block: &TextBlock, x: f32, y: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.surface
            .text(block, self.origin_x + x, self.origin_y + y, text);
    }

    /// Print `text` where `block` says, or mirrored horizontally.
    pub fn text(&self, block: &TextBlock, text: &str, mirrored: bool) {
        let x = if mirrored {
            self.mirror_x(block.x, block.width_of(text))
        } else {
            block.x
        };
        self.text_at(block, x, block.y, text);
    }
}
