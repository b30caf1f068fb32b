//! Label styles for QR coin labels.
//!
//! A style is a TOML document describing the label body: where the QR
//! code sits, how the face value and (optionally) the seed text are
//! printed, and how the frame is drawn. Two styles are compiled in;
//! any other style is loaded from a file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

const BUILTIN_STYLES: [(&str, &str); 2] = [
    ("coin", include_str!("../../styles/coin.toml")),
    ("coin-alt", include_str!("../../styles/coin-alt.toml")),
];

#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("could not read style file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("invalid colour `{0}`, expected #rrggbb")]
    Colour(String),

    #[error("style `{name}`: {message}")]
    Invalid { name: String, message: String },
}

// ==============================================================================
// Primitive Style Values
// ==============================================================================

/// An sRGB colour written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::grey(0x00);
    pub const WHITE: Self = Self::grey(0xff);

    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, StyleError> {
        let invalid = || StyleError::Colour(raw.to_string());
        let digits = raw.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl TryFrom<String> for HexColor {
    type Error = StyleError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

/// Built-in PDF font faces. Only monospace faces are offered so that
/// text widths, and therefore mirrored layouts, are exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFace {
    #[default]
    Courier,
    CourierBold,
}

impl FontFace {
    /// Advance width of one glyph, as a fraction of the font size.
    pub const ADVANCE: f32 = 0.6;
}

fn black() -> HexColor {
    HexColor::BLACK
}

/// Position and typeface of one line (or block) of text, in points
/// from the bottom-left corner of the label cell.
#[derive(Debug, Clone, Deserialize)]
pub struct TextBlock {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    #[serde(default)]
    pub face: FontFace,
    #[serde(default = "black")]
    pub color: HexColor,
}

impl TextBlock {
    pub fn width_of(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * FontFace::ADVANCE
    }
}

// ==============================================================================
// Label Style
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameStyle {
    pub stroke: Option<HexColor>,
    pub fill: Option<HexColor>,
    /// Fill for labels whose alternation flag is set; falls back to `fill`.
    pub flipped_fill: Option<HexColor>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QrStyle {
    pub x: f32,
    pub y: f32,
    /// Side length of the code including its quiet zone.
    pub size: f32,
    #[serde(default = "default_quiet_zone")]
    pub quiet_zone: usize,
}

fn default_quiet_zone() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadingStyle {
    pub text: String,
    #[serde(flatten)]
    pub block: TextBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmountStyle {
    #[serde(default)]
    pub suffix: String,
    #[serde(flatten)]
    pub block: TextBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedTextStyle {
    pub chunk: usize,
    pub line_height: f32,
    #[serde(flatten)]
    pub block: TextBlock,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelStyle {
    pub name: String,
    #[serde(default)]
    pub frame: FrameStyle,
    pub qr: QrStyle,
    pub amount: AmountStyle,
    pub heading: Option<HeadingStyle>,
    pub seed: Option<SeedTextStyle>,
}

impl LabelStyle {
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_STYLES.iter().map(|(name, _)| *name)
    }

    /// Look up a compiled-in style by name.
    pub fn builtin(name: &str) -> Option<Result<Self, StyleError>> {
        BUILTIN_STYLES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, source)| Self::from_toml_str(source))
    }

    /// Resolve a built-in style name, or otherwise treat `spec` as a path.
    pub fn resolve(spec: &str) -> Result<Self, StyleError> {
        match Self::builtin(spec) {
            Some(style) => style,
            None => Self::load(Path::new(spec)),
        }
    }

    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let style = Self::from_toml_str(&content)?;
        tracing::debug!(name = %style.name, path = %path.display(), "loaded label style");
        Ok(style)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, StyleError> {
        let style: Self = toml::from_str(content)?;
        style.validate()?;
        Ok(style)
    }

    fn validate(&self) -> Result<(), StyleError> {
        let invalid = |message: &str| StyleError::Invalid {
            name: self.name.clone(),
            message: message.to_string(),
        };

        if self.qr.size <= 0.0 {
            return Err(invalid("qr.size must be positive"));
        }
        if self.amount.block.size <= 0.0 {
            return Err(invalid("amount.size must be positive"));
        }
        if let Some(seed) = &self.seed {
            if seed.chunk == 0 {
                return Err(invalid("seed.chunk must be at least 1"));
            }
            if seed.block.size <= 0.0 {
                return Err(invalid("seed.size must be positive"));
            }
        }
        Ok(())
    }
}
