use crate::error::LayoutError;
use crate::units::Pt;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_FONT_SIZE: Pt = Pt(16.0);
pub const DEFAULT_LINE_SPACE: Pt = Pt(5.0);
pub const DEFAULT_LETTER_SPACE: Pt = Pt(3.0);
pub const DEFAULT_TITLE_SIZE_RATE: f32 = 1.5;
pub const DEFAULT_TITLE_SPACING: Pt = Pt(10.0);

/// The typefaces vertical text can be set in. Faces are referred to by their
/// PostScript names when parsed or displayed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFamily {
    /// Hiragino Mincho ProN W3, a serif face
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "HiraMinProN-W3"))]
    Mincho,
    /// Hiragino Kaku Gothic ProN W3, a sans-serif face
    #[cfg_attr(feature = "serde", serde(rename = "HiraKakuProN-W3"))]
    Gothic,
}

impl FontFamily {
    pub const ALL: [FontFamily; 2] = [FontFamily::Mincho, FontFamily::Gothic];

    pub fn postscript_name(&self) -> &'static str {
        match self {
            FontFamily::Mincho => "HiraMinProN-W3",
            FontFamily::Gothic => "HiraKakuProN-W3",
        }
    }

    /// Switch to the other face
    pub fn toggle(&self) -> FontFamily {
        match self {
            FontFamily::Mincho => FontFamily::Gothic,
            FontFamily::Gothic => FontFamily::Mincho,
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.postscript_name())
    }
}

impl FromStr for FontFamily {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::ALL
            .into_iter()
            .find(|family| family.postscript_name() == s)
            .ok_or_else(|| LayoutError::invalid(format!("unrecognised font family {s:?}")))
    }
}

/// Everything about the font that affects layout. Spacing is measured in points,
/// independent of the font size:
///
/// * `line_space` is the gap between two adjacent columns
/// * `letter_space` is the gap between two adjacent characters in a column
///
/// Neither gap is added after the last column or the last character of a column.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontConfig {
    pub family: FontFamily,
    pub size: Pt,
    pub line_space: Pt,
    pub letter_space: Pt,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            family: FontFamily::default(),
            size: DEFAULT_FONT_SIZE,
            line_space: DEFAULT_LINE_SPACE,
            letter_space: DEFAULT_LETTER_SPACE,
        }
    }
}

impl FontConfig {
    /// Create a config where every value is given explicitly, rejecting invalid values
    pub fn new(
        family: FontFamily,
        size: Pt,
        line_space: Pt,
        letter_space: Pt,
    ) -> Result<FontConfig, LayoutError> {
        let config = FontConfig {
            family,
            size,
            line_space,
            letter_space,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_family(&self, family: FontFamily) -> FontConfig {
        FontConfig { family, ..*self }
    }

    pub fn with_size<P: Into<Pt>>(&self, size: P) -> FontConfig {
        FontConfig {
            size: size.into(),
            ..*self
        }
    }

    pub fn with_line_space<P: Into<Pt>>(&self, line_space: P) -> FontConfig {
        FontConfig {
            line_space: line_space.into(),
            ..*self
        }
    }

    pub fn with_letter_space<P: Into<Pt>>(&self, letter_space: P) -> FontConfig {
        FontConfig {
            letter_space: letter_space.into(),
            ..*self
        }
    }

    /// Switch the family to the other face, keeping everything else
    pub fn toggle_family(&self) -> FontConfig {
        self.with_family(self.family.toggle())
    }

    /// The same config with the font size multiplied by `rate`. Spacing is unchanged.
    pub fn scaled(&self, rate: f32) -> FontConfig {
        self.with_size(self.size * rate)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.size.is_finite() || self.size <= Pt::ZERO {
            return Err(LayoutError::invalid(format!(
                "font size must be positive, got {}",
                self.size
            )));
        }
        if !self.line_space.is_finite() || self.line_space < Pt::ZERO {
            return Err(LayoutError::invalid(format!(
                "line space must not be negative, got {}",
                self.line_space
            )));
        }
        if !self.letter_space.is_finite() || self.letter_space < Pt::ZERO {
            return Err(LayoutError::invalid(format!(
                "letter space must not be negative, got {}",
                self.letter_space
            )));
        }
        Ok(())
    }
}

/// How a title is set relative to the body text it precedes
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TitleStyle {
    /// The title font size is the body font size multiplied by this
    pub size_rate: f32,
    /// Cross-axis gap between the last title column and the first body column
    pub spacing: Pt,
}

impl Default for TitleStyle {
    fn default() -> Self {
        TitleStyle {
            size_rate: DEFAULT_TITLE_SIZE_RATE,
            spacing: DEFAULT_TITLE_SPACING,
        }
    }
}

impl TitleStyle {
    pub fn new(size_rate: f32, spacing: Pt) -> Result<TitleStyle, LayoutError> {
        let style = TitleStyle { size_rate, spacing };
        style.validate()?;
        Ok(style)
    }

    /// The font a title is set in, given the body's font
    pub fn title_font(&self, body: &FontConfig) -> FontConfig {
        body.scaled(self.size_rate)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.size_rate.is_finite() || self.size_rate <= 0.0 {
            return Err(LayoutError::invalid(format!(
                "title size rate must be positive, got {}",
                self.size_rate
            )));
        }
        if !self.spacing.is_finite() || self.spacing < Pt::ZERO {
            return Err(LayoutError::invalid(format!(
                "title spacing must not be negative, got {}",
                self.spacing
            )));
        }
        Ok(())
    }
}
