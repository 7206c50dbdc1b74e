use crate::font::Font;
use crate::style::{FontConfig, FontFamily};
use crate::units::Pt;

/// How much room a character (or a run of characters) takes up in a column
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Advance {
    /// Distance along the column, top to bottom
    pub writing: Pt,
    /// Width across the column
    pub cross: Pt,
}

/// Supplies glyph metrics to the layout engine.
///
/// Implementations are queried through `&self` only and must not mutate shared
/// font state, so one provider can serve any number of layouts at once.
pub trait Metrics {
    /// The advance of a single character set in `font`
    fn advance(&self, ch: char, font: &FontConfig) -> Advance;

    /// The combined advance of a run of characters, without any letter spacing:
    /// the sum of the writing advances and the widest cross extent. Providers that
    /// can measure runs faster than one character at a time may override this.
    fn measure_run(&self, run: &str, font: &FontConfig) -> Advance {
        run.chars()
            .map(|ch| self.advance(ch, font))
            .fold(Advance::default(), |total, adv| Advance {
                writing: total.writing + adv.writing,
                cross: total.cross.max(adv.cross),
            })
    }
}

impl<M: Metrics + ?Sized> Metrics for &M {
    fn advance(&self, ch: char, font: &FontConfig) -> Advance {
        (**self).advance(ch, font)
    }

    fn measure_run(&self, run: &str, font: &FontConfig) -> Advance {
        (**self).measure_run(run, font)
    }
}

/// Metrics where every character occupies the same box, a multiple of the font
/// size in each direction. With the default of one em square this is exactly how
/// full-width CJK text is set, and it needs no font file.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMetrics {
    /// Writing-axis advance, in ems
    pub writing_em: f32,
    /// Cross-axis width, in ems
    pub cross_em: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        MonospaceMetrics {
            writing_em: 1.0,
            cross_em: 1.0,
        }
    }
}

impl Metrics for MonospaceMetrics {
    fn advance(&self, _ch: char, font: &FontConfig) -> Advance {
        Advance {
            writing: font.size * self.writing_em,
            cross: font.size * self.cross_em,
        }
    }

    fn measure_run(&self, run: &str, font: &FontConfig) -> Advance {
        let count = run.chars().count();
        if count == 0 {
            return Advance::default();
        }
        Advance {
            writing: font.size * (self.writing_em * count as f32),
            cross: font.size * self.cross_em,
        }
    }
}

/// Metrics read from real font faces, one for each [`FontFamily`]
pub struct FaceMetrics {
    mincho: Font,
    gothic: Font,
}

impl FaceMetrics {
    pub fn new(mincho: Font, gothic: Font) -> FaceMetrics {
        log::debug!(
            "loaded faces {:?} (mincho) and {:?} (gothic)",
            mincho.postscript_name(),
            gothic.postscript_name()
        );
        FaceMetrics { mincho, gothic }
    }

    pub fn font(&self, family: FontFamily) -> &Font {
        match family {
            FontFamily::Mincho => &self.mincho,
            FontFamily::Gothic => &self.gothic,
        }
    }
}

impl Metrics for FaceMetrics {
    fn advance(&self, ch: char, font: &FontConfig) -> Advance {
        let face = self.font(font.family);
        Advance {
            writing: face.vertical_advance(ch, font.size),
            cross: face.horizontal_advance(ch, font.size),
        }
    }
}
