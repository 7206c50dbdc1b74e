use crate::{LayoutError, Pt};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};

/// A parsed font object, used to provide real glyph metrics through
/// [`FaceMetrics`](crate::FaceMetrics). Fonts can be TTF or OTF fonts.
///
/// Faces that carry vertical metrics (a `vhea`/`vmtx` table, as CJK fonts
/// usually do) are measured with them; other faces fall back to treating each
/// glyph as occupying its ascender-to-descender height along a column.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the PostScript name of the font, which is how
    /// [`FontFamily`](crate::FontFamily) refers to faces
    pub fn postscript_name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| {
                name.name_id == owned_ttf_parser::name_id::POST_SCRIPT_NAME && name.is_unicode()
            })
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// The glyph for a character, falling back to the replacement character and then
    /// to a question mark when the font doesn't cover it
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// How far the pen moves down a column after drawing `ch`
    pub fn vertical_advance(&self, ch: char, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let units = self
            .glyph_id(ch)
            .and_then(|gid| face.glyph_ver_advance(gid))
            .map(|adv| adv as f32)
            .unwrap_or_else(|| (face.ascender() as f32 - face.descender() as f32).max(0.0));
        self.scaling(size) * units
    }

    /// How wide `ch` is across a column. Upright glyphs in vertical text are as wide as
    /// their horizontal advance; glyphs without metrics take a full em.
    pub fn horizontal_advance(&self, ch: char, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        match self.glyph_id(ch).and_then(|gid| face.glyph_hor_advance(gid)) {
            Some(adv) => self.scaling(size) * adv as f32,
            None => size,
        }
    }
}
