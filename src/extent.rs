use crate::error::LayoutError;
use crate::units::Pt;

/// The box text is laid out into, described along the vertical writing axes
/// rather than as a width and height.
///
/// * `writing` is the length of a column (top to bottom)
/// * `cross` is the room available for columns (right to left)
///
/// Use [`resolve_axes`](crate::resolve_axes) to build one from a platform's
/// width and height.
///
/// Text counts as fitting when it overruns either dimension by no more than a
/// hundred-thousandth of that dimension, which absorbs `f32` rounding in summed
/// advances.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    /// The extent along the writing axis, i.e. the height of one column
    pub writing: Pt,
    /// The extent along the cross axis, i.e. the total width available for columns
    pub cross: Pt,
}

impl Extent {
    /// Create an extent, rejecting non-positive or non-finite dimensions
    pub fn new<W: Into<Pt>, C: Into<Pt>>(writing: W, cross: C) -> Result<Extent, LayoutError> {
        let extent = Extent {
            writing: writing.into(),
            cross: cross.into(),
        };
        extent.validate()?;
        Ok(extent)
    }

    /// Check that both dimensions are finite and strictly positive
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.writing.is_finite() || self.writing <= Pt::ZERO {
            return Err(LayoutError::invalid(format!(
                "writing-axis extent must be positive, got {}",
                self.writing
            )));
        }
        if !self.cross.is_finite() || self.cross <= Pt::ZERO {
            return Err(LayoutError::invalid(format!(
                "cross-axis extent must be positive, got {}",
                self.cross
            )));
        }
        Ok(())
    }

    /// The same extent with a different amount of cross-axis room
    pub fn with_cross(&self, cross: Pt) -> Extent {
        Extent {
            writing: self.writing,
            cross,
        }
    }
}

/// The room some text actually needs, as computed by
/// [`Typesetter::measure`](crate::layout::Typesetter::measure)
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub writing: Pt,
    pub cross: Pt,
}

impl Size {
    /// Whether text of this size would fit in `extent` without scrolling or
    /// a page break
    pub fn fits_in(&self, extent: &Extent) -> bool {
        self.writing.fits_within(extent.writing) && self.cross.fits_within(extent.cross)
    }
}
