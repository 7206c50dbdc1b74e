use super::{FitResult, Typesetter};
use crate::error::LayoutError;
use crate::extent::Extent;
use crate::metrics::Metrics;
use crate::style::FontConfig;
use crate::units::Pt;

/// The result of laying out a title and a body in the same box
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct TitledFit {
    /// How much of the title fits, set from the right edge of the box
    pub title: FitResult,
    /// How much of the body fits in the room the title left over
    pub body: FitResult,
    /// The room the body was laid out in. Its cross extent is zero if the title
    /// left no room at all.
    pub residual: Extent,
}

impl<M: Metrics> Typesetter<M> {
    /// Lay out a title and a body in one box, each with its own font.
    ///
    /// The title is set first, against the whole box. The body then gets whatever
    /// cross-axis room remains once the title's columns and the title spacing from
    /// the typesetter's [`TitleStyle`](crate::TitleStyle) are taken out. Spacing is
    /// only taken out if the title used any room.
    pub fn fit_pair(
        &self,
        title: &str,
        body: &str,
        title_font: &FontConfig,
        body_font: &FontConfig,
        extent: &Extent,
    ) -> Result<TitledFit, LayoutError> {
        title_font.validate()?;
        body_font.validate()?;
        extent.validate()?;
        self.title_style.validate()?;

        let title_fit = self.fit_unchecked(title, title_font, extent);
        let spacing = if title_fit.cross_extent > Pt::ZERO {
            self.title_style.spacing
        } else {
            Pt::ZERO
        };
        let remaining = extent.cross - title_fit.cross_extent - spacing;

        let (body_fit, residual) = if remaining > Pt::ZERO {
            let residual = extent.with_cross(remaining);
            (self.fit_unchecked(body, body_font, &residual), residual)
        } else {
            (FitResult::default(), extent.with_cross(Pt::ZERO))
        };

        log::debug!(
            "title fit {} characters in {}, body fit {} characters in {}",
            title_fit.range.length,
            title_fit.cross_extent,
            body_fit.range.length,
            residual.cross
        );

        Ok(TitledFit {
            title: title_fit,
            body: body_fit,
            residual,
        })
    }

    /// Lay out a title and a body in one box, with the title font derived from
    /// the body font by the typesetter's [`TitleStyle`](crate::TitleStyle)
    pub fn fit_titled(
        &self,
        title: &str,
        body: &str,
        font: &FontConfig,
        extent: &Extent,
    ) -> Result<TitledFit, LayoutError> {
        let title_font = self.title_style.title_font(font);
        self.fit_pair(title, body, &title_font, font, extent)
    }
}
