//! Vertical text layout: fitting, pagination, and measurement.
//!
//! Text is set in columns which run from top to bottom, and columns are
//! stacked from right to left. Everything here is expressed along two axes:
//!
//! - the _writing axis_, along which characters advance within a column
//! - the _cross axis_, along which successive columns advance
//!
//! All layout goes through a [`Typesetter`], which pairs a [`Metrics`]
//! provider with the policies that aren't part of the font itself. The
//! operations available are:
//!
//! - [`fit`](Typesetter::fit) - the longest prefix of a string that fits in a box
//! - [`columns`](Typesetter::columns) - the same fit, broken down into columns for drawing
//! - [`fit_titled`](Typesetter::fit_titled) - a title and a body sharing one box
//! - [`paginate`](Typesetter::paginate) - a lazy sequence of box-sized pages covering a string
//! - [`measure`](Typesetter::measure) - the room a string needs when unconstrained
//!
//! # Example
//!
//! ```
//! use vertical_text::{Extent, FontConfig, MonospaceMetrics, Pt};
//! use vertical_text::layout::Typesetter;
//!
//! let typesetter = Typesetter::new(MonospaceMetrics::default());
//! let font = FontConfig::default().with_size(10.0).with_letter_space(0.0).with_line_space(0.0);
//! let extent = Extent::new(50.0, 20.0).expect("valid extent");
//!
//! // two columns of five characters each
//! let fit = typesetter.fit("縦書きのテキストです", &font, &extent).expect("valid config");
//! assert_eq!(fit.range.length, 10);
//! assert_eq!(fit.columns, 2);
//!
//! let pages: Vec<_> = typesetter
//!     .paginate("縦書きのテキストを何ページにも分けて組む", &font, &extent)
//!     .expect("valid config")
//!     .collect_ranges()
//!     .expect("every character fits");
//! assert_eq!(pages.len(), 2);
//! ```

mod fit;
mod measure;
mod paginate;
mod titled;

pub use fit::*;
pub use paginate::*;
pub use titled::*;

use crate::metrics::Metrics;
use crate::style::TitleStyle;

/// How line break characters in the text are treated
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineBreaks {
    /// Line breaks are ordinary characters and are measured like any other
    #[default]
    Ordinary,
    /// Line breaks end the current column and `"\r\n"` counts as a single break.
    /// A break ending a column that holds characters takes up no room; one ending
    /// an empty column leaves a blank column as wide as the font size. Breaks that
    /// don't fit are left for the next box.
    Literal,
}

/// Whether `ch` is a mandatory line break
pub(crate) fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// Lays out vertical text using a metrics provider.
///
/// A typesetter holds no state between calls; every operation is a pure function
/// of its arguments and the provider's metrics, so one typesetter can be shared
/// freely.
#[derive(Debug, Clone)]
pub struct Typesetter<M> {
    metrics: M,
    line_breaks: LineBreaks,
    title_style: TitleStyle,
}

impl<M: Metrics> Typesetter<M> {
    /// Create a typesetter with [`LineBreaks::Ordinary`] and the default [`TitleStyle`]
    pub fn new(metrics: M) -> Typesetter<M> {
        Typesetter {
            metrics,
            line_breaks: LineBreaks::default(),
            title_style: TitleStyle::default(),
        }
    }

    pub fn with_line_breaks(self, line_breaks: LineBreaks) -> Typesetter<M> {
        Typesetter {
            line_breaks,
            ..self
        }
    }

    pub fn with_title_style(self, title_style: TitleStyle) -> Typesetter<M> {
        Typesetter {
            title_style,
            ..self
        }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn line_breaks(&self) -> LineBreaks {
        self.line_breaks
    }

    pub fn title_style(&self) -> &TitleStyle {
        &self.title_style
    }
}
