//! Vertical text layout.
//!
//! Lays out text in columns which run top to bottom and are stacked right to
//! left, as in traditional Japanese typesetting (_tategaki_). Given a string, a
//! font, and a box, the engine works out how much of the string fits, where each
//! column goes, and how to split a long string into box-sized pages. Drawing the
//! glyphs is left to the caller.
//!
//! Glyph metrics come from a [`Metrics`] provider: [`MonospaceMetrics`] for
//! uniform em-square layout, or [`FaceMetrics`] for metrics read from real font
//! files. See the [`layout`] module for the layout operations themselves.

mod error;
pub use error::*;

mod extent;
pub use extent::*;

mod font;
pub use font::*;

/// Fitting, pagination, and measurement of vertical text
pub mod layout;

mod metrics;
pub use metrics::*;

mod platform;
pub use platform::*;

mod style;
pub use style::*;

mod units;
pub use units::*;
