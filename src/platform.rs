//! Adapting platform view sizes to writing-axis extents.
//!
//! Older platform releases (major version 5 and below) report the size of a
//! rotated vertical text view with its width and height swapped. The layout
//! engine never deals with that: callers resolve the platform's size once, at
//! the boundary, with [`resolve_axes`].

use crate::error::LayoutError;
use crate::extent::Extent;
use crate::units::Pt;
use std::str::FromStr;

/// The last platform major version which reports swapped view sizes
pub const LAST_SWAPPED_AXES_VERSION: u32 = 5;

/// A size exactly as the platform reports it
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PlatformSize {
    pub width: Pt,
    pub height: Pt,
}

impl PlatformSize {
    pub fn new<W: Into<Pt>, H: Into<Pt>>(width: W, height: H) -> PlatformSize {
        PlatformSize {
            width: width.into(),
            height: height.into(),
        }
    }
}

/// The major version of the platform the view is rendered on
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlatformVersion(pub u32);

impl PlatformVersion {
    pub fn major(&self) -> u32 {
        self.0
    }

    /// Whether this platform reports view widths and heights swapped
    pub fn swaps_axes(&self) -> bool {
        self.0 <= LAST_SWAPPED_AXES_VERSION
    }
}

impl FromStr for PlatformVersion {
    type Err = LayoutError;

    /// Parse a dotted version string such as `"5.1.1"`, keeping only the major
    /// component
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let major = s.trim().split('.').next().unwrap_or_default();
        major
            .parse::<u32>()
            .map(PlatformVersion)
            .map_err(|_| LayoutError::invalid(format!("unrecognised platform version {s:?}")))
    }
}

/// Convert a platform-reported size into writing-axis / cross-axis extents.
///
/// Columns run down the view's height and are stacked across its width, once
/// the version-specific swap has been undone. The result is not validated;
/// the layout entry points do that.
pub fn resolve_axes(version: PlatformVersion, raw: PlatformSize) -> Extent {
    let (width, height) = if version.swaps_axes() {
        (raw.height, raw.width)
    } else {
        (raw.width, raw.height)
    };
    Extent {
        writing: height,
        cross: width,
    }
}
