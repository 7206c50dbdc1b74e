use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign, Sum};

/// How far past the available room, as a fraction of that room, a length may
/// run and still fit. Covers the rounding that builds up when `f32` advances are
/// summed along a column.
pub(crate) const FIT_TOLERANCE: f32 = 1e-5;

/// A typographic point (1/72 of an inch). All lengths in the layout engine are
/// expressed in points; the metrics provider decides what a point means on screen.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Sum,
    Display,
    From,
    Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl Pt {
    pub const ZERO: Pt = Pt(0.0);

    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Whether `self` fits within `available`, allowing for rounding slack of
    /// [`FIT_TOLERANCE`] relative to `available`
    pub(crate) fn fits_within(self, available: Pt) -> bool {
        self.0 <= available.0 + available.0.abs() * FIT_TOLERANCE
    }
}

impl From<f64> for Pt {
    fn from(value: f64) -> Self {
        Pt(value as f32)
    }
}
