//! Length and font-size units used by PresentationML.
//!
//! Positions and extents are stored in English Metric Units (EMU); font sizes
//! in hundredths of a point, which is what `a:rPr/@sz` expects.

use std::fmt;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Emu(pub i64);

impl Emu {
    #[inline]
    pub const fn from_inches(inches: i64) -> Self {
        Self(inches * EMUS_PER_INCH)
    }

    #[inline]
    pub fn from_inches_f64(inches: f64) -> Self {
        Self((inches * EMUS_PER_INCH as f64).round() as i64)
    }

    #[inline]
    pub const fn from_cm(cm: i64) -> Self {
        Self(cm * EMUS_PER_CM)
    }

    #[inline]
    pub const fn from_points(pt: i64) -> Self {
        Self(pt * EMUS_PER_PT)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn to_inches(self) -> f64 {
        self.0 as f64 / EMUS_PER_INCH as f64
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A font size, stored in hundredths of a point.
///
/// ```
/// use slidesmith::common::FontSize;
/// let size = FontSize::from_points(24);
/// assert_eq!(size.hundredths(), 2400);
/// assert_eq!(size.points(), 24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u32);

impl FontSize {
    /// Smallest size PowerPoint accepts (1pt).
    pub const MIN: FontSize = FontSize(100);
    /// Largest size PowerPoint accepts (4000pt).
    pub const MAX: FontSize = FontSize(400_000);

    /// Build from whole points, clamped like [`FontSize::from_hundredths`].
    #[inline]
    pub const fn from_points(pt: u32) -> Self {
        Self::from_hundredths(pt.saturating_mul(100))
    }

    /// Build from hundredths of a point, clamped to the range PowerPoint accepts.
    #[inline]
    pub const fn from_hundredths(value: u32) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    #[inline]
    pub const fn hundredths(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn points(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}pt", self.0 / 100)
        } else {
            write!(f, "{:.2}pt", self.points())
        }
    }
}
