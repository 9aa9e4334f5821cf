//! Canonical-radian angles.
//!
//! An [`Angle`] stores its raw radian measure exactly as constructed. The
//! canonical view in `(-π, π]` is derived on demand by [`normalize_rads`], so
//! arithmetic on angles never loses the number of full turns involved.
//!
//! Two notions of sameness exist:
//! - equality (`==`) compares raw measures bit for bit, so `0` and `2π` differ;
//! - [`Angle::equivalent`] compares canonical views, so `0`, `2π` and `-2π` agree.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::defaults;

/// Reduce a radian measure into `(-π, π]`.
///
/// Uses a euclidean remainder, so negative inputs and inputs many turns away
/// from zero land in the same interval.
pub fn normalize_rads(rads: f64) -> f64 {
    let r = rads.rem_euclid(TAU);
    if r > PI { r - TAU } else { r }
}

/// An angle in radians
#[derive(Clone, Copy, Debug, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    pub fn from_radians(rads: f64) -> Self {
        Angle(rads)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees * TAU / 360.0)
    }

    /// The measure as constructed, without normalization
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// The canonical measure in `(-π, π]`
    pub fn radians(self) -> f64 {
        normalize_rads(self.0)
    }

    /// The canonical measure converted to degrees, in `(-180, 180]`
    pub fn degrees(self) -> f64 {
        360.0 * (self.radians() / TAU)
    }

    /// A quarter turn counter-clockwise, normalized
    pub fn perpendicular(self) -> Angle {
        Angle(normalize_rads(self.0 + FRAC_PI_2))
    }

    /// A half turn, normalized
    pub fn opposite(self) -> Angle {
        Angle(normalize_rads(self.0 + PI))
    }

    /// Division that refuses a zero or non-finite divisor instead of
    /// producing an infinite or NaN measure.
    pub fn checked_div(self, divisor: f64) -> Option<Angle> {
        if divisor == 0.0 || !divisor.is_finite() {
            None
        } else {
            Some(Angle(self.0 / divisor))
        }
    }

    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    pub fn cos(self) -> f64 {
        self.radians().cos()
    }

    pub fn tan(self) -> f64 {
        self.radians().tan()
    }

    pub fn asin(self) -> f64 {
        self.radians().asin()
    }

    pub fn acos(self) -> f64 {
        self.radians().acos()
    }

    pub fn atan(self) -> f64 {
        self.radians().atan()
    }

    /// True when both angles point the same way, whatever their turn counts.
    pub fn equivalent(&self, other: &Angle) -> bool {
        self.radians() == other.radians()
    }

    /// Like [`Angle::equivalent`], but accepts canonical views that differ by
    /// at most `tolerance` radians around the circle. Arithmetic round trips
    /// rarely land on identical bits, so comparisons of computed angles use this.
    pub fn equivalent_within(&self, other: &Angle, tolerance: f64) -> bool {
        normalize_rads(self.radians() - other.radians()).abs() <= tolerance
    }
}

// Raw bit identity: 0.0 and -0.0 differ, a NaN equals itself.
impl PartialEq for Angle {
    fn eq(&self, other: &Angle) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Angle {}

impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}
impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle { Angle(self.0 * rhs) }
}

// NOTE: a zero divisor follows IEEE semantics (inf/NaN measure).
// Use Angle::checked_div() to reject it up front.
impl Div<f64> for Angle {
    type Output = Angle;
    fn div(self, rhs: f64) -> Angle {
        if rhs == 0.0 {
            crate::log::warn!(rads = self.0, "angle divided by zero");
        }
        Angle(self.0 / rhs)
    }
}

/// Negates the raw measure. Unlike [`Angle::opposite`], no normalization happens.
impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle { Angle(-self.0) }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let named = defaults::NAMED_PI_FRACTIONS
            .iter()
            .find(|(value, _)| value.to_bits() == self.0.to_bits());

        match named {
            Some((_, symbol)) => write!(f, "{} radians", symbol),
            None => write!(
                f,
                "{:.*} radians",
                defaults::ANGLE_DISPLAY_PRECISION,
                self.0
            ),
        }
    }
}
