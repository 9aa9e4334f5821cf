//! Compile-time defaults shared across the kernel

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, PI, TAU};

/// Decimal places used when rendering a raw radian measure
pub const ANGLE_DISPLAY_PRECISION: usize = 2;

/// Angular slack accepted by `Angle::equivalent_within` callers that have no better bound
pub const ANGLE_TOLERANCE: f64 = 1e-9;

/// Raw radian measures rendered symbolically. Matched on exact bits, in this order.
pub const NAMED_PI_FRACTIONS: [(f64, &str); 7] = [
    (PI, "π"),
    (PI * 1.5, "3π/2"),
    (TAU, "2π"),
    (FRAC_PI_2, "π/2"),
    (FRAC_PI_4, "π/4"),
    (FRAC_PI_8, "π/8"),
    (PI / 16.0, "π/16"),
];
