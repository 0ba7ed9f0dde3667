use core::f64::consts::PI;
use core::ops::Mul;

pub const TAU: f64 = PI * 2.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Scale used by `smart_round`. Results are kept to 8 decimal digits.
pub const SMART_ROUND_SCALE: f64 = 100000000.0;

pub fn sqr<T>(a: T) -> T
where
    T: Copy + Mul<T, Output = T>,
{
    a * a
}

pub fn hypot2(dx: f64, dy: f64) -> f64 {
    sqr(dx) + sqr(dy)
}

/// Rounds to the nearest integer, with halves going toward positive infinity.
/// So `round_half_up(-1.5) == -1.0` and `round_half_up(1.5) == 2.0`.
/// NaN and infinities pass through.
pub fn round_half_up(f: f64) -> f64 {
    let floor = f.floor();
    if f - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Drops the floating-point tail that trig functions leave behind, e.g.
/// `1.2246467991473532e-16` becomes `0`.
pub fn smart_round(f: f64) -> f64 {
    round_half_up(f * SMART_ROUND_SCALE) / SMART_ROUND_SCALE
}

/// Wraps an angle in radians into `[0, 2π)`. `-0.0` stays `-0.0`.
pub fn wrap_radians(angle: f64) -> f64 {
    if angle < 0.0 {
        angle.rem_euclid(TAU)
    } else {
        angle
    }
}

/// Angle of the direction `dx, dy`, wrapped into `[0, 2π)`.
pub fn angle_of(dx: f64, dy: f64) -> f64 {
    wrap_radians(dy.atan2(dx))
}
