use crate::math::{angle_of, hypot2, round_half_up, smart_round, DEG_TO_RAD, RAD_TO_DEG};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// A 2D vector.
///
/// Most operations come in pairs. The `*_self` form changes the vector in
/// place and returns `&mut Self` so calls can be chained:
///
/// ```
/// use vector2::Vector2;
/// let mut v = Vector2::new(1.0, 2.0);
/// v.mul_scalar_self(3.0).add_self(Vector2::ONE);
/// assert_eq!(v, Vector2::new(4.0, 7.0));
/// ```
///
/// The other form leaves the receiver alone and returns a new vector. It is
/// always "copy, then call the `*_self` form", so the two cannot disagree.
///
/// Nothing here panics on odd numeric input. Division by zero gives
/// infinities or NaN, the same as plain `f64` math. Use `repair` to turn
/// such components back into finite numbers.
#[derive(Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    pub const ONE: Vector2 = Vector2 { x: 1.0, y: 1.0 };
    pub const UP: Vector2 = Vector2 { x: 0.0, y: -1.0 };
    pub const DOWN: Vector2 = Vector2 { x: 0.0, y: 1.0 };
    pub const LEFT: Vector2 = Vector2 { x: -1.0, y: 0.0 };
    pub const RIGHT: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    pub const UP_LEFT: Vector2 = Vector2 { x: -1.0, y: -1.0 };
    pub const DOWN_LEFT: Vector2 = Vector2 { x: -1.0, y: 1.0 };
    pub const UP_RIGHT: Vector2 = Vector2 { x: 1.0, y: -1.0 };
    pub const DOWN_RIGHT: Vector2 = Vector2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector where a missing component is 0.
    pub fn from_options(x: Option<f64>, y: Option<f64>) -> Self {
        Self {
            x: x.unwrap_or(0.0),
            y: y.unwrap_or(0.0),
        }
    }

    /// Unit vector at `angle` radians. 0 points along +x; angles grow the
    /// same way `atan2` measures them.
    pub fn from_radians(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self { x: c, y: s }
    }

    pub fn from_degrees(angle: f64) -> Self {
        Self::from_radians(angle * DEG_TO_RAD)
    }

    pub fn from_array(a: [f64; 2]) -> Self {
        Self { x: a[0], y: a[1] }
    }

    /// Takes x and y from the first two elements. A missing element is 0.
    pub fn from_slice(a: &[f64]) -> Self {
        Self::from_options(a.first().copied(), a.get(1).copied())
    }

    pub fn equals(self, other: Vector2) -> bool {
        self == other
    }

    pub fn copy(&mut self, other: Vector2) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    pub fn copy_x(&mut self, other: Vector2) -> &mut Self {
        self.x = other.x;
        self
    }

    pub fn copy_y(&mut self, other: Vector2) -> &mut Self {
        self.y = other.y;
        self
    }

    /// Writes only the components that are `Some`. Unlike `from_options`,
    /// `None` keeps the current value rather than meaning 0.
    pub fn set(&mut self, x: Option<f64>, y: Option<f64>) -> &mut Self {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        self
    }

    // geometry

    pub fn length(self) -> f64 {
        hypot2(self.x, self.y).sqrt()
    }

    pub fn magnitude(self) -> f64 {
        self.length()
    }

    pub fn distance_from(self, other: Vector2) -> f64 {
        hypot2(other.x - self.x, other.y - self.y).sqrt()
    }

    /// Angle of the line from `self` to `other`, in `[0, 2π)`.
    pub fn radians_to(self, other: Vector2) -> f64 {
        angle_of(other.x - self.x, other.y - self.y)
    }

    /// Angle of the line from `self` to `other`, in `[0, 360)`.
    pub fn degrees_to(self, other: Vector2) -> f64 {
        self.radians_to(other) * RAD_TO_DEG
    }

    /// Same as `Vector2::ZERO.radians_to(self)`.
    pub fn to_radians(self) -> f64 {
        Self::ZERO.radians_to(self)
    }

    pub fn to_degrees(self) -> f64 {
        self.to_radians() * RAD_TO_DEG
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product, `x1*y2 - y1*x2`.
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Scales to length 1. A zero-length vector is left as it is.
    pub fn normalize_self(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            trace!("normalize: zero-length vector left unchanged");
            return self;
        }
        self.x /= len;
        self.y /= len;
        self
    }

    pub fn normalize(self) -> Vector2 {
        let mut v = self;
        v.normalize_self();
        v
    }

    /// Rotates by `angle` radians. Each resulting coordinate is rounded to 8
    /// decimal digits, so rotating `(2, 0)` by a quarter turn gives exactly
    /// `(0, 2)`.
    pub fn rotate_radians_self(&mut self, angle: f64) -> &mut Self {
        let (sa, ca) = angle.sin_cos();
        let x = self.x * ca - self.y * sa;
        let y = self.x * sa + self.y * ca;
        self.x = smart_round(x);
        self.y = smart_round(y);
        self
    }

    pub fn rotate_radians(self, angle: f64) -> Vector2 {
        let mut v = self;
        v.rotate_radians_self(angle);
        v
    }

    pub fn rotate_degrees_self(&mut self, angle: f64) -> &mut Self {
        self.rotate_radians_self(angle * DEG_TO_RAD)
    }

    pub fn rotate_degrees(self, angle: f64) -> Vector2 {
        let mut v = self;
        v.rotate_degrees_self(angle);
        v
    }

    // arithmetic

    pub fn add_self(&mut self, other: Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn sub_self(&mut self, other: Vector2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn mul_self(&mut self, other: Vector2) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    pub fn div_self(&mut self, other: Vector2) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }

    pub fn add_scalar_self(&mut self, val: f64) -> &mut Self {
        self.x += val;
        self.y += val;
        self
    }

    pub fn sub_scalar_self(&mut self, val: f64) -> &mut Self {
        self.x -= val;
        self.y -= val;
        self
    }

    pub fn mul_scalar_self(&mut self, val: f64) -> &mut Self {
        self.x *= val;
        self.y *= val;
        self
    }

    pub fn div_scalar_self(&mut self, val: f64) -> &mut Self {
        self.x /= val;
        self.y /= val;
        self
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        let mut v = self;
        v.add_self(other);
        v
    }

    pub fn sub(self, other: Vector2) -> Vector2 {
        let mut v = self;
        v.sub_self(other);
        v
    }

    pub fn mul(self, other: Vector2) -> Vector2 {
        let mut v = self;
        v.mul_self(other);
        v
    }

    pub fn div(self, other: Vector2) -> Vector2 {
        let mut v = self;
        v.div_self(other);
        v
    }

    pub fn add_scalar(self, val: f64) -> Vector2 {
        let mut v = self;
        v.add_scalar_self(val);
        v
    }

    pub fn sub_scalar(self, val: f64) -> Vector2 {
        let mut v = self;
        v.sub_scalar_self(val);
        v
    }

    pub fn mul_scalar(self, val: f64) -> Vector2 {
        let mut v = self;
        v.mul_scalar_self(val);
        v
    }

    pub fn div_scalar(self, val: f64) -> Vector2 {
        let mut v = self;
        v.div_scalar_self(val);
        v
    }

    /// `(x, y)` becomes `(-x, -y)`.
    pub fn invert_self(&mut self) -> &mut Self {
        self.mul_scalar_self(-1.0)
    }

    pub fn invert(self) -> Vector2 {
        self.mul_scalar(-1.0)
    }

    pub fn flip_xy_self(&mut self) -> &mut Self {
        core::mem::swap(&mut self.x, &mut self.y);
        self
    }

    pub fn flip_xy(self) -> Vector2 {
        let mut v = self;
        v.flip_xy_self();
        v
    }

    /// Calls `f` on x, then on y, storing each result.
    pub fn apply_self<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(f64) -> f64,
    {
        self.x = f(self.x);
        self.y = f(self.y);
        self
    }

    pub fn apply<F>(self, f: F) -> Vector2
    where
        F: FnMut(f64) -> f64,
    {
        let mut v = self;
        v.apply_self(f);
        v
    }

    pub fn abs_self(&mut self) -> &mut Self {
        self.apply_self(f64::abs)
    }

    pub fn abs(self) -> Vector2 {
        let mut v = self;
        v.abs_self();
        v
    }

    /// Rounds both components, halves toward positive infinity.
    pub fn round_self(&mut self) -> &mut Self {
        self.apply_self(round_half_up)
    }

    pub fn round(self) -> Vector2 {
        let mut v = self;
        v.round_self();
        v
    }

    /// Raises each component to `min`, then lowers it to `max`. The bounds
    /// are not checked against each other: if `min.x > max.x`, x ends up at
    /// `max.x` whenever it was below `max.x` or `min.x`.
    pub fn clamp_self(&mut self, min: Vector2, max: Vector2) -> &mut Self {
        if self.x < min.x {
            self.x = min.x;
        }
        if self.y < min.y {
            self.y = min.y;
        }
        if self.x > max.x {
            self.x = max.x;
        }
        if self.y > max.y {
            self.y = max.y;
        }
        self
    }

    pub fn clamp(self, min: Vector2, max: Vector2) -> Vector2 {
        let mut v = self;
        v.clamp_self(min, max);
        v
    }

    /// Replaces any component that is NaN or infinite with the default given
    /// for that axis. A missing or non-finite default means 0. Zero is a
    /// valid component and is never replaced.
    ///
    /// After this call both components are finite.
    pub fn repair_self(&mut self, default_x: Option<f64>, default_y: Option<f64>) -> &mut Self {
        self.x = repair_component("x", self.x, default_x);
        self.y = repair_component("y", self.y, default_y);
        self
    }

    pub fn repair(self, default_x: Option<f64>, default_y: Option<f64>) -> Vector2 {
        let mut v = self;
        v.repair_self(default_x, default_y);
        v
    }
}

fn repair_component(axis: &str, value: f64, default: Option<f64>) -> f64 {
    if value.is_finite() {
        return value;
    }
    let replacement = default.filter(|d| d.is_finite()).unwrap_or(0.0);
    debug!("repair: {} = {} replaced with {}", axis, value, replacement);
    replacement
}

impl core::fmt::Debug for Vector2 {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "({:?}, {:?})", self.x, self.y)
    }
}
