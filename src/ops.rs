//! Operator overloads. Each one is a thin wrapper over the matching
//! `*_self` method on `Vector2`, so `a + b` and `a.add(b)` always agree.

use crate::vec2::Vector2;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $rhs:ty, $primitive:ident) => {
        impl $trait<$rhs> for Vector2 {
            type Output = Vector2;
            fn $method(self, other: $rhs) -> Self::Output {
                let mut v = self;
                v.$primitive(other);
                v
            }
        }

        impl $assign_trait<$rhs> for Vector2 {
            fn $assign_method(&mut self, other: $rhs) {
                self.$primitive(other);
            }
        }
    };
}

binary_op!(Add, add, AddAssign, add_assign, Vector2, add_self);
binary_op!(Sub, sub, SubAssign, sub_assign, Vector2, sub_self);
binary_op!(Mul, mul, MulAssign, mul_assign, Vector2, mul_self);
binary_op!(Div, div, DivAssign, div_assign, Vector2, div_self);

binary_op!(Add, add, AddAssign, add_assign, f64, add_scalar_self);
binary_op!(Sub, sub, SubAssign, sub_assign, f64, sub_scalar_self);
binary_op!(Mul, mul, MulAssign, mul_assign, f64, mul_scalar_self);
binary_op!(Div, div, DivAssign, div_assign, f64, div_scalar_self);

impl Mul<Vector2> for f64 {
    type Output = Vector2;
    fn mul(self, other: Vector2) -> Self::Output {
        other.mul_scalar(self)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Self::Output {
        self.invert()
    }
}
