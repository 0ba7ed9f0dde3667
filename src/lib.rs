//! A small 2D vector type for games, simulations and graphics code that does
//! not want a full linear-algebra library.
//!
//! Everything lives on [`Vector2`]. Operations that change the vector end in
//! `_self` and return `&mut Vector2`; the rest return a new vector.

pub mod convert;
pub mod math;
pub mod ops;
pub mod parse;
pub mod vec2;

pub use crate::convert::{VectorDict, DEFAULT_FORMAT};
pub use crate::vec2::Vector2;

#[cfg(test)]
mod testing;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[test]
fn version_test() {
    assert_eq!(VERSION, "2.0.1");
}
