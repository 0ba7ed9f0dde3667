use crate::Vector2;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Checks both components exactly, the same way `to_array` would compare.
#[track_caller]
pub fn assert_vector(v: Vector2, x: f64, y: f64) {
    assert_eq!(v.to_array(), [x, y], "vector {:?} != ({:?}, {:?})", v, x, y);
}

pub const APPROX_TOLERANCE: f64 = 1e-9;

#[track_caller]
pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < APPROX_TOLERANCE,
        "{} is not close to {}",
        actual,
        expected
    );
}
