//! Conversions between `Vector2` and strings, arrays, records and JSON.
//!
//! The string form is `"x,y"`. Parsing it never fails; a part that is not a
//! number becomes NaN. For any vector with finite components,
//! `Vector2::from_delimited_string(&v.to_string()) == v` and
//! `Vector2::from_array(v.to_array()) == v`.

use crate::parse::{component_from_json, parse_float_prefix};
use crate::vec2::Vector2;
use core::convert::Infallible;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_FORMAT: &str = "%x,%y";

/// Plain `{ x, y }` record form of a vector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorDict {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Parses `"x,y"`. Each part is read like a lenient float parse: leading
    /// whitespace is skipped and trailing junk ignored. A part that holds no
    /// number, or is missing, becomes NaN.
    pub fn from_delimited_string(s: &str) -> Self {
        let mut parts = s.split(',');
        let x = parts.next().map_or(f64::NAN, parse_float_prefix);
        let y = match parts.next() {
            Some(part) => parse_float_prefix(part),
            None => {
                debug!("no y component in {:?}, using NaN", s);
                f64::NAN
            }
        };
        Self { x, y }
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn to_dict(self) -> VectorDict {
        VectorDict {
            x: self.x,
            y: self.y,
        }
    }

    /// Replaces every `%x` in `template` with x, then every `%y` with y.
    /// An empty template means `"%x,%y"`.
    ///
    /// ```
    /// # use vector2::Vector2;
    /// assert_eq!(Vector2::new(1.0, 2.0).format("%x--%y -> %x"), "1--2 -> 1");
    /// ```
    pub fn format(self, template: &str) -> String {
        let template = if template.is_empty() {
            DEFAULT_FORMAT
        } else {
            template
        };
        template
            .replace("%x", &self.x.to_string())
            .replace("%y", &self.y.to_string())
    }

    /// Reads `[x, y]` or `{"x": .., "y": ..}`.
    ///
    /// A missing component is 0. A component that is present but not a
    /// number (bool, null, string, ...) becomes NaN, ready for `repair`.
    /// Any other shape gives `(NaN, NaN)`.
    pub fn from_json(value: &Value) -> Self {
        let (x, y) = match value {
            Value::Array(items) => (items.first(), items.get(1)),
            Value::Object(map) => (map.get("x"), map.get("y")),
            _ => {
                debug!("cannot read a vector from {}, using NaN", value);
                return Self::new(f64::NAN, f64::NAN);
            }
        };
        Self::from_options(x.map(component_from_json), y.map(component_from_json))
    }

    /// The `{"x": .., "y": ..}` object form.
    pub fn to_json(self) -> Value {
        serde_json::json!({ "x": self.x, "y": self.y })
    }
}

impl Display for Vector2 {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "{},{}", self.x, self.y)
    }
}

impl FromStr for Vector2 {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_delimited_string(s))
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        v.to_array()
    }
}

impl From<Vector2> for VectorDict {
    fn from(v: Vector2) -> Self {
        v.to_dict()
    }
}

impl From<VectorDict> for Vector2 {
    fn from(d: VectorDict) -> Self {
        Self::new(d.x, d.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_vector, init_test};
    use serde_json::json;

    #[test]
    fn exports() {
        init_test();
        let v = Vector2::new(1.0, 2.0);
        assert_eq!(v.to_array(), [1.0, 2.0]);
        assert_eq!(v.to_dict(), VectorDict { x: 1.0, y: 2.0 });
        assert_eq!(v.to_string(), "1,2");
        assert_eq!(v.format("%x--%y"), "1--2");
        assert_eq!(v.format("%x--%y -> %x"), "1--2 -> 1");
        assert_eq!(v.format(""), "1,2");
        assert_eq!(v.format(DEFAULT_FORMAT), "1,2");
        assert_eq!(v.format("no tokens"), "no tokens");
        assert_eq!(Vector2::new(-0.5, 1e-7).to_string(), "-0.5,0.0000001");
    }

    #[test]
    fn from_string() {
        init_test();
        assert_vector(Vector2::from_delimited_string("42.3,10"), 42.3, 10.0);
        let v: Vector2 = "42.3,10".parse().unwrap();
        assert_vector(v, 42.3, 10.0);
        assert_vector(Vector2::from_delimited_string(" 1 , 2 "), 1.0, 2.0);
        assert_vector(Vector2::from_delimited_string("3,4,5"), 3.0, 4.0);
    }

    #[test]
    fn from_string_degrades_to_nan() {
        init_test();
        let v = Vector2::from_delimited_string("abc,7");
        assert!(v.x.is_nan());
        assert_eq!(v.y, 7.0);

        let v = Vector2::from_delimited_string("7");
        assert_eq!(v.x, 7.0);
        assert!(v.y.is_nan());

        let v = Vector2::from_delimited_string("");
        assert!(v.x.is_nan());
        assert!(v.y.is_nan());

        assert_vector(Vector2::from_delimited_string("x,2").repair(None, None), 0.0, 2.0);
    }

    #[test]
    fn round_trips() {
        init_test();
        let samples = [
            Vector2::new(0.0, 0.0),
            Vector2::new(42.3, 10.0),
            Vector2::new(-7.25, 1e-9),
            Vector2::new(1.0 / 3.0, -2.0 / 3.0),
            Vector2::new(123456789.125, f64::MAX),
            Vector2::from_degrees(33.0),
        ];
        for &v in samples.iter() {
            assert_eq!(Vector2::from_delimited_string(&v.to_string()), v);
            assert_eq!(Vector2::from_array(v.to_array()), v);
            assert_eq!(Vector2::from(v.to_dict()), v);
            assert_eq!(Vector2::from_json(&v.to_json()), v);
        }
    }

    #[test]
    fn from_impls() {
        init_test();
        assert_vector(Vector2::from([1.0, 2.0]), 1.0, 2.0);
        assert_vector(Vector2::from((3.0, 4.0)), 3.0, 4.0);
        let a: [f64; 2] = Vector2::new(5.0, 6.0).into();
        assert_eq!(a, [5.0, 6.0]);
        let d: VectorDict = Vector2::new(7.0, 8.0).into();
        assert_eq!(d, VectorDict { x: 7.0, y: 8.0 });
    }

    #[test]
    fn json() {
        init_test();
        assert_vector(Vector2::from_json(&json!([42.3, 10])), 42.3, 10.0);
        assert_vector(Vector2::from_json(&json!({"x": 1, "y": -2.5})), 1.0, -2.5);
        assert_vector(Vector2::from_json(&json!([5])), 5.0, 0.0);
        assert_vector(Vector2::from_json(&json!({"y": 5})), 0.0, 5.0);
        assert_eq!(Vector2::new(1.5, 2.0).to_json(), json!({"x": 1.5, "y": 2.0}));

        let v = Vector2::from_json(&json!("1,2"));
        assert!(v.x.is_nan() && v.y.is_nan());
    }

    #[test]
    fn json_non_numbers_are_repaired() {
        init_test();
        let v = Vector2::from_json(&json!([5, null]));
        assert_vector(v.repair(None, None), 5.0, 0.0);

        let v = Vector2::from_json(&json!([null, 0]));
        assert_vector(v.repair(Some(5.0), Some(5.0)), 5.0, 0.0);

        // y is missing, so it is 0 before repair ever looks at it
        let v = Vector2::from_json(&json!([false]));
        assert_vector(v.repair(Some(4.0), Some(4.0)), 4.0, 0.0);

        // true is not a number, even though it is truthy
        let v = Vector2::from_json(&json!([true, "NaN"]));
        assert_vector(v.repair(Some(3.0), Some(3.0)), 3.0, 3.0);
    }

    #[test]
    fn serde_object_form() {
        init_test();
        let v = Vector2::new(3.0, -4.0);
        let text = serde_json::to_string(&v).unwrap();
        assert_eq!(text, r#"{"x":3.0,"y":-4.0}"#);
        let back: Vector2 = serde_json::from_str(&text).unwrap();
        assert_eq!(back, v);

        let d: VectorDict = serde_json::from_str(r#"{"x":1,"y":2}"#).unwrap();
        assert_eq!(Vector2::from(d), Vector2::new(1.0, 2.0));
    }
}
