//! Colored point restricted to a `ColorRegistry`, with accessors and
//! pairwise distances.
//!
//! Validation is owned here: construction checks the registry it is given and
//! does not go through `ColorPoint::new`, so colors such as "periwinkle" are
//! accepted even though the base palette lacks them.

use std::fmt;

use crate::capabilities::{distance_between, Colored, Coordinates};
use crate::error::PointError;
use crate::point::fmt_xy;
use crate::registry::ColorRegistry;

/// Color used by `AdvancedPoint::from_tuple`.
pub const DEFAULT_COLOR: &str = "red";

/// Point with a writable `x`, read-only `y` and `color`.
///
/// `y` cannot be changed after construction:
///
/// ```compile_fail
/// use pointkit::{AdvancedPoint, ColorRegistry};
/// let reg = ColorRegistry::default();
/// let mut p = AdvancedPoint::new(1.0, 2.0, "red", &reg).unwrap();
/// p.set_y(5.0);
/// ```
///
/// ```compile_fail
/// use pointkit::{AdvancedPoint, ColorRegistry};
/// let reg = ColorRegistry::default();
/// let mut p = AdvancedPoint::new(1.0, 2.0, "red", &reg).unwrap();
/// p.y = 5.0;
/// ```
///
/// Neither can `color`:
///
/// ```compile_fail
/// use pointkit::{AdvancedPoint, ColorRegistry};
/// let reg = ColorRegistry::default();
/// let mut p = AdvancedPoint::new(1.0, 2.0, "red", &reg).unwrap();
/// p.color = String::from("blue");
/// ```
#[derive(Clone, PartialEq)]
pub struct AdvancedPoint {
    x: f64,
    y: f64,
    color: String,
}

impl AdvancedPoint {
    /// Fails with `PointError::InvalidColor` when `color` is not currently in
    /// `registry`. Coordinates are not validated.
    pub fn new(
        x: f64,
        y: f64,
        color: impl Into<String>,
        registry: &ColorRegistry,
    ) -> Result<Self, PointError> {
        let color = color.into();
        if !registry.contains(&color) {
            return Err(PointError::InvalidColor {
                color,
                allowed: registry.colors().to_vec(),
            });
        }
        Ok(Self { x, y, color })
    }

    /// Build from an `(x, y)` pair with the default color.
    pub fn from_tuple(coordinate: (f64, f64), registry: &ColorRegistry) -> Result<Self, PointError> {
        Self::from_tuple_with_color(coordinate, DEFAULT_COLOR, registry)
    }

    pub fn from_tuple_with_color(
        (x, y): (f64, f64),
        color: impl Into<String>,
        registry: &ColorRegistry,
    ) -> Result<Self, PointError> {
        Self::new(x, y, color, registry)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Euclidean distance between `p1` and `p2`.
    #[inline]
    pub fn distance_2_points(p1: &AdvancedPoint, p2: &AdvancedPoint) -> f64 {
        distance_between(p1, p2)
    }

    /// Same formula as `distance_2_points`, with `self` as the first point.
    #[inline]
    pub fn distance_to_other(&self, p: &AdvancedPoint) -> f64 {
        distance_between(self, p)
    }
}

impl Coordinates for AdvancedPoint {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Colored for AdvancedPoint {
    #[inline]
    fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for AdvancedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_xy(self.x, self.y, f)
    }
}

impl fmt::Debug for AdvancedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_xy(self.x, self.y, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::OriginDistance;
    use crate::color_point::ColorPoint;

    #[test]
    fn unknown_color_rejected_with_allowed_list() {
        let reg = ColorRegistry::default();
        let err = AdvancedPoint::new(1.0, 2.0, "ultraviolet", &reg).unwrap_err();
        match &err {
            PointError::InvalidColor { color, allowed } => {
                assert_eq!(color, "ultraviolet");
                assert_eq!(allowed.as_slice(), reg.colors());
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("periwinkle"));
    }

    #[test]
    fn registered_color_accepted_afterwards() {
        let mut reg = ColorRegistry::default();
        assert!(AdvancedPoint::new(1.0, 2.0, "rojo", &reg).is_err());
        reg.add_color("rojo");
        let p = AdvancedPoint::new(1.0, 2.0, "rojo", &reg).unwrap();
        assert_eq!(p.color(), "rojo");
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.to_string(), "<x=1, y=2>");
        assert!((p.distance_to_orig() - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn existing_points_survive_registry_changes() {
        let reg = ColorRegistry::default();
        let p = AdvancedPoint::new(0.0, 1.0, "white", &reg).unwrap();
        let narrowed = ColorRegistry::from_colors(["red"]);
        assert!(!narrowed.contains(p.color()));
        assert_eq!(p.color(), "white");
    }

    #[test]
    fn bypasses_base_palette() {
        let reg = ColorRegistry::default();
        assert!(ColorPoint::new(0.0, 0.0, "periwinkle").is_err());
        assert!(AdvancedPoint::new(0.0, 0.0, "periwinkle", &reg).is_ok());
    }

    #[test]
    fn debug_matches_point_form() {
        let reg = ColorRegistry::default();
        let p = AdvancedPoint::new(1.0, 2.0, "red", &reg).unwrap();
        assert_eq!(format!("{:?}", p), "<x=1, y=2>");
        assert_eq!(format!("{:?}", vec![p]), "[<x=1, y=2>]");
    }

    #[test]
    fn from_tuple_defaults_to_red() {
        let reg = ColorRegistry::default();
        let p = AdvancedPoint::from_tuple((3.0, 2.0), &reg).unwrap();
        assert_eq!((p.x(), p.y(), p.color()), (3.0, 2.0, "red"));

        let b = AdvancedPoint::from_tuple_with_color((3.0, 2.0), "blue", &reg).unwrap();
        assert_eq!(b.color(), "blue");
        assert!(AdvancedPoint::from_tuple_with_color((3.0, 2.0), "teal", &reg).is_err());
    }

    #[test]
    fn from_tuple_fails_when_default_missing() {
        let reg = ColorRegistry::from_colors(["blue"]);
        assert!(AdvancedPoint::from_tuple((0.0, 0.0), &reg).is_err());
    }

    #[test]
    fn pairwise_distances_agree() {
        let reg = ColorRegistry::default();
        let o = AdvancedPoint::new(0.0, 0.0, "red", &reg).unwrap();
        let p = AdvancedPoint::new(3.0, 4.0, "red", &reg).unwrap();
        assert_eq!(AdvancedPoint::distance_2_points(&o, &p), 5.0);
        assert_eq!(o.distance_to_other(&p), AdvancedPoint::distance_2_points(&o, &p));
    }

    #[test]
    fn set_x_changes_distances() {
        let reg = ColorRegistry::default();
        let mut p = AdvancedPoint::new(3.0, 4.0, "red", &reg).unwrap();
        let o = AdvancedPoint::new(0.0, 0.0, "red", &reg).unwrap();
        p.set_x(0.0);
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.distance_to_other(&o), 4.0);
        assert_eq!(p.distance_to_orig(), 4.0);
    }
}
