//! Plain 2D point and origin-distance sorting.

use std::fmt;

use crate::capabilities::{Coordinates, OriginDistance};

/// A point in the plane with freely mutable coordinates.
///
/// `PartialEq` is structural. Use `OriginDistance::same_origin_distance` for
/// the "equally far from the origin" relation.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Coordinates for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Shared `<x=.., y=..>` rendering for every point type.
pub(crate) fn fmt_xy(x: f64, y: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<x={}, y={}>", x, y)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_xy(self.x, self.y, f)
    }
}

// Debug output doubles as the list representation, so it matches Display.
impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_xy(self.x, self.y, f)
    }
}

/// Sort ascending by origin-distance (binary insertion, stable).
///
/// Only ever asks "is A farther from the origin than B", so it never panics.
/// A NaN coordinate is never farther than anything, which breaks the order
/// the binary search relies on: with a NaN present the result is unspecified
/// and finite points may stay unsorted.
pub fn sort_by_origin_distance<T: Coordinates>(points: &mut [T]) {
    for i in 1..points.len() {
        // binary search over the sorted prefix [0, i)
        let mut lo = 0usize;
        let mut hi = i;
        while lo < hi {
            let mid = (lo + hi) / 2;
            if points[mid].farther_from_origin(&points[i]) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        // lo is insertion point
        if lo < i {
            points[lo..=i].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_debug_share_format() {
        let p = Point::new(1.0, -55.0);
        assert_eq!(p.to_string(), "<x=1, y=-55>");
        assert_eq!(format!("{:?}", p), "<x=1, y=-55>");
        assert_eq!(format!("{:?}", vec![Point::new(0.5, 2.0)]), "[<x=0.5, y=2>]");
    }

    #[test]
    fn distance_to_orig_three_four_five() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.distance_to_orig(), 5.0);
    }

    #[test]
    fn equal_distance_but_structurally_different() {
        let a = Point::new(3.0, 4.0);
        let b = Point::new(5.0, 0.0);
        assert!(a.same_origin_distance(&b));
        assert_ne!(a, b);
        assert!(!a.farther_from_origin(&b));
    }

    #[test]
    fn farther_from_origin_examples() {
        let p = Point::new(3.0, 4.0);
        let p2 = Point::new(1.0, 1.0);
        assert!(p.farther_from_origin(&p2));
        assert!(!p.same_origin_distance(&p2));
        assert!(p2.closer_to_origin(&p));
    }

    #[test]
    fn mutating_x_changes_distance() {
        let mut p = Point::new(1.0, 2.0);
        p.x = 20.0;
        assert_eq!(p.to_string(), "<x=20, y=2>");
        assert!((p.distance_to_orig() - 404f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn sort_orders_by_distance_and_is_stable() {
        let mut pts = vec![
            Point::new(5.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(-3.0, 4.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, -5.0),
            Point::new(2.0, 0.0),
        ];
        sort_by_origin_distance(&mut pts);
        let expected = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(-3.0, 4.0),
            Point::new(0.0, -5.0),
        ];
        assert_eq!(pts, expected);
    }

    #[test]
    fn sort_handles_empty_single_and_nan() {
        let mut empty: Vec<Point> = Vec::new();
        sort_by_origin_distance(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![Point::new(1.0, 1.0)];
        sort_by_origin_distance(&mut one);
        assert_eq!(one.len(), 1);

        let mut with_nan = vec![
            Point::new(3.0, 0.0),
            Point::new(f64::NAN, 0.0),
            Point::new(1.0, 0.0),
        ];
        sort_by_origin_distance(&mut with_nan);
        // NaN blocks both insertions, so the input order survives
        assert_eq!(
            format!("{:?}", with_nan),
            "[<x=3, y=0>, <x=NaN, y=0>, <x=1, y=0>]"
        );
    }
}
