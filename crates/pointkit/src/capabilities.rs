//! Capabilities shared by all point types.
//!
//! - `Coordinates`: read access to `(x, y)`.
//! - `Colored`: read access to a color name.
//! - `OriginDistance`: origin-distance queries and the comparison built on them,
//!   provided for every `Coordinates` implementor.
//!
//! The comparison is deliberately not `PartialEq`/`PartialOrd`: two points at
//! the same distance from the origin (e.g. (3,4) and (5,0)) compare "equal"
//! here while remaining structurally different.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Anything with a planar position.
pub trait Coordinates {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    #[inline]
    fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x(), self.y())
    }
}

/// Anything carrying a color name.
pub trait Colored {
    fn color(&self) -> &str;
}

/// Origin-distance queries, available on every `Coordinates` type.
pub trait OriginDistance: Coordinates {
    /// Euclidean distance to (0, 0): `sqrt(x² + y²)`.
    #[inline]
    fn distance_to_orig(&self) -> f64 {
        self.to_vector().norm()
    }

    /// True iff both points lie at exactly the same origin-distance.
    #[inline]
    fn same_origin_distance<P: Coordinates + ?Sized>(&self, other: &P) -> bool {
        self.distance_to_orig() == other.to_vector().norm()
    }

    /// True iff `self` is strictly farther from the origin than `other`.
    #[inline]
    fn farther_from_origin<P: Coordinates + ?Sized>(&self, other: &P) -> bool {
        self.distance_to_orig() > other.to_vector().norm()
    }

    /// Derived from the two predicates above: neither farther nor equally far.
    ///
    /// With NaN coordinates both predicates are false, so this reports `true`.
    #[inline]
    fn closer_to_origin<P: Coordinates + ?Sized>(&self, other: &P) -> bool {
        !self.farther_from_origin(other) && !self.same_origin_distance(other)
    }

    /// Three-way comparison assembled only from `farther_from_origin` and
    /// `same_origin_distance`.
    fn origin_cmp<P: Coordinates + ?Sized>(&self, other: &P) -> Ordering {
        if self.farther_from_origin(other) {
            Ordering::Greater
        } else if self.same_origin_distance(other) {
            Ordering::Equal
        } else {
            Ordering::Less
        }
    }
}

impl<T: Coordinates + ?Sized> OriginDistance for T {}

/// Euclidean distance between two positioned values.
#[inline]
pub fn distance_between<A, B>(a: &A, b: &B) -> f64
where
    A: Coordinates + ?Sized,
    B: Coordinates + ?Sized,
{
    (a.to_vector() - b.to_vector()).norm()
}
