//! Colored point validated against a fixed palette.

use std::fmt;

use crate::capabilities::{Colored, Coordinates};
use crate::error::PointError;
use crate::point::{fmt_xy, Point};

/// Palette accepted by `ColorPoint::new`.
pub const BASE_COLORS: [&str; 6] = ["red", "blue", "green", "yellow", "black", "white"];

/// A `Point` plus a color from `BASE_COLORS`.
#[derive(Clone, PartialEq)]
pub struct ColorPoint {
    point: Point,
    color: String,
}

impl ColorPoint {
    pub fn new(x: f64, y: f64, color: impl Into<String>) -> Result<Self, PointError> {
        let color = color.into();
        if !BASE_COLORS.contains(&color.as_str()) {
            return Err(PointError::UnknownColor { color });
        }
        Ok(Self {
            point: Point::new(x, y),
            color,
        })
    }

    #[inline]
    pub fn point(&self) -> Point {
        self.point
    }
}

impl Coordinates for ColorPoint {
    #[inline]
    fn x(&self) -> f64 {
        self.point.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.point.y
    }
}

impl Colored for ColorPoint {
    #[inline]
    fn color(&self) -> &str {
        &self.color
    }
}

impl fmt::Display for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_xy(self.point.x, self.point.y, f)
    }
}

impl fmt::Debug for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_xy(self.point.x, self.point.y, f)
    }
}
