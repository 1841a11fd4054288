//! 2D points compared by their distance to the origin.
//!
//! Layout
//! - `point`: plain `Point` with public coordinates and the `<x=.., y=..>` form.
//! - `color_point`: `ColorPoint`, validated against the fixed base palette.
//! - `advanced_point`: `AdvancedPoint`, validated against a `ColorRegistry`,
//!   with accessors and pairwise distance helpers.
//! - `capabilities`: the traits every point type composes (`Coordinates`,
//!   `Colored`, `OriginDistance`) instead of a type hierarchy.
//! - `registry`: allowed-colors registry (owned and shared flavours).
//! - `sample`: seeded random points for demos and benches.
//!
//! Origin-distance comparison is exposed through named methods on
//! `OriginDistance`. `PartialEq` keeps its structural meaning.

pub mod advanced_point;
pub mod capabilities;
pub mod color_point;
pub mod error;
pub mod point;
pub mod registry;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use advanced_point::{AdvancedPoint, DEFAULT_COLOR};
pub use capabilities::{distance_between, Colored, Coordinates, OriginDistance};
pub use color_point::{ColorPoint, BASE_COLORS};
pub use error::PointError;
pub use nalgebra::Vector2 as Vec2;
pub use point::{sort_by_origin_distance, Point};
pub use registry::{ColorRegistry, SharedColorRegistry, DEFAULT_COLORS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::advanced_point::AdvancedPoint;
    pub use crate::capabilities::{distance_between, Colored, Coordinates, OriginDistance};
    pub use crate::color_point::ColorPoint;
    pub use crate::error::PointError;
    pub use crate::point::{sort_by_origin_distance, Point};
    pub use crate::registry::{ColorRegistry, SharedColorRegistry};
    pub use crate::sample::{draw_points, SampleCfg};
}
