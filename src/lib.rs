//! Geometry for sketched annotation curves ("fronts").
//!
//! A front is a flat sequence of clicked vertices interpreted as chained
//! cubic Bézier segments (every third vertex lies on the curve, the two
//! between are control points). Each segment is flattened into a table of
//! uniformly parameterized samples with cumulative arc length, which is then
//! used to place rotated text stamps at even arc-length intervals so that
//! symbols visually follow the curve, the way weather-chart fronts carry
//! their semicircles and triangles.
//!
//! The crate is `no_std` (with `alloc` for the derived tables) and generic
//! over the scalar type through [`num_traits::Float`]. All derived data is
//! disposable: edits regenerate tables and placements in full, and identical
//! inputs always produce bit-identical output.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod cubic;
mod error;
mod offset;
mod path;
mod point;
mod sample;
mod style;
mod view;

pub use cubic::{AxisCoefficients, CubicSegment, PowerBasis};
pub use error::FrontError;
pub use offset::offset_polyline;
pub use path::{FrontGeometry, FrontPath};
pub use point::Point2;
pub use sample::{CurveSample, SampleTable, StampPlacement, DEFAULT_SAMPLE_COUNT};
pub use style::{FrontStyle, LineDash, Stamp, TextBaseline};
pub use view::{stamp_spacing, ViewScale};

/// Tolerance for approximate comparisons against reference values.
pub const EPSILON: f64 = 1e-10;

/// Lift an exactly representable constant into the scalar type.
pub(crate) fn scalar<F: From<f32>>(value: f32) -> F {
    value.into()
}
