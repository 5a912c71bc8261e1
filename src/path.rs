use alloc::vec::Vec;

use num_traits::Float;

use crate::cubic::CubicSegment;
use crate::error::FrontError;
use crate::point::Point2;
use crate::sample::{SampleTable, StampPlacement};

/// A sketched front: the flat vertex sequence a drawing tool accumulates,
/// interpreted as chained cubic segments.
///
/// Vertices `3k, 3k+1, 3k+2, 3k+3` form segment `k`; every third vertex
/// lies on the curve and is shared between neighbouring segments, the two
/// between are control points. Trailing vertices that do not yet complete a
/// group of three are pending and produce no segment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrontPath<F> {
    vertices: Vec<Point2<F>>,
}

/// Everything derived from one resampling pass over a path: a sample table
/// per segment and the stamp placements of all segments in drawing order.
/// Disposable by construction; edits produce a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontGeometry<F> {
    pub tables: Vec<SampleTable<F>>,
    pub placements: Vec<StampPlacement<F>>,
}

impl<F> FrontPath<F>
where
    F: Float + From<f32>,
{
    pub fn new() -> Self {
        FrontPath {
            vertices: Vec::new(),
        }
    }

    pub fn from_vertices(vertices: Vec<Point2<F>>) -> Self {
        FrontPath { vertices }
    }

    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Append a clicked vertex.
    pub fn push_vertex(&mut self, vertex: Point2<F>) {
        self.vertices.push(vertex);
    }

    /// Replace the newest vertex, the edit a pointer drag performs while the
    /// latest point follows the cursor. Does nothing on an empty path.
    pub fn move_last(&mut self, vertex: Point2<F>) {
        if let Some(last) = self.vertices.last_mut() {
            *last = vertex;
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Number of complete segments the vertex sequence currently forms.
    pub fn segment_count(&self) -> usize {
        if self.vertices.len() < 4 {
            0
        } else {
            (self.vertices.len() - 1) / 3
        }
    }

    /// Materialize the complete segments in drawing order.
    pub fn segments(&self) -> Vec<CubicSegment<F>> {
        (0..self.segment_count())
            .map(|k| {
                let base = 3 * k;
                CubicSegment::new(
                    self.vertices[base],
                    self.vertices[base + 1],
                    self.vertices[base + 2],
                    self.vertices[base + 3],
                )
            })
            .collect()
    }

    /// Regenerate every segment's sample table and stamp placements.
    ///
    /// The whole path is recomputed on each call rather than patching the
    /// previously derived data; the outputs carry no identity across edits.
    /// A path without a complete segment yields empty geometry.
    pub fn resample(&self, n: usize, spacing: F) -> Result<FrontGeometry<F>, FrontError> {
        let mut tables = Vec::with_capacity(self.segment_count());
        let mut placements = Vec::new();
        for segment in self.segments() {
            let table = SampleTable::build(&segment, n)?;
            placements.extend(table.stamp_placements(spacing)?);
            tables.push(table);
        }
        Ok(FrontGeometry { tables, placements })
    }
}

impl<F> FrontGeometry<F>
where
    F: Float + From<f32>,
{
    /// Summed tabulated arc length over all segments.
    pub fn total_length(&self) -> F {
        self.tables
            .iter()
            .fold(F::zero(), |acc, table| acc + table.total_length())
    }
}
