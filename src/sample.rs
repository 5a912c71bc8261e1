use alloc::vec::Vec;

use num_traits::Float;

use crate::cubic::{CubicSegment, PowerBasis};
use crate::error::FrontError;
use crate::point::Point2;
use crate::scalar;

/// Default number of uniform parameter samples per segment. Dense enough
/// that the chordal length error stays well below one percent for curves at
/// plot scale.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// One flattened curve sample: the position at a uniform parameter step and
/// the cumulative arc length accumulated up to it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveSample<F> {
    pub position: Point2<F>,
    pub arc_length: F,
}

/// A stamp placement: where to draw a text glyph and the tangent direction
/// (radians) to rotate it by so it follows the curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StampPlacement<F> {
    pub position: Point2<F>,
    pub angle: F,
}

/// Piecewise-linear approximation of one cubic segment.
///
/// Holds `n` samples at the uniform parameters `t_i = i/n` together with
/// their cumulative chordal arc length. The table is a derived, disposable
/// artifact: it is rebuilt from scratch whenever the owning segment changes,
/// never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable<F> {
    basis: PowerBasis<F>,
    samples: Vec<CurveSample<F>>,
}

impl<F> SampleTable<F>
where
    F: Float + From<f32>,
{
    /// Flatten `segment` into `n` samples with cumulative arc length.
    ///
    /// Rejects segments with non-finite control values and sample counts
    /// that cannot form a table. The last sample sits at `t = (n-1)/n`, so
    /// the tabulated total length slightly undershoots the true arc length;
    /// the shortfall shrinks with `n` and is the accepted flattening error.
    pub fn build(segment: &CubicSegment<F>, n: usize) -> Result<Self, FrontError> {
        if !segment.is_finite() {
            return Err(FrontError::NonFiniteControlPoint);
        }
        if n < 2 {
            return Err(FrontError::TooFewSamples);
        }

        let basis = segment.power_basis();
        let mut samples: Vec<CurveSample<F>> = Vec::with_capacity(n);
        let mut arc_length = F::zero();
        for i in 0..n {
            let t = scalar::<F>(i as f32) / scalar::<F>(n as f32);
            let position = basis.position(t);
            if let Some(prev) = samples.last() {
                arc_length = arc_length + prev.position.distance(position);
            }
            samples.push(CurveSample {
                position,
                arc_length,
            });
        }

        Ok(SampleTable { basis, samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[CurveSample<F>] {
        &self.samples
    }

    /// Total tabulated arc length (the last cumulative entry).
    pub fn total_length(&self) -> F {
        match self.samples.last() {
            Some(sample) => sample.arc_length,
            None => F::zero(),
        }
    }

    /// Map a target arc length `s` to a curve parameter in `[0, 1]`.
    ///
    /// Finds the first cumulative entry reaching `s` and normalizes against
    /// the total length, interpolating the fraction between the bracketing
    /// samples when `s` falls strictly between them. Values of `s` beyond
    /// the table (floating point drift while stepping) clamp to `t = 1`
    /// instead of indexing past the end. A zero-length table maps everything
    /// to `t = 0`.
    pub fn param_at_length(&self, s: F) -> F {
        let total = self.total_length();
        if total <= F::zero() {
            return F::zero();
        }

        let first_reaching = self
            .samples
            .iter()
            .position(|sample| sample.arc_length >= s);
        let t = match first_reaching {
            None => F::one(),
            Some(0) => F::zero(),
            Some(j) => {
                let upper = self.samples[j].arc_length;
                if upper == s {
                    upper / total
                } else {
                    let lower = self.samples[j - 1].arc_length;
                    let fraction = (s - lower) / (upper - lower);
                    (lower + fraction) / total
                }
            }
        };
        if t > F::one() {
            F::one()
        } else {
            t
        }
    }

    /// Emit stamp placements at arc lengths `0, spacing, 2*spacing, ...`
    /// strictly below the total length.
    ///
    /// Each placement carries the curve position and the tangent direction
    /// at the resolved parameter. A zero-length curve yields no placements.
    pub fn stamp_placements(&self, spacing: F) -> Result<Vec<StampPlacement<F>>, FrontError> {
        if !spacing.is_finite() || spacing <= F::zero() {
            return Err(FrontError::InvalidSpacing);
        }

        let total = self.total_length();
        let mut placements = Vec::new();
        if total <= F::zero() {
            return Ok(placements);
        }

        let mut s = F::zero();
        while s < total {
            let t = self.param_at_length(s);
            placements.push(StampPlacement {
                position: self.basis.position(t),
                angle: self.basis.tangent_angle(t),
            });
            s = s + spacing;
        }
        Ok(placements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> CubicSegment<f64> {
        CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        )
    }

    /// Dense chordal reference length over the same parameter range the
    /// table covers, `[0, (n-1)/n]`.
    fn reference_length(segment: &CubicSegment<f64>, upto: f64, chords: usize) -> f64 {
        let mut total = 0.0;
        let mut prev = segment.eval(0.0);
        for i in 1..=chords {
            let t = upto * i as f64 / chords as f64;
            let p = segment.eval(t);
            total += prev.distance(p);
            prev = p;
        }
        total
    }

    #[test]
    fn table_has_n_nondecreasing_entries() {
        let table = SampleTable::build(&arch(), DEFAULT_SAMPLE_COUNT).unwrap();
        assert_eq!(table.len(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(table.samples()[0].arc_length, 0.0);
        for pair in table.samples().windows(2) {
            assert!(pair[1].arc_length >= pair[0].arc_length);
        }
    }

    #[test]
    fn total_length_close_to_dense_reference() {
        let n = DEFAULT_SAMPLE_COUNT;
        let table = SampleTable::build(&arch(), n).unwrap();
        let reference = reference_length(&arch(), (n - 1) as f64 / n as f64, 20_000);
        assert_relative_eq!(table.total_length(), reference, max_relative = 0.01);
    }

    #[test]
    fn straight_segment_length_matches_endpoint_distance() {
        // control points on the chord at one and two thirds make the cubic
        // trace the chord with uniform speed
        let line = CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(6.0, 8.0),
            Point2::new(9.0, 12.0),
        );
        let table = SampleTable::build(&line, DEFAULT_SAMPLE_COUNT).unwrap();
        let chord = line.start().distance(line.end());
        assert_relative_eq!(table.total_length(), chord, max_relative = 0.01);
    }

    #[test]
    fn zero_length_curve_places_nothing() {
        let p = Point2::new(4.2, -7.0);
        let degenerate = CubicSegment::new(p, p, p, p);
        let table = SampleTable::build(&degenerate, DEFAULT_SAMPLE_COUNT).unwrap();
        assert_eq!(table.total_length(), 0.0);
        assert_eq!(table.param_at_length(0.0), 0.0);
        assert!(table.stamp_placements(2.5).unwrap().is_empty());
    }

    #[test]
    fn placement_count_follows_total_over_spacing() {
        let table = SampleTable::build(&arch(), DEFAULT_SAMPLE_COUNT).unwrap();
        let total = table.total_length();

        let spacing = 2.5;
        let placements = table.stamp_placements(spacing).unwrap();
        assert_eq!(placements.len(), (total / spacing).floor() as usize + 1);

        // fewer stamps when the spacing grows
        let sparse = table.stamp_placements(spacing * 2.0).unwrap();
        assert!(sparse.len() < placements.len());

        // more stamps on a longer curve at the same spacing
        let longer = CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 20.0),
            Point2::new(20.0, 20.0),
            Point2::new(20.0, 0.0),
        );
        let longer_table = SampleTable::build(&longer, DEFAULT_SAMPLE_COUNT).unwrap();
        assert!(longer_table.total_length() > total);
        assert!(longer_table.stamp_placements(spacing).unwrap().len() > placements.len());
    }

    #[test]
    fn first_placement_sits_at_start_with_start_tangent() {
        let segment = arch();
        let table = SampleTable::build(&segment, DEFAULT_SAMPLE_COUNT).unwrap();
        let placements = table.stamp_placements(2.5).unwrap();
        let first = placements[0];
        assert_eq!(first.position, segment.start());
        assert_eq!(first.angle, segment.tangent_angle(0.0));
    }

    #[test]
    fn arch_angles_sweep_monotonically_downward() {
        // the arch bends clockwise, so tangent angles fall from +90 degrees
        // toward -90 as the stamps march along it
        let table = SampleTable::build(&arch(), DEFAULT_SAMPLE_COUNT).unwrap();
        let placements = table.stamp_placements(2.5).unwrap();
        assert!(placements.len() >= 2);
        assert_relative_eq!(placements[0].angle, core::f64::consts::FRAC_PI_2);
        for pair in placements.windows(2) {
            assert!(pair[1].angle < pair[0].angle);
        }
        assert!(placements.last().unwrap().angle < 0.0);
    }

    #[test]
    fn exact_cumulative_hits_use_the_sample_directly() {
        let table = SampleTable::build(&arch(), DEFAULT_SAMPLE_COUNT).unwrap();
        let total = table.total_length();
        let hit = table.samples()[57].arc_length;
        assert_eq!(table.param_at_length(hit), hit / total);
    }

    #[test]
    fn lookup_beyond_table_clamps_to_one() {
        let table = SampleTable::build(&arch(), DEFAULT_SAMPLE_COUNT).unwrap();
        let total = table.total_length();
        assert_eq!(table.param_at_length(total * 1.5), 1.0);
        assert_eq!(table.param_at_length(total + 1e-9), 1.0);
    }

    #[test]
    fn resampling_identical_inputs_is_bit_identical() {
        let a = SampleTable::build(&arch(), DEFAULT_SAMPLE_COUNT).unwrap();
        let b = SampleTable::build(&arch(), DEFAULT_SAMPLE_COUNT).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.stamp_placements(2.5).unwrap(),
            b.stamp_placements(2.5).unwrap()
        );
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let mut values = [0.0f64; 8];
        values[2] = f64::INFINITY;
        let bad = CubicSegment::from_octuple(values);
        assert_eq!(
            SampleTable::build(&bad, DEFAULT_SAMPLE_COUNT),
            Err(FrontError::NonFiniteControlPoint)
        );
        assert_eq!(
            SampleTable::build(&arch(), 1),
            Err(FrontError::TooFewSamples)
        );

        let table = SampleTable::build(&arch(), DEFAULT_SAMPLE_COUNT).unwrap();
        assert_eq!(table.stamp_placements(0.0), Err(FrontError::InvalidSpacing));
        assert_eq!(
            table.stamp_placements(-1.0),
            Err(FrontError::InvalidSpacing)
        );
        assert_eq!(
            table.stamp_placements(f64::NAN),
            Err(FrontError::InvalidSpacing)
        );
    }
}
