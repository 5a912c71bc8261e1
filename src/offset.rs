use alloc::vec::Vec;

use num_traits::Float;

use crate::cubic::CubicSegment;
use crate::error::FrontError;
use crate::point::Point2;
use crate::scalar;

/// Approximate a parallel curve by displacing sampled points along the unit
/// normal.
///
/// Evaluates `n + 1` uniform parameter steps (including `t = 1` so the guide
/// reaches the segment end) and pushes each position `offset` units to the
/// left of the travel direction; a negative `offset` selects the right side.
/// Where the tangent vanishes the point is emitted undisplaced, since no
/// normal direction exists there.
///
/// This is a rendering aid for drawing a secondary guide line beside a
/// front, not a true offset curve; the approximation error grows with
/// curvature and `offset`.
pub fn offset_polyline<F>(
    segment: &CubicSegment<F>,
    n: usize,
    offset: F,
) -> Result<Vec<Point2<F>>, FrontError>
where
    F: Float + From<f32>,
{
    if !segment.is_finite() {
        return Err(FrontError::NonFiniteControlPoint);
    }
    if n < 2 {
        return Err(FrontError::TooFewSamples);
    }
    if !offset.is_finite() {
        return Err(FrontError::NonFiniteOffset);
    }

    let basis = segment.power_basis();
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let t = scalar::<F>(i as f32) / scalar::<F>(n as f32);
        let position = basis.position(t);
        let velocity = basis.velocity(t);
        let speed = velocity.norm();
        if speed > F::zero() {
            let normal = Point2::new(-velocity.y / speed, velocity.x / speed);
            points.push(position + normal * offset);
        } else {
            points.push(position);
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{SampleTable, DEFAULT_SAMPLE_COUNT};
    use crate::EPSILON;

    fn arch() -> CubicSegment<f64> {
        CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        )
    }

    #[test]
    fn displaced_points_keep_the_offset_distance() {
        let segment = arch();
        let n = DEFAULT_SAMPLE_COUNT;
        let offset = 0.75;
        let guide = offset_polyline(&segment, n, offset).unwrap();
        assert_eq!(guide.len(), n + 1);

        let table = SampleTable::build(&segment, n).unwrap();
        for (sample, displaced) in table.samples().iter().zip(guide.iter()) {
            let gap = sample.position.distance(*displaced);
            assert!((gap - offset).abs() < 1e-9);
        }
    }

    #[test]
    fn horizontal_line_shifts_straight_up() {
        // uniform-speed straight segment along the x axis; the left normal
        // of rightward travel points up
        let line = CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        );
        let guide = offset_polyline(&line, 16, 0.5).unwrap();
        for point in &guide {
            assert!((point.y - 0.5).abs() < EPSILON);
        }
        assert!((guide.last().unwrap().x - 3.0).abs() < EPSILON);
    }

    #[test]
    fn negative_offset_selects_the_other_side() {
        let line = CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        );
        let guide = offset_polyline(&line, 16, -0.5).unwrap();
        for point in &guide {
            assert!((point.y + 0.5).abs() < EPSILON);
        }
    }

    #[test]
    fn vanishing_tangent_leaves_points_in_place() {
        let p = Point2::new(1.0, 2.0);
        let degenerate = CubicSegment::new(p, p, p, p);
        let guide = offset_polyline(&degenerate, 8, 3.0).unwrap();
        for point in &guide {
            assert_eq!(*point, p);
        }
    }

    #[test]
    fn non_finite_offset_is_rejected() {
        assert_eq!(
            offset_polyline(&arch(), 16, f64::NAN),
            Err(FrontError::NonFiniteOffset)
        );
        assert_eq!(
            offset_polyline(&arch(), 16, f64::INFINITY),
            Err(FrontError::NonFiniteOffset)
        );
    }
}
