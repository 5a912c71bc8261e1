use num_traits::Float;

use crate::error::FrontError;
use crate::point::Point2;
use crate::sample::SampleTable;
use crate::scalar;

/// A 2D cubic Bézier curve defined by four points: the starting point, two
/// successive control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicSegment<F> {
    pub(crate) start: Point2<F>,
    pub(crate) ctrl1: Point2<F>,
    pub(crate) ctrl2: Point2<F>,
    pub(crate) end: Point2<F>,
}

/// Power-basis coefficients of one coordinate axis of a cubic segment,
/// so that the axis value at `t` is `a*t³ + b*t² + c*t + d` and its
/// derivative is `3a*t² + 2b*t + c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisCoefficients<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
}

/// Both axes of a segment expanded into the power basis. Deriving the
/// coefficients once and evaluating the polynomial directly is what the
/// sampler iterates over, instead of running De Casteljau per sample.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PowerBasis<F> {
    pub x: AxisCoefficients<F>,
    pub y: AxisCoefficients<F>,
}

impl<F> CubicSegment<F>
where
    F: Float + From<f32>,
{
    pub fn new(start: Point2<F>, ctrl1: Point2<F>, ctrl2: Point2<F>, end: Point2<F>) -> Self {
        CubicSegment {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Build a segment from the flat eight-value form
    /// `(x0, y0, cx0, cy0, cx1, cy1, x1, y1)` used by tabular data stores.
    pub fn from_octuple(values: [F; 8]) -> Self {
        CubicSegment {
            start: Point2::new(values[0], values[1]),
            ctrl1: Point2::new(values[2], values[3]),
            ctrl2: Point2::new(values[4], values[5]),
            end: Point2::new(values[6], values[7]),
        }
    }

    /// Return the flat eight-value form of the segment.
    pub fn octuple(&self) -> [F; 8] {
        [
            self.start.x, self.start.y, self.ctrl1.x, self.ctrl1.y, self.ctrl2.x, self.ctrl2.y,
            self.end.x, self.end.y,
        ]
    }

    pub fn start(&self) -> Point2<F> {
        self.start
    }

    pub fn ctrl1(&self) -> Point2<F> {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> Point2<F> {
        self.ctrl2
    }

    pub fn end(&self) -> Point2<F> {
        self.end
    }

    /// True if every control value is finite. Sampling rejects segments for
    /// which this does not hold.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite()
            && self.ctrl1.is_finite()
            && self.ctrl2.is_finite()
            && self.end.is_finite()
    }

    /// Expand the control points into per-axis polynomial coefficients.
    pub fn power_basis(&self) -> PowerBasis<F> {
        PowerBasis {
            x: AxisCoefficients::from_axis(self.start.x, self.ctrl1.x, self.ctrl2.x, self.end.x),
            y: AxisCoefficients::from_axis(self.start.y, self.ctrl1.y, self.ctrl2.y, self.end.y),
        }
    }

    /// Evaluate the curve position at t.
    pub fn eval(&self, t: F) -> Point2<F> {
        self.power_basis().position(t)
    }

    /// Flatten the segment into an arc-length sample table with `n` uniform
    /// parameter steps.
    pub fn sample(&self, n: usize) -> Result<SampleTable<F>, FrontError> {
        SampleTable::build(self, n)
    }

    /// Evaluate the curve derivative (tangent vector) at t.
    pub fn velocity(&self, t: F) -> Point2<F> {
        self.power_basis().velocity(t)
    }

    /// Tangent direction at t in radians, measured counterclockwise from
    /// the positive x axis.
    pub fn tangent_angle(&self, t: F) -> F {
        self.power_basis().tangent_angle(t)
    }
}

impl<F> AxisCoefficients<F>
where
    F: Float + From<f32>,
{
    fn from_axis(p0: F, p1: F, p2: F, p3: F) -> Self {
        let three: F = scalar(3.0);
        let six: F = scalar(6.0);
        AxisCoefficients {
            a: p3 - three * p2 + three * p1 - p0,
            b: three * p2 - six * p1 + three * p0,
            c: three * p1 - three * p0,
            d: p0,
        }
    }

    /// Axis value `a*t³ + b*t² + c*t + d`.
    pub fn value_at(&self, t: F) -> F {
        let t2 = t * t;
        let t3 = t2 * t;
        self.a * t3 + self.b * t2 + self.c * t + self.d
    }

    /// Axis derivative `3a*t² + 2b*t + c`.
    pub fn slope_at(&self, t: F) -> F {
        let t2 = t * t;
        scalar::<F>(3.0) * self.a * t2 + scalar::<F>(2.0) * self.b * t + self.c
    }
}

impl<F> PowerBasis<F>
where
    F: Float + From<f32>,
{
    /// Curve position at t.
    pub fn position(&self, t: F) -> Point2<F> {
        Point2::new(self.x.value_at(t), self.y.value_at(t))
    }

    /// Tangent vector at t.
    pub fn velocity(&self, t: F) -> Point2<F> {
        Point2::new(self.x.slope_at(t), self.y.slope_at(t))
    }

    /// Tangent direction at t in radians.
    pub fn tangent_angle(&self, t: F) -> F {
        let v = self.velocity(t);
        v.y.atan2(v.x)
    }
}
