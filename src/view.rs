use num_traits::Float;

use crate::scalar;

/// How many stamp intervals the visible vertical span is divided into.
const SPAN_DIVISIONS: f32 = 50.0;

/// Arc-length spacing between stamps for a plot whose visible vertical
/// range covers `visible_span` data units. Deriving the spacing from the
/// view keeps the stamp rhythm constant on screen as the user zooms.
pub fn stamp_spacing<F>(visible_span: F) -> F
where
    F: Float + From<f32>,
{
    visible_span / scalar(SPAN_DIVISIONS)
}

/// Conversion between stamp sizes in data units and on-screen pixels.
///
/// A stamp is stored with its size in data units so it scales with the
/// plot; the renderer converts back to pixels against the current visible
/// span. Both spans must be non-zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewScale<F> {
    pub data_span: F,
    pub pixel_span: F,
}

impl<F> ViewScale<F>
where
    F: Float,
{
    pub fn new(data_span: F, pixel_span: F) -> Self {
        ViewScale {
            data_span,
            pixel_span,
        }
    }

    /// Size in data units of something `pixels` tall on screen.
    pub fn to_data(&self, pixels: F) -> F {
        pixels / self.pixel_span * self.data_span
    }

    /// On-screen pixel size of something `data` units tall.
    pub fn to_pixels(&self, data: F) -> F {
        data / self.data_span * self.pixel_span
    }
}
