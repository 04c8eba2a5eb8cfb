use crate::error::{ChartError, ChartResult};

/// Linear map from `0..=max` onto a pixel extent.
///
/// A zero (or degenerate) maximum is legal and maps every value to a zero
/// offset, so all-zero dashboards render flat geometry instead of NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    max: f64,
    extent: f64,
}

impl ValueScale {
    pub fn new(max: f64, extent: f64) -> ChartResult<Self> {
        if !max.is_finite() || max < 0.0 {
            return Err(ChartError::InvalidData(
                "scale maximum must be finite and >= 0".to_owned(),
            ));
        }
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale extent must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { max, extent })
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn extent(self) -> f64 {
        self.extent
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max <= 0.0
    }

    /// Pixel offset from the baseline for `value`.
    #[must_use]
    pub fn offset(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        value / self.max * self.extent
    }
}
