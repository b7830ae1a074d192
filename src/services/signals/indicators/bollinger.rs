//! Bollinger-style bands.

use crate::types::BollingerBands;

/// Fixed-percentage bands around a middle average.
///
/// Stands in for true Bollinger Bands, which would offset by a multiple of
/// the standard deviation:
/// - Upper band: middle * (1 + width)
/// - Lower band: middle * (1 - width)
pub struct PercentBands {
    width: f64,
}

impl Default for PercentBands {
    fn default() -> Self {
        Self { width: 0.05 }
    }
}

impl PercentBands {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// Bands around `middle`.
    pub fn around(&self, middle: f64) -> BollingerBands {
        BollingerBands {
            upper: middle * (1.0 + self.width),
            middle,
            lower: middle * (1.0 - self.width),
        }
    }
}
