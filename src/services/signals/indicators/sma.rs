//! Simple Moving Average (SMA) indicator.

use crate::services::signals::Indicator;

/// SMA (Simple Moving Average) indicator.
///
/// Arithmetic mean of the last `period` prices. When fewer prices are
/// available the mean is taken over all of them.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        match self.period {
            5 => "SMA (5)",
            10 => "SMA (10)",
            20 => "SMA (20)",
            _ => "SMA",
        }
    }

    fn calculate(&self, prices: &[f64]) -> Option<f64> {
        if prices.is_empty() || self.period == 0 {
            return None;
        }

        // Running mean stays finite for any finite input.
        let mean = prices
            .iter()
            .rev()
            .take(self.period)
            .enumerate()
            .fold(0.0, |mean, (i, &price)| mean + (price - mean) / (i + 1) as f64);
        Some(mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_name() {
        assert_eq!(Sma::new(5).name(), "SMA (5)");
        assert_eq!(Sma::new(20).name(), "SMA (20)");
        assert_eq!(Sma::new(7).name(), "SMA");
    }

    #[test]
    fn test_sma_uses_most_recent_prices() {
        let prices = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        assert_eq!(Sma::new(5).calculate(&prices), Some(8.0));
        assert_eq!(Sma::new(10).calculate(&prices), Some(5.5));
    }

    #[test]
    fn test_sma_short_history_averages_everything() {
        let prices = [2.0, 4.0, 6.0];
        assert_eq!(Sma::new(20).calculate(&prices), Some(4.0));
    }

    #[test]
    fn test_sma_near_float_max_is_finite() {
        let prices = [1e308; 10];
        assert_eq!(Sma::new(5).calculate(&prices), Some(1e308));
        let value = Sma::new(10).calculate(&[f64::MAX, f64::MAX, 0.0]).unwrap();
        assert!(value.is_finite());
    }

    #[test]
    fn test_sma_empty() {
        assert_eq!(Sma::new(5).calculate(&[]), None);
        assert_eq!(Sma::new(0).calculate(&[1.0]), None);
    }
}
