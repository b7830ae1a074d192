//! Return volatility indicator.

use crate::services::signals::Indicator;

/// Population standard deviation of period-over-period percentage returns.
///
/// Uses every price it is given. Prices must be positive; a zero base yields
/// a non-finite value.
#[derive(Default)]
pub struct Volatility;

impl Volatility {
    /// Period-over-period returns.
    fn returns(prices: &[f64]) -> Vec<f64> {
        prices
            .windows(2)
            .map(|pair| (pair[1] - pair[0]) / pair[0])
            .collect()
    }

    /// Calculate standard deviation.
    fn std_dev(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance: f64 =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }
}

impl Indicator for Volatility {
    fn name(&self) -> &str {
        "Volatility"
    }

    fn calculate(&self, prices: &[f64]) -> Option<f64> {
        if prices.is_empty() {
            return None;
        }
        Some(Self::std_dev(&Self::returns(prices)))
    }
}
