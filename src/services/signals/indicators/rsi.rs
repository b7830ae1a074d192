//! Relative Strength Index (RSI) indicator.

use crate::services::signals::Indicator;

/// RSI (Relative Strength Index) indicator.
///
/// Looks at the most recent `period` price changes (or all of them when the
/// history is shorter). Gains and losses are each averaged over the number of
/// changes examined, without Wilder smoothing.
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        "RSI (14)"
    }

    fn calculate(&self, prices: &[f64]) -> Option<f64> {
        if prices.len() < 2 || self.period == 0 {
            return None;
        }

        let deltas = self.period.min(prices.len() - 1);
        let window = &prices[prices.len() - 1 - deltas..];

        // Each change is scaled before summing so the averages stay finite.
        let n = deltas as f64;
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        for pair in window.windows(2) {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                avg_gain += change / n;
            } else {
                avg_loss -= change / n;
            }
        }

        if avg_loss == 0.0 {
            return Some(100.0);
        }

        let rs = avg_gain / avg_loss;
        Some(100.0 - (100.0 / (1.0 + rs)))
    }
}
