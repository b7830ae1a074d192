//! MACD-style spread of simple moving averages.

use crate::types::MacdValues;

/// Spread-based stand-in for MACD.
///
/// Built from three simple averages instead of exponential ones:
/// - Value = SMA(fast) - SMA(mid)
/// - Signal = SMA(mid) - SMA(slow)
/// - Histogram = Value - Signal
pub fn sma_spread(fast: f64, mid: f64, slow: f64) -> MacdValues {
    let value = fast - mid;
    let signal = mid - slow;
    MacdValues {
        value,
        signal,
        histogram: value - signal,
    }
}
