//! Trading signals service module.
//!
//! Keeps bounded price windows, computes moving averages, RSI and return
//! volatility on every tick, and turns them into buy/sell/hold signals.

pub mod decision;
pub mod engine;
pub mod history;
pub mod indicators;

pub use decision::{decide, Decision, DecisionInputs, HIGH_VOLATILITY};
pub use engine::{SignalEngine, MIN_OBSERVATIONS};
pub use history::{HistoryBook, PriceHistory};

use thiserror::Error;

/// Signal engine errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Computation error: {0}")]
    ComputationError(String),
}

/// Trait for implementing technical indicators over a price series.
pub trait Indicator: Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Calculate the indicator from prices, oldest first.
    /// Returns None if there is not enough data.
    fn calculate(&self, prices: &[f64]) -> Option<f64>;
}
