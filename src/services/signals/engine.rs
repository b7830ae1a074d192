//! Streaming signal engine over bounded price windows.

use crate::config::SignalConfig;
use crate::services::signals::decision::{decide, DecisionInputs};
use crate::services::signals::history::HistoryBook;
use crate::services::signals::indicators::{sma_spread, PercentBands, Rsi, Sma, Volatility};
use crate::services::signals::{Indicator, SignalError};
use crate::types::{
    MacdValues, MovingAverages, SignalDirection, TechnicalIndicators, TradingSignal,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Observations needed before the moving-average rule is applied.
pub const MIN_OBSERVATIONS: usize = 10;

const WARMUP_STRENGTH: u8 = 30;
const WARMUP_CONFIDENCE: u8 = 40;
const WARMUP_RSI: f64 = 50.0;
const WARMUP_BAND_WIDTH: f64 = 0.02;
const WARMUP_VOLATILITY: f64 = 0.01;

/// Turns `(symbol, price)` ticks into trading signals.
pub struct SignalEngine {
    book: HistoryBook,
    sma_fast: Sma,
    sma_mid: Sma,
    sma_slow: Sma,
    rsi: Rsi,
    volatility: Volatility,
    bands: PercentBands,
    warmup_bands: PercentBands,
}

impl SignalEngine {
    /// Create a new signal engine.
    pub fn new(config: &SignalConfig) -> Arc<Self> {
        Arc::new(Self {
            book: HistoryBook::new(config.scope, config.history_capacity),
            sma_fast: Sma::new(5),
            sma_mid: Sma::new(10),
            sma_slow: Sma::new(20),
            rsi: Rsi::default(),
            volatility: Volatility,
            bands: PercentBands::default(),
            warmup_bands: PercentBands::new(WARMUP_BAND_WIDTH),
        })
    }

    /// Record a tick and produce the signal for the updated window.
    ///
    /// Rejected input and failed computations leave the window untouched.
    pub fn ingest(&self, symbol: &str, price: f64) -> Result<TradingSignal, SignalError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            warn!("Rejected tick without symbol");
            return Err(SignalError::InvalidInput("symbol is required".to_string()));
        }
        if !price.is_finite() {
            warn!("Rejected non-finite price {} for {}", price, symbol);
            return Err(SignalError::InvalidInput(format!(
                "price must be a finite number, got {}",
                price
            )));
        }
        if price <= 0.0 {
            warn!("Rejected non-positive price {} for {}", price, symbol);
            return Err(SignalError::InvalidInput(format!(
                "price must be positive, got {}",
                price
            )));
        }

        let result = self.book.with_window(symbol, |window| -> Result<_, SignalError> {
            let mut staged = window.clone();
            staged.push(price);
            let prices = staged.to_vec();

            let signal = self.evaluate(symbol, price, &prices).map_err(|e| {
                error!("Signal computation failed for {}: {}", symbol, e);
                e
            })?;

            *window = staged;
            debug!(
                "{} @ {}: {} (strength {}, confidence {}) from {} prices",
                symbol,
                price,
                signal.direction.label(),
                signal.strength,
                signal.confidence,
                prices.len()
            );
            Ok(signal)
        });

        if result.is_err() {
            self.book.discard_if_empty(symbol);
        }
        result
    }

    /// Compute a signal from a window that already includes `price`.
    fn evaluate(
        &self,
        symbol: &str,
        price: f64,
        prices: &[f64],
    ) -> Result<TradingSignal, SignalError> {
        if prices.len() < MIN_OBSERVATIONS {
            return self.warming_up(symbol, price);
        }

        let sma5 = measure(&self.sma_fast, prices)?;
        let sma10 = measure(&self.sma_mid, prices)?;
        let sma20 = measure(&self.sma_slow, prices)?;
        let rsi = measure(&self.rsi, prices)?;
        let volatility = measure(&self.volatility, prices)?;

        let decision = decide(&DecisionInputs {
            sma5,
            sma10,
            sma20,
            rsi,
            volatility,
        });

        let indicators = TechnicalIndicators {
            rsi,
            macd: sma_spread(sma5, sma10, sma20),
            bollinger_bands: self.bands.around(sma20),
            moving_averages: MovingAverages {
                sma20,
                sma50: sma20,
                ema12: sma5,
                ema26: sma10,
            },
            atr: volatility,
            volatility,
        };
        ensure_finite(&indicators)?;

        Ok(TradingSignal {
            symbol: symbol.to_string(),
            direction: decision.direction,
            strength: decision.strength,
            confidence: decision.confidence,
            indicators,
            timestamp: chrono::Utc::now().timestamp_millis(),
            reasoning: decision.reasoning,
        })
    }

    /// Placeholder HOLD signal built from the current price only.
    fn warming_up(&self, symbol: &str, price: f64) -> Result<TradingSignal, SignalError> {
        let indicators = TechnicalIndicators {
            rsi: WARMUP_RSI,
            macd: MacdValues::zero(),
            bollinger_bands: self.warmup_bands.around(price),
            moving_averages: MovingAverages::flat(price),
            atr: WARMUP_VOLATILITY,
            volatility: WARMUP_VOLATILITY,
        };
        ensure_finite(&indicators)?;

        Ok(TradingSignal {
            symbol: symbol.to_string(),
            direction: SignalDirection::Hold,
            strength: WARMUP_STRENGTH,
            confidence: WARMUP_CONFIDENCE,
            indicators,
            timestamp: chrono::Utc::now().timestamp_millis(),
            reasoning: vec![
                "Insufficient data for reliable signal".to_string(),
                "Waiting for more market data".to_string(),
            ],
        })
    }

    /// Prices currently held for `symbol`, oldest first.
    pub fn history(&self, symbol: &str) -> Vec<f64> {
        self.book.snapshot(symbol)
    }

    /// Key of the window `symbol` maps to.
    pub fn history_key(&self, symbol: &str) -> String {
        self.book.key_for(symbol)
    }

    /// Drop the window `symbol` maps to. Returns whether one existed.
    pub fn reset(&self, symbol: &str) -> bool {
        let removed = self.book.remove(symbol);
        if removed {
            debug!("Reset price history for {}", self.history_key(symbol));
        }
        removed
    }

    /// Drop every window.
    pub fn clear(&self) {
        self.book.clear();
        debug!("Cleared all price history");
    }

    /// Keys of the windows currently held.
    pub fn tracked_symbols(&self) -> Vec<String> {
        self.book.keys()
    }

    pub fn capacity(&self) -> usize {
        self.book.capacity()
    }
}

/// Run an indicator, requiring a finite value.
fn measure(indicator: &dyn Indicator, prices: &[f64]) -> Result<f64, SignalError> {
    match indicator.calculate(prices) {
        Some(value) if value.is_finite() => Ok(value),
        Some(value) => Err(SignalError::ComputationError(format!(
            "{} produced {}",
            indicator.name(),
            value
        ))),
        None => Err(SignalError::ComputationError(format!(
            "{} has no value for {} prices",
            indicator.name(),
            prices.len()
        ))),
    }
}

fn ensure_finite(indicators: &TechnicalIndicators) -> Result<(), SignalError> {
    let values = [
        indicators.rsi,
        indicators.macd.value,
        indicators.macd.signal,
        indicators.macd.histogram,
        indicators.bollinger_bands.upper,
        indicators.bollinger_bands.middle,
        indicators.bollinger_bands.lower,
        indicators.moving_averages.sma20,
        indicators.moving_averages.sma50,
        indicators.moving_averages.ema12,
        indicators.moving_averages.ema26,
        indicators.atr,
        indicators.volatility,
    ];

    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SignalError::ComputationError(
            "indicator snapshot contains a non-finite value".to_string(),
        ))
    }
}
