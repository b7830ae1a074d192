use serde::{Deserialize, Serialize};

/// Direction of a trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalDirection {
    Buy,
    Sell,
    Hold,
}

impl SignalDirection {
    /// Get display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "Buy",
            SignalDirection::Sell => "Sell",
            SignalDirection::Hold => "Hold",
        }
    }
}

/// MACD-style triple derived from the short moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdValues {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdValues {
    /// All-zero triple used before enough data is available.
    pub fn zero() -> Self {
        Self {
            value: 0.0,
            signal: 0.0,
            histogram: 0.0,
        }
    }
}

/// Band triple around a middle average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Moving average block.
///
/// `sma50`, `ema12` and `ema26` are filled from the 20, 5 and 10 period
/// simple averages respectively. They are not true 50-period or exponential
/// averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub sma20: f64,
    pub sma50: f64,
    pub ema12: f64,
    pub ema26: f64,
}

impl MovingAverages {
    /// Every field set to the same value.
    pub fn flat(value: f64) -> Self {
        Self {
            sma20: value,
            sma50: value,
            ema12: value,
            ema26: value,
        }
    }
}

/// Snapshot of the indicators behind a signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalIndicators {
    /// Relative strength index (0-100).
    pub rsi: f64,
    pub macd: MacdValues,
    pub bollinger_bands: BollingerBands,
    pub moving_averages: MovingAverages,
    /// Average true range proxy (same figure as `volatility`).
    pub atr: f64,
    /// Standard deviation of period-over-period returns.
    pub volatility: f64,
}

/// A trading signal produced for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingSignal {
    /// Symbol the tick was reported for.
    pub symbol: String,
    pub direction: SignalDirection,
    /// Signal strength (0-100).
    pub strength: u8,
    /// Confidence in the direction (0-100).
    pub confidence: u8,
    pub indicators: TechnicalIndicators,
    /// Unix timestamp (milliseconds) when generated.
    pub timestamp: i64,
    /// Human-readable notes explaining the decision, in order.
    pub reasoning: Vec<String>,
}

impl TradingSignal {
    /// Compare everything except the generation timestamp.
    pub fn same_outcome(&self, other: &TradingSignal) -> bool {
        self.symbol == other.symbol
            && self.direction == other.direction
            && self.strength == other.strength
            && self.confidence == other.confidence
            && self.indicators == other.indicators
            && self.reasoning == other.reasoning
    }
}

/// Price window currently held for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySnapshot {
    pub symbol: String,
    /// Prices, oldest first.
    pub prices: Vec<f64>,
    pub capacity: usize,
    /// Unix timestamp (milliseconds) of the snapshot.
    pub timestamp: i64,
}
