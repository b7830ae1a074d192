//! Technical indicator implementations.

pub mod bollinger;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod volatility;

pub use bollinger::PercentBands;
pub use macd::sma_spread;
pub use rsi::Rsi;
pub use sma::Sma;
pub use volatility::Volatility;
