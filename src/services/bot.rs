//! Bot status service.
//!
//! Tracks the lifecycle of the trading bot (start, pause, stop), its uptime,
//! the latest signal it has seen and the last error it reported.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{info, warn};

use crate::types::{BotAction, BotState, BotStatus, TradingSignal};

/// Bot control errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BotError {
    #[error("Action parameter is required")]
    MissingAction,

    #[error("Invalid action '{0}'. Must be start, pause, or stop")]
    InvalidAction(String),
}

struct Inner {
    state: BotState,
    /// Unix timestamp (milliseconds) of the last start.
    started_at: Option<i64>,
}

/// Owns the bot's state.
pub struct BotManager {
    inner: RwLock<Inner>,
}

impl BotManager {
    /// Create a new bot manager in the idle state.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    /// Current state, with uptime refreshed while running.
    pub fn status(&self) -> BotState {
        let inner = self.read();
        let mut state = inner.state.clone();
        if state.status == BotStatus::Running {
            if let Some(started_at) = inner.started_at {
                state.uptime = Self::now() - started_at;
            }
        }
        state
    }

    /// Parse and apply a control action.
    pub fn apply_raw(&self, action: Option<&str>) -> Result<BotState, BotError> {
        let raw = action
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .ok_or(BotError::MissingAction)?;
        let action =
            BotAction::from_str(raw).ok_or_else(|| BotError::InvalidAction(raw.to_string()))?;
        Ok(self.apply(action))
    }

    /// Apply a control action and return the resulting state.
    pub fn apply(&self, action: BotAction) -> BotState {
        {
            let mut inner = self.write();
            let now = Self::now();
            match action {
                BotAction::Start => {
                    inner.state.status = BotStatus::Running;
                    inner.state.is_connected = true;
                    inner.state.last_error = None;
                    inner.state.uptime = 0;
                    inner.started_at = Some(now);
                }
                BotAction::Pause => {
                    inner.state.status = BotStatus::Paused;
                }
                BotAction::Stop => {
                    inner.state.status = BotStatus::Stopped;
                    inner.state.is_connected = false;
                    inner.state.uptime = inner.started_at.map(|s| now - s).unwrap_or(0);
                }
            }
            inner.state.last_update = now;
        }

        info!("Bot action {:?} applied", action);
        self.status()
    }

    /// Remember the latest signal.
    pub fn observe_signal(&self, signal: &TradingSignal) {
        let mut inner = self.write();
        inner.state.current_signal = Some(signal.clone());
        inner.state.last_update = Self::now();
    }

    /// Put the bot into the error state.
    pub fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!("Bot error: {}", message);
        let mut inner = self.write();
        inner.state.status = BotStatus::Error;
        inner.state.last_error = Some(message);
        inner.state.last_update = Self::now();
    }
}

impl Default for BotManager {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                state: BotState::default(),
                started_at: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MacdValues, MovingAverages, SignalDirection, TechnicalIndicators};

    fn signal() -> TradingSignal {
        TradingSignal {
            symbol: "BTCINR".to_string(),
            direction: SignalDirection::Hold,
            strength: 30,
            confidence: 40,
            indicators: TechnicalIndicators {
                rsi: 50.0,
                macd: MacdValues::zero(),
                bollinger_bands: crate::types::BollingerBands {
                    upper: 1.02,
                    middle: 1.0,
                    lower: 0.98,
                },
                moving_averages: MovingAverages::flat(1.0),
                atr: 0.01,
                volatility: 0.01,
            },
            timestamp: 0,
            reasoning: Vec::new(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let bot = BotManager::new();
        let state = bot.status();
        assert_eq!(state.status, BotStatus::Idle);
        assert!(!state.is_connected);
    }

    #[test]
    fn test_start_pause_stop() {
        let bot = BotManager::new();

        let state = bot.apply(BotAction::Start);
        assert_eq!(state.status, BotStatus::Running);
        assert!(state.is_connected);
        assert!(state.uptime >= 0);

        let state = bot.apply(BotAction::Pause);
        assert_eq!(state.status, BotStatus::Paused);
        assert!(state.is_connected);

        let state = bot.apply(BotAction::Stop);
        assert_eq!(state.status, BotStatus::Stopped);
        assert!(!state.is_connected);
        assert!(state.uptime >= 0);
    }

    #[test]
    fn test_start_clears_error() {
        let bot = BotManager::new();
        bot.report_error("Network connectivity issue");
        let state = bot.status();
        assert_eq!(state.status, BotStatus::Error);
        assert_eq!(state.last_error.as_deref(), Some("Network connectivity issue"));

        let state = bot.apply(BotAction::Start);
        assert_eq!(state.status, BotStatus::Running);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_apply_raw_validation() {
        let bot = BotManager::new();
        assert_eq!(bot.apply_raw(None).unwrap_err(), BotError::MissingAction);
        assert_eq!(bot.apply_raw(Some("  ")).unwrap_err(), BotError::MissingAction);
        assert_eq!(
            bot.apply_raw(Some("launch")).unwrap_err(),
            BotError::InvalidAction("launch".to_string())
        );
        assert_eq!(
            bot.apply_raw(Some("Start")).unwrap().status,
            BotStatus::Running
        );
    }

    #[test]
    fn test_observe_signal() {
        let bot = BotManager::new();
        bot.observe_signal(&signal());
        let state = bot.status();
        assert_eq!(
            state.current_signal.map(|s| s.symbol),
            Some("BTCINR".to_string())
        );
    }

    #[test]
    fn test_stop_without_start_has_zero_uptime() {
        let bot = BotManager::new();
        let state = bot.apply(BotAction::Stop);
        assert_eq!(state.uptime, 0);
    }
}
