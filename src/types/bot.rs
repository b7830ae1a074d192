use serde::{Deserialize, Serialize};

use super::TradingSignal;

/// Lifecycle status of the trading bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BotStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Error,
    Stopped,
}

/// Control action accepted by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotAction {
    Start,
    Pause,
    Stop,
}

impl BotAction {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "start" => Some(Self::Start),
            "pause" => Some(Self::Pause),
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }
}

/// Point-in-time view of the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotState {
    pub status: BotStatus,
    pub is_connected: bool,
    /// Unix timestamp (milliseconds) of the last state change.
    pub last_update: i64,
    /// Milliseconds since the bot was last started.
    pub uptime: i64,
    /// Open trades. No order flow exists yet, so this stays at zero.
    pub active_trades: u32,
    pub total_trades: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_signal: Option<TradingSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl Default for BotState {
    fn default() -> Self {
        Self {
            status: BotStatus::Idle,
            is_connected: false,
            last_update: chrono::Utc::now().timestamp_millis(),
            uptime: 0,
            active_trades: 0,
            total_trades: 0,
            current_signal: None,
            last_error: None,
        }
    }
}

/// Body of a bot control request.
#[derive(Debug, Deserialize)]
pub struct BotControlRequest {
    pub action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_action_parsing() {
        assert_eq!(BotAction::from_str("start"), Some(BotAction::Start));
        assert_eq!(BotAction::from_str("PAUSE"), Some(BotAction::Pause));
        assert_eq!(BotAction::from_str(" stop "), Some(BotAction::Stop));
        assert_eq!(BotAction::from_str("restart"), None);
    }

    #[test]
    fn test_bot_state_default_is_idle() {
        let state = BotState::default();
        assert_eq!(state.status, BotStatus::Idle);
        assert!(!state.is_connected);
        assert_eq!(state.uptime, 0);
        assert!(state.current_signal.is_none());
    }

    #[test]
    fn test_bot_state_json_omits_empty_fields() {
        let json = serde_json::to_value(BotState::default()).unwrap();
        assert_eq!(json["status"], "idle");
        assert_eq!(json["isConnected"], false);
        assert_eq!(json["activeTrades"], 0);
        assert_eq!(json["totalTrades"], 0);
        assert!(json.get("currentSignal").is_none());
        assert!(json.get("lastError").is_none());
    }
}
