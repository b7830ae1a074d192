use std::env;
use tracing::warn;

/// Default number of prices retained per history window.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Smallest window that can still produce a full signal.
pub const MIN_HISTORY_CAPACITY: usize = 10;

/// Largest window accepted from the environment.
pub const MAX_HISTORY_CAPACITY: usize = 10_000;

/// How price history windows are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryScope {
    /// One window per symbol.
    #[default]
    PerSymbol,
    /// A single window shared by every symbol.
    Shared,
}

impl HistoryScope {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "per_symbol" | "per-symbol" | "symbol" => Some(Self::PerSymbol),
            "shared" | "global" => Some(Self::Shared),
            _ => None,
        }
    }
}

/// Signal engine configuration.
#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// Maximum number of prices kept in a window.
    pub history_capacity: usize,
    /// Whether windows are partitioned by symbol.
    pub scope: HistoryScope,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            scope: HistoryScope::default(),
        }
    }
}

impl SignalConfig {
    fn from_env() -> Self {
        let history_capacity =
            Self::parse_capacity(env::var("SIGNAL_HISTORY_CAPACITY").ok().as_deref());

        let scope = match env::var("SIGNAL_HISTORY_SCOPE") {
            Ok(raw) => HistoryScope::from_str(&raw).unwrap_or_else(|| {
                warn!("Unknown SIGNAL_HISTORY_SCOPE '{}', using per_symbol", raw);
                HistoryScope::PerSymbol
            }),
            Err(_) => HistoryScope::default(),
        };

        Self {
            history_capacity,
            scope,
        }
    }

    /// Window capacity from a raw setting, falling back to the default when
    /// missing, unparseable or out of range.
    fn parse_capacity(raw: Option<&str>) -> usize {
        let Some(raw) = raw else {
            return DEFAULT_HISTORY_CAPACITY;
        };

        match raw.trim().parse::<usize>() {
            Ok(capacity) if (MIN_HISTORY_CAPACITY..=MAX_HISTORY_CAPACITY).contains(&capacity) => {
                capacity
            }
            Ok(capacity) => {
                warn!(
                    "SIGNAL_HISTORY_CAPACITY={} is outside {}..={}, using {}",
                    capacity, MIN_HISTORY_CAPACITY, MAX_HISTORY_CAPACITY, DEFAULT_HISTORY_CAPACITY
                );
                DEFAULT_HISTORY_CAPACITY
            }
            Err(_) => {
                warn!(
                    "Invalid SIGNAL_HISTORY_CAPACITY '{}', using {}",
                    raw, DEFAULT_HISTORY_CAPACITY
                );
                DEFAULT_HISTORY_CAPACITY
            }
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Signal engine settings.
    pub signals: SignalConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        Self {
            host,
            port,
            signals: SignalConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
