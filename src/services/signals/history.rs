//! Bounded price windows.

use crate::config::HistoryScope;
use dashmap::DashMap;
use std::collections::VecDeque;

/// Key used for the single window in shared scope.
pub const SHARED_KEY: &str = "*";

/// Fixed-capacity FIFO of prices. Oldest prices are dropped first.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    prices: VecDeque<f64>,
    capacity: usize,
}

impl PriceHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            prices: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a price, evicting from the front past capacity.
    /// Returns the evicted price, if any.
    pub fn push(&mut self, price: f64) -> Option<f64> {
        self.prices.push_back(price);
        if self.prices.len() > self.capacity {
            self.prices.pop_front()
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Prices in arrival order.
    pub fn to_vec(&self) -> Vec<f64> {
        self.prices.iter().copied().collect()
    }
}

/// Price windows keyed by symbol (or a single shared key).
pub struct HistoryBook {
    windows: DashMap<String, PriceHistory>,
    scope: HistoryScope,
    capacity: usize,
}

impl HistoryBook {
    pub fn new(scope: HistoryScope, capacity: usize) -> Self {
        Self {
            windows: DashMap::new(),
            scope,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Window key for a symbol under the configured scope.
    pub fn key_for(&self, symbol: &str) -> String {
        match self.scope {
            HistoryScope::PerSymbol => symbol.trim().to_uppercase(),
            HistoryScope::Shared => SHARED_KEY.to_string(),
        }
    }

    /// Run `f` against the window for `symbol`, creating it if needed.
    ///
    /// The window's shard stays locked for the duration of `f`, so calls for
    /// the same key never interleave.
    pub fn with_window<R>(&self, symbol: &str, f: impl FnOnce(&mut PriceHistory) -> R) -> R {
        let capacity = self.capacity;
        let mut entry = self
            .windows
            .entry(self.key_for(symbol))
            .or_insert_with(|| PriceHistory::new(capacity));
        f(entry.value_mut())
    }

    /// Copy of the prices in the window for `symbol`.
    pub fn snapshot(&self, symbol: &str) -> Vec<f64> {
        self.windows
            .get(&self.key_for(symbol))
            .map(|w| w.to_vec())
            .unwrap_or_default()
    }

    /// Drop the window for `symbol`. Returns whether one existed.
    pub fn remove(&self, symbol: &str) -> bool {
        self.windows.remove(&self.key_for(symbol)).is_some()
    }

    /// Drop the window for `symbol` if it holds no prices.
    pub fn discard_if_empty(&self, symbol: &str) {
        self.windows
            .remove_if(&self.key_for(symbol), |_, window| window.is_empty());
    }

    /// Drop every window.
    pub fn clear(&self) {
        self.windows.clear();
    }

    /// Keys of the windows currently held.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.windows.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}
