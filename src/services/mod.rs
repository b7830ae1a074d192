pub mod bot;
pub mod signals;

pub use bot::{BotError, BotManager};
pub use signals::{SignalEngine, SignalError};
