pub mod bot;
pub mod signals;

pub use bot::*;
pub use signals::*;
