//! Startup parameters for a [`Session`](crate::session::Session) and the
//! parsers for the raw text the input layer hands over for size and speed.
use log::warn;

pub const DEFAULT_SIDE: usize = 20;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

// Bounds the input layer enforces. The core accepts any positive value.
pub const MIN_SIDE: usize = 15;
pub const MAX_SIDE: usize = 60;
pub const MIN_TICK_INTERVAL_MS: u64 = 50;
pub const MAX_TICK_INTERVAL_MS: u64 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Row/column count of the square grid.
    pub side: usize,
    /// Cadence at which the external driver should deliver ticks.
    pub tick_interval_ms: u64,
    /// Keep the origin grid so generations can be stepped backward. When off,
    /// `Backward` does nothing.
    pub history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            side: DEFAULT_SIDE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            history: true,
        }
    }
}

fn parse_positive<T>(text: &str, what: &str) -> Option<T>
where
    T: std::str::FromStr + Default + PartialOrd,
{
    match text.trim().parse::<T>() {
        Ok(value) if value > T::default() => Some(value),
        _ => {
            warn!("ignoring {what} input {text:?}: not a positive integer");
            None
        }
    }
}

/// Parse a grid side from raw text. `None` when it is not a positive integer.
pub fn parse_side(text: &str) -> Option<usize> {
    parse_positive(text, "grid size")
}

/// Parse a tick interval in milliseconds from raw text.
pub fn parse_interval(text: &str) -> Option<u64> {
    parse_positive(text, "speed")
}
