//! Conway's Game of Life on a square toroidal grid, with backward stepping by
//! replaying generations from the last edit.

pub mod config;
pub mod engine;
pub mod grid;
pub mod patterns;
pub mod session;

pub use config::SessionConfig;
pub use grid::Grid;
pub use session::{Event, Session};
