//! Session state the input layer drives: the shown grid, the replay origin
//! and play state.
use log::{debug, info, warn};

use crate::config::{self, SessionConfig};
use crate::engine::{replay, step};
use crate::grid::Grid;
use crate::patterns::Pattern;

/// Input events delivered by the input layer. `Resize` and `ChangeSpeed`
/// carry the raw text typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Edit { row: usize, col: usize },
    ToggleRun,
    Tick,
    Forward,
    Backward,
    Resize(String),
    ChangeSpeed(String),
    Reset,
}

/// Simulation state shown to the user.
///
/// Rather than logging every generation, the session keeps the last edited
/// grid (`origin`) and how many steps separate it from `current`. Stepping
/// backward replays `origin` forward one step less. Outside of an edit,
/// `current == replay(origin, steps_from_origin)` always holds.
#[derive(Clone, Debug)]
pub struct Session {
    current: Grid,
    origin: Grid,
    steps_from_origin: usize,
    running: bool,
    tick_interval_ms: u64,
    history: bool,
    /// What `reset` returns to.
    startup: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let grid = Grid::new(config.side);
        Self {
            current: grid.clone(),
            origin: grid,
            steps_from_origin: 0,
            running: false,
            tick_interval_ms: config.tick_interval_ms,
            history: config.history,
            startup: config,
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn origin(&self) -> &Grid {
        &self.origin
    }

    pub fn steps_from_origin(&self) -> usize {
        self.steps_from_origin
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn side(&self) -> usize {
        self.current.side()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.current.is_alive(row, col)
    }

    pub fn has_history(&self) -> bool {
        self.history
    }

    /// Dispatch one input event.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Edit { row, col } => self.edit(row, col),
            Event::ToggleRun => self.toggle_run(),
            Event::Tick => self.tick(),
            Event::Forward => self.forward(),
            Event::Backward => self.backward(),
            Event::Resize(text) => self.resize_input(&text),
            Event::ChangeSpeed(text) => self.change_speed_input(&text),
            Event::Reset => self.reset(),
        }
    }

    /// Flip one cell. The edited grid becomes the new replay origin. Clicks
    /// outside the grid, e.g. left over from before a resize, are ignored.
    pub fn edit(&mut self, row: usize, col: usize) {
        let side = self.side();
        if row >= side || col >= side {
            warn!("ignoring edit ({row}, {col}) outside grid of side {side}");
            return;
        }
        let edited = self.current.toggle(row, col);
        self.rebase(edited);
        debug!("edit ({row}, {col})");
    }

    /// Stamp a pattern onto the current grid. Like an edit, the result becomes
    /// the new replay origin.
    pub fn load_pattern(&mut self, pattern: &Pattern, row: usize, col: usize) {
        let placed = pattern.place(&self.current, row, col);
        self.rebase(placed);
        debug!("loaded {} at ({row}, {col})", pattern.name);
    }

    fn rebase(&mut self, grid: Grid) {
        self.origin = grid.clone();
        self.current = grid;
        self.steps_from_origin = 0;
    }

    pub fn toggle_run(&mut self) {
        self.running = !self.running;
        debug!("running = {}", self.running);
    }

    /// Advance one generation while running. Stops on a fixed point.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let next = step(&self.current);
        if next == self.current {
            info!(
                "generation {} is stable, stopping",
                self.steps_from_origin + 1
            );
            self.running = false;
        }
        self.current = next;
        self.steps_from_origin += 1;
    }

    /// Advance one generation and stop automatic play.
    pub fn forward(&mut self) {
        self.current = step(&self.current);
        self.steps_from_origin += 1;
        self.running = false;
        debug!("forward to generation {}", self.steps_from_origin);
    }

    /// Go back one generation by replaying from the origin. Does nothing at the
    /// origin itself or when history is disabled.
    pub fn backward(&mut self) {
        if !self.history {
            debug!("backward ignored, history disabled");
            return;
        }
        if self.steps_from_origin == 0 {
            return;
        }
        self.steps_from_origin -= 1;
        self.current = replay(&self.origin, self.steps_from_origin);
        self.running = false;
        debug!("backward to generation {}", self.steps_from_origin);
    }

    /// Start over on a blank grid of `side`. Play state and speed are kept,
    /// history is dropped.
    pub fn resize(&mut self, side: usize) {
        let fresh = Session::new(SessionConfig {
            side,
            tick_interval_ms: self.tick_interval_ms,
            history: self.history,
        });
        *self = Session {
            running: self.running,
            startup: self.startup,
            ..fresh
        };
        debug!("resized to {side}");
    }

    /// [`resize`](Self::resize) from raw text; unparsable input is ignored.
    pub fn resize_input(&mut self, text: &str) {
        if let Some(side) = config::parse_side(text) {
            self.resize(side);
        }
    }

    pub fn change_speed(&mut self, tick_interval_ms: u64) {
        self.tick_interval_ms = tick_interval_ms;
        debug!("tick interval {tick_interval_ms}ms");
    }

    /// [`change_speed`](Self::change_speed) from raw text; unparsable input is
    /// ignored.
    pub fn change_speed_input(&mut self, text: &str) {
        if let Some(ms) = config::parse_interval(text) {
            self.change_speed(ms);
        }
    }

    /// Back to the state the session was created in.
    pub fn reset(&mut self) {
        *self = Session::new(self.startup);
        debug!("reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn with_glider() -> Session {
        let mut session = Session::default();
        session.load_pattern(patterns::find("glider").unwrap(), 3, 3);
        session
    }

    fn assert_consistent(session: &Session) {
        assert_eq!(
            session.current(),
            &replay(session.origin(), session.steps_from_origin())
        );
    }

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.side(), 20);
        assert_eq!(session.tick_interval_ms(), 100);
        assert_eq!(session.steps_from_origin(), 0);
        assert!(!session.is_running());
        assert_eq!(session.current().population(), 0);
        assert_eq!(session.current(), session.origin());
    }

    #[test]
    fn test_edit_resets_history() {
        let mut session = with_glider();
        for _ in 0..7 {
            session.forward();
        }
        assert_eq!(session.steps_from_origin(), 7);

        session.edit(15, 15);
        assert_eq!(session.steps_from_origin(), 0);
        assert!(session.is_alive(15, 15));
        assert_eq!(session.origin(), session.current());
        assert_eq!(session.current(), &replay(&with_glider().origin, 7).toggle(15, 15));
    }

    #[test]
    fn test_edit_toggles_and_keeps_running() {
        let mut session = Session::default();
        session.toggle_run();
        session.edit(0, 0);
        assert!(session.is_alive(0, 0));
        assert!(session.is_running());
        session.edit(0, 0);
        assert!(!session.is_alive(0, 0));
        assert_eq!(session.steps_from_origin(), 0);
    }

    #[test]
    fn test_edit_out_of_range_ignored() {
        let mut session = with_glider();
        session.forward();
        session.resize_input("16");
        session.edit(2, 2);
        session.toggle_run();
        let before = session.current().clone();

        session.apply(Event::Edit { row: 18, col: 3 });
        session.apply(Event::Edit { row: 3, col: 16 });
        session.edit(usize::MAX, 0);

        assert_eq!(session.current(), &before);
        assert_eq!(session.origin(), &before);
        assert_eq!(session.steps_from_origin(), 0);
        assert!(session.is_running());
    }

    #[test]
    fn test_toggle_run() {
        let mut session = with_glider();
        let before = session.current().clone();
        session.toggle_run();
        assert!(session.is_running());
        session.toggle_run();
        assert!(!session.is_running());
        assert_eq!(session.current(), &before);
    }

    #[test]
    fn test_tick_requires_running() {
        let mut session = with_glider();
        let before = session.current().clone();
        session.tick();
        assert_eq!(session.current(), &before);
        assert_eq!(session.steps_from_origin(), 0);
    }

    #[test]
    fn test_tick_advances() {
        let mut session = with_glider();
        session.toggle_run();
        for i in 1..=5 {
            session.tick();
            assert_eq!(session.steps_from_origin(), i);
            assert!(session.is_running());
            assert_consistent(&session);
        }
    }

    #[test]
    fn test_tick_stops_on_blank_grid() {
        let mut session = Session::default();
        session.toggle_run();
        session.tick();
        assert!(!session.is_running());
        assert_eq!(session.steps_from_origin(), 1);
        assert_eq!(session.current().population(), 0);
    }

    #[test]
    fn test_tick_stops_on_still_life() {
        let mut session = Session::default();
        // an L tromino becomes a block after one step, then stays put
        session.edit(5, 5);
        session.edit(5, 6);
        session.edit(6, 5);
        session.toggle_run();

        session.tick();
        assert!(session.is_running());
        session.tick();
        assert!(!session.is_running());
        assert_eq!(session.steps_from_origin(), 2);
        assert_eq!(session.current().population(), 4);

        // further ticks do nothing once stopped
        session.tick();
        assert_eq!(session.steps_from_origin(), 2);
    }

    #[test]
    fn test_oscillator_keeps_running() {
        let mut session = Session::default();
        session.load_pattern(patterns::find("blinker").unwrap(), 10, 9);
        session.toggle_run();
        for _ in 0..10 {
            session.tick();
        }
        assert!(session.is_running());
        assert_eq!(session.current(), session.origin());
    }

    #[test]
    fn test_forward_stops_running() {
        let mut session = with_glider();
        session.toggle_run();
        session.forward();
        assert!(!session.is_running());
        assert_eq!(session.steps_from_origin(), 1);
        assert_consistent(&session);
    }

    #[test]
    fn test_forward_backward_round_trip() {
        let mut session = with_glider();
        session.forward();
        session.forward();
        let start = session.current().clone();
        let start_steps = session.steps_from_origin();

        for k in [1, 3, 10] {
            for _ in 0..k {
                session.forward();
            }
            for _ in 0..k {
                session.backward();
                assert_consistent(&session);
            }
            assert_eq!(session.current(), &start);
            assert_eq!(session.steps_from_origin(), start_steps);
        }
    }

    #[test]
    fn test_backward_at_origin_is_noop() {
        let mut session = with_glider();
        session.toggle_run();
        let before = session.current().clone();
        session.backward();
        assert_eq!(session.current(), &before);
        assert_eq!(session.steps_from_origin(), 0);
        assert!(session.is_running());
    }

    #[test]
    fn test_backward_stops_running() {
        let mut session = with_glider();
        session.toggle_run();
        session.tick();
        session.tick();
        session.backward();
        assert!(!session.is_running());
        assert_eq!(session.steps_from_origin(), 1);
    }

    #[test]
    fn test_backward_without_history() {
        let mut session = Session::new(SessionConfig {
            history: false,
            ..SessionConfig::default()
        });
        session.load_pattern(patterns::find("glider").unwrap(), 0, 0);
        session.forward();
        let after = session.current().clone();
        session.backward();
        assert_eq!(session.current(), &after);
        assert_eq!(session.steps_from_origin(), 1);
    }

    #[test]
    fn test_resize_discards_history() {
        let mut session = with_glider();
        session.change_speed(300);
        session.forward();
        session.toggle_run();

        session.resize(35);
        assert_eq!(session.side(), 35);
        assert_eq!(session.current().cells().len(), 35 * 35);
        assert_eq!(session.current().population(), 0);
        assert_eq!(session.origin(), session.current());
        assert_eq!(session.steps_from_origin(), 0);
        assert!(session.is_running());
        assert_eq!(session.tick_interval_ms(), 300);
    }

    #[test]
    fn test_resize_input_ignores_garbage() {
        let mut session = with_glider();
        session.forward();
        let before = session.current().clone();

        for text in ["", "abc", "-4", "0", "2.5"] {
            session.resize_input(text);
            assert_eq!(session.current(), &before);
            assert_eq!(session.steps_from_origin(), 1);
        }

        session.resize_input("40");
        assert_eq!(session.side(), 40);
    }

    #[test]
    fn test_change_speed_keeps_grid() {
        let mut session = with_glider();
        session.forward();
        session.toggle_run();
        let before = session.current().clone();

        session.change_speed_input("250");
        assert_eq!(session.tick_interval_ms(), 250);
        assert_eq!(session.current(), &before);
        assert_eq!(session.steps_from_origin(), 1);
        assert!(session.is_running());

        session.change_speed_input("slow");
        assert_eq!(session.tick_interval_ms(), 250);
    }

    #[test]
    fn test_reset() {
        let mut session = with_glider();
        session.resize(50);
        session.change_speed(450);
        session.edit(1, 1);
        session.forward();
        session.toggle_run();

        session.reset();
        assert_eq!(session.side(), 20);
        assert_eq!(session.tick_interval_ms(), 100);
        assert_eq!(session.steps_from_origin(), 0);
        assert!(!session.is_running());
        assert_eq!(session.current().population(), 0);
    }

    #[test]
    fn test_reset_returns_to_startup_config() {
        let config = SessionConfig {
            side: 30,
            tick_interval_ms: 60,
            history: false,
        };
        let mut session = Session::new(config);
        session.resize(45);
        session.reset();
        assert_eq!(session.side(), 30);
        assert_eq!(session.tick_interval_ms(), 60);
        assert!(!session.has_history());
    }

    #[test]
    fn test_apply_events() {
        let mut session = Session::default();
        session.apply(Event::Edit { row: 4, col: 5 });
        session.apply(Event::Edit { row: 5, col: 5 });
        session.apply(Event::Edit { row: 6, col: 5 });
        session.apply(Event::ToggleRun);
        session.apply(Event::Tick);
        assert!(session.is_alive(5, 4));
        assert!(session.is_running());

        session.apply(Event::Forward);
        session.apply(Event::Backward);
        assert_eq!(session.steps_from_origin(), 1);
        assert!(session.is_alive(5, 6));

        session.apply(Event::ChangeSpeed("75".to_string()));
        assert_eq!(session.tick_interval_ms(), 75);
        session.apply(Event::Resize("bogus".to_string()));
        assert_eq!(session.side(), 20);
        session.apply(Event::Resize("16".to_string()));
        assert_eq!(session.side(), 16);

        session.apply(Event::Reset);
        assert_eq!(session.tick_interval_ms(), 100);
        assert_eq!(session.side(), 20);
    }
}
