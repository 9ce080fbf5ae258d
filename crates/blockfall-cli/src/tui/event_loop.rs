use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state.
///
/// Yields ticks while a tick interval is scheduled, and a render whenever a
/// tick or a terminal event has happened since the last frame.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true, // Initial render is required on startup
        }
    }

    /// Starts ticking every `interval`, counting from now.
    pub(super) fn schedule_ticks(&mut self, interval: Duration) {
        self.tick_interval = Some(interval);
        self.last_tick = Instant::now();
    }

    pub(super) fn cancel_ticks(&mut self) {
        self.tick_interval = None;
    }

    pub(super) fn is_ticking(&self) -> bool {
        self.tick_interval.is_some()
    }

    /// Returns the next event.
    ///
    /// Blocks until a tick is due or a crossterm event occurs. Without a tick
    /// interval, only waits for crossterm events.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.last_tick + self.tick_interval?;
        Some(next_tick_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_is_render() {
        let mut events = EventLoop::new();
        assert!(events.next().unwrap().is_render());
    }

    #[test]
    fn test_due_tick_comes_before_render() {
        let mut events = EventLoop::new();
        events.schedule_ticks(Duration::ZERO);
        assert!(events.next().unwrap().is_tick());
        assert!(events.is_ticking());
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let mut events = EventLoop::new();
        events.schedule_ticks(Duration::ZERO);
        events.cancel_ticks();
        assert!(!events.is_ticking());
        assert!(events.next().unwrap().is_render());
    }
}
