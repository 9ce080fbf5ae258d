use std::{io, time::Duration};

use blockfall_engine::TickScheduler;

use crate::tui::{App, event::TuiEvent, event_loop::EventLoop};

/// TUI application runtime.
///
/// Owns the event loop and serves as the tick scheduler of the running app:
/// the app schedules and cancels gravity ticks through it.
#[derive(Default, Debug)]
pub(crate) struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Runs the application.
    ///
    /// 1. Calls `app.init()`
    /// 2. Runs the event loop until `app.should_exit()` returns true
    ///    - `TuiEvent::Tick`: calls `app.update()`
    ///    - `TuiEvent::Render`: calls `app.draw()`
    ///    - `TuiEvent::Crossterm`: calls `app.handle_event()`
    pub(crate) fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => {
                        app.update(&mut self);
                    }
                    TuiEvent::Render => {
                        terminal.draw(|f| app.draw(f))?;
                    }
                    TuiEvent::Crossterm(event) => {
                        app.handle_event(&mut self, &event);
                    }
                }
            }
            Ok(())
        })
    }

    pub(crate) fn is_ticking(&self) -> bool {
        self.events.is_ticking()
    }
}

impl TickScheduler for Runtime {
    fn schedule(&mut self, interval: Duration) {
        self.events.schedule_ticks(interval);
    }

    fn cancel(&mut self) {
        self.events.cancel_ticks();
    }
}
