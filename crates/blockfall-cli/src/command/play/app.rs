use blockfall_engine::{ConfigError, Game, GameConfig, PieceSeed, TickScheduler as _};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    command::play::screen_state::ScreenState,
    tui::{App, Runtime},
    ui::widgets::{GameDisplay, PlayStatus},
};

#[derive(Debug)]
pub(crate) struct PlayApp {
    game: Game<ScreenState>,
    paused: bool,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(config: GameConfig, seed: PieceSeed) -> Result<Self, ConfigError> {
        let screen = ScreenState::new(config.board_width, config.board_height);
        Ok(Self {
            game: Game::new(config, seed, screen)?,
            paused: false,
            is_exiting: false,
        })
    }

    pub(crate) fn game(&self) -> &Game<ScreenState> {
        &self.game
    }

    fn status(&self) -> PlayStatus {
        if self.game.phase().is_game_over() {
            PlayStatus::GameOver
        } else if self.paused {
            PlayStatus::Paused
        } else {
            PlayStatus::Playing
        }
    }

    /// Suspends or resumes gravity. Ticks are cancelled while paused and
    /// rescheduled with a fresh phase on resume.
    fn toggle_pause(&mut self, runtime: &mut Runtime) {
        if self.game.phase().is_game_over() {
            return;
        }
        self.paused = runtime.is_ticking();
        if self.paused {
            runtime.cancel();
        } else {
            runtime.schedule(self.game.config().tick_interval);
        }
    }

    fn restart(&mut self, runtime: &mut Runtime) {
        self.paused = false;
        self.game.observer_mut().clear_game_over();
        self.game.start(runtime);
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        self.game.start(runtime);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) {
        let is_playing = self.status().is_playing();

        let Some(key) = event.as_key_event() else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Left if is_playing => _ = self.game.move_left(),
            KeyCode::Right if is_playing => _ = self.game.move_right(),
            KeyCode::Down if is_playing => _ = self.game.soft_drop(),
            KeyCode::Up | KeyCode::Char('x') if is_playing => _ = self.game.rotate_cw(),
            KeyCode::Char('p') => self.toggle_pause(runtime),
            KeyCode::Char('r') => self.restart(runtime),
            KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let status = self.status();
        let screen = self.game.observer();
        let display = GameDisplay::new(screen.frame(), screen.score(), self.game.stats(), status);
        let help_text = match status {
            PlayStatus::Playing => {
                "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ X (Rotate) | P (Pause) | R (Restart) | Q (Quit)"
            }
            PlayStatus::Paused => "Controls: P (Resume) | R (Restart) | Q (Quit)",
            PlayStatus::GameOver => "Controls: R (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(display.height()), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(display, main_area);
        frame.render_widget(help_text, help_area);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        if !self.paused {
            _ = self.game.tick(runtime);
        }
    }
}
