use blockfall_engine::{GameStats, RenderBoard};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::ui::widgets::{BoardDisplay, StatsDisplay, color, style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum PlayStatus {
    Playing,
    Paused,
    GameOver,
}

/// Stats panel and board side by side, with a banner over the board when
/// the game is paused or over.
#[derive(Debug)]
pub(crate) struct GameDisplay<'a> {
    frame: &'a RenderBoard,
    score: usize,
    stats: &'a GameStats,
    status: PlayStatus,
}

impl<'a> GameDisplay<'a> {
    pub(crate) fn new(
        frame: &'a RenderBoard,
        score: usize,
        stats: &'a GameStats,
        status: PlayStatus,
    ) -> Self {
        Self {
            frame,
            score,
            stats,
            status,
        }
    }

    fn board(&self) -> BoardDisplay<'a> {
        BoardDisplay::new(self.frame).block(
            Block::bordered()
                .border_style(self.border_color())
                .style(style::DEFAULT),
        )
    }

    fn stats(&self) -> StatsDisplay<'a> {
        StatsDisplay::new(self.score, self.stats).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(self.border_color())
                .style(style::DEFAULT),
        )
    }

    fn border_color(&self) -> ratatui::style::Color {
        match self.status {
            PlayStatus::Playing => color::WHITE,
            PlayStatus::Paused => color::YELLOW,
            PlayStatus::GameOver => color::RED,
        }
    }

    pub(crate) fn height(&self) -> u16 {
        u16::max(self.board().height(), self.stats().height())
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let game_board = self.board();
        let game_stats = self.stats();

        let [stats_column, board_column] = Layout::horizontal([
            Constraint::Length(game_stats.width()),
            Constraint::Length(game_board.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(game_stats.height())]).areas(stats_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);

        let game_board_width = game_board.width();
        game_stats.render(stats_area, buf);
        game_board.render(board_area, buf);

        let popup = match self.status {
            PlayStatus::Playing => None,
            PlayStatus::Paused => {
                Some(("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)))
            }
            PlayStatus::GameOver => {
                Some(("GAME OVER!!", Style::new().fg(color::WHITE).bg(color::RED)))
            }
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
