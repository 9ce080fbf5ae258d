use std::iter;

use blockfall_engine::GameStats;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::style;

/// Score and counters panel.
///
/// The score shown is the last one announced to the screen, which may lag
/// the game's own tally until the next notification.
#[derive(Debug)]
pub(crate) struct StatsDisplay<'a> {
    score: usize,
    stats: &'a GameStats,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub(crate) fn new(score: usize, stats: &'a GameStats) -> Self {
        Self {
            score,
            stats,
            block: None,
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        20 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        super::to_u16(ROWS.len()) + super::block_vertical_margin(self.block.as_ref())
    }
}

type Value = &'static dyn Fn(&StatsDisplay<'_>) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(Value),
    LabelValue(&'static str, Value),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|display| display.score.to_string()),
    Row::Empty,
    Row::LabelValue("LINES:", &|display| {
        display.stats.total_cleared_lines().to_string()
    }),
    Row::LabelValue("PIECES:", &|display| display.stats.locked_pieces().to_string()),
    Row::Empty,
    Row::LabelValue("SINGLES:", &|display| {
        display.stats.line_cleared_counter()[1].to_string()
    }),
    Row::LabelValue("DOUBLES:", &|display| {
        display.stats.line_cleared_counter()[2].to_string()
    }),
    Row::LabelValue("TRIPLES:", &|display| {
        display.stats.line_cleared_counter()[3].to_string()
    }),
    Row::LabelValue("QUADS:", &|display| {
        display.stats.line_cleared_counter()[4].to_string()
    }),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(&self), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(&self), style)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
