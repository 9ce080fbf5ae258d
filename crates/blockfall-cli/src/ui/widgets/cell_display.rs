use blockfall_engine::{RenderCell, ShapeKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::ui::widgets::style;

/// One board cell, two terminal columns wide.
#[derive(Debug)]
pub(crate) struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub(crate) const WIDTH: u16 = 2;
    pub(crate) const HEIGHT: u16 = 1;

    const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub(crate) fn from_cell(cell: RenderCell) -> Self {
        match cell {
            RenderCell::Empty => Self::new(style::EMPTY_DOT, "."),
            RenderCell::Settled => Self::new(style::SETTLED, ""),
            RenderCell::Falling(kind) => {
                let style = match kind {
                    ShapeKind::I => style::I_BLOCK,
                    ShapeKind::O => style::O_BLOCK,
                    ShapeKind::S => style::S_BLOCK,
                    ShapeKind::Z => style::Z_BLOCK,
                    ShapeKind::J => style::J_BLOCK,
                    ShapeKind::L => style::L_BLOCK,
                    ShapeKind::T => style::T_BLOCK,
                };
                Self::new(style, "")
            }
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Paragraph fills the whole area, not just the cells under the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
