use std::iter;

use blockfall_engine::RenderBoard;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::ui::widgets::CellDisplay;

/// The board grid, sized from the frame it displays.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    frame: &'a RenderBoard,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(frame: &'a RenderBoard) -> Self {
        Self { frame, block: None }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub(crate) fn width(&self) -> u16 {
        super::to_u16(self.frame.width())
            .saturating_mul(CellDisplay::WIDTH)
            .saturating_add(super::block_horizontal_margin(self.block.as_ref()))
    }

    pub(crate) fn height(&self) -> u16 {
        super::to_u16(self.frame.height())
            .saturating_mul(CellDisplay::HEIGHT)
            .saturating_add(super::block_vertical_margin(self.block.as_ref()))
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints =
            (0..self.frame.width()).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints =
            (0..self.frame.height()).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let row_areas = Layout::vertical(row_constraints).split(area);

        for (row_area, row) in iter::zip(row_areas.iter(), self.frame.rows()) {
            let cell_areas = horizontal.split(*row_area);
            for (cell_area, cell) in iter::zip(cell_areas.iter(), row) {
                CellDisplay::from_cell(*cell).render(*cell_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{ActivePiece, Anchor, Board, ShapeKind, clone_shape};

    use super::*;
    use crate::ui::widgets::style;

    #[test]
    fn test_size_follows_board() {
        let frame = RenderBoard::new(&Board::new(6, 8));
        let display = BoardDisplay::new(&frame).block(BlockWidget::bordered());
        assert_eq!(display.width(), 6 * 2 + 2);
        assert_eq!(display.height(), 8 + 2);
    }

    #[test]
    fn test_render_settled_and_falling_cells() {
        let mut board = Board::new(4, 3);
        board.set_occupied(0, 2);
        let piece = ActivePiece::new(ShapeKind::O, clone_shape(ShapeKind::O), Anchor::new(2, 0));
        let frame = RenderBoard::with_piece(&board, &piece);
        let display = BoardDisplay::new(&frame);

        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        let empty = format!("{}{}", buf[(0, 0)].symbol(), buf[(1, 0)].symbol());
        assert_eq!(empty.trim(), ".");
        assert_eq!(Some(buf[(0, 2)].bg), style::SETTLED.bg);
        assert_eq!(Some(buf[(4, 0)].bg), style::O_BLOCK.bg);
        assert_eq!(Some(buf[(7, 1)].bg), style::O_BLOCK.bg);
    }
}
