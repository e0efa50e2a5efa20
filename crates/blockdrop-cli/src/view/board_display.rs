use blockdrop_engine::{Board, DrawSurface, GameEngine, PieceKind, RandomSource};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::style;

/// Terminal columns per board cell.
pub(crate) const CELL_WIDTH: u16 = 2;

#[expect(clippy::cast_possible_truncation)]
const BOARD_COLUMNS: u16 = Board::WIDTH as u16;
#[expect(clippy::cast_possible_truncation)]
const BOARD_ROWS: u16 = Board::HEIGHT as u16;

/// Renders the board and the falling piece of a [`GameEngine`].
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a, R> {
    engine: &'a GameEngine<R>,
    block: Option<BlockWidget<'a>>,
}

impl<'a, R> BoardDisplay<'a, R>
where
    R: RandomSource,
{
    pub(crate) fn new(engine: &'a GameEngine<R>) -> Self {
        Self {
            engine,
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
        BOARD_COLUMNS * CELL_WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        BOARD_ROWS + super::block_vertical_margin(self.block.as_ref())
    }
}

impl<R> Widget for BoardDisplay<'_, R>
where
    R: RandomSource,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl<R> Widget for &BoardDisplay<'_, R>
where
    R: RandomSource,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        let area = Rect {
            width: area.width.min(BOARD_COLUMNS * CELL_WIDTH),
            height: area.height.min(BOARD_ROWS),
            ..area
        };

        buf.set_style(area, style::EMPTY);
        let mut surface = BufferSurface { buf, area };
        self.engine.draw(&mut surface);
    }
}

/// [`DrawSurface`] over a ratatui buffer region, two columns per board cell.
///
/// Cells that fall outside the region are clipped.
pub(crate) struct BufferSurface<'a> {
    pub(crate) buf: &'a mut Buffer,
    pub(crate) area: Rect,
}

impl DrawSurface for BufferSurface<'_> {
    fn fill_cell(&mut self, x: usize, y: usize, kind: PieceKind) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if y >= self.area.height {
            return;
        }
        let style: Style = style::piece(kind);
        for dx in 0..CELL_WIDTH {
            let column = x * CELL_WIDTH + dx;
            if column >= self.area.width {
                return;
            }
            let position = (self.area.x + column, self.area.y + y);
            if let Some(cell) = self.buf.cell_mut(position) {
                cell.set_symbol(" ").set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use blockdrop_engine::{Command, SequenceSource};
    use ratatui::widgets::Block;

    use super::*;
    use crate::view::color;

    fn engine_with_o() -> GameEngine<SequenceSource> {
        let mut engine =
            GameEngine::with_source(SequenceSource::new([3]), Duration::from_millis(600));
        engine.start();
        engine
    }

    #[test]
    fn test_size_includes_border() {
        let engine = engine_with_o();
        assert_eq!(BoardDisplay::new(&engine).width(), 20);
        assert_eq!(BoardDisplay::new(&engine).height(), 20);

        let bordered = BoardDisplay::new(&engine).block(Block::bordered());
        assert_eq!(bordered.width(), 22);
        assert_eq!(bordered.height(), 22);
    }

    #[test]
    fn test_cells_are_two_columns_wide() {
        let engine = engine_with_o();
        let area = Rect::new(0, 0, 20, 20);
        let mut buf = Buffer::empty(area);
        BoardDisplay::new(&engine).render(area, &mut buf);

        let o = color::piece(PieceKind::O);
        // O spawns at x = 4, which is terminal columns 8..12.
        for column in 8..12 {
            assert_eq!(buf[(column, 0)].bg, o);
            assert_eq!(buf[(column, 1)].bg, o);
        }
        assert_eq!(buf[(7, 0)].bg, color::BACKGROUND);
        assert_eq!(buf[(12, 0)].bg, color::BACKGROUND);
        assert_eq!(buf[(8, 2)].bg, color::BACKGROUND);
    }

    #[test]
    fn test_settled_cells_are_drawn_inside_border() {
        let mut engine = engine_with_o();
        engine.apply(Command::HardDrop);

        let area = Rect::new(0, 0, 22, 22);
        let mut buf = Buffer::empty(area);
        BoardDisplay::new(&engine)
            .block(Block::bordered())
            .render(area, &mut buf);

        let o = color::piece(PieceKind::O);
        // Board row 19 sits just above the bottom border.
        assert_eq!(buf[(9, 20)].bg, o);
        assert_eq!(buf[(12, 20)].bg, o);
        assert_eq!(buf[(9, 19)].bg, o);
        assert_eq!(buf[(1, 20)].bg, color::BACKGROUND);
    }

    #[test]
    fn test_surface_clips_to_area() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        let mut surface = BufferSurface {
            buf: &mut buf,
            area,
        };
        surface.fill_cell(1, 0, PieceKind::Z);
        surface.fill_cell(0, 5, PieceKind::Z);
        surface.fill_cell(9, 0, PieceKind::Z);

        assert_eq!(buf[(2, 0)].bg, color::piece(PieceKind::Z));
        assert_ne!(buf[(0, 0)].bg, color::piece(PieceKind::Z));
    }
}
