use std::iter;

use blockdrop_engine::{GameEngine, GameState, RandomSource};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::{color, style};

/// Side panel with the running totals and a one-line status.
pub(crate) struct StatsDisplay<'a, R> {
    engine: &'a GameEngine<R>,
    block: Option<BlockWidget<'a>>,
}

impl<'a, R> StatsDisplay<'a, R> {
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
        16 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub(crate) fn height(&self) -> u16 {
        ROW_COUNT + super::block_vertical_margin(self.block.as_ref())
    }
}

/// Status text and style for a game state.
pub(crate) fn status_line(state: GameState) -> (&'static str, Style) {
    match state {
        GameState::Idle => ("PRESS S TO START", Style::new().fg(color::WHITE)),
        GameState::Running => ("", style::DEFAULT),
        GameState::Paused => ("PAUSED", Style::new().fg(color::BLACK).bg(color::YELLOW)),
        GameState::Over => ("GAME OVER", Style::new().fg(color::WHITE).bg(color::RED)),
    }
}

const ROW_COUNT: u16 = 7;

impl<R> Widget for StatsDisplay<'_, R>
where
    R: RandomSource,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let stats = self.engine.stats();
        let rows = [
            ("SCORE:", stats.score()),
            ("LINES:", stats.cleared_lines()),
            ("PIECES:", stats.completed_pieces()),
        ];

        let areas = Layout::vertical((0..ROW_COUNT).map(|_| Constraint::Length(1))).split(area);
        for ((label, value), area) in iter::zip(rows, areas.iter().step_by(2)) {
            let [label_area, value_area] =
                area.layout(&Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]));
            Line::styled(label, style)
                .left_aligned()
                .render(label_area, buf);
            Line::styled(value.to_string(), style)
                .right_aligned()
                .render(value_area, buf);
        }

        let (text, text_style) = status_line(self.engine.state());
        if let Some(status_area) = areas.last() {
            Line::styled(text, text_style)
                .centered()
                .render(*status_area, buf);
        }
    }
}
