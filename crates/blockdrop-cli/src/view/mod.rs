use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub(crate) use self::{board_display::*, key_binding_display::*, stats_display::*};

mod board_display;
mod key_binding_display;
mod stats_display;

pub(crate) mod color {
    use blockdrop_engine::PieceKind;
    use ratatui::style::Color;

    pub(crate) const BACKGROUND: Color = Color::Rgb(0x11, 0x11, 0x11);
    pub(crate) const WHITE: Color = Color::Rgb(255, 255, 255);
    pub(crate) const BLACK: Color = Color::Rgb(0, 0, 0);
    pub(crate) const GRAY: Color = Color::Rgb(127, 127, 127);
    pub(crate) const YELLOW: Color = Color::Rgb(0xf0, 0xf0, 0x00);
    pub(crate) const RED: Color = Color::Rgb(0xf0, 0x00, 0x00);

    #[must_use]
    pub(crate) const fn piece(kind: PieceKind) -> Color {
        match kind {
            PieceKind::I => Color::Rgb(0x00, 0xf0, 0xf0),
            PieceKind::J => Color::Rgb(0x00, 0x00, 0xf0),
            PieceKind::L => Color::Rgb(0xf0, 0xa0, 0x00),
            PieceKind::O => Color::Rgb(0xf0, 0xf0, 0x00),
            PieceKind::S => Color::Rgb(0x00, 0xf0, 0x00),
            PieceKind::T => Color::Rgb(0xa0, 0x00, 0xf0),
            PieceKind::Z => Color::Rgb(0xf0, 0x00, 0x00),
        }
    }
}

pub(crate) mod style {
    use blockdrop_engine::PieceKind;
    use ratatui::style::Style;

    use super::color;

    pub(crate) const DEFAULT: Style = Style::new().fg(color::WHITE).bg(color::BLACK);
    pub(crate) const EMPTY: Style = Style::new().fg(color::BACKGROUND).bg(color::BACKGROUND);

    #[must_use]
    pub(crate) const fn piece(kind: PieceKind) -> Style {
        let color = color::piece(kind);
        Style::new().fg(color).bg(color)
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
