use std::time::Duration;

use blockdrop_engine::{Command, GameEngine, GameState, RandomSource, SeededSource};
use blockdrop_runtime::{App, RenderMode, Runtime};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::Line,
    widgets::Block,
};

use crate::view::{BoardDisplay, KeyBinding, KeyBindingDisplay, StatsDisplay, color, style};

const FPS: f64 = 60.0;
const TICK_INTERVAL: Duration = Duration::from_millis(16);

const KEY_BINDINGS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↓"], "Soft Drop"),
    (&["↑"], "Rotate"),
    (&["Space"], "Hard Drop"),
    (&["S", "Enter"], "Start"),
    (&["P"], "Pause"),
    (&["Q", "Esc"], "Quit"),
];

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Play(Command),
    Start,
    TogglePause,
    Quit,
}

impl Action {
    pub(crate) fn from_key(code: KeyCode) -> Option<Self> {
        let action = match code {
            KeyCode::Left => Action::Play(Command::MoveLeft),
            KeyCode::Right => Action::Play(Command::MoveRight),
            KeyCode::Down => Action::Play(Command::SoftDrop),
            KeyCode::Up => Action::Play(Command::RotateCw),
            KeyCode::Char(' ') => Action::Play(Command::HardDrop),
            KeyCode::Char('s' | 'S') | KeyCode::Enter => Action::Start,
            KeyCode::Char('p' | 'P') => Action::TogglePause,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug)]
pub(crate) struct PlayApp<R = SeededSource> {
    engine: GameEngine<R>,
    is_exiting: bool,
}

impl<R> PlayApp<R>
where
    R: RandomSource,
{
    pub(crate) fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            is_exiting: false,
        }
    }

    pub(crate) fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Play(command) => _ = self.engine.apply(command),
            Action::Start => self.engine.start(),
            Action::TogglePause => self.engine.toggle_pause(),
            Action::Quit => self.is_exiting = true,
        }
    }
}

impl<R> App for PlayApp<R>
where
    R: RandomSource,
{
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_interval(Some(TICK_INTERVAL));
        runtime.set_render_mode(RenderMode::throttled_from_rate(FPS));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = Action::from_key(key.code) {
            self.perform(action);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let border_color = match self.engine.state() {
            GameState::Paused => color::YELLOW,
            GameState::Over => color::RED,
            GameState::Idle | GameState::Running => color::GRAY,
        };
        let board = BoardDisplay::new(&self.engine).block(
            Block::bordered()
                .border_style(border_color)
                .style(style::DEFAULT),
        );
        let stats = StatsDisplay::new(&self.engine).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .border_style(border_color)
                .style(style::DEFAULT),
        );

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(board.height()), Constraint::Length(1)])
                .areas(frame.area());
        let [board_area, stats_area] = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(main_area);
        let [stats_area] = Layout::vertical([Constraint::Length(stats.height())]).areas(stats_area);

        frame.render_widget(board, board_area);
        frame.render_widget(stats, stats_area);
        frame.render_widget(KeyBindingDisplay::new(KEY_BINDINGS), help_area);
    }

    fn update(&mut self, _runtime: &mut Runtime, elapsed: Duration) {
        self.engine.tick(elapsed);
    }
}
