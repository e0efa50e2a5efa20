//! Stateful game layer.
//!
//! [`GameEngine`] owns the board, the falling piece and the counters, and
//! advances them in response to [`Command`]s and elapsed time. Piece selection
//! goes through a [`RandomSource`] so games can be replayed from a seed or a
//! scripted sequence.

pub use self::{
    config::*, draw_surface::*, game_engine::*, game_stats::*, piece_factory::*, random::*,
};

mod config;
mod draw_surface;
mod game_engine;
mod game_stats;
mod piece_factory;
mod random;
