//! Falling-block puzzle simulation.
//!
//! The crate is split into two layers:
//!
//! - [`core`] - static data and pure board logic (shape catalog, board, piece)
//! - [`engine`] - the stateful game loop built on top of it
//!
//! Nothing here renders, reads the keyboard or sleeps. Front ends feed
//! [`Command`]s and elapsed time into a [`GameEngine`] and read snapshots back
//! out, either directly or through a [`DrawSurface`].

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
