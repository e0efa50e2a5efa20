//! Minimal terminal application runtime.
//!
//! [`Runtime::run`] owns the terminal and drives an [`App`] with three kinds
//! of events: timed ticks carrying the elapsed time, render requests and raw
//! crossterm input.

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
