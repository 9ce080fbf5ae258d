//! Terminal runtime that drives an [`App`] from key input and gravity ticks.

pub(crate) use self::{app::App, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
