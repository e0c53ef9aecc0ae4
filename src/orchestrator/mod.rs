//! Run lifecycle orchestration.
//!
//! Owns the idle/running state machine, the periodic emitter task and the
//! result store. UI/CLI layers drive it either directly through
//! [`RunController`] or over a command channel via [`run_session`].

mod controller;

pub use controller::{run_session, RunController, UiCommand};
