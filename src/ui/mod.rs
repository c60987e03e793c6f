//! Terminal UI for step playback
//!
//! Renders the source script, the current structure snapshot, and the step
//! log, and owns the playback timer. Everything here operates over the
//! already-materialized step history; no parsing or generation happens after
//! the app starts.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
