//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and routes keys, engine events,
//! query completions and timer ticks to the transport readout and queue view.

mod model;

pub use model::*;
