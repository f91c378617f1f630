//! Placeholder templates and width-aware text helpers.
//!
//! A [`FormatTemplate`] is compiled once from a string such as
//! `"playing $title from $album"` and rendered on every readout refresh into
//! styled `ratatui` spans that never exceed the available width.

mod template;
pub mod text;

pub use template::*;
