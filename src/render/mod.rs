//! Terminal rendering of analysis results.
//!
//! Rendering is pure: every function returns a `String` and never touches
//! stdout or the form state.

mod format;
mod view;

pub use format::{format_last_modified, yes_no};
pub use view::ResultView;
