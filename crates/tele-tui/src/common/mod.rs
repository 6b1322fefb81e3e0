//! Shared utilities for TUI modules.

pub mod keys;
pub mod render_utils;
pub mod text;
pub mod wrap;

pub use text::{decode_source, truncate_start_with_ellipsis};
pub use wrap::wrap;
