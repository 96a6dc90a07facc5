//! Rendering the statement for external consumers.

mod json;
mod md;

pub use json::{Snapshot, to_json, write_json};
pub use md::{render_markdown, write_markdown};
