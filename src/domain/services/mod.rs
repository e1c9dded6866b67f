//! Domain Services
//!
//! Stateless functions over domain types. Nothing here performs I/O.

pub mod escaping;
pub mod renderer;
pub mod target_resolver;

pub use escaping::escape_html;
pub use renderer::{render, render_named};
pub use target_resolver::{cache_paths, target_paths};
