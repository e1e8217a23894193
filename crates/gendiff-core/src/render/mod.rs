//! Renderers turning a diff tree into text.
//!
//! All three read the same immutable tree and share [`render_value`] for leaf
//! values.

mod json;
mod plain;
mod stylish;
mod value;

pub use json::render_json;
pub use plain::render_plain;
pub use stylish::render_stylish;
pub use value::{render_value, ValueStyle, COMPLEX_VALUE, INDENT_WIDTH};

use crate::{DiffError, DiffNode, Format};

/// Renders `tree` with the renderer selected by `format`.
///
/// ```
/// # use gendiff_core::{render::render, Format};
/// assert_eq!(render(&[], Format::Stylish)?, "{\n}");
/// assert_eq!(render(&[], Format::Plain)?, "");
/// assert_eq!(render(&[], Format::Json)?, "[]");
/// # Ok::<(), gendiff_core::DiffError>(())
/// ```
pub fn render(tree: &[DiffNode], format: Format) -> Result<String, DiffError> {
    let rendered = match format {
        Format::Stylish => render_stylish(tree),
        Format::Plain => render_plain(tree),
        Format::Json => render_json(tree)?,
    };
    tracing::debug!(%format, bytes = rendered.len(), "rendered diff");
    Ok(rendered)
}
