//! Page file parsing.
//!
//! A page file is the JSON form of [`PageModel`]:
//!
//! ```json
//! {
//!   "name": "Home",
//!   "title": "Welcome",
//!   "components": {
//!     "id": "root",
//!     "type": "Container",
//!     "style": { "padding": "16px" },
//!     "children": [
//!       { "id": "t1", "type": "Text", "props": { "content": "Hello" } }
//!     ]
//!   }
//! }
//! ```

use std::path::Path;

use lowgen_ir::PageModel;

use crate::{Error, Result, error::SourceContext};

/// Parse a page from JSON text, using `filename` for error reporting.
pub fn parse_page(src: &str, filename: &str) -> Result<PageModel> {
    let ctx = SourceContext::new(src, filename);
    let page: PageModel = serde_json::from_str(src).map_err(|e| ctx.page_parse_error(e))?;

    if page.name.trim().is_empty() {
        return Err(ctx.validation_error("page name cannot be empty"));
    }
    Ok(page)
}

/// Read and parse a page file.
pub fn parse_page_file(path: impl AsRef<Path>) -> Result<PageModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source: e,
        })
    })?;
    parse_page(&content, &path.display().to_string())
}
