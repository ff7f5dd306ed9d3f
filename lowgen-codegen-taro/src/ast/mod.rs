//! TSX building blocks.

mod component_fn;
mod imports;
mod jsx;

pub use component_fn::ComponentFn;
pub use imports::Import;
pub use jsx::{JsxElement, object_literal, render_attribute, render_jsx};
