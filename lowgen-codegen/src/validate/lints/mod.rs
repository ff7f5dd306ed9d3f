//! Built-in page lints.

mod component_identity;
mod component_tree;
mod page_name;
mod unsupported_component;

pub use component_identity::ComponentIdentityLint;
pub use component_tree::ComponentTreeLint;
pub use page_name::PageNameLint;
pub use unsupported_component::UnsupportedComponentLint;
