//! Component mapping rules and the registry that resolves them.
//!
//! - [`MappingRegistry`] - Built-in and custom mapping tables with a merged view
//! - [`ComponentPlatformMapping`] - All platform rules of one logical type
//! - [`PlatformRule`] - Tag, import path and prop/style renames for one platform
//! - [`PropTransform`] - Value transforms applied while renaming

mod builtins;
mod decl;
mod registry;
mod types;

pub use builtins::{TARO_COMPONENTS, builtin_mappings};
pub use registry::{MappingRegistry, RegisterOptions};
pub use types::{
    ComponentPlatformMapping, PlatformRule, PropMapping, PropTransform, StyleMapping, TransformFn,
};
