//! Core utilities and types for the lowgen UI code generator.
//!
//! This crate provides the fundamental types shared by every other crate
//! in the workspace: the target platform enumeration, project versions,
//! naming helpers and generated-file plumbing.

mod file;
mod platform;
mod utils;
mod version;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Target platforms
pub use platform::{PlatformFamily, TargetPlatform};
// String utilities
pub use utils::{sanitize_page_name, to_camel_case, to_kebab_case, to_pascal_case};
pub use version::Version;
