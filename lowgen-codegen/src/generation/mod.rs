//! Generation state and output management.
//!
//! - [`GenerationContext`] - Per-call bookkeeping (imports, styles, dependencies, diagnostics)
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`DependencyCollector`] - npm package tracking
//! - [`FileRegistry`] - Declarative file registration and output

mod context;
mod imports;
mod registry;

pub use context::GenerationContext;
pub use imports::{DependencyCollector, DependencySpec, ImportCollector, package_name};
pub use registry::{FileCategory, FileEntry, FileRegistry, PreviewEntry, WriteStats};
