//! Taro (React/TSX) emitter and generation service for lowgen.
//!
//! Lowered trees from [`lowgen_codegen`] are rendered into TSX page
//! components, page stylesheets and the configuration files of a Taro
//! project. [`GenerationService`] ties the pipeline together.
//!
//! # Example
//!
//! ```
//! use lowgen_codegen_taro::{GenerationService, ZipArchiveWriter};
//! use lowgen_core::TargetPlatform;
//! use lowgen_ir::{ComponentModel, PageModel};
//! use lowgen_manifest::CodeGenerationConfig;
//!
//! let pages = vec![PageModel::new(
//!     "home",
//!     ComponentModel::new("root", "Container").with_style("padding", "16px"),
//! )];
//! let config = CodeGenerationConfig::new("shop", TargetPlatform::Weapp);
//!
//! let archive = GenerationService::new()
//!     .generate_and_download(&pages, TargetPlatform::Weapp, &config, &ZipArchiveWriter)
//!     .unwrap();
//! assert_eq!(archive.file_name, "shop-weapp.zip");
//! ```

mod archive;
pub mod ast;
mod code_file;
mod emitter;
pub mod files;
mod output;
mod service;

pub use archive::{Archive, ArchiveWriter, ZipArchiveWriter};
pub use code_file::{CodeFile, RawCode};
pub use emitter::{RenderedComponent, component_name, generate_component_code};
pub use output::{GeneratedCode, PageSource};
pub use service::{GenerationService, PageOutput, Preview};
