// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `lowgen.toml` project manifests and page files.
//!
//! A project is described by one `lowgen.toml`:
//!
//! ```toml
//! [project]
//! name = "shop"
//! platform = "weapp"
//! pages = ["pages/home.json"]
//!
//! [styles]
//! page = { backgroundColor = "#f5f5f5" }
//!
//! [components.Card.weapp]
//! component = "View"
//! import = "@tarojs/components"
//! ```
//!
//! Each entry of `pages` points to a JSON [`PageModel`](lowgen_ir::PageModel).

mod error;
mod manifest;
mod page;

pub use error::{Error, Result};
pub use manifest::{
    CodeGenerationConfig, ComponentDecl, LowgenToml, Manifest, ParseContext, PropRuleDecl,
    RuleDecl, StyleRuleDecl, TransformDecl,
};
pub use page::{parse_page, parse_page_file};
