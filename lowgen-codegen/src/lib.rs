// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Target-independent code generation for lowgen.
//!
//! This crate turns an authored [`ComponentModel`](lowgen_ir::ComponentModel)
//! tree into a platform-resolved [`AstNode`](lowgen_ir::AstNode) tree that
//! target emitters render into source text.
//!
//! # Module Organization
//!
//! - [`mapping`] - Component mapping registry (built-in and custom rules)
//! - [`style`] - Shared style policy, style adaptation and stylesheets
//! - [`ast`] - Lowering of component trees into the intermediate AST
//! - [`generation`] - Per-call context, import/dependency tracking, file registry
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`validate`] - Advisory page lints

pub mod ast;
pub mod builder;
mod diagnostic;
mod error;
pub mod generation;
pub mod mapping;
pub mod style;
pub mod validate;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{Error, Result};
