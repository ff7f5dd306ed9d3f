//! Component tree and intermediate representation types for lowgen.
//!
//! # Architecture
//!
//! ```text
//! page.json → PageModel / ComponentModel → (mapping + lowering) → AstNode → emitter
//! ```
//!
//! The component model is the platform-agnostic input authored by an editing
//! surface. The AST is the platform-resolved tree produced by lowering, with
//! props and styles already translated for one target. Neither type knows
//! about any particular platform; that knowledge lives in the codegen crates.

mod ast;
mod component;
mod value;

pub use ast::{AstKind, AstNode};
pub use component::{ComponentModel, PageModel};
pub use value::{Expression, PropMap, PropValue, StyleMap};
