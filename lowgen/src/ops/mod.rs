//! Core operations.
//!
//! This module contains the business logic for lowgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
mod project;

pub use check::check;
pub use generate::write_project;
pub use project::Project;
