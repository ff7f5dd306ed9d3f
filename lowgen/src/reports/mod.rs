//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`] target.

mod check;
mod components;
mod generate;
mod output;

pub use check::CheckReport;
pub use components::{ComponentRow, ComponentsReport};
pub use generate::{GenerateReport, GenerationResult, PreviewFile};
pub use output::{Report, TerminalOutput};
