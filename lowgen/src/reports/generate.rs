//! Generate command report data structures.

use std::path::PathBuf;

use lowgen_core::TargetPlatform;

use super::output::{Output, Report};

/// Report data from project generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub project_name: String,
    pub version: String,
    pub platform: TargetPlatform,
    pub output_dir: PathBuf,
    pub page_count: usize,
    /// Non-fatal generation findings.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// What happened to the generated files.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written (or kept because they already existed).
    Written {
        written: Vec<String>,
        skipped: Vec<String>,
    },
    /// Dry run; nothing was written.
    Preview(Vec<PreviewFile>),
}

/// A file that would be generated.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
            GenerationResult::Written { written, skipped } => {
                out.preformatted(&format!("{} v{}", self.project_name, self.version));
                out.key_value_indented("platform", self.platform.display_name());
                out.key_value_indented("pages", &self.page_count.to_string());
                out.newline();

                out.section(&format!("Generated into {}", self.output_dir.display()));
                for path in written {
                    out.added_item(path);
                }
                if !skipped.is_empty() {
                    out.newline();
                    out.section("Kept existing");
                    for path in skipped {
                        out.list_item(path);
                    }
                }
            }
        }
    }
}
