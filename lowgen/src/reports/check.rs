//! Check command report data structures.

use std::path::PathBuf;

use lowgen_core::TargetPlatform;

use super::output::{Output, Report};

/// Report data from project validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Platform the pages were checked against.
    pub platform: TargetPlatform,
    pub page_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} page{} for {})",
                self.config_path.display(),
                self.page_count,
                if self.page_count == 1 { "" } else { "s" },
                self.platform.display_name()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(errors: Vec<String>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("lowgen.toml"),
            platform: TargetPlatform::Weapp,
            page_count: 1,
            errors,
            warnings: vec!["page 'Home': style dropped".to_string()],
            infos: Vec::new(),
        }
    }

    #[test]
    fn test_valid_report() {
        let mut out = RecordingOutput::default();
        report(Vec::new()).render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "warning: page 'Home': style dropped",
                "",
                "✓ lowgen.toml is valid (1 page for WeChat mini program)",
            ]
        );
    }

    #[test]
    fn test_invalid_report() {
        let report = report(vec!["page name cannot be empty".to_string()]);
        assert!(!report.is_valid());

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines[0], "error: page name cannot be empty");
        assert!(!out.lines.iter().any(|l| l.starts_with('✓')));
    }
}
