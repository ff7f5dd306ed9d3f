//! Check operation - project and page validation.

use lowgen_codegen::{Diagnostic, Severity};
use lowgen_core::TargetPlatform;

use super::Project;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Lints every page for `platform` and reports component types whose
/// mapping misses a platform.
pub fn check(project: &Project, platform: TargetPlatform) -> CheckReport {
    let service = project.service();
    let mut findings: Vec<(Option<String>, Diagnostic)> = Vec::new();

    for (index, page) in project.pages().iter().enumerate() {
        let page_label = if page.name.is_empty() {
            format!("page #{}", index + 1)
        } else {
            format!("page '{}'", page.name)
        };
        findings.extend(
            service
                .validate_page(page, platform)
                .into_iter()
                .map(|diag| (Some(page_label.clone()), diag)),
        );
    }

    for (component_type, missing) in service.registry().incomplete_mappings() {
        let platforms: Vec<_> = missing.iter().map(TargetPlatform::as_str).collect();
        let diag = Diagnostic::info(
            "mapping",
            format!(
                "component '{}' has no rule for: {}",
                component_type,
                platforms.join(", ")
            ),
        );
        findings.push((None, diag));
    }

    let mut report = CheckReport {
        config_path: project.path().to_path_buf(),
        platform,
        page_count: project.pages().len(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
    };
    for (label, diag) in findings {
        let msg = format_finding(label.as_deref(), &diag);
        match diag.severity {
            Severity::Error => report.errors.push(msg),
            Severity::Warning => report.warnings.push(msg),
            Severity::Info => report.infos.push(msg),
        }
    }
    report
}

fn format_finding(label: Option<&str>, diag: &Diagnostic) -> String {
    let msg = match label {
        Some(label) => format!("{}: {}", label, diag.message),
        None => diag.message.clone(),
    };
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", msg, loc),
        None => msg,
    }
}
