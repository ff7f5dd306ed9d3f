//! Generate operation - writing or previewing project files.

use std::path::Path;

use eyre::{Context, Result};
use lowgen_codegen_taro::GeneratedCode;

use crate::reports::{GenerationResult, PreviewFile};

/// Write generated files below `output_dir`, or list them without writing.
pub fn write_project(
    code: &GeneratedCode,
    output_dir: &Path,
    dry_run: bool,
) -> Result<GenerationResult> {
    let registry = code.to_registry();

    if dry_run {
        let files = registry
            .preview()
            .into_iter()
            .map(|entry| PreviewFile {
                path: entry.path,
                content: entry.content,
            })
            .collect();
        return Ok(GenerationResult::Preview(files));
    }

    let stats = registry
        .write_all(output_dir)
        .wrap_err_with(|| format!("Failed to write project to {}", output_dir.display()))?;

    Ok(GenerationResult::Written {
        written: stats.written_paths,
        skipped: stats.skipped_paths,
    })
}

#[cfg(test)]
mod tests {
    use lowgen_codegen_taro::GenerationService;
    use lowgen_core::TargetPlatform;
    use lowgen_ir::{ComponentModel, PageModel};
    use lowgen_manifest::CodeGenerationConfig;
    use tempfile::TempDir;

    use super::*;

    fn code() -> GeneratedCode {
        let page = PageModel::new("home", ComponentModel::new("root", "Container"));
        GenerationService::new()
            .generate_project_code(
                &[page],
                TargetPlatform::H5,
                &CodeGenerationConfig::new("shop", TargetPlatform::H5),
            )
            .unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let result = write_project(&code(), temp.path(), true).unwrap();

        match result {
            GenerationResult::Preview(files) => {
                assert!(files.iter().any(|f| f.path == "pages/home/index.tsx"));
            }
            GenerationResult::Written { .. } => panic!("dry run wrote files"),
        }
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_write() {
        let temp = TempDir::new().unwrap();
        let result = write_project(&code(), temp.path(), false).unwrap();

        match result {
            GenerationResult::Written { written, skipped } => {
                assert!(written.contains(&"package.json".to_string()));
                assert!(skipped.is_empty());
            }
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
        assert!(temp.path().join("app.config.ts").exists());
    }
}
