//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{ComponentDecl, Manifest, RawManifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "lowgen.toml")
    }
}

impl Manifest {
    /// Parse a lowgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a lowgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawManifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    let manifest = Manifest::from(raw);
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_package_name(&manifest.project.project_name)?;

    for (name, decl) in &manifest.components {
        ctx.validate_name(name, "component type")?;
        validate_component(decl, &ctx.push(name))?;
    }
    Ok(())
}

fn validate_component(decl: &ComponentDecl, ctx: &ParseContext<'_>) -> Result<()> {
    if decl.platforms.is_empty() {
        return Err(ctx.source_context().validation_error(format!(
            "component '{}' declares no platform rules",
            ctx.path_string()
        )));
    }

    for (platform, rule) in &decl.platforms {
        let rule_ctx = ctx.push(platform.as_str());
        rule_ctx.validate_tag(&rule.component, !rule.import_path.is_empty())?;

        let props = rule.props.iter().flatten().map(|p| (&p.source, &p.target));
        let styles = rule.styles.iter().flatten().map(|s| (&s.source, &s.target));
        for (source, target) in props.chain(styles) {
            if source.is_empty() || target.is_empty() {
                return Err(rule_ctx.source_context().validation_error(format!(
                    "rule in '{}' has an empty source or target",
                    rule_ctx.path_string()
                )));
            }
        }
    }
    Ok(())
}
