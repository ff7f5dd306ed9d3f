use std::path::PathBuf;

use lowgen_core::TargetPlatform;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("component type '{component_type}' is not supported on platform '{platform}'")]
    #[diagnostic(
        code(lowgen::unsupported_component),
        help("add a mapping under [components.{component_type}.{platform}] in lowgen.toml")
    )]
    UnsupportedComponent {
        component_type: String,
        platform: TargetPlatform,
    },

    #[error("code generation failed for platform '{platform}'")]
    #[diagnostic(code(lowgen::generation_error))]
    Generation {
        platform: TargetPlatform,
        #[source]
        source: Box<Error>,
    },

    #[error("page '{page}' has no component tree")]
    #[diagnostic(
        code(lowgen::missing_components),
        help("add a root node under \"components\" in the page file")
    )]
    MissingComponents { page: String },

    #[error("failed to create archive: {message}")]
    #[diagnostic(code(lowgen::archive_error))]
    Archive { message: String },

    #[error("failed to write '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an error with the platform it occurred on.
    pub fn on_platform(self: Box<Self>, platform: TargetPlatform) -> Box<Self> {
        Box::new(Error::Generation {
            platform,
            source: self,
        })
    }

    /// Get the innermost error, skipping platform wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Generation { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_component_message() {
        let err = Error::UnsupportedComponent {
            component_type: "Chart".into(),
            platform: TargetPlatform::Rn,
        };
        assert_eq!(
            err.to_string(),
            "component type 'Chart' is not supported on platform 'rn'"
        );
    }

    #[test]
    fn test_on_platform_wraps_and_root_unwraps() {
        let err = Box::new(Error::MissingComponents {
            page: "home".into(),
        })
        .on_platform(TargetPlatform::Weapp);

        assert!(matches!(*err, Error::Generation { platform: TargetPlatform::Weapp, .. }));
        assert!(matches!(err.root(), Error::MissingComponents { .. }));
    }
}
