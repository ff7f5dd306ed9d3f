//! Packaging of generated projects into downloadable archives.

use std::io::{Cursor, Write};

use indexmap::IndexMap;
use lowgen_codegen::{Error, Result};
use zip::{
    CompressionMethod,
    write::{FileOptions, ZipWriter},
};

/// Turns a path -> content map into a binary package.
pub trait ArchiveWriter {
    /// File extension of produced archives, without the dot.
    fn extension(&self) -> &'static str;

    /// Serialize every file into one archive.
    fn write_archive(&self, files: &IndexMap<String, String>) -> Result<Vec<u8>>;
}

/// Deflate-compressed zip archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveWriter;

impl ArchiveWriter for ZipArchiveWriter {
    fn extension(&self) -> &'static str {
        "zip"
    }

    fn write_archive(&self, files: &IndexMap<String, String>) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);

        for (path, content) in files {
            zip.start_file(path.as_str(), options.clone()).map_err(archive_error)?;
            zip.write_all(content.as_bytes()).map_err(archive_error)?;
        }

        let cursor = zip.finish().map_err(archive_error)?;
        Ok(cursor.into_inner())
    }
}

fn archive_error(err: impl std::fmt::Display) -> Box<Error> {
    Box::new(Error::Archive {
        message: err.to_string(),
    })
}

/// A packaged project ready for download.
#[derive(Debug, Clone)]
pub struct Archive {
    /// `<projectName>-<platform>.<ext>`
    pub file_name: String,
    pub bytes: Vec<u8>,
}
