//! Manifest loading from disk.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::domain::{AppError, Manifest, parse_manifest_content};

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest, AppError> {
    debug!("loading manifest from {}", path.display());
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            AppError::ManifestMissing(path.display().to_string())
        } else {
            AppError::Io(err)
        }
    })?;
    parse_manifest_content(&content)
}
