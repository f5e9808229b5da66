//! Purpose: Single file-write boundary for rendered run documents.
//! Exports: `write_document`.
//! Role: Keep filesystem effects out of the renderers.
//! Invariants: Every write replaces the whole file; nothing is appended.
//! Invariants: Callers render before writing; a failed render writes nothing.
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::error::{Error, ErrorKind};

/// Writes `payload` to `path`, creating or truncating the file.
pub fn write_document(path: &Path, payload: &str) -> Result<(), Error> {
    debug!(path = %path.display(), bytes = payload.len(), "writing run document");
    fs::write(path, payload).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to write run document")
            .with_path(path)
            .with_source(err)
    })
}
