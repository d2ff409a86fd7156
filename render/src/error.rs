#![allow(dead_code)]

use thiserror::Error;

/// Almost everything in this renderer is a documented no-op rather than a
/// propagated error (see spec.md's error table) -- this enum only covers the
/// handful of operations where "silently do nothing" would hide a genuine
/// caller mistake: loading a model.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to read STL file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse STL file {path}: {reason}")]
    Parse { path: String, reason: String },
}
