//! Typed errors for OBJ/MTL model loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by a loader invocation. Every variant is fatal: a
/// malformed file yields no partial mesh. Parse-time variants carry the
/// 1-based line number and the raw line text for diagnosis.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Malformed numeric field or directive.
    #[error("line {line}: malformed field in '{text}'")]
    Parse { line: usize, text: String },

    /// Face index that is zero, non-numeric or past the declared arrays.
    #[error("line {line}: invalid face index in '{text}'")]
    InvalidFaceIndex { line: usize, text: String },

    /// Face with a vertex-reference count other than 3 or 4.
    #[error("line {line}: face with {count} vertex references is unsupported in '{text}'")]
    UnsupportedFaceArity {
        line: usize,
        count: usize,
        text: String,
    },

    /// `usemtl` naming a material absent from the material library.
    #[error("line {line}: unknown material '{name}'")]
    MaterialNotFound { line: usize, name: String },

    /// Face encountered before any `usemtl` directive.
    #[error("line {line}: face before any usemtl directive in '{text}'")]
    NoActiveMaterial { line: usize, text: String },

    /// More emitted vertices than a 16-bit index buffer can address.
    #[error("mesh exceeds the 65536 vertices addressable by 16-bit indices")]
    MeshTooLarge,

    /// An input file could not be read.
    #[error("failed to read '{}'", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
