use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a scene description.
///
/// All of these are fatal to the run: either the whole scene loads and
/// renders, or nothing is drawn.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Invalid JSON, or a required key/field is missing.
    #[error("malformed scene: {0}")]
    Malformed(String),

    /// A figure entry carries a `type` outside the closed shape set.
    #[error("unknown figure type {0:?}")]
    UnknownFigureType(String),

    /// A color token resolved to nothing: not a palette key, not an
    /// `(r,g,b)` triple, not a recognized literal.
    #[error("invalid color token {0:?}")]
    InvalidColor(String),

    /// Negative or out-of-range size parameter (radius, width, height, size).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The scene file could not be read at all.
    #[error("failed to read scene file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
