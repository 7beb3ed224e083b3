//! Error types reported while assembling a scene.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop [`SceneBuilder::build`](crate::builder::SceneBuilder::build).
#[derive(Error, Debug)]
pub enum SceneError {
    /// An input file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sphere CSV line did not have exactly four comma-separated fields
    #[error(
        "format of CSV file {} - incorrect number of columns on line {line}: expected 4, found {found}",
        .path.display()
    )]
    ColumnCount {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    /// An input produced fewer records than the configured count (strict mode only)
    #[error("{} has {found} records but the scene needs {expected}", .path.display())]
    ShortInput {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// The palette has no entry with this id
    #[error("material {0} is not in the palette")]
    MissingMaterial(usize),
}

impl SceneError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SceneError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;
