use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("conflicting class for {slug}: {existing} vs {incoming}")]
    Conflict {
        slug: String,
        existing: u32,
        incoming: u32,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum CardError {
    #[error("cards root not found: {}", .0.display())]
    RootMissing(PathBuf),
    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("read failed: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("record is not a JSON object")]
    NotAnObject(PathBuf),
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("write failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CardError {
    /// File or directory the error is about, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            CardError::RootMissing(path) | CardError::NotAnObject(path) => Some(path.as_path()),
            CardError::Config { path, .. }
            | CardError::Read { path, .. }
            | CardError::Parse { path, .. }
            | CardError::Write { path, .. } => Some(path.as_path()),
            CardError::Table(_) | CardError::Serialize(_) => None,
        }
    }
}
