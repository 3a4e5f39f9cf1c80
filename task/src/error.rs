use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("round {round} is outside the catalog (1..={rounds})")]
    RoundOutOfRange { round: u32, rounds: usize },

    #[error("allocation catalog is empty")]
    EmptyCatalog,

    #[error("catalog item {name:?} has no quantity to distribute")]
    InvalidItem { name: String },

    #[error("settings file {path}: {source}")]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {path} is not valid JSON: {source}")]
    SettingsJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
