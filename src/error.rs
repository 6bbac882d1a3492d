use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid case study data: {0}")]
    Data(#[from] serde_json::Error),

    #[error("case study keyed `{key}` declares id `{id}`")]
    IdMismatch { key: String, id: String },

    #[error("case study with an empty id")]
    EmptyId,
}
