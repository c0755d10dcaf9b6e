use crate::codec::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevcatError {
    #[error("Index {index} out of range (catalog holds {len} devices)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Device {index} cannot be saved: {source}")]
    Unencodable {
        index: usize,
        #[source]
        source: CodecError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DevcatError>;
