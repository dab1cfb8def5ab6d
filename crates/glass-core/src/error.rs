use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown origin side `{0}` (expected top, bottom, left, right or center)")]
    UnknownOrigin(String),
    #[error("invalid depth `{0}`")]
    InvalidDepth(String),
}
