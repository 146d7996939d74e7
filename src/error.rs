// third-party imports
use thiserror::Error;

// local imports
use crate::mode::MatchMode;

/// Error is an error which may occur when compiling or matching a glob pattern.
#[derive(Error, Debug)]
pub enum Error {
    #[error("bad or unsupported glob pattern {pattern:?}: {source}")]
    InvalidExpression {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("unsupported match mode combination {0:?}")]
    UnsupportedMode(MatchMode),
    #[error("unknown match flag {0:?}")]
    UnknownFlag(String),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
