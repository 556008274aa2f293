use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CashrampError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("{kind} error: {message}")]
    Request { kind: ErrorKind, message: String },

    #[error("Result decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Which stage of a request produced a failed envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request never got a response (connect, DNS, timeout, body read).
    Transport,
    /// The server answered with a status other than 200.
    HttpStatus,
    /// A 200 response whose body was not a GraphQL payload.
    Parse,
    /// The server reported an `errors` array.
    GraphQl,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Transport => "Transport",
            ErrorKind::HttpStatus => "HTTP status",
            ErrorKind::Parse => "Parse",
            ErrorKind::GraphQl => "GraphQL",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, CashrampError>;
