use std::fmt;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Cluster,
    User,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Cluster => f.write_str("cluster"),
            EntryKind::User => f.write_str("user"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no {kind} named {name:?} in kube config")]
    NotFound { kind: EntryKind, name: String },

    #[error("{kind} {name:?} carries no inline {field}")]
    MissingData {
        kind: EntryKind,
        name: String,
        field: &'static str,
    },

    #[error("invalid base64 in {field}: {source}")]
    Decode {
        field: &'static str,
        source: base64::DecodeError,
    },

    #[error("decoded {field} is empty, no trailing byte to strip")]
    TrimUnderflow { field: &'static str },

    #[error("decoded {field} is not valid UTF-8: {source}")]
    Utf8 {
        field: &'static str,
        source: FromUtf8Error,
    },
}
