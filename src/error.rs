use std::collections::TryReserveError;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Alloc,
    InvalidArgument,
    Uri,
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to grow buffer by {requested} bytes: {source}")]
    Alloc {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid template {template:?}: {reason}")]
    InvalidTemplate {
        template: String,
        reason: &'static str,
    },

    #[error("a formatting trait implementation returned an error")]
    Format,

    #[error("cannot trim {requested} bytes from a buffer of {len} bytes")]
    TrimOutOfRange { requested: usize, len: usize },

    #[error("trimming to byte {offset} would split a UTF-8 character")]
    CharBoundary { offset: usize },

    #[error("invalid URI {input:?}: {message}")]
    Uri { input: String, message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Alloc { .. } => ErrorKind::Alloc,
            Error::InvalidTemplate { .. }
            | Error::Format
            | Error::TrimOutOfRange { .. }
            | Error::CharBoundary { .. } => ErrorKind::InvalidArgument,
            Error::Uri { .. } => ErrorKind::Uri,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn invalid_template(template: &str, reason: &'static str) -> Self {
        Error::InvalidTemplate {
            template: template.to_string(),
            reason,
        }
    }

    pub(crate) fn uri(input: &str, message: impl Into<String>) -> Self {
        Error::Uri {
            input: input.to_string(),
            message: message.into(),
        }
    }
}
