use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad stop word, config value or worker pool setup
    InvalidConfiguration,
    /// Negative or already used document id
    InvalidDocumentId,
    /// Control character inside an indexed word
    InvalidWord,
    /// Empty, bare-minus, double-minus or invalid query token
    InvalidQuery,
    UnknownDocument,
}

#[derive(Debug, Error)]
#[error("{kind:?}: {context}")]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: String) -> Self {
        Error { kind, context }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            kind: ErrorKind::InvalidConfiguration,
            context: format!("config parse error: {}", err),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error {
            kind: ErrorKind::InvalidConfiguration,
            context: format!("worker pool: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
