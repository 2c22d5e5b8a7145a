//! Error module
use std::{fmt, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
/// The error type for dialect lookup, query rendering, datasource
/// configuration and pool handling.
pub struct Error {
    kind: ErrorKind,
    original_code: Option<String>,
    original_message: Option<String>,
}

pub(crate) struct ErrorBuilder {
    kind: ErrorKind,
    original_code: Option<String>,
    original_message: Option<String>,
}

impl ErrorBuilder {
    #[allow(dead_code)]
    pub(crate) fn set_original_code(&mut self, code: impl Into<String>) -> &mut Self {
        self.original_code = Some(code.into());
        self
    }

    #[allow(dead_code)]
    pub(crate) fn set_original_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.original_message = Some(message.into());
        self
    }

    pub(crate) fn build(self) -> Error {
        Error {
            kind: self.kind,
            original_code: self.original_code,
            original_message: self.original_message,
        }
    }
}

impl Error {
    pub(crate) fn builder(kind: ErrorKind) -> ErrorBuilder {
        ErrorBuilder {
            kind,
            original_code: None,
            original_message: None,
        }
    }

    /// The error code sent by the database, if available.
    pub fn original_code(&self) -> Option<&str> {
        self.original_code.as_deref()
    }

    /// The original error message sent by the database, if available.
    pub fn original_message(&self) -> Option<&str> {
        self.original_message.as_deref()
    }

    /// A more specific error type for matching.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::builder(kind).build()
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("Error querying the database: {}", _0)]
    QueryError(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("Error opening a connection to the database: {}", _0)]
    ConnectionError(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("The provided database string is invalid. {}", _0)]
    DatabaseUrlIsInvalid(String),

    #[error("`{}` is not a known database product", product)]
    UnknownProduct { product: String },

    #[error("{} is not supported by the {} dialect", operation, dialect)]
    UnsupportedByDialect {
        operation: &'static str,
        dialect: &'static str,
    },

    #[error("`{}` is not a valid column alias for the {} dialect", alias, dialect)]
    InvalidAlias { alias: String, dialect: &'static str },

    #[error("Conversion failed: {}", _0)]
    ConversionError(&'static str),

    #[error(
        "Timed out fetching a connection from the pool (connection limit: {}, in use: {}, timeout: {:?})",
        max_open,
        in_use,
        timeout
    )]
    PoolTimeout {
        max_open: u64,
        in_use: u64,
        timeout: Duration,
    },

    #[error("The connection pool is closed")]
    PoolClosed {},

    #[error("The operation timed out")]
    Timeout,
}

impl ErrorKind {
    pub(crate) fn unsupported(operation: &'static str, dialect: &'static str) -> Self {
        ErrorKind::UnsupportedByDialect { operation, dialect }
    }

    pub(crate) fn invalid_alias(alias: &str, dialect: &'static str) -> Self {
        ErrorKind::InvalidAlias {
            alias: alias.to_string(),
            dialect,
        }
    }

    pub(crate) fn conversion(message: &'static str) -> Self {
        ErrorKind::ConversionError(message)
    }

    pub(crate) fn unknown_product(product: &str) -> Self {
        ErrorKind::UnknownProduct {
            product: product.to_string(),
        }
    }

    #[allow(dead_code)]
    pub(crate) fn pool_timeout(max_open: u64, in_use: u64, timeout: Duration) -> Self {
        ErrorKind::PoolTimeout {
            max_open,
            in_use,
            timeout,
        }
    }
}
