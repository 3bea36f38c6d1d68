//! Unified error types for gift-ranking.
//!
//! Building the render tree cannot fail. These errors cover catalog and
//! configuration loading, oversized static renders and the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gift-ranking operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RankingError {
    /// Errors while loading the product catalog
    #[error("Failed to load product catalog: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Terminal setup or teardown failed
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Duplicate product id '{0}'")]
    DuplicateId(String),

    #[error("Expected a product array or an object with a 'products' array, found {0}")]
    UnexpectedShape(String),
}

/// Convenient Result type for gift-ranking operations
pub type Result<T> = std::result::Result<T, RankingError>;

impl RankingError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a catalog error for a repeated product id
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::catalog("product ids must be unique", CatalogErrorKind::DuplicateId(id.into()))
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a terminal error
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(message.into())
    }
}

impl From<std::io::Error> for RankingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for RankingError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog(
            "JSON deserialization",
            CatalogErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to whatever context the error already
/// carries, so the final message reads outermost-first.
///
/// ```ignore
/// use gift_ranking::error::ErrorContext;
///
/// let text = std::fs::read_to_string(path).context("reading product catalog")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<RankingError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: RankingError, new_ctx: &str) -> RankingError {
    match err {
        RankingError::Catalog {
            context: existing,
            source,
        } => RankingError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        RankingError::Io {
            path,
            message,
            source,
        } => RankingError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        RankingError::Config(msg) => RankingError::Config(chain_context(new_ctx, &msg)),
        RankingError::Validation(msg) => RankingError::Validation(chain_context(new_ctx, &msg)),
        RankingError::Terminal(msg) => RankingError::Terminal(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing is there yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_chains_outermost_first() {
        let inner: std::result::Result<(), RankingError> =
            Err(RankingError::config("columns must be positive"));
        let err = inner.context("loading config").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: loading config: columns must be positive"
        );
    }

    #[test]
    fn test_json_error_becomes_catalog_error() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: RankingError = parsed.unwrap_err().into();
        assert!(matches!(
            err,
            RankingError::Catalog {
                source: CatalogErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = RankingError::duplicate_id("42");
        assert!(err.to_string().contains("product ids must be unique"));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("Duplicate product id '42'"));
    }
}
