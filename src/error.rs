//! Error type for form resolution, building and writing.
//!
//! Every failure in the form protocol travels through the single [`Error`]
//! type. The variants only distinguish *why* a form gave up:
//!
//! - **Unresolved**: the form has no capability for the requested literal shape
//! - **Rejected**: a resolved form refused one element, field, or scalar
//! - **Not numeric**: a value could not produce a numeric representation
//! - **Form**: a concrete form failed with its own message and/or cause
//!
//! Errors raised inside nested literals are wrapped in [`Error::Located`] by the
//! driver, carrying a JSON Pointer to the offending element or field.
//!
//! JSON `null` is never an error. It is carried as `None` through every
//! conversion.
//!
//! ## Examples
//!
//! ```rust
//! use json_form::{from_literal, literal, Error, Unsupported};
//!
//! let form = Unsupported::<u8>::new();
//! let err = from_literal(&form, literal!([1, 2])).unwrap_err();
//! assert!(matches!(err, Error::Unresolved { .. }));
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::Shape;

/// All the ways a form, a builder, or the driver can fail.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// No form resolves the requested literal shape for the target type
    #[error("no {shape} form for {target}")]
    Unresolved { shape: Shape, target: &'static str },

    /// An element, field, or scalar was refused by an otherwise resolved form
    #[error("rejected: {0}")]
    Rejected(String),

    /// A value could not produce a numeric representation
    #[error("not representable as a JSON number: {0}")]
    NotNumeric(String),

    /// Failure raised by a concrete form
    #[error("{}", form_message(.message))]
    Form {
        message: Option<String>,
        #[source]
        cause: Option<Arc<dyn StdError + Send + Sync>>,
    },

    /// An error raised while handling the element or field at `path`
    #[error("at {path}: {source}")]
    Located {
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// IO error while emitting text
    #[error("IO error: {0}")]
    Io(String),
}

fn form_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("form failure")
}

impl Error {
    /// Creates an unresolved-capability error for target type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_form::{Error, Shape};
    ///
    /// let err = Error::unresolved::<Vec<u8>>(Shape::Object);
    /// assert!(err.to_string().starts_with("no object form for"));
    /// ```
    pub fn unresolved<T>(shape: Shape) -> Self {
        Error::Unresolved {
            shape,
            target: std::any::type_name::<T>(),
        }
    }

    /// Creates a rejection error for a single element, field, or scalar.
    pub fn rejected<T: fmt::Display>(msg: T) -> Self {
        Error::Rejected(msg.to_string())
    }

    /// Creates an error for values without a numeric representation.
    pub fn not_numeric<T: fmt::Display>(msg: T) -> Self {
        Error::NotNumeric(msg.to_string())
    }

    /// Creates a form error carrying only a message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_form::Error;
    ///
    /// let err = Error::custom("radius must be positive");
    /// assert_eq!(err.to_string(), "radius must be positive");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Form {
            message: Some(msg.to_string()),
            cause: None,
        }
    }

    /// Creates a form error wrapping the error that caused it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_form::Error;
    /// use std::error::Error as _;
    ///
    /// let cause = "x".parse::<u32>().unwrap_err();
    /// let err = Error::with_cause("bad port", cause);
    /// assert!(err.source().is_some());
    /// ```
    pub fn with_cause<T, E>(msg: T, cause: E) -> Self
    where
        T: fmt::Display,
        E: StdError + Send + Sync + 'static,
    {
        Error::Form {
            message: Some(msg.to_string()),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Prefixes the error location with one JSON Pointer reference token.
    ///
    /// The driver calls this while unwinding, so the innermost segment is
    /// applied first and the resulting path reads from the root down.
    #[must_use]
    pub fn at(self, segment: &str) -> Self {
        let token = escape_token(segment);
        match self {
            Error::Located { path, source } => Error::Located {
                path: format!("/{token}{path}"),
                source,
            },
            other => Error::Located {
                path: format!("/{token}"),
                source: Box::new(other),
            },
        }
    }

    /// Same as [`Error::at`] with an array index segment.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        self.at(&index.to_string())
    }

    /// JSON Pointer of the element or field that failed, if known.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::Located { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The error with any location wrapper removed.
    #[must_use]
    pub fn inner(&self) -> &Error {
        match self {
            Error::Located { source, .. } => source.inner(),
            other => other,
        }
    }
}

fn escape_token(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

pub type Result<T> = std::result::Result<T, Error>;
