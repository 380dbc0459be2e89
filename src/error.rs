//! Error types for the serde bridge.
//!
//! The formatting path itself has no recoverable-error channel: the one
//! failure mode there is an unrecognized kind, which is a fatal condition
//! (see [`Formatter::write_value`](crate::Formatter::write_value)). These
//! errors belong to the bridge that introspects `T: Serialize` into a
//! [`Value`](crate::Value), where serde data model shapes this crate does
//! not represent are reported instead of guessed at.
//!
//! ## Examples
//!
//! ```rust
//! use litrep::to_value;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! enum Shape { Circle(f64) }
//!
//! // Newtype variants have no literal form here.
//! assert!(to_value(&Shape::Circle(1.0)).is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Errors produced while introspecting a value through the serde bridge.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A serde data model shape with no literal representation.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported-type error for shapes without a literal form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litrep::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
