//! Configuration for literal formatting.
//!
//! This module provides [`FormatOptions`], which controls the two axes of
//! output shape:
//!
//! - **Indent string**: an empty indent selects single-line mode (elements
//!   joined with `", "`, no newlines); a non-empty indent selects multi-line
//!   mode, with one copy of the indent per nesting level.
//! - **Zero-field elision**: record fields holding their type's zero value
//!   are skipped by default, and can be forced visible.
//!
//! There is no ambient global default: the default configuration is just
//! [`FormatOptions::default()`], a pure value.
//!
//! ## Examples
//!
//! ```rust
//! use litrep::{format, FormatOptions, Value};
//!
//! let value = Value::from(10);
//!
//! // Default: four-space indent, zero fields elided
//! let options = FormatOptions::default();
//! assert_eq!(format(&value, &options), "10");
//!
//! // Single-line mode with all fields shown
//! let options = FormatOptions::single_line().with_all_fields();
//! assert!(!options.is_multi_line());
//! ```

/// The conventional indent used by [`FormatOptions::default`].
pub const DEFAULT_INDENT: &str = "    ";

/// Configuration for literal formatting.
///
/// # Examples
///
/// ```rust
/// use litrep::FormatOptions;
///
/// // Multi-line output with a two-space indent
/// let options = FormatOptions::default().with_indent("  ");
///
/// // Compact single-line output
/// let options = FormatOptions::single_line();
/// assert!(options.indent.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indent string appended once per nesting level. Empty selects
    /// single-line mode.
    pub indent: String,
    /// Skip record fields whose value is the field type's zero value.
    pub elide_zero_fields: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            indent: DEFAULT_INDENT.to_string(),
            elide_zero_fields: true,
        }
    }
}

impl FormatOptions {
    /// Creates the default options (four-space indent, zero fields elided).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litrep::FormatOptions;
    ///
    /// let options = FormatOptions::new();
    /// assert_eq!(options.indent, "    ");
    /// assert!(options.elide_zero_fields);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for single-line output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litrep::FormatOptions;
    ///
    /// let options = FormatOptions::single_line();
    /// assert!(!options.is_multi_line());
    /// ```
    #[must_use]
    pub fn single_line() -> Self {
        FormatOptions {
            indent: String::new(),
            ..Default::default()
        }
    }

    /// Sets the indent string. An empty string selects single-line mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litrep::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_indent("\t");
    /// assert_eq!(options.indent, "\t");
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Disables zero-field elision so every record field is rendered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litrep::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_all_fields();
    /// assert!(!options.elide_zero_fields);
    /// ```
    #[must_use]
    pub fn with_all_fields(mut self) -> Self {
        self.elide_zero_fields = false;
        self
    }

    /// Returns `true` when the indent string is non-empty, i.e. output uses
    /// one element per line.
    #[inline]
    #[must_use]
    pub fn is_multi_line(&self) -> bool {
        !self.indent.is_empty()
    }
}
