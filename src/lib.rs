//! # litrep
//!
//! A recursive value-to-source-literal formatter: given a dynamically-typed
//! runtime value, produce deterministic text that looks like the value's
//! construction expression: correctly indented, cycle-safe, and
//! configurable.
//!
//! ## Key Features
//!
//! - **Literal form**: output reads like the expression that would build
//!   the value (`&tree.Node{Left: ..., Right: ...}`)
//! - **Cycle safe**: identity-based visited tracking guarantees termination
//!   on arbitrarily cyclic reference graphs
//! - **Configurable**: single-line vs. multi-line rendering, zero-value
//!   field elision
//! - **Serde bridge**: any `T: Serialize` can be introspected into a
//!   [`Value`] and formatted
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use litrep::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "User{\n    id: 123,\n    name: `Alice`,\n    active: true,\n}");
//! ```
//!
//! ## Building Values Directly
//!
//! The [`Value`] model is richer than what serde can see: it carries
//! declared element types (which drive type-name elision), references with
//! identity (which drive cycle detection), byte strings, complex numbers,
//! and self-describing values.
//!
//! ```rust
//! use litrep::{format, lit, FormatOptions};
//!
//! let data = lit!([1, 2, 3]);
//! let text = format(&data, &FormatOptions::single_line());
//! assert_eq!(text, "[]any{1, 2, 3}");
//! ```
//!
//! ## Cycle Safety
//!
//! ```rust
//! use litrep::{format, FieldMap, FormatOptions, Shared, Value};
//!
//! let node = Shared::new(Value::Nil);
//! let mut fields = FieldMap::new();
//! fields.insert("Next".to_string(), Value::reference(node.clone()));
//! node.set(Value::record("list.Node", fields));
//!
//! let text = format(&Value::reference(node), &FormatOptions::default());
//! assert!(text.contains("/* visited */"));
//! ```
//!
//! ## Concurrency
//!
//! Formatting is single-threaded and synchronous; each top-level call owns
//! an independent formatter state (in particular an independent visited
//! set). Recursion depth is bounded only by the host stack, so
//! pathologically deep *acyclic* structures can exhaust it, a known
//! limitation.
//!
//! ## Failure Mode
//!
//! There is no recoverable-error channel in the formatting path. The one
//! failure mode is an unrecognized kind ([`Value::Unsupported`]), which
//! panics with a message naming the kind. This is a programming-error
//! signal that well-formed input can never trigger. The serde bridge, by contrast,
//! reports unsupported serde shapes through [`Error`].
//!
//! ## Output Reference
//!
//! See the [`spec`] module for the full description of the emitted literal
//! forms.

pub mod error;
pub mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod spec;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use literal::{is_literal_safe, Formatter};
pub use map::FieldMap;
pub use options::{FormatOptions, DEFAULT_INDENT};
pub use ser::ValueSerializer;
pub use types::TypeDesc;
pub use value::{DescribeLiteral, DescribedValue, Kind, Shared, Value};

use serde::Serialize;

/// Formats a value as its construction-expression literal.
///
/// # Examples
///
/// ```rust
/// use litrep::{format, FormatOptions, Value};
///
/// assert_eq!(format(&Value::Nil, &FormatOptions::default()), "nil");
/// assert_eq!(format(&Value::from(10), &FormatOptions::default()), "10");
/// ```
#[must_use]
pub fn format(value: &Value, options: &FormatOptions) -> String {
    format_indented(value, options, 0)
}

/// Formats a value starting at a non-zero base indentation level, for
/// embedding the result inside another indented context.
///
/// The first line is not indented; only lines after the first carry the
/// base level.
///
/// # Examples
///
/// ```rust
/// use litrep::{format_indented, lit, FormatOptions};
///
/// let value = lit!([1, 2]);
/// let text = format_indented(&value, &FormatOptions::default(), 1);
/// assert_eq!(text, "[]any{\n        1,\n        2,\n    }");
/// ```
#[must_use]
pub fn format_indented(value: &Value, options: &FormatOptions, start_level: usize) -> String {
    let mut formatter = Formatter::with_level(options, start_level);
    formatter.write_value(value);
    formatter.into_inner()
}

/// Writes `label: <formatted value>` and a newline to standard output.
///
/// A thin diagnostic convenience over [`format`] with default options.
pub fn print_labeled(label: &str, value: &Value) {
    println!("{}: {}", label, format(value, &FormatOptions::default()));
}

/// Introspects any `T: Serialize` into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use litrep::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(matches!(value, Value::Record { .. }));
/// ```
///
/// # Errors
///
/// Returns an error for serde data model shapes with no literal
/// representation (enum variants with payloads).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Formats any `T: Serialize` with the default options.
///
/// # Examples
///
/// ```rust
/// use litrep::to_string;
///
/// assert_eq!(to_string(&10).unwrap(), "10");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be introspected into a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &FormatOptions::default())
}

/// Formats any `T: Serialize` with the given options.
///
/// # Examples
///
/// ```rust
/// use litrep::{to_string_with_options, FormatOptions};
///
/// let text = to_string_with_options(&vec![1, 2], &FormatOptions::single_line()).unwrap();
/// assert_eq!(text, "[]any{1, 2}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be introspected into a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &FormatOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(format(&value, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_format_nil_and_scalars() {
        let options = FormatOptions::default();
        assert_eq!(format(&Value::Nil, &options), "nil");
        assert_eq!(format(&Value::from(10), &options), "10");
        assert_eq!(format(&Value::from(true), &options), "true");
    }

    #[test]
    fn test_to_string_struct() {
        let point = Point { x: 1, y: 2 };
        assert_eq!(
            to_string(&point).unwrap(),
            "Point{\n    x: 1,\n    y: 2,\n}"
        );
    }

    #[test]
    fn test_to_string_single_line() {
        let point = Point { x: 1, y: 2 };
        assert_eq!(
            to_string_with_options(&point, &FormatOptions::single_line()).unwrap(),
            "Point{x: 1, y: 2}"
        );
    }

    #[test]
    fn test_zero_fields_elide_through_bridge() {
        let point = Point { x: 0, y: 2 };
        // One surviving field renders inline even in multi-line mode.
        assert_eq!(to_string(&point).unwrap(), "Point{y: 2}");
    }

    #[test]
    fn test_format_indented_embeds() {
        let value = lit!([1]);
        let options = FormatOptions::default();
        let text = format_indented(&value, &options, 2);
        assert_eq!(text, "[]any{\n            1,\n        }");
    }

    #[test]
    fn test_determinism() {
        let value = lit!({ "a": [1, 2], "b": "x" });
        let options = FormatOptions::default();
        assert_eq!(format(&value, &options), format(&value, &options));
    }
}
