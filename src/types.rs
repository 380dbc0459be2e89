//! Opaque type descriptors for formatted values.
//!
//! A [`TypeDesc`] stands in for a value's declared type: composites carry
//! descriptors for their element types so the formatter can decide whether a
//! nested value's own type name is redundant (type elision), and named
//! records carry a descriptor for their type-name prefix.
//!
//! ## Examples
//!
//! ```rust
//! use litrep::TypeDesc;
//!
//! let node = TypeDesc::named("tree.Node");
//! assert_eq!(node.display_name(), "tree.Node");
//! assert!(!node.is_dynamic());
//!
//! // Raw byte sequences display in abbreviated form.
//! let bytes = TypeDesc::raw_bytes();
//! assert_eq!(bytes.display_name(), "[]byte");
//!
//! // Open types force nested values to print their own type names.
//! let any = TypeDesc::dynamic();
//! assert!(any.is_dynamic());
//! ```

use std::fmt;

/// An opaque handle to a value's declared type.
///
/// Descriptors carry just enough information for the formatter: a qualified
/// display name, whether the type is open (interface-like, so it never
/// disambiguates the runtime type of a nested value), and whether it is the
/// raw byte-sequence type (which displays in abbreviated form).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDesc {
    name: String,
    dynamic: bool,
    raw_bytes: bool,
}

impl TypeDesc {
    /// Creates a descriptor for a concrete named type.
    ///
    /// The name should be the qualified form the runtime would report,
    /// e.g. `"tree.Node"` or `"int"`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        TypeDesc {
            name: name.into(),
            dynamic: false,
            raw_bytes: false,
        }
    }

    /// Creates a descriptor for an open (interface-like) type.
    ///
    /// Sequences and maps declared over a dynamic element type cannot imply
    /// their elements' concrete types, so each element prints its own.
    #[must_use]
    pub fn dynamic() -> Self {
        TypeDesc {
            name: "any".to_string(),
            dynamic: true,
            raw_bytes: false,
        }
    }

    /// Creates a descriptor for the raw byte-sequence type.
    #[must_use]
    pub fn raw_bytes() -> Self {
        TypeDesc {
            name: "[]uint8".to_string(),
            dynamic: false,
            raw_bytes: true,
        }
    }

    /// Creates a descriptor for a named byte-sequence type.
    ///
    /// Unlike [`TypeDesc::raw_bytes`], the given qualified name is kept for
    /// display; only the anonymous raw type abbreviates to `[]byte`.
    #[must_use]
    pub fn named_bytes(name: impl Into<String>) -> Self {
        TypeDesc {
            name: name.into(),
            dynamic: false,
            raw_bytes: false,
        }
    }

    /// Returns `true` if this descriptor marks an open (interface-like) type.
    #[inline]
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Returns `true` if this descriptor is the raw byte-sequence type.
    #[inline]
    #[must_use]
    pub const fn is_raw_bytes(&self) -> bool {
        self.raw_bytes
    }

    /// Returns `true` for the small set of types whose pointer-constructor
    /// form needs no explicit type argument.
    #[must_use]
    pub fn is_default_literal(&self) -> bool {
        !self.dynamic && matches!(self.name.as_str(), "bool" | "int" | "string")
    }

    /// Resolves the human-readable qualified name for this descriptor.
    ///
    /// The raw byte-sequence type displays as `[]byte` rather than its
    /// qualified spelling; everything else displays its name as given.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.raw_bytes {
            "[]byte"
        } else {
            &self.name
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
