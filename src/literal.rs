//! The literal formatter core.
//!
//! This module provides the [`Formatter`], which renders a [`Value`] into a
//! `String` as the value's construction expression. One formatter instance
//! belongs to one top-level call: it owns the output buffer, the current
//! indentation level, the type-elision flag, and the visited set used for
//! cycle detection. It is not meant to be shared or reused across calls.
//!
//! ## Overview
//!
//! Classification resolves in a fixed order:
//!
//! 1. Absent values and nil-capable kinds holding nil render `nil`.
//! 2. Self-describing values append their declared literal verbatim.
//! 3. Type descriptors render as a `TypeOf(...)` expression.
//! 4. Everything else dispatches by kind to a scalar or composite routine.
//!
//! ## Usage
//!
//! Most users should use the entry points in the crate root:
//!
//! ```rust
//! use litrep::{format, FormatOptions, Value};
//!
//! let out = format(&Value::from(10), &FormatOptions::default());
//! assert_eq!(out, "10");
//! ```
//!
//! ## Direct Formatter Usage
//!
//! ```rust
//! use litrep::{Formatter, FormatOptions, TypeDesc, Value};
//!
//! let options = FormatOptions::single_line();
//! let mut formatter = Formatter::new(&options);
//!
//! let value = Value::seq(
//!     TypeDesc::named("int"),
//!     vec![Value::from(1), Value::from(2), Value::from(3)],
//! );
//! formatter.write_value(&value);
//! assert_eq!(formatter.into_inner(), "[]int{1, 2, 3}");
//! ```

use crate::value::Kind;
use crate::{FieldMap, FormatOptions, Shared, TypeDesc, Value};
use std::collections::HashSet;

/// Reports whether `text` can appear unescaped between backquotes.
///
/// Backquote-safety requires no backquote character, no byte-order mark,
/// and no control character other than tab, newline, and carriage return.
/// (A `&str` is always a valid encoding, so the invalid-unit clause of the
/// definition is vacuously satisfied.)
///
/// # Examples
///
/// ```rust
/// use litrep::is_literal_safe;
///
/// assert!(is_literal_safe(""));
/// assert!(is_literal_safe("a\nb"));
/// assert!(!is_literal_safe("a`b"));
/// assert!(!is_literal_safe("a\u{0}b"));
/// ```
#[must_use]
pub fn is_literal_safe(text: &str) -> bool {
    text.chars().all(|ch| match ch {
        '`' | '\u{feff}' => false,
        '\t' | '\n' | '\r' => true,
        ch => !ch.is_control(),
    })
}

/// Renders `text` as a double-quoted, escaped string literal.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch.is_control() => {
                out.push_str(&format!("\\x{:02x}", ch as u32));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Renders raw bytes as a double-quoted string literal, escaping everything
/// outside printable ASCII byte by byte.
fn quote_bytes(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() + 2);
    out.push('"');
    for &byte in data {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    out.push('"');
    out
}

/// The literal formatter.
///
/// Owns the output buffer and all per-call state. Created via
/// [`Formatter::new`] (or [`Formatter::with_level`] for embedding inside an
/// already-indented context), driven with [`write_value`](Self::write_value),
/// and consumed with [`into_inner`](Self::into_inner).
pub struct Formatter<'a> {
    out: String,
    options: &'a FormatOptions,
    level: usize,
    /// Set when the enclosing context already implies the next value's type,
    /// so the value must omit its own type-name prefix.
    elide_type: bool,
    /// Reference identities seen during this call. Grows only; a reference
    /// stays marked even after its subtree is fully printed, so the same
    /// shared reference never renders twice.
    visited: HashSet<usize>,
}

impl<'a> Formatter<'a> {
    /// Creates a formatter starting at indentation level zero.
    #[must_use]
    pub fn new(options: &'a FormatOptions) -> Self {
        Self::with_level(options, 0)
    }

    /// Creates a formatter starting at the given base indentation level, for
    /// embedding the output inside another indented context.
    #[must_use]
    pub fn with_level(options: &'a FormatOptions, level: usize) -> Self {
        Formatter {
            out: String::with_capacity(256),
            options,
            level,
            elide_type: false,
            visited: HashSet::new(),
        }
    }

    /// Consumes the formatter, returning the rendered text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    /// Renders one value into the buffer.
    ///
    /// # Panics
    ///
    /// Panics on [`Value::Unsupported`]. This signals a library defect, not
    /// a data error: no value built by the serde bridge or the
    /// [`lit!`](crate::lit) macro is unsupported, and the buffer's content
    /// after such a panic is unreliable.
    pub fn write_value(&mut self, value: &Value) {
        match value {
            Value::Nil | Value::Ref(None) => self.out.push_str("nil"),
            Value::Func { addr: 0, .. } | Value::Chan { addr: 0, .. } => {
                self.out.push_str("nil");
            }
            Value::Described(described) => {
                self.out.push_str(&described.describe_literal());
            }
            Value::Type(ty) => {
                self.out.push_str("TypeOf(");
                self.out.push_str(ty.display_name());
                self.out.push(')');
            }
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => self.out.push_str(&i.to_string()),
            Value::Uint(u) => self.out.push_str(&u.to_string()),
            Value::Byte(b) => self.out.push_str(&format!("0x{:x}", b)),
            Value::Float(f) => self.out.push_str(&f.to_string()),
            Value::Complex(re, im) => self.write_complex(*re, *im),
            Value::Str(s) => self.write_str_value(s),
            Value::Addr(addr) => self.out.push_str(&format!("0x{:x}", addr)),
            Value::Bytes { ty, data } => self.write_bytes(ty, data),
            Value::Seq { elem, elems } => self.write_seq(elem, elems),
            Value::Map { key, elem, entries } => self.write_map(key, elem, entries),
            Value::Ref(Some(target)) => self.write_ref(target),
            Value::Record { ty, fields } => self.write_record(ty, fields),
            Value::Func { ty, addr } | Value::Chan { ty, addr } => {
                self.out
                    .push_str(&format!("({})(0x{:x})", ty.display_name(), addr));
            }
            Value::Unsupported(kind) => {
                panic!("litrep: cannot format value of unrecognized kind {}", kind)
            }
        }
    }

    fn write_complex(&mut self, re: f64, im: f64) {
        // The '+' is forced for a non-negative imaginary part; a negative
        // part brings its own sign.
        if im >= 0.0 || im.is_nan() {
            self.out.push_str(&format!("({}+{}i)", re, im));
        } else {
            self.out.push_str(&format!("({}{}i)", re, im));
        }
    }

    fn write_str_value(&mut self, s: &str) {
        if self.options.is_multi_line() && is_literal_safe(s) {
            self.out.push('`');
            self.out.push_str(s);
            self.out.push('`');
        } else {
            self.out.push_str(&quote(s));
        }
    }

    fn write_bytes(&mut self, ty: &TypeDesc, data: &[u8]) {
        // The conversion-call form needs a name even in an elided context;
        // the abbreviated spelling stays unambiguous there.
        let name = if self.elide_type {
            "[]byte"
        } else {
            ty.display_name()
        };
        self.out.push_str(name);
        self.out.push('(');
        self.out.push_str(&quote_bytes(data));
        self.out.push(')');
    }

    fn write_seq(&mut self, elem: &TypeDesc, elems: &[Value]) {
        if !self.elide_type {
            self.out.push_str("[]");
            self.out.push_str(elem.display_name());
        }
        if elems.is_empty() {
            self.out.push_str("{}");
            return;
        }

        let prev = self.elide_type;
        self.elide_type = !elem.is_dynamic();
        self.out.push('{');
        if self.options.is_multi_line() {
            self.level += 1;
            for value in elems {
                self.newline_indent();
                self.write_value(value);
                self.out.push(',');
            }
            self.level -= 1;
            self.newline_indent();
        } else {
            for (i, value) in elems.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(", ");
                }
                self.write_value(value);
            }
        }
        self.out.push('}');
        self.elide_type = prev;
    }

    fn write_map(&mut self, key: &TypeDesc, elem: &TypeDesc, entries: &[(Value, Value)]) {
        if !self.elide_type {
            self.out.push_str(&format!(
                "map[{}]{}",
                key.display_name(),
                elem.display_name()
            ));
        }
        if entries.is_empty() {
            self.out.push_str("{}");
            return;
        }

        let prev = self.elide_type;
        self.out.push('{');
        if self.options.is_multi_line() {
            self.level += 1;
            for (k, v) in entries {
                self.newline_indent();
                self.write_entry(key, elem, k, v);
                self.out.push(',');
            }
            self.level -= 1;
            self.newline_indent();
        } else {
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(", ");
                }
                self.write_entry(key, elem, k, v);
            }
        }
        self.out.push('}');
        self.elide_type = prev;
    }

    fn write_entry(&mut self, key_ty: &TypeDesc, elem_ty: &TypeDesc, k: &Value, v: &Value) {
        self.elide_type = !key_ty.is_dynamic();
        self.write_value(k);
        self.out.push_str(": ");
        self.elide_type = !elem_ty.is_dynamic();
        self.write_value(v);
    }

    fn write_ref(&mut self, target: &Shared) {
        let addr = target.addr();
        if self.visited.contains(&addr) {
            let name = target.get().type_name();
            self.out
                .push_str(&format!("/* visited */ (*{})(0x{:x})", name, addr));
            return;
        }
        // Recorded before descending, so a self-reference is caught on the
        // very next hop.
        self.visited.insert(addr);

        let pointee = target.get();
        let prev = self.elide_type;
        self.elide_type = false;
        match pointee.kind() {
            // Kinds with an address-of-style literal.
            Kind::Seq | Kind::Record => {
                self.out.push('&');
                self.write_value(&pointee);
            }
            _ => {
                if pointee.is_default_literal() {
                    self.out.push_str("Ptr(");
                } else {
                    self.out
                        .push_str(&format!("Ptr[{}](", pointee.type_name()));
                }
                self.write_value(&pointee);
                self.out.push(')');
            }
        }
        self.elide_type = prev;
    }

    fn write_record(&mut self, ty: &TypeDesc, fields: &FieldMap) {
        if !self.elide_type {
            self.out.push_str(ty.display_name());
        }
        let prev = self.elide_type;
        self.elide_type = false;

        match fields.iter().next() {
            // Single-field anonymous wrapper: no field name is printed.
            Some((name, value)) if fields.len() == 1 && name.is_empty() => {
                if value.is_zero() && self.options.elide_zero_fields {
                    self.out.push_str("{}");
                } else if self.options.is_multi_line() {
                    self.out.push('{');
                    self.level += 1;
                    self.newline_indent();
                    self.write_value(value);
                    self.level -= 1;
                    self.newline_indent();
                    self.out.push('}');
                } else {
                    self.out.push('{');
                    self.write_value(value);
                    self.out.push('}');
                }
            }
            _ => self.write_named_record(fields),
        }
        self.elide_type = prev;
    }

    fn write_named_record(&mut self, fields: &FieldMap) {
        let survivors: Vec<(&String, &Value)> = fields
            .iter()
            .filter(|(_, value)| !self.options.elide_zero_fields || !value.is_zero())
            .collect();

        if survivors.is_empty() {
            self.out.push_str("{}");
        } else if !self.options.is_multi_line() {
            self.out.push('{');
            for (i, (name, value)) in survivors.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(", ");
                }
                self.out.push_str(name);
                self.out.push_str(": ");
                self.write_value(value);
            }
            self.out.push('}');
        } else if self.options.elide_zero_fields && survivors.len() == 1 {
            // A one-field record is never worth a line break.
            let (name, value) = survivors[0];
            self.out.push('{');
            self.out.push_str(name);
            self.out.push_str(": ");
            self.write_value(value);
            self.out.push('}');
        } else {
            self.out.push('{');
            self.level += 1;
            for (name, value) in &survivors {
                self.newline_indent();
                self.out.push_str(name);
                self.out.push_str(": ");
                self.write_value(value);
                self.out.push(',');
            }
            self.level -= 1;
            self.newline_indent();
            self.out.push('}');
        }
    }

    fn newline_indent(&mut self) {
        self.out.push('\n');
        for _ in 0..self.level {
            self.out.push_str(&self.options.indent);
        }
    }
}
