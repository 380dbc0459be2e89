//! Dynamic value representation for literal formatting.
//!
//! This module provides the [`Value`] enum, a closed tagged-variant model of
//! every value shape the formatter can classify: primitives, composites,
//! references, self-describing values, and the kinds that only matter for
//! nil-checking (functions, channels). Each variant maps to exactly one
//! [`Kind`] tag, and the formatter's dispatch over kinds is total.
//!
//! ## Core Types
//!
//! - [`Value`]: any formattable value
//! - [`Kind`]: the shape-category tag of a value
//! - [`Shared`]: an identity-carrying reference cell, the target of
//!   [`Value::Ref`]; its address is what cycle detection tracks
//! - [`DescribeLiteral`] / [`DescribedValue`]: the self-describing hook
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use litrep::{lit, FieldMap, TypeDesc, Value};
//!
//! // From primitives
//! let nil = Value::Nil;
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Composites through constructors
//! let mut fields = FieldMap::new();
//! fields.insert("X".to_string(), Value::from(1));
//! let point = Value::record("geo.Point", fields);
//!
//! // Or through the lit! macro
//! let tags = lit!(["a", "b"]);
//! ```
//!
//! ### Cyclic graphs
//!
//! ```rust
//! use litrep::{format, FieldMap, FormatOptions, Shared, Value};
//!
//! let node = Shared::new(Value::record("list.Node", FieldMap::new()));
//! let mut fields = FieldMap::new();
//! fields.insert("Next".to_string(), Value::reference(node.clone()));
//! node.set(Value::record("list.Node", fields));
//!
//! let out = format(&Value::reference(node), &FormatOptions::default());
//! assert!(out.contains("/* visited */"));
//! ```

use crate::{FieldMap, TypeDesc};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// A dynamically-typed representation of any formattable value.
///
/// The enum is deliberately closed: classification is a total `match`, and
/// the single escape hatch is [`Value::Unsupported`], which aborts
/// formatting (a library-defect signal, never produced by the serde bridge
/// or the [`lit!`](crate::lit) macro).
///
/// # Examples
///
/// ```rust
/// use litrep::{Kind, Value};
///
/// let num = Value::from(42);
/// let text = Value::from("hello");
///
/// assert_eq!(num.kind(), Kind::Int);
/// assert_eq!(text.kind(), Kind::Str);
/// assert!(Value::Nil.is_nil());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// An absent value, or a nil-capable kind holding nil.
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    /// Unsigned integer wider than one byte; renders in decimal.
    Uint(u64),
    /// Byte-sized unsigned integer; renders in hexadecimal.
    Byte(u8),
    Float(f64),
    /// Complex number as `(re, im)`.
    Complex(f64, f64),
    Str(String),
    /// A byte sequence (raw bytes, not text), with its declared type.
    Bytes { ty: TypeDesc, data: Vec<u8> },
    /// An ordered sequence with the declared element type.
    Seq { elem: TypeDesc, elems: Vec<Value> },
    /// An associative map with declared key and element types. Entries
    /// render in the order stored; they are never sorted.
    Map {
        key: TypeDesc,
        elem: TypeDesc,
        entries: Vec<(Value, Value)>,
    },
    /// A reference. `None` is a nil reference.
    Ref(Option<Shared>),
    /// A record with named fields in declaration order. A record whose
    /// single field has an empty name is a transparent unit wrapper.
    Record { ty: TypeDesc, fields: FieldMap },
    /// A function value; address `0` is nil.
    Func { ty: TypeDesc, addr: usize },
    /// A channel value; address `0` is nil.
    Chan { ty: TypeDesc, addr: usize },
    /// A type descriptor appearing as a value.
    Type(TypeDesc),
    /// A raw memory address; renders in hexadecimal.
    Addr(usize),
    /// A value that declares its own literal representation.
    Described(DescribedValue),
    /// An unclassifiable value, carrying the offending kind's name.
    /// Formatting one is a fatal condition.
    Unsupported(String),
}

/// The shape-category of a [`Value`], used to select a formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Int,
    Uint,
    Byte,
    Float,
    Complex,
    Str,
    Bytes,
    Seq,
    Map,
    Ref,
    Record,
    Func,
    Chan,
    Type,
    Addr,
    Described,
    Unsupported,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Byte => "byte",
            Kind::Float => "float",
            Kind::Complex => "complex",
            Kind::Str => "string",
            Kind::Bytes => "bytes",
            Kind::Seq => "sequence",
            Kind::Map => "map",
            Kind::Ref => "reference",
            Kind::Record => "record",
            Kind::Func => "func",
            Kind::Chan => "chan",
            Kind::Type => "type",
            Kind::Addr => "address",
            Kind::Described => "described",
            Kind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// A shared, identity-carrying cell holding a [`Value`].
///
/// This is the target of [`Value::Ref`]. Its address is the reference
/// identity the formatter records for cycle detection. Equality is
/// identity ([`Rc::ptr_eq`]), never structural: structural comparison
/// would not terminate on cyclic graphs.
///
/// # Examples
///
/// ```rust
/// use litrep::{Shared, Value};
///
/// let a = Shared::new(Value::from(1));
/// let b = Shared::new(Value::from(1));
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b); // structurally equal, distinct identities
/// ```
#[derive(Clone)]
pub struct Shared(Rc<RefCell<Value>>);

impl Shared {
    /// Creates a new cell holding `value`.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    /// Replaces the held value. This is how cyclic graphs are built: create
    /// the cell with a placeholder, then set a value that refers back to it.
    pub fn set(&self, value: Value) {
        *self.0.borrow_mut() = value;
    }

    /// Borrows the held value.
    ///
    /// # Panics
    ///
    /// Panics if the value is currently mutably borrowed.
    #[must_use]
    pub fn get(&self) -> Ref<'_, Value> {
        self.0.borrow()
    }

    /// Returns the reference identity: a stable address surrogate for "this
    /// is the same underlying storage". Used only for cycle detection.
    #[must_use]
    pub fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for Shared {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Shared {
    // Address only: following the target would not terminate on cycles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared(0x{:x})", self.addr())
    }
}

/// Capability hook for values that declare their own literal representation.
///
/// When a [`Value::Described`] is classified, the formatter appends the
/// result of [`describe_literal`](DescribeLiteral::describe_literal)
/// verbatim and performs no further classification.
///
/// Known ambiguity, inherited from the source behavior: when the
/// implementation is delegated from an embedded member rather than declared
/// directly on the type, the hook still fires. Whether that is correct is
/// unresolved; this crate honors whichever implementation trait resolution
/// selects.
pub trait DescribeLiteral: fmt::Debug {
    /// Returns the value's literal representation, appended verbatim.
    fn describe_literal(&self) -> String;
}

/// A handle to a self-describing value. Equality is identity.
#[derive(Clone, Debug)]
pub struct DescribedValue(Rc<dyn DescribeLiteral>);

impl DescribedValue {
    /// Wraps a self-describing value.
    #[must_use]
    pub fn new(inner: impl DescribeLiteral + 'static) -> Self {
        DescribedValue(Rc::new(inner))
    }

    /// Invokes the hook.
    #[must_use]
    pub fn describe_literal(&self) -> String {
        self.0.describe_literal()
    }
}

impl PartialEq for DescribedValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Value {
    /// Creates a named record from its fields.
    #[must_use]
    pub fn record(ty: impl Into<String>, fields: FieldMap) -> Self {
        Value::Record {
            ty: TypeDesc::named(ty),
            fields,
        }
    }

    /// Creates a single-field anonymous wrapper record: the field carries no
    /// name and renders without one.
    #[must_use]
    pub fn wrapper(ty: impl Into<String>, value: Value) -> Self {
        let mut fields = FieldMap::new();
        fields.insert(String::new(), value);
        Value::Record {
            ty: TypeDesc::named(ty),
            fields,
        }
    }

    /// Creates an ordered sequence over the declared element type.
    #[must_use]
    pub fn seq(elem: TypeDesc, elems: Vec<Value>) -> Self {
        Value::Seq { elem, elems }
    }

    /// Creates an associative map over the declared key and element types.
    #[must_use]
    pub fn map_of(key: TypeDesc, elem: TypeDesc, entries: Vec<(Value, Value)>) -> Self {
        Value::Map { key, elem, entries }
    }

    /// Creates a raw byte sequence.
    #[must_use]
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes {
            ty: TypeDesc::raw_bytes(),
            data: data.into(),
        }
    }

    /// Creates a reference to a shared cell.
    #[must_use]
    pub fn reference(target: Shared) -> Self {
        Value::Ref(Some(target))
    }

    /// Creates a reference to a fresh cell holding `value`.
    #[must_use]
    pub fn ref_to(value: Value) -> Self {
        Value::Ref(Some(Shared::new(value)))
    }

    /// Creates a nil reference.
    #[must_use]
    pub fn nil_ref() -> Self {
        Value::Ref(None)
    }

    /// Returns this value's shape-category tag.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Uint(_) => Kind::Uint,
            Value::Byte(_) => Kind::Byte,
            Value::Float(_) => Kind::Float,
            Value::Complex(_, _) => Kind::Complex,
            Value::Str(_) => Kind::Str,
            Value::Bytes { .. } => Kind::Bytes,
            Value::Seq { .. } => Kind::Seq,
            Value::Map { .. } => Kind::Map,
            Value::Ref(_) => Kind::Ref,
            Value::Record { .. } => Kind::Record,
            Value::Func { .. } => Kind::Func,
            Value::Chan { .. } => Kind::Chan,
            Value::Type(_) => Kind::Type,
            Value::Addr(_) => Kind::Addr,
            Value::Described(_) => Kind::Described,
            Value::Unsupported(_) => Kind::Unsupported,
        }
    }

    /// Returns `true` for an absent value or a nil-capable kind holding nil.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(
            self,
            Value::Nil
                | Value::Ref(None)
                | Value::Func { addr: 0, .. }
                | Value::Chan { addr: 0, .. }
        )
    }

    /// Returns `true` if this value equals its type's zero value.
    ///
    /// Non-nil sequences, maps, and byte strings are never zero, even when
    /// empty; a record is zero when all of its fields are.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Nil | Value::Ref(None) => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Uint(u) => *u == 0,
            Value::Byte(b) => *b == 0,
            Value::Float(f) => *f == 0.0,
            Value::Complex(re, im) => *re == 0.0 && *im == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Func { addr, .. } | Value::Chan { addr, .. } => *addr == 0,
            Value::Addr(a) => *a == 0,
            Value::Record { fields, .. } => fields.values().all(Value::is_zero),
            Value::Bytes { .. }
            | Value::Seq { .. }
            | Value::Map { .. }
            | Value::Ref(Some(_))
            | Value::Type(_)
            | Value::Described(_)
            | Value::Unsupported(_) => false,
        }
    }

    /// Derives the display name of this value's type, as the runtime would
    /// report it. Used for visited-pointer notes and pointer-constructor
    /// type arguments.
    ///
    /// Name derivation follows reference pointees, so it carries its own
    /// cycle guard: a reference whose identity repeats along the chain
    /// names its pointee `<cyclic>` instead of recursing.
    #[must_use]
    pub fn type_name(&self) -> String {
        self.type_name_guarded(&mut Vec::new())
    }

    fn type_name_guarded(&self, seen: &mut Vec<usize>) -> String {
        match self {
            Value::Nil | Value::Ref(None) => "<nil>".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Uint(_) => "uint".to_string(),
            Value::Byte(_) => "uint8".to_string(),
            Value::Float(_) => "float64".to_string(),
            Value::Complex(_, _) => "complex128".to_string(),
            Value::Str(_) => "string".to_string(),
            Value::Bytes { ty, .. } => ty.display_name().to_string(),
            Value::Seq { elem, .. } => format!("[]{}", elem.display_name()),
            Value::Map { key, elem, .. } => {
                format!("map[{}]{}", key.display_name(), elem.display_name())
            }
            Value::Ref(Some(target)) => {
                let addr = target.addr();
                if seen.contains(&addr) {
                    "<cyclic>".to_string()
                } else {
                    seen.push(addr);
                    let name = format!("*{}", target.get().type_name_guarded(seen));
                    seen.pop();
                    name
                }
            }
            Value::Record { ty, .. } => ty.display_name().to_string(),
            Value::Func { ty, .. } | Value::Chan { ty, .. } => ty.display_name().to_string(),
            Value::Type(_) => "Type".to_string(),
            Value::Addr(_) => "uintptr".to_string(),
            Value::Described(_) => "<described>".to_string(),
            Value::Unsupported(name) => name.clone(),
        }
    }

    /// Returns `true` when this value's type needs no pointer-constructor
    /// type argument.
    #[must_use]
    pub(crate) fn is_default_literal(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Int(_) | Value::Str(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a signed integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a record, returns its fields. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_fields(&self) -> Option<&FieldMap> {
        match self {
            Value::Record { fields, .. } => Some(fields),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    // Byte-sized unsigned values keep their byte-ness: they render in hex.
    fn from(value: u8) -> Self {
        Value::Byte(value)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Uint(value as u64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Uint(value as u64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Uint(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}
