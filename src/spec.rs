//! Literal Output Reference
//!
//! This module documents the text this crate emits. Output is write-only:
//! it is meant for humans and diagnostics, and no parser is provided or
//! implied.
//!
//! # Overview
//!
//! Every value renders as something resembling its construction expression.
//! Output is deterministic for identical input and configuration, and
//! terminates on arbitrarily cyclic input.
//!
//! # Scalars
//!
//! | Kind | Form | Example |
//! |------|------|---------|
//! | Nil / nil-capable holding nil | `nil` | `nil` |
//! | Boolean | `true` / `false` | `true` |
//! | Signed integer | decimal | `-42` |
//! | Unsigned integer | decimal | `42` |
//! | Byte-sized unsigned | hexadecimal | `0xff` |
//! | Raw address | hexadecimal | `0xdeadbeef` |
//! | Float | shortest round-trippable decimal | `3.5` |
//! | Complex | `(re+imi)`, `+` forced when the imaginary part is non-negative | `(1.5+2i)`, `(1-2.5i)` |
//! | Type descriptor | `TypeOf(name)` | `TypeOf(tree.Node)` |
//!
//! # Strings
//!
//! In multi-line mode, a backquote-safe string renders raw between
//! backquotes; everything else renders double-quoted with escapes (`\"`,
//! `\\`, `\n`, `\r`, `\t`, other control characters as `\x??`).
//! Backquote-safety is exposed as [`is_literal_safe`](crate::is_literal_safe):
//! no backquote, no byte-order mark, no control character other than tab,
//! newline, and carriage return.
//!
//! Byte sequences render in conversion-call form, treating the bytes as
//! text for escaping purposes: `[]byte("\x00A")`. A named byte-sequence
//! type keeps its qualified name; the raw type abbreviates to `[]byte`.
//!
//! # Composites
//!
//! Empty sequences and maps render `{}`. Otherwise, single-line mode joins
//! elements with `", "`; multi-line mode puts one element per line, each
//! at one indent level deeper than its parent, with a trailing comma:
//!
//! ```text
//! []int{
//!     1,
//!     2,
//! }
//! ```
//!
//! Map entries render `key: value`, in the order stored (never sorted).
//!
//! A composite's type-name prefix is elided when the enclosing declared
//! type already disambiguates it: a sequence over a concrete element type
//! prints its own `[]T` prefix once and its elements bare, while a
//! sequence over an open element type prints each element's concrete type.
//!
//! # Records
//!
//! Fields render `Name: value` in declaration order. With zero-field
//! elision active (the default), zero-valued fields are skipped; a record
//! with no surviving fields renders `{}`, and a record with exactly one
//! surviving field renders inline as `{Name: value}` even in multi-line
//! mode. A single-field anonymous wrapper prints its field without a name.
//!
//! # References
//!
//! A reference to a sequence or record uses the address-of shorthand:
//! `&tree.Node{Value: 1}`. Other pointees use the generic constructor,
//! `Ptr[float64](1.5)`, with the type argument omitted for bool, int, and
//! string pointees: `Ptr(3)`.
//!
//! A reference whose identity was already rendered during the same call is
//! cut short:
//!
//! ```text
//! /* visited */ (*list.Node)(0x7f7c2ea51c00)
//! ```
//!
//! (address values vary per run). This guards against cycles; two
//! structurally equal but distinct references are rendered independently.
//!
//! Pointer type names are derived by following pointee chains, one `*` per
//! hop. A chain that loops back onto an already-followed identity names the
//! repeat `<cyclic>`, so a cell holding a reference to itself names as
//! `*<cyclic>`.
