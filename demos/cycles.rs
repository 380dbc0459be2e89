//! Formatting cyclic graphs without infinite recursion.
//!
//! Run with: cargo run --example cycles

use litrep::{format, FieldMap, FormatOptions, Shared, Value};

fn node(value: i64, next: Value) -> Value {
    let mut fields = FieldMap::new();
    fields.insert("Value".to_string(), Value::from(value));
    fields.insert("Next".to_string(), next);
    Value::record("list.Node", fields)
}

fn main() {
    // Two nodes referencing each other
    let a = Shared::new(Value::Nil);
    let b = Shared::new(Value::Nil);
    a.set(node(1, Value::reference(b.clone())));
    b.set(node(2, Value::reference(a.clone())));

    // The second visit to `a` renders as an annotated address instead of
    // recursing forever.
    let out = format(&Value::reference(a), &FormatOptions::default());
    println!("Cyclic list:\n{}", out);
}
