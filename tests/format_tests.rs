use litrep::{
    format, format_indented, is_literal_safe, lit, to_string, to_string_with_options, FieldMap,
    FormatOptions, Shared, TypeDesc, Value,
};
use serde::Serialize;

fn record(ty: &str, fields: &[(&str, Value)]) -> Value {
    let mut map = FieldMap::new();
    for (name, value) in fields {
        map.insert((*name).to_string(), value.clone());
    }
    Value::record(ty, map)
}

#[test]
fn test_nil_renders_nil() {
    assert_eq!(format(&Value::Nil, &FormatOptions::default()), "nil");
    assert_eq!(format(&Value::nil_ref(), &FormatOptions::default()), "nil");
}

#[test]
fn test_int_renders_decimal() {
    assert_eq!(format(&Value::from(10), &FormatOptions::default()), "10");
}

#[test]
fn test_primitives_single_line_have_no_newlines() {
    let options = FormatOptions::single_line();
    let primitives = vec![
        Value::Nil,
        Value::from(true),
        Value::from(-42),
        Value::from(42u64),
        Value::Byte(0x7f),
        Value::from(3.5),
        Value::Complex(1.0, -2.0),
        Value::from("line1\nline2"),
        Value::bytes(b"\n\r".to_vec()),
        Value::Addr(0x1000),
    ];
    for value in &primitives {
        let text = format(value, &options);
        assert!(!text.contains('\n'), "newline in {:?} -> {}", value, text);
    }
}

#[test]
fn test_string_quoting_policy() {
    // Backquote-safe content in multi-line-capable mode is backquoted.
    assert_eq!(format(&Value::from("str"), &FormatOptions::default()), "`str`");
    // Unsafe content (contains a backquote) falls back to escaped quotes.
    assert_eq!(
        format(&Value::from("a`b"), &FormatOptions::single_line()),
        "\"a`b\""
    );
}

#[test]
fn test_literal_safety_predicate() {
    assert!(is_literal_safe(""));
    assert!(is_literal_safe("a\nb"));
    assert!(!is_literal_safe("a`b"));
    assert!(!is_literal_safe("has\u{1}control"));
    assert!(!is_literal_safe("\u{feff}bom"));
}

#[test]
fn test_two_field_record_multi_line() {
    let value = record("pkg.T", &[("A", Value::from(10)), ("B", Value::from(20))]);
    let text = format(&value, &FormatOptions::default());
    assert_eq!(text, "pkg.T{\n    A: 10,\n    B: 20,\n}");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "    A: 10,");
    assert_eq!(lines[2], "    B: 20,");
}

#[test]
fn test_record_single_line() {
    let value = record("pkg.T", &[("A", Value::from(10)), ("B", Value::from(20))]);
    assert_eq!(
        format(&value, &FormatOptions::single_line()),
        "pkg.T{A: 10, B: 20}"
    );
}

#[test]
fn test_zero_field_elision() {
    let all_zero = record(
        "pkg.T",
        &[("A", Value::from(0)), ("B", Value::from("")), ("C", Value::Nil)],
    );
    assert_eq!(format(&all_zero, &FormatOptions::default()), "pkg.T{}");

    // Exactly one non-zero field renders inline even in multi-line mode.
    let one_left = record("pkg.T", &[("A", Value::from(0)), ("B", Value::from(20))]);
    assert_eq!(format(&one_left, &FormatOptions::default()), "pkg.T{B: 20}");
}

#[test]
fn test_elision_disabled_shows_all_fields() {
    let value = record("pkg.T", &[("A", Value::from(0)), ("B", Value::from(20))]);
    let options = FormatOptions::default().with_all_fields();
    assert_eq!(format(&value, &options), "pkg.T{\n    A: 0,\n    B: 20,\n}");

    // The one-field inline shortcut applies only while elision is active.
    let single = record("pkg.T", &[("A", Value::from(1))]);
    assert_eq!(format(&single, &options), "pkg.T{\n    A: 1,\n}");
}

#[test]
fn test_anonymous_wrapper_record() {
    let options = FormatOptions::single_line();
    assert_eq!(
        format(&Value::wrapper("pkg.ID", Value::from(7)), &options),
        "pkg.ID{7}"
    );
    assert_eq!(
        format(&Value::wrapper("pkg.ID", Value::from(0)), &options),
        "pkg.ID{}"
    );
    assert_eq!(
        format(&Value::wrapper("pkg.ID", Value::from(7)), &FormatOptions::default()),
        "pkg.ID{\n    7\n}"
    );
}

#[test]
fn test_sequence_rendering() {
    let value = Value::seq(
        TypeDesc::named("int"),
        vec![Value::from(1), Value::from(2), Value::from(3)],
    );
    assert_eq!(
        format(&value, &FormatOptions::single_line()),
        "[]int{1, 2, 3}"
    );
    assert_eq!(
        format(&value, &FormatOptions::default()),
        "[]int{\n    1,\n    2,\n    3,\n}"
    );

    let empty = Value::seq(TypeDesc::named("int"), vec![]);
    assert_eq!(format(&empty, &FormatOptions::default()), "[]int{}");
}

#[test]
fn test_type_elision_over_concrete_elements() {
    let elems = vec![
        record("pkg.P", &[("X", Value::from(1))]),
        record("pkg.P", &[("X", Value::from(2))]),
    ];
    // Concrete element type: the slice prefix implies each element's type.
    let concrete = Value::seq(TypeDesc::named("pkg.P"), elems.clone());
    assert_eq!(
        format(&concrete, &FormatOptions::single_line()),
        "[]pkg.P{{X: 1}, {X: 2}}"
    );

    // Open element type: each element prints its own concrete type.
    let dynamic = Value::seq(TypeDesc::dynamic(), elems);
    assert_eq!(
        format(&dynamic, &FormatOptions::single_line()),
        "[]any{pkg.P{X: 1}, pkg.P{X: 2}}"
    );
}

#[test]
fn test_map_rendering() {
    let value = Value::map_of(
        TypeDesc::named("string"),
        TypeDesc::named("int"),
        vec![(Value::from("k"), Value::from(1))],
    );
    assert_eq!(
        format(&value, &FormatOptions::single_line()),
        "map[string]int{\"k\": 1}"
    );
    assert_eq!(
        format(&value, &FormatOptions::default()),
        "map[string]int{\n    `k`: 1,\n}"
    );

    let empty = Value::map_of(TypeDesc::named("string"), TypeDesc::named("int"), vec![]);
    assert_eq!(
        format(&empty, &FormatOptions::single_line()),
        "map[string]int{}"
    );
}

#[test]
fn test_multi_key_map_lines_as_set() {
    // Entry order is whatever the map provides; assert on the line set.
    let value = Value::map_of(
        TypeDesc::named("string"),
        TypeDesc::named("int"),
        vec![
            (Value::from("a"), Value::from(1)),
            (Value::from("b"), Value::from(2)),
        ],
    );
    let text = format(&value, &FormatOptions::default());
    let mut inner: Vec<&str> = text.lines().skip(1).take(2).collect();
    inner.sort_unstable();
    assert_eq!(inner, vec!["    `a`: 1,", "    `b`: 2,"]);
}

#[test]
fn test_ref_to_record_uses_ampersand() {
    let pointee = record("pkg.T", &[("Field", Value::from("value"))]);
    let value = Value::ref_to(pointee);
    assert_eq!(
        format(&value, &FormatOptions::single_line()),
        "&pkg.T{Field: \"value\"}"
    );
}

#[test]
fn test_ref_to_sequence_uses_ampersand() {
    let value = Value::ref_to(Value::seq(TypeDesc::named("int"), vec![Value::from(1)]));
    assert_eq!(format(&value, &FormatOptions::single_line()), "&[]int{1}");
}

#[test]
fn test_pointer_constructor_forms() {
    let options = FormatOptions::single_line();
    // Default literal types omit the type argument.
    assert_eq!(format(&Value::ref_to(Value::from(3)), &options), "Ptr(3)");
    assert_eq!(
        format(&Value::ref_to(Value::from(true)), &options),
        "Ptr(true)"
    );
    assert_eq!(
        format(&Value::ref_to(Value::from("s")), &options),
        "Ptr(\"s\")"
    );
    // Everything else carries one.
    assert_eq!(
        format(&Value::ref_to(Value::from(1.5)), &options),
        "Ptr[float64](1.5)"
    );
    assert_eq!(
        format(&Value::ref_to(Value::from(42u64)), &options),
        "Ptr[uint](42)"
    );
}

#[test]
fn test_self_reference_terminates() {
    let node = Shared::new(Value::Nil);
    let mut fields = FieldMap::new();
    fields.insert("Next".to_string(), Value::reference(node.clone()));
    node.set(Value::record("list.Node", fields));

    let text = format(&Value::reference(node), &FormatOptions::default());
    assert!(text.contains("/* visited */"));
    assert!(text.starts_with("&list.Node{Next: /* visited */ (*list.Node)(0x"));
}

#[test]
fn test_reference_to_itself_terminates() {
    // A cell whose held value is a reference back to the same cell: both
    // the visited guard and type-name derivation must cut the loop.
    let cell = Shared::new(Value::Nil);
    cell.set(Value::reference(cell.clone()));

    let text = format(&Value::reference(cell), &FormatOptions::default());
    assert!(text.starts_with("Ptr[*<cyclic>](/* visited */ ("));
    assert_eq!(text.matches("/* visited */").count(), 1);
}

#[test]
fn test_mutual_reference_loop_terminates() {
    // Two bare reference cells pointing at each other, no record between.
    let a = Shared::new(Value::Nil);
    let b = Shared::new(Value::reference(a.clone()));
    a.set(Value::reference(b));

    let text = format(&Value::reference(a), &FormatOptions::default());
    assert!(text.contains("/* visited */"));
}

#[test]
fn test_mutual_cycle_renders_first_node_once() {
    let a = Shared::new(Value::Nil);
    let b = Shared::new(Value::Nil);

    let mut fields = FieldMap::new();
    fields.insert("Next".to_string(), Value::reference(b.clone()));
    a.set(Value::record("list.Node", fields));

    let mut fields = FieldMap::new();
    fields.insert("Next".to_string(), Value::reference(a.clone()));
    b.set(Value::record("list.Node", fields));

    let text = format(&Value::reference(a), &FormatOptions::default());
    assert!(text.starts_with(
        "&list.Node{Next: &list.Node{Next: /* visited */ (*list.Node)(0x"
    ));
    assert!(text.ends_with(")}}"));
    // The full structure appears exactly once.
    assert_eq!(text.matches("/* visited */").count(), 1);
}

#[test]
fn test_shared_reference_rendered_once_even_without_cycle() {
    // Deliberate fidelity trade: the same identity never renders twice in
    // one call, cyclic or not.
    let shared = Shared::new(Value::from(5u64));
    let value = record(
        "pkg.T",
        &[
            ("P", Value::reference(shared.clone())),
            ("Q", Value::reference(shared)),
        ],
    );
    let text = format(&value, &FormatOptions::single_line());
    assert_eq!(text.matches("Ptr[uint](5)").count(), 1);
    assert_eq!(text.matches("/* visited */").count(), 1);
}

#[test]
fn test_distinct_but_equal_references_both_render() {
    let value = record(
        "pkg.T",
        &[
            ("P", Value::ref_to(Value::from(5u64))),
            ("Q", Value::ref_to(Value::from(5u64))),
        ],
    );
    let text = format(&value, &FormatOptions::single_line());
    assert_eq!(text.matches("Ptr[uint](5)").count(), 2);
    assert!(!text.contains("/* visited */"));
}

#[test]
fn test_fresh_state_across_calls() {
    // The visited set belongs to one top-level call only.
    let value = Value::ref_to(Value::from(5u64));
    let options = FormatOptions::single_line();
    assert_eq!(format(&value, &options), "Ptr[uint](5)");
    assert_eq!(format(&value, &options), "Ptr[uint](5)");
}

#[test]
fn test_nested_indentation_depth() {
    let inner = Value::seq(TypeDesc::named("int"), vec![Value::from(1), Value::from(2)]);
    let value = record("pkg.Outer", &[("A", Value::from(10)), ("B", inner)]);
    assert_eq!(
        format(&value, &FormatOptions::default()),
        "pkg.Outer{\n    A: 10,\n    B: []int{\n        1,\n        2,\n    },\n}"
    );
}

#[test]
fn test_custom_indent_string() {
    let value = record("pkg.T", &[("A", Value::from(1)), ("B", Value::from(2))]);
    let options = FormatOptions::default().with_indent("\t");
    assert_eq!(format(&value, &options), "pkg.T{\n\tA: 1,\n\tB: 2,\n}");
}

#[test]
fn test_format_indented_base_level() {
    let value = Value::seq(TypeDesc::named("int"), vec![Value::from(1)]);
    let text = format_indented(&value, &FormatOptions::default(), 1);
    assert_eq!(text, "[]int{\n        1,\n    }");
}

#[test]
fn test_byte_sequence_conversion_form() {
    let options = FormatOptions::single_line();
    assert_eq!(
        format(&Value::bytes(b"abc".to_vec()), &options),
        "[]byte(\"abc\")"
    );

    let named = Value::Bytes {
        ty: TypeDesc::named_bytes("pkg.Blob"),
        data: b"abc".to_vec(),
    };
    assert_eq!(format(&named, &options), "pkg.Blob(\"abc\")");
}

#[test]
fn test_determinism_and_idempotence() {
    let value = record(
        "pkg.T",
        &[
            ("A", lit!([1, 2, 3])),
            ("B", lit!({ "k": "v" })),
            ("C", Value::ref_to(record("pkg.U", &[("X", Value::from(1))]))),
        ],
    );
    let options = FormatOptions::default();
    let first = format(&value, &options);
    let second = format(&value, &options);
    assert_eq!(first, second);
}

#[test]
fn test_type_descriptor_value() {
    assert_eq!(
        format(&Value::Type(TypeDesc::named("pkg.T")), &FormatOptions::default()),
        "TypeOf(pkg.T)"
    );
}

#[test]
fn test_serde_bridge_end_to_end() {
    #[derive(Serialize)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string()],
    };

    let text = to_string_with_options(&user, &FormatOptions::single_line()).unwrap();
    assert_eq!(
        text,
        "User{id: 123, name: \"Alice\", active: true, tags: []any{\"admin\"}}"
    );

    let zeroed = User {
        id: 0,
        name: String::new(),
        active: false,
        tags: vec![],
    };
    // The empty (non-nil) sequence survives elision.
    assert_eq!(
        to_string(&zeroed).unwrap(),
        "User{tags: []any{}}"
    );
}

#[test]
fn test_described_value_short_circuits() {
    use litrep::{DescribeLiteral, DescribedValue};

    #[derive(Debug)]
    struct Duration(u64);
    impl DescribeLiteral for Duration {
        fn describe_literal(&self) -> String {
            format!("{}ns", self.0)
        }
    }

    let value = Value::Described(DescribedValue::new(Duration(250)));
    assert_eq!(format(&value, &FormatOptions::default()), "250ns");

    // The hook bypasses composite machinery entirely when nested.
    let wrapped = record("pkg.T", &[("D", value)]);
    assert_eq!(
        format(&wrapped, &FormatOptions::single_line()),
        "pkg.T{D: 250ns}"
    );
}
