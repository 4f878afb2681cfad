//! Property-based tests for the print/parse round trip.
//!
//! Generated documents cover every value kind, radix and quoting situation.
//! Child blocks are either absent or non-empty, since an empty block is
//! dropped by the default printer.

use kdl_doc::{
    parse, to_string, to_string_with_options, Decimal, Document, Node, Number, PrinterOptions,
    Properties, Radix, Value,
};
use proptest::prelude::*;

fn roundtrip(doc: &Document, options: PrinterOptions) -> bool {
    let text = to_string_with_options(doc, options);
    match parse(&text) {
        Ok(back) => {
            if back != *doc {
                eprintln!("Printed was:\n{}", text);
                eprintln!("Parsed back: {:?}", back);
                return false;
            }
            true
        }
        Err(e) => {
            eprintln!("Reparse failed: {}", e);
            eprintln!("Printed was:\n{}", text);
            false
        }
    }
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_-]{0,8}",
        "\\PC{0,12}",
        any::<String>(),
        Just(String::new()),
        Just("true".to_string()),
        Just("-1".to_string()),
        Just("say \"#hi\"".to_string()),
        Just("C:\\dir\\file".to_string()),
    ]
}

fn any_radix() -> impl Strategy<Value = Radix> {
    prop_oneof![
        Just(Radix::Binary),
        Just(Radix::Octal),
        Just(Radix::Decimal),
        Just(Radix::Hexadecimal),
    ]
}

fn any_scale() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => -20i64..20,
        1 => any::<i64>(),
        1 => i64::MIN..i64::MIN + 40,
        1 => i64::MAX - 40..=i64::MAX,
    ]
}

fn any_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        (any::<i64>(), any_radix()).prop_map(|(n, radix)| Number::integer_with_radix(n, radix)),
        any::<u128>().prop_map(Number::from),
        (any::<i64>(), any_scale()).prop_map(|(n, scale)| Number::Decimal(Decimal::new(n, scale))),
        Just(Number::PositiveInfinity),
        Just(Number::NegativeInfinity),
        Just(Number::NaN),
    ]
}

fn any_value() -> impl Strategy<Value = Value> {
    let kind = prop_oneof![
        Just(Value::null()),
        any::<bool>().prop_map(Value::from),
        any_number().prop_map(Value::from),
        any_text().prop_map(Value::from),
    ];
    (kind, proptest::option::of(any_text())).prop_map(|(value, ty)| match ty {
        Some(ty) => value.with_type(ty),
        None => value,
    })
}

fn any_leaf() -> impl Strategy<Value = Node> {
    (
        any_text(),
        proptest::option::of(any_text()),
        prop::collection::vec(any_value(), 0..4),
        prop::collection::vec((any_text(), any_value()), 0..4),
    )
        .prop_map(|(name, ty, arguments, properties)| {
            let node = Node::new(name)
                .with_arguments(arguments)
                .with_properties(properties.into_iter().collect::<Properties>());
            match ty {
                Some(ty) => node.with_type(ty),
                None => node,
            }
        })
}

fn any_node() -> impl Strategy<Value = Node> {
    any_leaf().prop_recursive(3, 24, 4, |inner| {
        (any_leaf(), prop::collection::vec(inner, 1..4))
            .prop_map(|(node, children)| node.with_children(Document::from(children)))
    })
}

fn any_document() -> impl Strategy<Value = Document> {
    prop::collection::vec(any_node(), 0..5).prop_map(Document::from)
}

proptest! {
    #[test]
    fn prop_default_roundtrip(doc in any_document()) {
        prop_assert!(roundtrip(&doc, PrinterOptions::default()));
    }

    #[test]
    fn prop_print_is_stable(doc in any_document()) {
        let once = to_string(&doc);
        let twice = to_string(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_roundtrip_with_options(
        doc in any_document(),
        semicolons in any::<bool>(),
        raw in any::<bool>(),
        uppercase in any::<bool>(),
        spaces in 0usize..5,
    ) {
        let options = PrinterOptions::new()
            .with_indent_spaces(spaces)
            .with_print_semicolons(semicolons)
            .with_raw_strings(raw)
            .with_uppercase_hex(uppercase)
            .with_newline("\r\n");
        prop_assert!(roundtrip(&doc, options));
    }

    #[test]
    fn prop_empty_children_kept_when_printed(name in any_text(), present in any::<bool>()) {
        let node = if present {
            Node::new(name).with_children(Document::new())
        } else {
            Node::new(name)
        };
        let doc = Document::from(vec![node]);
        let options = PrinterOptions::new().with_print_empty_children(true);
        prop_assert!(roundtrip(&doc, options));
    }

    #[test]
    fn prop_integers_parse(n in any::<i64>()) {
        let doc = parse(&format!("node {}", n)).unwrap();
        prop_assert_eq!(doc.nodes()[0].arguments()[0].as_i64(), Some(n));
    }

    #[test]
    fn prop_hex_parse(n in any::<u64>()) {
        let doc = parse(&format!("node 0x{:X}", n)).unwrap();
        let value = &doc.nodes()[0].arguments()[0];
        prop_assert_eq!(value.as_number().and_then(Number::radix), Some(Radix::Hexadecimal));
        prop_assert_eq!(value.to_string(), format!("0x{:x}", n));
    }

    #[test]
    fn prop_last_property_wins(key in "k[a-z]{0,5}", a in any::<i32>(), b in any::<i32>()) {
        let doc = parse(&format!("node {key}={a} {key}={b}")).unwrap();
        let props = doc.nodes()[0].properties();
        prop_assert_eq!(props.len(), 1);
        prop_assert_eq!(props.get(&key), Some(&Value::from(b)));
    }

    #[test]
    fn prop_decimal_exponents_parse_or_reject(
        mantissa in "[1-9][0-9]{0,3}(\\.[0-9]{1,3})?",
        exponent in any::<i128>(),
    ) {
        match parse(&format!("node {}e{}", mantissa, exponent)) {
            Ok(doc) => {
                let printed = to_string(&doc);
                prop_assert_eq!(parse(&printed).unwrap(), doc);
            }
            Err(e) => {
                prop_assert!(e.is_parse());
                prop_assert_eq!(e.message(), "exponent out of range");
            }
        }
    }

    #[test]
    fn prop_garbage_never_panics(input in "\\PC{0,40}") {
        let _ = parse(&input);
    }
}
