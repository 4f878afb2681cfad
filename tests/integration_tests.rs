use kdl_doc::{
    from_reader, from_slice, parse, to_string, to_string_with_options, Document, ExponentChar,
    Node, Number, PrinterOptions, Radix, Value,
};
use std::io::Cursor;

const CARGO_LIKE: &str = r#"
// package metadata
package {
    name kdl_doc
    version "0.1.0"
    authors "Alice <alice@example.com>" "Bob"
    /-publish #false
}

dependencies platform=windows {
    winapi "0.3" features=(list)"winuser" optional=#true
}
"#;

#[test]
fn test_realistic_document() {
    let doc = parse(CARGO_LIKE).unwrap();
    assert_eq!(doc.len(), 2);

    let package = doc.get("package").unwrap();
    let fields = package.children().unwrap();
    assert_eq!(fields.len(), 3);
    assert!(fields.get("publish").is_none());
    assert_eq!(
        fields.get("name").unwrap().arguments()[0].as_str(),
        Some("kdl_doc")
    );
    assert_eq!(fields.get("authors").unwrap().arguments().len(), 2);

    let deps = doc.get("dependencies").unwrap();
    assert_eq!(deps.get("platform").and_then(Value::as_str), Some("windows"));
    let winapi = &deps.children().unwrap().nodes()[0];
    assert_eq!(winapi.get("features").and_then(Value::ty), Some("list"));
    assert_eq!(winapi.get("optional").and_then(Value::as_bool), Some(true));

    println!("Canonical:\n{}", to_string(&doc));
}

#[test]
fn test_canonical_output() {
    let doc = parse(CARGO_LIKE).unwrap();
    let expected = "package {\n\
                    \tname kdl_doc\n\
                    \tversion \"0.1.0\"\n\
                    \tauthors \"Alice <alice@example.com>\" Bob\n\
                    }\n\
                    dependencies platform=windows {\n\
                    \twinapi \"0.3\" features=(list)winuser optional=#true\n\
                    }\n";
    assert_eq!(to_string(&doc), expected);
}

#[test]
fn test_print_is_idempotent() {
    let doc = parse(CARGO_LIKE).unwrap();
    let once = to_string(&doc);
    let reparsed = parse(&once).unwrap();
    assert_eq!(reparsed, doc);
    assert_eq!(to_string(&reparsed), once);
}

#[test]
fn test_number_round_trip() {
    let doc = parse("n 0xFF -0o17 0b1_0 1_000 1.50 6.02e23 1e-10 #inf #-inf #nan").unwrap();
    let text = to_string(&doc);
    assert_eq!(
        text,
        "n 0xff -0o17 0b10 1000 1.50 6.02E+23 1E-10 #inf #-inf #nan\n"
    );
    assert_eq!(parse(&text).unwrap(), doc);

    let args = doc.nodes()[0].arguments();
    assert_eq!(args[0].as_i64(), Some(255));
    assert_eq!(args[0].as_number().and_then(Number::radix), Some(Radix::Hexadecimal));
    assert_eq!(args[1].as_i64(), Some(-15));
    assert_eq!(args[4].as_f64(), Some(1.5));
    assert!(args[9].as_f64().is_some_and(f64::is_nan));
}

#[test]
fn test_big_integers() {
    let doc = parse("n 123456789012345678901234567890 0xFFFFFFFFFFFFFFFFFFFF").unwrap();
    let args = doc.nodes()[0].arguments();
    assert_eq!(args[0].as_i64(), None);
    assert_eq!(
        to_string(&doc),
        "n 123456789012345678901234567890 0xffffffffffffffffffff\n"
    );
}

#[test]
fn test_printer_options_together() {
    let doc = parse("root 0x1f 2.5e10 { a #null k=#null; empty {} }").unwrap();
    let options = PrinterOptions::new()
        .with_indent_spaces(2)
        .with_newline("\r\n")
        .with_print_null_arguments(false)
        .with_print_null_properties(false)
        .with_print_empty_children(true)
        .with_print_semicolons(true)
        .with_exponent_char(ExponentChar::Lower)
        .with_uppercase_hex(true);
    assert_eq!(
        to_string_with_options(&doc, options),
        "root 0x1F 2.5e+10 {\r\n  a;\r\n  empty {\r\n  };\r\n};\r\n"
    );

    let options = PrinterOptions::new().with_respect_radix(false);
    assert_eq!(to_string_with_options(&doc, options).lines().next(), Some("root 31 2.5E+10 {"));
}

#[test]
fn test_strings_round_trip() {
    let source = r####"n "plain" "two words" #"C:\path"# ##"has "# inside"## "tab\there" "ünïcödé" "\u{1F600}" "" "#hash""####;
    let doc = parse(source).unwrap();
    let expected: Vec<Value> = vec![
        "plain".into(),
        "two words".into(),
        "C:\\path".into(),
        "has \"# inside".into(),
        "tab\there".into(),
        "ünïcödé".into(),
        "😀".into(),
        "".into(),
        "#hash".into(),
    ];
    assert_eq!(doc.nodes()[0].arguments(), expected.as_slice());

    let printed = to_string(&doc);
    assert_eq!(parse(&printed).unwrap(), doc);

    let raw = to_string_with_options(&doc, PrinterOptions::new().with_raw_strings(true));
    assert!(raw.contains(r##"#"C:\path"#"##));
    assert!(raw.contains(r###"##"has "# inside"##"###));
    assert_eq!(parse(&raw).unwrap(), doc);
}

#[test]
fn test_built_document_matches_parsed() {
    let built = Document::new()
        .with_node(
            Node::builder("server")
                .with_type("service")
                .with_argument("main")
                .with_property("port", 8080)
                .with_property("debug", false)
                .with_child(Node::builder("route").with_argument("/api").build())
                .build(),
        )
        .with_node(Node::new("empty"));

    let parsed = parse("(service)server main port=8080 debug=#false {\n    route \"/api\"\n}\nempty").unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_copy_on_write_editing() {
    let doc = parse("config level=1 { keep }").unwrap();
    let original = &doc.nodes()[0];

    let edited = original
        .to_builder()
        .with_property("level", 2)
        .with_argument("extra")
        .build();

    assert_eq!(original.get("level"), Some(&Value::from(1)));
    assert_eq!(edited.get("level"), Some(&Value::from(2)));
    assert_eq!(edited.children(), original.children());
    assert_eq!(
        Document::from(vec![edited]).to_string(),
        "config extra level=2 {\n\tkeep\n}\n"
    );
}

#[test]
fn test_serde_view() {
    let doc = parse("(t)node 1 \"two\" #null big=18446744073709551615 f=1.5 { child }").unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "type": "t",
            "name": "node",
            "arguments": [1, "two", null],
            "properties": { "big": 18446744073709551615u64, "f": 1.5 },
            "children": [{
                "type": null,
                "name": "child",
                "arguments": [],
                "properties": {},
                "children": null
            }]
        }])
    );
}

#[test]
fn test_input_sources() {
    let from_bytes = from_slice("node \"ü\"".as_bytes()).unwrap();
    let from_stream = from_reader(Cursor::new("node \"ü\"".as_bytes().to_vec())).unwrap();
    let from_text: Document = "node \"ü\"".parse().unwrap();
    assert_eq!(from_bytes, from_stream);
    assert_eq!(from_bytes, from_text);

    let with_bom = parse("\u{FEFF}node \"ü\"").unwrap();
    assert_eq!(with_bom, from_text);
}

#[test]
fn test_error_display() {
    let err = parse("parent {\n    child 1.\n}").unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.message(), "digit expected immediately after '.'");
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.column(), Some(13));
    assert_eq!(
        err.to_string(),
        "Error line 2 - digit expected immediately after '.':\n    child 1.\n            ▲\n────────────╯"
    );
}
