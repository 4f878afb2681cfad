use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kdl_doc::{parse, to_string, Document, Node};

const SMALL: &str = r#"
package {
    name kdl_doc
    version "0.1.0"
    keywords kdl parser config
}
"#;

fn flat_document(size: usize) -> String {
    (0..size)
        .map(|i| format!("item{} {} \"name {}\" price={}.99 active=#true\n", i, i, i, i))
        .collect()
}

fn nested_document(depth: usize) -> Document {
    let mut node = Node::builder("leaf").with_argument(0).build();
    for level in 1..=depth {
        node = Node::builder(format!("level{}", level))
            .with_property("depth", level as i64)
            .with_child(node)
            .with_child(Node::new("sibling"))
            .build();
    }
    Document::from(vec![node])
}

fn benchmark_parse_small(c: &mut Criterion) {
    c.bench_function("parse_small", |b| b.iter(|| parse(black_box(SMALL))));
}

fn benchmark_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");

    for size in [10, 100, 1000].iter() {
        let text = flat_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse(black_box(&text)))
        });
    }
    group.finish();
}

fn benchmark_print_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_flat");

    for size in [10, 100, 1000].iter() {
        let doc = parse(&flat_document(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&doc)))
        });
    }
    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let doc = nested_document(50);
    let text = to_string(&doc);

    c.bench_function("print_nested", |b| b.iter(|| to_string(black_box(&doc))));
    c.bench_function("parse_nested", |b| b.iter(|| parse(black_box(&text))));
}

fn benchmark_strings(c: &mut Criterion) {
    let text = concat!(
        "node \"escapes \\n\\t\\u{1F600} and \\\"quotes\\\"\" ",
        "##\"raw \"# content\"## ",
        "\"\n    multi\n      line\n    \"\n"
    )
    .repeat(100);

    c.bench_function("parse_strings", |b| b.iter(|| parse(black_box(&text))));
}

fn benchmark_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip_small", |b| {
        b.iter(|| {
            let doc = parse(black_box(SMALL)).unwrap();
            to_string(black_box(&doc))
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_small,
    benchmark_parse_flat,
    benchmark_print_flat,
    benchmark_nested,
    benchmark_strings,
    benchmark_roundtrip
);
criterion_main!(benches);
