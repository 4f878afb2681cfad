//! Parse a KDL document and print it in canonical form.
//!
//! Reads the file given as the first argument, or a built-in sample when no
//! argument is given. Parse errors are printed with their source snippet.
//!
//! Run with: cargo run --example roundtrip -- path/to/file.kdl

use kdl_doc::{from_reader, parse, to_string, Document};
use std::error::Error;
use std::fs::File;

const SAMPLE: &str = r#"
// A small web service configuration
(service)server "main" port=8080 host="0.0.0.0" {
    tls enabled=#true cert="/etc/certs/main.pem"
    /-debug #true
    route "/api" methods=GET methods=POST \
        timeout=1.5e1
    limits {
        connections 0x400
        body-size 1_048_576
    }
}
"#;

fn summarize(doc: &Document, depth: usize) {
    for node in doc {
        println!(
            "{}{} ({} arguments, {} properties)",
            "  ".repeat(depth),
            node.name(),
            node.arguments().len(),
            node.properties().len()
        );
        if let Some(children) = node.children() {
            summarize(children, depth + 1);
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let doc = match std::env::args().nth(1) {
        Some(path) => from_reader(File::open(path)?),
        None => parse(SAMPLE),
    };

    let doc = match doc {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("Structure:");
    summarize(&doc, 1);

    println!("\nCanonical form:");
    print!("{}", to_string(&doc));

    println!("\nAs JSON:");
    println!("{}", serde_json::to_string_pretty(&doc)?);

    Ok(())
}
