//! Customizing canonical output with PrinterOptions.
//!
//! Run with: cargo run --example custom_options

use kdl_doc::{parse, to_string, to_string_with_options, ExponentChar, PrinterOptions};
use std::error::Error;

const INPUT: &str = r##"
palette base=0xFF8800 accent=0x00aaff {
    gamma 2.2e-1
    path #"C:\themes\dark"#
    fallback #null
    empty {}
}
"##;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse(INPUT)?;

    println!("Default:");
    println!("{}", to_string(&doc));

    println!("Two-space indent, semicolons:");
    let options = PrinterOptions::new()
        .with_indent_spaces(2)
        .with_print_semicolons(true);
    println!("{}", to_string_with_options(&doc, options));

    println!("Decimal integers, lowercase exponent:");
    let options = PrinterOptions::new()
        .with_respect_radix(false)
        .with_exponent_char(ExponentChar::Lower);
    println!("{}", to_string_with_options(&doc, options));

    println!("Uppercase hex, raw strings, no nulls, empty blocks kept:");
    let options = PrinterOptions::new()
        .with_uppercase_hex(true)
        .with_raw_strings(true)
        .with_print_null_arguments(false)
        .with_print_empty_children(true);
    println!("{}", to_string_with_options(&doc, options));

    // options can also come from configuration files
    let options: PrinterOptions =
        serde_json::from_str(r#"{ "indent": "    ", "print_semicolons": true }"#)?;
    println!("Loaded from JSON:");
    println!("{}", to_string_with_options(&doc, options));

    Ok(())
}
