//! `json-validate`: validate a document against a JSON Schema.
//!
//! Usage:
//!   json-validate '<schema-json>'
//!
//! The document is read from stdin. Every violation is reported, one per
//! line, prefixed with its JSON-pointer path. Exit status is 0 when the
//! document conforms, 1 otherwise.

use std::io::{self, Read, Write};

use json_workbench::schema::validate;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let schema = match args.get(1) {
        Some(text) => text.clone(),
        None => {
            eprintln!("First argument must be the JSON Schema.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match validate(&schema, buf.trim()) {
        Ok(outcome) => {
            io::stdout()
                .write_all(outcome.to_message().as_bytes())
                .unwrap();
            io::stdout().write_all(b"\n").unwrap();
            if !outcome.is_valid() {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
