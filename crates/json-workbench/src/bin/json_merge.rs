//! `json-merge`: shallow-merge an overlay object into a base object.
//!
//! Usage:
//!   json-merge '<overlay-object-json>'
//!
//! The base document is read from stdin. On keys present in both, the
//! overlay value wins wholesale.

use std::io::{self, Read, Write};

use json_workbench::transform::shallow_merge;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let overlay = match args.get(1) {
        Some(text) => text.clone(),
        None => {
            eprintln!("First argument must be the overlay JSON object.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match shallow_merge(buf.trim(), &overlay) {
        Ok(text) => {
            io::stdout().write_all(text.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
