//! `json-sort`: recursively sort object entries by key or by value.
//!
//! Usage:
//!   json-sort <key|value> [asc|desc]
//!
//! The document is read from stdin. The default order is `asc`. Arrays
//! keep their element order; only object entries are reordered.

use std::io::{self, Read, Write};

use json_workbench::transform::{sort, SortBy, SortOrder};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let by = match args.get(1).map(String::as_str) {
        Some("key") => SortBy::Key,
        Some("value") => SortBy::Value,
        Some(other) => {
            eprintln!("Unknown sort field `{other}` (expected key or value).");
            std::process::exit(1);
        }
        None => {
            eprintln!("First argument must be the sort field: key or value.");
            std::process::exit(1);
        }
    };
    let order = match args.get(2).map(String::as_str) {
        Some("asc") | None => SortOrder::Asc,
        Some("desc") => SortOrder::Desc,
        Some(other) => {
            eprintln!("Unknown order `{other}` (expected asc or desc).");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match sort(buf.trim(), by, order) {
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
