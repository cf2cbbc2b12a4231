//! `json-fmt`: pretty-print or minify a JSON document.
//!
//! Usage:
//!   json-fmt [pretty|compact]
//!
//! The document is read from stdin. The default mode is `pretty`.

use std::io::{self, Read, Write};

use json_workbench::transform;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mode = args.get(1).map(String::as_str).unwrap_or("pretty");

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let result = match mode {
        "pretty" => transform::pretty(buf.trim()),
        "compact" => transform::minify(buf.trim()),
        other => {
            eprintln!("Unknown mode `{other}` (expected pretty or compact).");
            std::process::exit(1);
        }
    };

    match result {
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
