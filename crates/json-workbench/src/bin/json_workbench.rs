//! `json-workbench`: line-driven JSON editing session.
//!
//! Usage:
//!   json-workbench [store-dir]
//!
//! Snapshots persist under `store-dir` (default `.json-workbench`).
//! Commands are read from stdin, one per line:
//!
//!   edit <json>             replace the buffer
//!   show                    print the buffer
//!   view                    pretty-print the buffer and print the result
//!   tree                    print the buffer as a text tree
//!   pretty | compact        transform the buffer in place
//!   sort <key|value> [asc|desc]
//!   overlay <json>          set the merge overlay
//!   merge                   shallow-merge the overlay into the buffer
//!   schema <json>           set the schema buffer
//!   validate                validate the buffer against the schema
//!   undo | redo             step through edit history
//!   settle                  commit a pending edit to history immediately
//!   save [name]             snapshot the buffer
//!   saves                   list snapshots, newest first
//!   load <id>               restore a snapshot into the buffer
//!   delete <id>             drop a snapshot
//!   rename <id> <name>      rename a snapshot
//!   clear-saves             drop all snapshots
//!   import-url <url>        fetch a document into the buffer
//!   import-file <path>      read a file into the buffer
//!   export [dir]            write the buffer to exported.json
//!   quit

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use json_workbench::export::EXPORT_FILE_NAME;
use json_workbench::store::FileStore;
use json_workbench::transform::{SortBy, SortOrder};
use json_workbench::{Action, Session};

const HELP: &str = "\
commands: edit show view tree pretty compact sort overlay merge schema
          validate undo redo settle save saves load delete rename
          clear-saves import-url import-file export quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let store_dir = args.get(1).map(String::as_str).unwrap_or(".json-workbench");
    let store = match FileStore::new(store_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let mut session = Session::new(store);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{e}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = split_command(line);
        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "edit" => run(&mut session, Action::Edit(rest.to_string())),
            "show" => println!("{}", session.state().buffer),
            "view" => {
                run(&mut session, Action::View);
                if let Some(output) = &session.state().output {
                    println!("{output}");
                }
            }
            "tree" => match session.render_tree() {
                Ok(tree) => println!("{tree}"),
                Err(e) => eprintln!("error: {e}"),
            },
            "pretty" => run(&mut session, Action::Pretty),
            "compact" => run(&mut session, Action::Minify),
            "sort" => {
                let mut parts = rest.split_whitespace();
                let by = match parts.next() {
                    Some("key") => SortBy::Key,
                    Some("value") => SortBy::Value,
                    _ => {
                        eprintln!("usage: sort <key|value> [asc|desc]");
                        continue;
                    }
                };
                let order = match parts.next() {
                    None | Some("asc") => SortOrder::Asc,
                    Some("desc") => SortOrder::Desc,
                    _ => {
                        eprintln!("usage: sort <key|value> [asc|desc]");
                        continue;
                    }
                };
                let action = match by {
                    SortBy::Key => Action::SortKeys(order),
                    SortBy::Value => Action::SortValues(order),
                };
                run(&mut session, action);
            }
            "overlay" => run(&mut session, Action::EditOverlay(rest.to_string())),
            "merge" => run(&mut session, Action::Merge),
            "schema" => run(&mut session, Action::EditSchema(rest.to_string())),
            "validate" => {
                run(&mut session, Action::Validate);
                if let Some(message) = &session.state().validation {
                    println!("{message}");
                }
            }
            "undo" => run(&mut session, Action::Undo),
            "redo" => run(&mut session, Action::Redo),
            "settle" => session.flush_history(),
            "save" => run(&mut session, Action::Save(rest.to_string())),
            "saves" => match session.saves() {
                Ok(list) => {
                    for doc in list {
                        println!("{}  {}  ({} bytes)", doc.id, doc.name, doc.content.len());
                    }
                }
                Err(e) => eprintln!("error: {e}"),
            },
            "load" => run(&mut session, Action::Load(rest.to_string())),
            "delete" => run(&mut session, Action::Delete(rest.to_string())),
            "rename" => {
                let mut parts = rest.splitn(2, char::is_whitespace);
                match (parts.next(), parts.next()) {
                    (Some(id), Some(name)) if !id.is_empty() => {
                        run(
                            &mut session,
                            Action::Rename(id.to_string(), name.trim().to_string()),
                        );
                    }
                    _ => eprintln!("usage: rename <id> <name>"),
                }
            }
            "clear-saves" => run(&mut session, Action::ClearSaves),
            "import-url" => run(&mut session, Action::ImportUrl(rest.to_string())),
            "import-file" => run(&mut session, Action::ImportFile(PathBuf::from(rest))),
            "export" => {
                let dir = if rest.is_empty() { Path::new(".") } else { Path::new(rest) };
                run(&mut session, Action::Export(dir.to_path_buf()));
                if session.state().error.is_none() {
                    println!("wrote {}", dir.join(EXPORT_FILE_NAME).display());
                }
            }
            other => eprintln!("unknown command `{other}` (try help)"),
        }
    }
}

fn run(session: &mut Session<FileStore>, action: Action) {
    let state = session.dispatch(action);
    if let Some(error) = &state.error {
        eprintln!("error: {error}");
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    }
}
