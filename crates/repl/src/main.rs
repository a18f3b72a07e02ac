//! The read-eval-print loop: reads a line, dispatches meta vs. statement,
//! and prints one of the fixed outcome strings.

mod schema_file;

use anyhow::{Context, Result};
use catalog::Schema;
use clap::Parser;
use common::DbError;
use executor::ExecOutcome;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = "data";

#[derive(Parser, Debug)]
#[command(name = "db", about = "A minimal SQL-like relational database engine")]
struct Args {
    /// Path to the schema descriptor file
    schema_file: PathBuf,
}

/// What the REPL does after processing one line.
enum Outcome {
    Continue,
    Exit,
    Fatal(DbError),
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == clap::error::ErrorKind::MissingRequiredArgument => {
            eprintln!("Must supply a database filename.");
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let defs = schema_file::read(&args.schema_file).context("failed to read schema file")?;
    let mut schema = Schema::open(Path::new(DATA_DIR), defs)?;

    let mut editor = DefaultEditor::new()?;
    loop {
        let readline = editor.readline("db > ");
        match readline {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                match run_line(&mut schema, &line) {
                    Outcome::Continue => {}
                    Outcome::Exit => break,
                    Outcome::Fatal(err) => {
                        eprintln!("{err}");
                        let _ = schema.close();
                        std::process::exit(1);
                    }
                }
            }
            // Ctrl-D / Ctrl-C take the same exit path as `.exit`.
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    schema.close()?;
    Ok(())
}

fn run_line(schema: &mut Schema, line: &str) -> Outcome {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Outcome::Continue;
    }
    if let Some(command) = trimmed.strip_prefix('.') {
        return run_meta_command(command, trimmed);
    }

    match parser::parse(schema, trimmed) {
        Ok(statement) => match executor::execute(schema, statement) {
            Ok(ExecOutcome::Success) => {
                println!("Executed.");
                Outcome::Continue
            }
            Ok(ExecOutcome::TableFull) => {
                println!("Error: Table full.");
                Outcome::Continue
            }
            Err(err) if err.fatal() => Outcome::Fatal(err),
            Err(err) => {
                println!("{err}");
                Outcome::Continue
            }
        },
        Err(err) => {
            println!("{err}");
            Outcome::Continue
        }
    }
}

fn run_meta_command(command: &str, full_line: &str) -> Outcome {
    match command {
        "exit" => Outcome::Exit,
        _ => {
            println!("Unrecognized command '{full_line}'");
            Outcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{ColumnSpec, TableDef};
    use tempfile::tempdir;
    use types::ColumnType;

    fn schema_with_users() -> (tempfile::TempDir, Schema) {
        let dir = tempdir().unwrap();
        let def = TableDef {
            name: "users".into(),
            columns: vec![ColumnSpec {
                name: "id".into(),
                ty: ColumnType::Integer,
                size: 4,
            }],
        };
        let schema = Schema::open(dir.path(), vec![def]).unwrap();
        (dir, schema)
    }

    #[test]
    fn exit_meta_command_requests_exit() {
        let (_dir, mut schema) = schema_with_users();
        assert!(matches!(run_line(&mut schema, ".exit"), Outcome::Exit));
    }

    #[test]
    fn unknown_meta_command_continues() {
        let (_dir, mut schema) = schema_with_users();
        assert!(matches!(
            run_line(&mut schema, ".bogus"),
            Outcome::Continue
        ));
    }

    #[test]
    fn blank_line_continues() {
        let (_dir, mut schema) = schema_with_users();
        assert!(matches!(run_line(&mut schema, "   "), Outcome::Continue));
    }

    #[test]
    fn unrecognized_verb_continues_after_printing() {
        let (_dir, mut schema) = schema_with_users();
        assert!(matches!(
            run_line(&mut schema, "foo bar"),
            Outcome::Continue
        ));
    }

    #[test]
    fn insert_and_select_both_continue() {
        let (_dir, mut schema) = schema_with_users();
        assert!(matches!(
            run_line(&mut schema, "insert into users values (1)"),
            Outcome::Continue
        ));
        assert!(matches!(
            run_line(&mut schema, "select * from users"),
            Outcome::Continue
        ));
    }
}
