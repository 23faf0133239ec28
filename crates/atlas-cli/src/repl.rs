//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Each line is one lookup submission: the raw text goes straight into the
//! pipeline, which validates it before any network activity.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use atlas_domain::CountrySource;
use atlas_lookup::LookupSession;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl<S: CountrySource>(
    session: &LookupSession<S>,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Atlas REPL - Type a country name, 'help' for commands, 'exit' to quit")
    );
    println!();

    // Initialize readline editor
    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("atlas> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match line {
                    "exit" | "quit" => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    "help" => {
                        print_help(formatter);
                    }
                    raw => {
                        // The pipeline owns validation; even obviously bad
                        // input goes through it
                        if let Some(outcome) = session.lookup(raw).await {
                            match formatter.format_outcome(&outcome) {
                                Ok(text) => println!("{}", text),
                                Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                            }
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Commands:"));
    println!("  <country name>   Look up a country and its bordering countries");
    println!("  help             Show this help");
    println!("  exit             Quit the REPL");
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let dir = home.join(".atlas");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history"))
}
