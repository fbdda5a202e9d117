//! Interactive report loop.

use crate::cli::{Command, FrequencyArgs, TimestampArgs};
use crate::commands;
use crate::config::{Config, DataPaths};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use sweeplog_engine::ReportManager;
use tracing::debug;

const REPORT_PROMPT: &str = "Report (F,C,V,Q): ";
const ROOM_COUNT_PROMPT: &str = "Number of rooms: ";
const BAG_PROMPT: &str =
    "Enter the date the vacuum bag was last replaced (MM/DD/YYYY HH:MM:SS): ";

/// Run the interactive report loop.
///
/// Input files missing from both the command line and the configuration are
/// asked for before the first report.
pub fn run_repl(
    config: &Config,
    rooms: Option<PathBuf>,
    log: Option<PathBuf>,
    formatter: &Formatter,
) -> Result<()> {
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let Some(paths) = prompt_for_data(&mut editor, config, rooms, log)? else {
        return Ok(());
    };
    let reports = commands::load_reports(config, &paths)?;

    println!("{}", formatter.info("Type 'help' for commands, 'q' to quit"));

    loop {
        match editor.readline(REPORT_PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                let outcome = parse_repl_command(line)
                    .and_then(|command| run_command(command, &mut editor, &reports, formatter));
                match outcome {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.warning("Use 'q' to quit"));
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

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Fill in whichever input file is still unknown by asking for it.
///
/// Returns `None` when input ends before both files are known.
fn prompt_for_data(
    editor: &mut DefaultEditor,
    config: &Config,
    rooms: Option<PathBuf>,
    log: Option<PathBuf>,
) -> Result<Option<DataPaths>> {
    let rooms = match rooms.or_else(|| config.data.rooms_file.clone()) {
        Some(rooms) => rooms,
        None => match read_value(editor, "Room information: ")? {
            Some(value) => PathBuf::from(value),
            None => return Ok(None),
        },
    };
    let log = match log.or_else(|| config.data.log_file.clone()) {
        Some(log) => log,
        None => match read_value(editor, "Cleaning events: ")? {
            Some(value) => PathBuf::from(value),
            None => return Ok(None),
        },
    };

    debug!("REPL using {} and {}", rooms.display(), log.display());
    Ok(Some(DataPaths { rooms, log }))
}

/// Read one trimmed line, or `None` on end of input or interrupt.
fn read_value(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
        Err(err) => Err(CliError::Io(std::io::Error::other(err.to_string()))),
    }
}

/// Run one parsed command. Returns `false` when the loop should stop.
fn run_command(
    command: ReplCommand,
    editor: &mut DefaultEditor,
    reports: &ReportManager,
    formatter: &Formatter,
) -> Result<bool> {
    let command = match command {
        ReplCommand::Exit => return Ok(false),
        ReplCommand::Help => {
            print_help(formatter);
            return Ok(true);
        }
        ReplCommand::Command(command) => command,
        ReplCommand::PromptFrequency => match read_value(editor, ROOM_COUNT_PROMPT)? {
            Some(value) => frequency_command(&value)?,
            None => return Ok(true),
        },
        ReplCommand::PromptBag => match read_value(editor, BAG_PROMPT)? {
            Some(timestamp) => Command::Bag(TimestampArgs { timestamp }),
            None => return Ok(true),
        },
    };

    commands::execute(command, reports, formatter)?;
    Ok(true)
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
    PromptFrequency,
    PromptBag,
}

/// Parse a REPL command line. Command words are case-insensitive.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let line = line.trim();
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some(first) = parts.first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };
    let rest = &parts[1..];
    // Timestamps are echoed in reports, so keep their spacing as typed
    let remainder = line[first.len()..].trim();

    match first.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "f" | "frequency" => match rest.first() {
            Some(count) => Ok(ReplCommand::Command(frequency_command(count)?)),
            None => Ok(ReplCommand::PromptFrequency),
        },
        "c" | "rooms" => Ok(ReplCommand::Command(Command::Rooms)),
        "v" | "bag" => {
            if rest.is_empty() {
                Ok(ReplCommand::PromptBag)
            } else {
                Ok(ReplCommand::Command(Command::Bag(TimestampArgs {
                    timestamp: remainder.to_string(),
                })))
            }
        }
        "coverage" => {
            if rest.is_empty() {
                Err(CliError::InvalidInput(
                    "Usage: coverage MM/DD/YYYY HH:MM:SS".to_string(),
                ))
            } else {
                Ok(ReplCommand::Command(Command::Coverage(TimestampArgs {
                    timestamp: remainder.to_string(),
                })))
            }
        }
        "inventory" => Ok(ReplCommand::Command(Command::Inventory)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            first
        ))),
    }
}

fn frequency_command(value: &str) -> Result<Command> {
    let count = value
        .trim()
        .parse::<i64>()
        .map_err(|_| CliError::InvalidInput(format!("'{}' is not a whole number", value.trim())))?;
    Ok(Command::Frequency(FrequencyArgs { count }))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let sweeplog_dir = home.join(".sweeplog");
    std::fs::create_dir_all(&sweeplog_dir)?;
    Ok(sweeplog_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  F, frequency [n]          - Rooms ranked by number of cleanings");
    println!("  C, rooms                  - Every room's cleanings, newest first");
    println!("  V, bag [timestamp]        - Square feet left before the bag is due");
    println!("  coverage <timestamp>      - Square feet cleaned since a timestamp");
    println!("  inventory                 - Rooms with sizes and cleaning counts");
    println!("  help, ?                   - Show this help");
    println!("  Q, quit, exit             - Leave");
    println!();
    println!("  Timestamps are MM/DD/YYYY HH:MM:SS");
    println!();
}
