// Headless driver - line commands on stdin
//
// Every command acts through the board the same way the TUI does: `add`
// fills and submits the form, `move` runs a full drag sequence. Output is
// plain text on the given writer so the board can be scripted.

use crate::board::Board;
use crate::model::ProjectStatus;
use anyhow::{anyhow, bail, Context, Result};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  add <title> | <description> | <people>   submit the form
  move <id> <active|finished>              drag a project to a list
  list                                     show both lists
  dump                                     print all projects as JSON
  help                                     show this help
  quit                                     exit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        title: String,
        description: String,
        people: String,
    },
    Move {
        id: String,
        to: ProjectStatus,
    },
    List,
    Dump,
    Help,
    Quit,
}

impl Command {
    /// Parse one line; `Ok(None)` for blank lines
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_lowercase().as_str() {
            "add" => {
                // Fields are kept as typed; the form decides what is valid
                let mut fields = rest.splitn(3, '|').map(str::trim);
                let (Some(title), Some(description), Some(people)) =
                    (fields.next(), fields.next(), fields.next())
                else {
                    bail!("usage: add <title> | <description> | <people>");
                };
                Command::Add {
                    title: title.to_string(),
                    description: description.to_string(),
                    people: people.to_string(),
                }
            }
            "move" => {
                let mut args = rest.split_whitespace();
                let (Some(id), Some(to), None) = (args.next(), args.next(), args.next()) else {
                    bail!("usage: move <id> <active|finished>");
                };
                Command::Move {
                    id: id.to_string(),
                    to: to.parse()?,
                }
            }
            "list" => Command::List,
            "dump" => Command::Dump,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(anyhow!("unknown command '{}' (try 'help')", other)),
        };
        Ok(Some(command))
    }
}

/// Execute a command, writing its output. Returns false on quit.
pub fn execute(board: &Board, command: Command, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Add {
            title,
            description,
            people,
        } => {
            let before = board.store().len();
            board.fill_form(&title, &description, &people)?;
            board.submit_form()?;
            report_alerts(board, out)?;

            if board.store().len() > before {
                let projects = board.store().dump_projects();
                if let Some(project) = projects.last() {
                    writeln!(out, "added {} {}", project.id, project.title)?;
                }
            }
        }
        Command::Move { id, to } => {
            if board.drag_project(&id, to) {
                writeln!(out, "moved {} to {}", id, to)?;
            } else {
                writeln!(out, "no project card with id {}", id)?;
            }
        }
        Command::List => {
            for status in ProjectStatus::all() {
                writeln!(out, "{}", board.heading(*status))?;
                for card in board.cards(*status) {
                    writeln!(
                        out,
                        "  {}  {}  ({})  {}",
                        card.id, card.title, card.persons, card.description
                    )?;
                }
            }
        }
        Command::Dump => {
            let json = serde_json::to_string_pretty(&*board.store().dump_projects())
                .context("Failed to serialize projects")?;
            writeln!(out, "{}", json)?;
        }
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn report_alerts(board: &Board, out: &mut impl Write) -> Result<()> {
    while let Some(alert) = board.take_alert() {
        writeln!(out, "alert: {}", alert)?;
    }
    Ok(())
}

/// Read commands until EOF or `quit`
pub fn run(board: &Board, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    tracing::info!("Headless mode: reading commands from stdin");

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        match Command::parse(&line) {
            Ok(Some(command)) => {
                tracing::debug!("Command: {:?}", command);
                if !execute(board, command, out)? {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        out.flush()?;
    }

    tracing::info!("Headless session ended");
    Ok(())
}
