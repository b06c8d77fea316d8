//! Console command parsing.
//!
//! One line of operator input maps to one [`Command`]. The command word is
//! case-insensitive; arguments keep their case because patient ids and
//! emails are case-sensitive on the server side.

use anyhow::{Result, bail};

/// Operator-facing command list, printed by `help`.
pub const HELP: &str = "\
Commands:
  login [EMAIL]        sign in (password prompted, or VETEMR_PASSWORD)
  logout               sign out
  whoami               show the signed-in identity
  roster               list the clinic's patients
  open <PATIENT_ID>    show a patient's profile and medical history
  admit                admit a new patient (guided form)
  record <PATIENT_ID>  file a medical record (guided form)
  help                 show this list
  quit                 leave the console";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in, optionally with an email given on the line.
    Login { email: Option<String> },
    /// Sign out and clear the session.
    Logout,
    /// Show the signed-in identity.
    Whoami,
    /// Fetch and render the patient roster.
    Roster,
    /// Open one patient's profile and record history.
    Open { id: String },
    /// Guided admission form for a new patient.
    Admit,
    /// Guided record form for an existing patient.
    Record { id: String },
    /// Show the command list.
    Help,
    /// Leave the console.
    Quit,
}

/// Parse one non-blank line of console input.
pub fn parse(line: &str) -> Result<Command> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        bail!("type 'help' for the command list");
    };
    let args: Vec<&str> = words.collect();
    match head.to_ascii_lowercase().as_str() {
        "login" => match args.as_slice() {
            [] => Ok(Command::Login { email: None }),
            [email] => Ok(Command::Login {
                email: Some((*email).to_string()),
            }),
            _ => bail!("usage: login [EMAIL]"),
        },
        "logout" => no_args(Command::Logout, "logout", &args),
        "whoami" => no_args(Command::Whoami, "whoami", &args),
        "roster" => no_args(Command::Roster, "roster", &args),
        "open" => match args.as_slice() {
            [id] => Ok(Command::Open {
                id: (*id).to_string(),
            }),
            _ => bail!("usage: open <PATIENT_ID>"),
        },
        "admit" => no_args(Command::Admit, "admit", &args),
        "record" => match args.as_slice() {
            [id] => Ok(Command::Record {
                id: (*id).to_string(),
            }),
            _ => bail!("usage: record <PATIENT_ID>"),
        },
        "help" | "?" => no_args(Command::Help, "help", &args),
        "quit" | "exit" => no_args(Command::Quit, "quit", &args),
        other => bail!("unknown command '{other}' (type 'help' for the command list)"),
    }
}

fn no_args(command: Command, name: &str, args: &[&str]) -> Result<Command> {
    if args.is_empty() {
        Ok(command)
    } else {
        bail!("'{name}' takes no arguments")
    }
}
