//! Integration tests for console command parsing.

use vetemr_cli::commands::{Command, HELP, parse};

#[test]
fn command_words_are_case_insensitive() {
    assert_eq!(parse("ROSTER").unwrap(), Command::Roster);
    assert_eq!(parse("Login").unwrap(), Command::Login { email: None });
}

#[test]
fn login_takes_an_optional_email() {
    assert_eq!(parse("login").unwrap(), Command::Login { email: None });
    assert_eq!(
        parse("login vet@clinic.example").unwrap(),
        Command::Login {
            email: Some("vet@clinic.example".to_string())
        }
    );
    assert!(parse("login a@b c@d").is_err());
}

#[test]
fn arguments_keep_their_case() {
    assert_eq!(
        parse("open A-102").unwrap(),
        Command::Open {
            id: "A-102".to_string()
        }
    );
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(
        parse("  open   a1  ").unwrap(),
        Command::Open {
            id: "a1".to_string()
        }
    );
}

#[test]
fn open_and_record_require_exactly_one_id() {
    assert!(parse("open").unwrap_err().to_string().contains("usage: open"));
    assert!(parse("open a1 a2").is_err());
    assert!(
        parse("record")
            .unwrap_err()
            .to_string()
            .contains("usage: record")
    );
}

#[test]
fn bare_commands_reject_stray_arguments() {
    assert!(parse("quit now").is_err());
    assert!(parse("roster all").is_err());
}

#[test]
fn unknown_commands_point_at_help() {
    let error = parse("rooster").unwrap_err();
    assert!(error.to_string().contains("help"));
}

#[test]
fn aliases_resolve() {
    assert_eq!(parse("exit").unwrap(), Command::Quit);
    assert_eq!(parse("?").unwrap(), Command::Help);
}

#[test]
fn a_blank_line_is_not_a_command() {
    assert!(parse("   ").is_err());
}

#[test]
fn help_lists_every_command_word() {
    for word in [
        "login", "logout", "whoami", "roster", "open", "admit", "record", "help", "quit",
    ] {
        assert!(HELP.contains(word), "help text is missing '{word}'");
    }
}
