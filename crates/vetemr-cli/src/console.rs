//! The interactive console session.
//!
//! One loop: prompt, parse, dispatch. Network work happens through the view
//! models so the console renders exactly the states the views settle on.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};

use vetemr_cli::commands::{self, Command};
use vetemr_cli::config::Settings;
use vetemr_cli::logging::redact_value;
use vetemr_cli::render;
use vetemr_client::{Credentials, HttpGateway, SessionStore};
use vetemr_model::{AdmissionForm, Gender, RecordForm};
use vetemr_views::{RosterState, RosterView, TimelineState, TimelineView};

/// Environment variable consulted before prompting for a password.
const PASSWORD_ENV: &str = "VETEMR_PASSWORD";

type InputLines = Lines<BufReader<Stdin>>;

/// A console session against one records server.
pub struct Console {
    gateway: HttpGateway,
    session: SessionStore,
    settings: Settings,
}

impl Console {
    /// Build the session store and gateway for the configured server.
    pub fn new(settings: Settings) -> Result<Self> {
        let session = SessionStore::new();
        let gateway = HttpGateway::new(&settings.server_url, session.clone())
            .context("failed to build the records client")?;
        Ok(Self {
            gateway,
            session,
            settings,
        })
    }

    /// Run the console until `quit` or end of input.
    pub async fn run(&self, email_flag: Option<String>) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        // The loop reads the session through this receiver, so an expiry
        // deep inside a command shows up at the very next prompt.
        let mut session_watch = self.session.subscribe();
        println!("VetEMR console");
        println!("Server: {}", self.settings.server_url);
        println!("Type 'help' for the command list.");
        if email_flag.is_some() {
            self.sign_in(&mut lines, email_flag).await?;
        }
        loop {
            let identity = session_watch
                .borrow_and_update()
                .as_ref()
                .map(|session| session.identity.clone());
            print!("{}", prompt(identity.as_ref().map(|i| i.name.as_str())));
            io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            let command = match commands::parse(&line) {
                Ok(command) => command,
                Err(error) => {
                    println!("{error}");
                    continue;
                }
            };
            match command {
                Command::Quit => break,
                Command::Help => println!("{}", commands::HELP),
                Command::Login { email } => self.sign_in(&mut lines, email).await?,
                Command::Logout => self.sign_out(),
                Command::Whoami => self.whoami(),
                Command::Roster => self.show_roster().await,
                Command::Open { id } => self.show_timeline(&id).await,
                Command::Admit => self.admit(&mut lines).await?,
                Command::Record { id } => self.file_record(&mut lines, &id).await?,
            }
        }
        Ok(())
    }

    async fn sign_in(&self, lines: &mut InputLines, email_arg: Option<String>) -> Result<()> {
        let Some(email) = self.resolve_email(lines, email_arg).await? else {
            println!("Sign-in cancelled.");
            return Ok(());
        };
        let Some(password) = resolve_password(lines).await? else {
            println!("Sign-in cancelled.");
            return Ok(());
        };
        let credentials = Credentials { email, password };
        let spinner = spinner("Signing in...");
        let outcome = self.session.login(&self.gateway, &credentials).await;
        spinner.finish_and_clear();
        match outcome {
            Ok(identity) => println!("Signed in as {} ({}).", identity.name, identity.role),
            Err(error) => println!("{}", error.user_message()),
        }
        Ok(())
    }

    /// Email precedence: the command argument, then whatever the operator
    /// types, then the configured default on a blank answer.
    async fn resolve_email(
        &self,
        lines: &mut InputLines,
        email_arg: Option<String>,
    ) -> Result<Option<String>> {
        if let Some(email) = email_arg {
            return Ok(Some(email));
        }
        let label = match &self.settings.email {
            Some(suggested) => format!("Email [{suggested}]: "),
            None => "Email: ".to_string(),
        };
        let Some(typed) = prompt_line(lines, &label).await? else {
            return Ok(None);
        };
        let typed = typed.trim();
        if typed.is_empty() {
            return Ok(self.settings.email.clone());
        }
        Ok(Some(typed.to_string()))
    }

    fn sign_out(&self) {
        self.session.logout();
        println!("Signed out.");
    }

    fn whoami(&self) {
        match self.session.current_identity() {
            Some(identity) => println!("{} ({})", identity.name, identity.role),
            None => println!("Not signed in."),
        }
    }

    async fn show_roster(&self) {
        if !self.require_session() {
            return;
        }
        let mut roster = RosterView::new(&self.gateway, self.session.clone());
        let spinner = spinner("Fetching roster...");
        roster.load().await;
        spinner.finish_and_clear();
        render_roster(roster.state());
    }

    async fn show_timeline(&self, id: &str) {
        if !self.require_session() {
            return;
        }
        let mut timeline = TimelineView::new(&self.gateway, self.session.clone(), id);
        let spinner = spinner("Fetching patient history...");
        timeline.load().await;
        spinner.finish_and_clear();
        render_timeline(timeline.state());
    }

    async fn admit(&self, lines: &mut InputLines) -> Result<()> {
        if !self.require_session() {
            return Ok(());
        }
        let mut roster = RosterView::new(&self.gateway, self.session.clone());
        if !roster.can_admit() {
            println!("Owners have read-only access.");
            return Ok(());
        }
        let Some(form) = read_admission(lines).await? else {
            println!("Admission cancelled.");
            return Ok(());
        };
        debug!(name = redact_value(&form.name), "submitting admission");
        let spinner = spinner("Admitting patient...");
        let outcome = roster.admit(&form).await;
        spinner.finish_and_clear();
        match outcome {
            Ok(patient) => {
                info!(patient = %patient.id, "patient admitted");
                println!("Admitted {} (id {}).", patient.name, patient.id);
                render_roster(roster.state());
            }
            Err(error) => println!("{}", error.user_message()),
        }
        Ok(())
    }

    async fn file_record(&self, lines: &mut InputLines, id: &str) -> Result<()> {
        if !self.require_session() {
            return Ok(());
        }
        let mut timeline = TimelineView::new(&self.gateway, self.session.clone(), id);
        if !timeline.can_add_record() {
            println!("Owners have read-only access.");
            return Ok(());
        }
        // The form never appears for an id that does not resolve.
        let spinner = spinner("Fetching patient history...");
        timeline.load().await;
        spinner.finish_and_clear();
        if !matches!(timeline.state(), TimelineState::Loaded { .. }) {
            render_timeline(timeline.state());
            return Ok(());
        }
        let Some(form) = read_record_form(lines).await? else {
            println!("Record cancelled.");
            return Ok(());
        };
        debug!(diagnosis = redact_value(&form.diagnosis), "submitting record");
        let spinner = self::spinner("Filing record...");
        let outcome = timeline.add_record(&form).await;
        spinner.finish_and_clear();
        match outcome {
            Ok(record) => {
                info!(record = %record.id, patient = %record.animal_id, "record filed");
                println!("Filed record {}.", record.id);
                render_timeline(timeline.state());
            }
            Err(error) => println!("{}", error.user_message()),
        }
        Ok(())
    }

    fn require_session(&self) -> bool {
        if self.session.is_signed_in() {
            return true;
        }
        println!("Sign in first.");
        false
    }
}

/// The prompt reflects the signed-in operator.
fn prompt(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("vetemr({name})> "),
        None => "vetemr> ".to_string(),
    }
}

/// Guided admission form. `None` means the operator hit end of input.
///
/// Only the gender is validated here, because the form field is typed;
/// everything else is checked by the draft builder before submission.
async fn read_admission(lines: &mut InputLines) -> Result<Option<AdmissionForm>> {
    println!("New patient (blank keeps the suggested value):");
    let Some(name) = prompt_line(lines, "  Name: ").await? else {
        return Ok(None);
    };
    let Some(species) = prompt_line(lines, "  Species [dog] (dog/cat/bird/reptile/other): ").await?
    else {
        return Ok(None);
    };
    let Some(breed) = prompt_line(lines, "  Breed (optional): ").await? else {
        return Ok(None);
    };
    let Some(age) = prompt_line(lines, "  Age in years (optional): ").await? else {
        return Ok(None);
    };
    let Some(weight) = prompt_line(lines, "  Weight in kg (optional): ").await? else {
        return Ok(None);
    };
    let gender = loop {
        let Some(answer) = prompt_line(lines, "  Gender [unknown] (male/female/unknown): ").await?
        else {
            return Ok(None);
        };
        match answer.parse::<Gender>() {
            Ok(gender) => break gender,
            Err(message) => println!("  {message}"),
        }
    };
    Ok(Some(AdmissionForm {
        name,
        species: default_if_blank(species, "dog"),
        breed,
        age,
        weight,
        gender,
    }))
}

/// Guided record form. `None` means the operator hit end of input.
async fn read_record_form(lines: &mut InputLines) -> Result<Option<RecordForm>> {
    println!("New medical record:");
    let Some(diagnosis) = prompt_line(lines, "  Diagnosis: ").await? else {
        return Ok(None);
    };
    let Some(treatment) = prompt_line(lines, "  Treatment: ").await? else {
        return Ok(None);
    };
    let Some(notes) = prompt_line(lines, "  Notes (optional): ").await? else {
        return Ok(None);
    };
    let Some(prescription) =
        prompt_line(lines, "  Prescriptions (comma-separated, optional): ").await?
    else {
        return Ok(None);
    };
    Ok(Some(RecordForm {
        diagnosis,
        treatment,
        notes,
        prescription,
    }))
}

fn render_roster(state: &RosterState) {
    match state {
        RosterState::Loading => {}
        RosterState::Loaded(patients) => render::print_roster(patients),
        RosterState::Empty => println!("{}", render::NO_PATIENTS),
        RosterState::Errored(message) => eprintln!("error: {message}"),
    }
}

fn render_timeline(state: &TimelineState) {
    match state {
        TimelineState::Loading => {}
        TimelineState::Loaded { patient, records } => render::print_timeline(patient, records),
        TimelineState::NotFound => println!("That patient could not be found."),
        TimelineState::Errored(message) => eprintln!("error: {message}"),
    }
}

/// Print a prompt and read one line. `None` means end of input.
async fn prompt_line(lines: &mut InputLines, label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

/// Password from `VETEMR_PASSWORD` when set (scripted use), else a prompt.
/// Console input echoes; the environment variable is the no-echo path.
async fn resolve_password(lines: &mut InputLines) -> Result<Option<String>> {
    if let Ok(password) = std::env::var(PASSWORD_ENV)
        && !password.is_empty()
    {
        return Ok(Some(password));
    }
    let Some(typed) = prompt_line(lines, "Password: ").await? else {
        return Ok(None);
    };
    if typed.is_empty() {
        return Ok(None);
    }
    Ok(Some(typed))
}

fn default_if_blank(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_reflects_the_session() {
        assert_eq!(prompt(None), "vetemr> ");
        assert_eq!(prompt(Some("Dana Reyes")), "vetemr(Dana Reyes)> ");
    }

    #[test]
    fn blank_answers_fall_back_to_the_suggested_value() {
        assert_eq!(default_if_blank("  ".to_string(), "dog"), "dog");
        assert_eq!(default_if_blank("cat".to_string(), "dog"), "cat");
    }
}
