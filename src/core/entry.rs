use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::models::entry::NewEntry;
use crate::ui::prompt::Prompter;
use crate::utils::date::{parse_date, to_api_date};
use chrono::NaiveDate;

pub const DEFAULT_HOURS: &str = "0.5";

/// Guard clauses for interactively captured values.
pub struct EntryValidator;

impl EntryValidator {
    pub fn parse_hours(input: &str) -> Result<f64, &'static str> {
        match input.trim().parse::<f64>() {
            Ok(h) if h.is_finite() && h >= 0.0 => Ok(h),
            _ => Err("Please enter a number"),
        }
    }

    pub fn parse_notes(input: &str) -> Result<String, &'static str> {
        if input.trim().is_empty() {
            Err("Please enter a description of your work.")
        } else {
            Ok(input.to_string())
        }
    }

    pub fn parse_date(input: &str) -> Result<NaiveDate, &'static str> {
        parse_date(input).map_err(|e| {
            log::debug!("{}", e);
            "Please enter a date as YYYY-MM-DD"
        })
    }
}

/// Ask until `parse` accepts the answer.
fn ask_until<T, P, F>(prompter: &mut P, message: &str, default: Option<&str>, parse: F) -> AppResult<T>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> Result<T, &'static str>,
{
    loop {
        let answer = prompter.input(message, default)?;
        match parse(&answer) {
            Ok(v) => return Ok(v),
            Err(hint) => crate::ui::messages::warning(hint),
        }
    }
}

fn pick<P: Prompter + ?Sized>(
    prompter: &mut P,
    message: &str,
    mut options: Vec<(u64, String)>,
) -> AppResult<u64> {
    if options.is_empty() {
        return Err(AppError::InvalidInput(format!("{} (no choices available)", message)));
    }
    options.sort_by(|a, b| a.1.cmp(&b.1));
    let labels: Vec<String> = options.iter().map(|(_, n)| n.clone()).collect();
    let idx = prompter.select(message, &labels)?;
    options
        .get(idx)
        .map(|(id, _)| *id)
        .ok_or_else(|| AppError::InvalidInput(format!("{} (no choice #{})", message, idx + 1)))
}

/// Walk client → project → task, then date (only when `ask_date`), hours and notes.
pub fn capture_entry<P: Prompter + ?Sized>(
    prompter: &mut P,
    catalog: &Catalog,
    today: NaiveDate,
    ask_date: bool,
    user_id: u64,
) -> AppResult<NewEntry> {
    let client_id = pick(
        prompter,
        "What is the client?",
        catalog.clients.iter().map(|c| (c.id, c.name.clone())).collect(),
    )?;
    let client = catalog
        .client(client_id)
        .ok_or_else(|| AppError::InvalidInput(format!("unknown client {}", client_id)))?;

    let project_id = pick(
        prompter,
        "What is the project?",
        client.projects.iter().map(|p| (p.id, p.name.clone())).collect(),
    )?;
    let project = client
        .project(project_id)
        .ok_or_else(|| AppError::InvalidInput(format!("unknown project {}", project_id)))?;

    let task_id = pick(
        prompter,
        "What is the task?",
        project.tasks.iter().map(|t| (t.id, t.name.clone())).collect(),
    )?;

    let date = if ask_date {
        let default = to_api_date(&today);
        ask_until(
            prompter,
            "What date did you do this work? (YYYY-MM-DD)",
            Some(&default),
            EntryValidator::parse_date,
        )?
    } else {
        today
    };

    let hours = ask_until(
        prompter,
        "How long (in hours) did you spend on this task?",
        Some(DEFAULT_HOURS),
        EntryValidator::parse_hours,
    )?;

    let notes = ask_until(
        prompter,
        "Please describe the work that you were doing.",
        None,
        EntryValidator::parse_notes,
    )?;

    Ok(NewEntry {
        date,
        hours,
        notes,
        task_id,
        user_id,
    })
}
