mod common;
use common::scripted;
use std::io::Cursor;
use tickory::core::entry::{EntryValidator, capture_entry};
use tickory::errors::AppError;
use tickory::ui::prompt::{LinePrompter, Prompter};
use tickory::utils::date::parse_date;
use tickory::utils::formatting::{format_hours, hours_phrase};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_select_reprompts_until_valid() {
    let mut p = scripted(&["0", "abc", "9", "2"]);
    let idx = p.select("Pick one", &labels(&["a", "b", "c"])).unwrap();
    assert_eq!(idx, 1);
}

#[test]
fn test_select_with_no_choices_fails() {
    let mut p = scripted(&["1"]);
    assert!(matches!(p.select("Pick", &[]), Err(AppError::InvalidInput(_))));
}

#[test]
fn test_select_writes_numbered_choices() {
    let mut out = Vec::new();
    {
        let mut p = LinePrompter::new(Cursor::new(b"1\n".to_vec()), &mut out);
        p.select("What is the client?", &labels(&["Acme", "Beta"])).unwrap();
    }
    let shown = String::from_utf8(out).unwrap();
    assert!(shown.contains("? What is the client?"));
    assert!(shown.contains("  1) Acme"));
    assert!(shown.contains("  2) Beta"));
}

#[test]
fn test_input_falls_back_to_default() {
    let mut p = scripted(&["", "  typed  "]);
    assert_eq!(p.input("Hours?", Some("0.5")).unwrap(), "0.5");
    assert_eq!(p.input("Hours?", Some("0.5")).unwrap(), "typed");
}

#[test]
fn test_confirm_answers() {
    let mut p = scripted(&["y", "NO", "maybe", ""]);
    assert!(p.confirm("Sure?", false).unwrap());
    assert!(!p.confirm("Sure?", true).unwrap());
    assert!(p.confirm("Sure?", true).unwrap());
    assert!(!p.confirm("Sure?", false).unwrap());
}

#[test]
fn test_end_of_input_aborts() {
    let mut p = LinePrompter::new(Cursor::new(Vec::new()), Vec::new());
    assert!(matches!(p.input("Name?", None), Err(AppError::PromptAborted(_))));
}

#[test]
fn test_hours_validation() {
    assert_eq!(EntryValidator::parse_hours("1.5"), Ok(1.5));
    assert_eq!(EntryValidator::parse_hours(" 2 "), Ok(2.0));
    assert_eq!(EntryValidator::parse_hours("0"), Ok(0.0));
    assert_eq!(EntryValidator::parse_hours("abc"), Err("Please enter a number"));
    assert!(EntryValidator::parse_hours("-1").is_err());
    assert!(EntryValidator::parse_hours("NaN").is_err());
    assert!(EntryValidator::parse_hours("inf").is_err());
}

#[test]
fn test_notes_and_date_validation() {
    assert!(EntryValidator::parse_notes("   ").is_err());
    assert_eq!(EntryValidator::parse_notes("Standup").unwrap(), "Standup");
    assert!(EntryValidator::parse_date("2024-02-30").is_err());
    assert_eq!(
        EntryValidator::parse_date("2024-02-29").unwrap(),
        common::d("2024-02-29")
    );
}

#[test]
fn test_hours_formatting() {
    assert_eq!(format_hours(3.0), "3");
    assert_eq!(format_hours(2.5), "2.5");
    assert_eq!(format_hours(1.0 / 3.0), "0.33");
    assert_eq!(format_hours(0.0), "0");
    assert_eq!(hours_phrase(1.0), "1 hour");
    assert_eq!(hours_phrase(7.25), "7.25 hours");
}

/// Answers every select with the same index, whatever the choices.
struct FixedChoice(usize);

impl Prompter for FixedChoice {
    fn select(&mut self, _message: &str, _choices: &[String]) -> tickory::errors::AppResult<usize> {
        Ok(self.0)
    }

    fn input(&mut self, _message: &str, default: Option<&str>) -> tickory::errors::AppResult<String> {
        Ok(default.unwrap_or("x").to_string())
    }

    fn password(&mut self, _message: &str) -> tickory::errors::AppResult<String> {
        Ok(String::new())
    }

    fn confirm(&mut self, _message: &str, default: bool) -> tickory::errors::AppResult<bool> {
        Ok(default)
    }
}

#[test]
fn test_out_of_range_menu_choice_is_an_error() {
    let mut p = FixedChoice(99);
    let err = tickory::cli::commands::menu::ask(&mut p, false).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_out_of_range_catalog_choice_is_an_error() {
    let mut acme = common::client(1, "Acme");
    acme.projects = vec![common::project(10, "Website")];
    let catalog = tickory::models::catalog::Catalog::new(chrono::Utc::now(), vec![acme]);

    let mut p = FixedChoice(5);
    let err = capture_entry(&mut p, &catalog, common::d("2024-01-03"), false, 7).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_malformed_dates_are_invalid_date_errors() {
    assert!(matches!(parse_date("2024-13-01"), Err(AppError::InvalidDate(_))));
    assert!(matches!(parse_date("01/02/2024"), Err(AppError::InvalidDate(_))));
    assert_eq!(parse_date(" 2024-01-02 ").unwrap(), common::d("2024-01-02"));
}
