use crate::errors::{AppError, AppResult};
use crate::ui::prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Today,
    AdHoc,
    Report,
    Recurring,
}

impl MenuChoice {
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Today => "Add time for today",
            MenuChoice::AdHoc => "Add time for any day",
            MenuChoice::Report => "View weekly time report",
            MenuChoice::Recurring => "Perform batch entry of reoccuring tasks for current week",
        }
    }
}

pub fn choices(experimental: bool) -> Vec<MenuChoice> {
    let mut out = vec![MenuChoice::Today, MenuChoice::AdHoc, MenuChoice::Report];
    if experimental {
        out.push(MenuChoice::Recurring);
    }
    out
}

/// Top-level "What would you like to do?" menu.
pub fn ask<P: Prompter + ?Sized>(prompter: &mut P, experimental: bool) -> AppResult<MenuChoice> {
    let options = choices(experimental);
    let labels: Vec<String> = options.iter().map(|c| c.label().to_string()).collect();
    let idx = prompter.select("What would you like to do?", &labels)?;
    options
        .get(idx)
        .copied()
        .ok_or_else(|| AppError::InvalidInput(format!("no menu option #{}", idx + 1)))
}
