//! Tickory library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod credentials;
pub mod errors;
pub mod export;
pub mod models;
pub mod remote;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use cli::commands::menu::{self, MenuChoice};
use cli::parser::Cli;
use config::Config;
use context::AppContext;
use credentials::{CredentialStore, Credentials};
use errors::{AppError, AppResult};
use remote::{TickspotClient, TimeService};
use ui::messages::{error, plain, warning};
use ui::prompt::{Prompter, StdinPrompter};

const WELCOME_BACK: &str = "\n🕗 Welcome to Tickory, an unofficial CLI for Tick time tracking.\n";

/// Central menu dispatcher. Returns whether the chosen operation succeeded.
pub fn dispatch<P: Prompter + ?Sized>(
    choice: MenuChoice,
    cli: &Cli,
    ctx: &mut AppContext,
    prompter: &mut P,
) -> AppResult<bool> {
    match choice {
        MenuChoice::Today => cli::commands::entry::handle(ctx, prompter, false),
        MenuChoice::AdHoc => cli::commands::entry::handle(ctx, prompter, true),
        MenuChoice::Report => cli::commands::report::handle(ctx, cli),
        MenuChoice::Recurring => cli::commands::batch::handle(ctx, prompter, cli.config.as_deref()),
    }
}

/// One interactive session with injected prompter, remote connector and "today".
pub fn run_with<P, F>(cli: &Cli, cfg: Config, prompter: &mut P, connect: F, today: NaiveDate) -> AppResult<bool>
where
    P: Prompter + ?Sized,
    F: Fn(&Credentials) -> AppResult<Box<dyn TimeService>>,
{
    //
    // 1. Optional cleanup
    //
    if let Some(scope) = cli.clean {
        cli::commands::clean::handle(scope, &cfg)?;
    }

    //
    // 2. Credentials (cached, or first-run setup)
    //
    let store = CredentialStore::new(cfg.credentials_path());
    let outcome = match crate::core::setup::run_setup(&store, prompter, &connect) {
        Ok(o) => o,
        Err(AppError::Authentication) => {
            error("Unable to validate your Tickspot credentials. Please try again.");
            return Ok(false);
        }
        Err(AppError::NoUsers) => {
            error("No Tickspot users are available for this subscription.");
            return Ok(false);
        }
        Err(e) => return Err(e),
    };
    if outcome.from_cache {
        plain(WELCOME_BACK);
    }

    let service = connect(&outcome.credentials)?;
    let mut ctx = AppContext::new(cfg, outcome.credentials, service, today);

    //
    // 3. Weekly hours greeting (non-blocking)
    //
    if let Err(e) = cli::commands::report::print_weekly_hours(&ctx) {
        warning(format!("Unable to load this week's hours: {}", e));
    }

    //
    // 4. Main menu
    //
    let choice = menu::ask(prompter, cli.experimental_mode)?;
    dispatch(choice, cli, &mut ctx, prompter)
}

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging();

    // 2️⃣ load settings once
    let data_dir = cli.data_dir.as_deref().map(utils::path::expand_tilde);
    let cfg = Config::load(data_dir.as_deref())?;

    // 3️⃣ bind the remote connector to the configured endpoint
    let base_url = cfg.api_base_url.clone();
    let contact = cfg.user_agent_email.clone();
    let connect = move |creds: &Credentials| -> AppResult<Box<dyn TimeService>> {
        Ok(Box::new(TickspotClient::new(&base_url, creds, contact.as_deref())?))
    };

    let mut prompter = StdinPrompter::stdio();
    run_with(&cli, cfg, &mut prompter, connect, utils::date::today())?;
    Ok(())
}
