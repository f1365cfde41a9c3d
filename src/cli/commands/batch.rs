use crate::config::recurring;
use crate::context::AppContext;
use crate::core::batch::BatchLogic;
use crate::core::week::WeekCalculator;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};
use crate::ui::prompt::Prompter;

const BATCH_EXPLANATION: &str = "\nThis experimental batch feature enables automated entry of reoccuring\nfixed-time tasks (such as daily scrums) that you perform each day of the week.\nTo do so, Tickory will enter each of the entries found in your config.json\nas separate entries for each day of the current work week (Monday through\nFriday). Would you like to continue?";

/// Replay the recurring entries on Monday–Friday of the current week.
///
/// A missing `--config` file or a failed submission is reported and ends the
/// batch; an invalid config file is returned as an error.
pub fn handle<P: Prompter + ?Sized>(
    ctx: &mut AppContext,
    prompter: &mut P,
    config_path: Option<&str>,
) -> AppResult<bool> {
    if !prompter.confirm(BATCH_EXPLANATION, false)? {
        return Ok(true);
    }

    let config = match recurring::load(config_path) {
        Ok(c) => c,
        Err(AppError::ConfigNotFound(msg)) => {
            error(format!("The specified config file was not found: {}", msg));
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    let week = WeekCalculator::week_window(ctx.today, false);
    let user_id = ctx.user_id()?;

    match BatchLogic::submit_recurring(
        ctx.service.as_ref(),
        user_id,
        &config.reoccuring_entries,
        &week.ordered_dates,
    ) {
        Ok(n) => {
            log::debug!("{} batch entries submitted", n);
            success("Power up! You have successfully entered batch entries for your work week.");
            Ok(true)
        }
        Err(e) => {
            log::debug!("{}", e);
            error(
                "There was a problem adding batch entries. Please check on Tickspot to determine which entries were entered.",
            );
            Ok(false)
        }
    }
}
