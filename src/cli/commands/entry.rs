use crate::context::AppContext;
use crate::core::entry::capture_entry;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};
use crate::ui::prompt::Prompter;
use crate::utils::format_hours;

/// Capture and submit entries until the user stops or a submission fails.
///
/// `ask_date == false` records the entry for today.
pub fn handle<P: Prompter + ?Sized>(ctx: &mut AppContext, prompter: &mut P, ask_date: bool) -> AppResult<bool> {
    let user_id = ctx.user_id()?;

    loop {
        let catalog = ctx.cache.get_catalog(ctx.service.as_ref())?;
        let entry = capture_entry(prompter, catalog, ctx.today, ask_date, user_id)?;

        if let Err(e) = ctx.service.create_entry(&entry) {
            log::debug!("create entry failed: {}", e);
            error(
                "There was a problem adding your entry into Tickspot. Make sure you have been assigned to the project for which you are trying to enter time.",
            );
            return Ok(false);
        }

        success(format!(
            "Power up! You have successfully recorded {} new hours.",
            format_hours(entry.hours)
        ));

        if !prompter.confirm("Would you like to add another entry?", false)? {
            return Ok(true);
        }
    }
}
