use crate::cli::parser::Cli;
use crate::context::AppContext;
use crate::core::report::ReportAggregator;
use crate::core::week::WeekCalculator;
use crate::errors::AppResult;
use crate::export::export_report;
use crate::models::report_row::ReportRow;
use crate::ui::messages::{header, plain};
use crate::utils::date::to_friendly;
use crate::utils::formatting::hours_phrase;
use crate::utils::path::expand_tilde;

/// Rows of the weekly report for the week containing `ctx.today`.
pub fn build(ctx: &mut AppContext, include_weekend: bool) -> AppResult<Vec<ReportRow>> {
    let week = WeekCalculator::week_window(ctx.today, include_weekend);
    let user_id = ctx.user_id()?;

    let entries = ctx
        .service
        .list_entries_by_date_range(user_id, week.start_date, week.end_date)?;
    let catalog = ctx.cache.get_catalog(ctx.service.as_ref())?;

    Ok(ReportAggregator::build_weekly_report(&entries, catalog, &week))
}

/// Print the weekly table and, with `--export`, write it to a file.
pub fn handle(ctx: &mut AppContext, cli: &Cli) -> AppResult<bool> {
    let rows = build(ctx, !cli.no_weekend)?;

    header("Your Weekly Report");
    plain(ReportAggregator::render(&rows));

    if let Some(file) = &cli.export {
        log::debug!("exporting weekly report as {}", cli.format.as_str());
        export_report(&rows, cli.format, &expand_tilde(file))?;
    }

    Ok(true)
}

/// Greeting line with the hours logged Monday to Sunday of the current week.
pub fn print_weekly_hours(ctx: &AppContext) -> AppResult<()> {
    let week = WeekCalculator::week_window(ctx.today, true);
    let user_id = ctx.user_id()?;
    let entries = ctx
        .service
        .list_entries_by_date_range(user_id, week.start_date, week.end_date)?;
    let total = ReportAggregator::weekly_total(&entries, &week);

    plain(format!(
        "You have entered {} total the week of {} to {}.\n",
        hours_phrase(total),
        to_friendly(&week.start_date),
        to_friendly(&week.end_date)
    ));
    Ok(())
}
