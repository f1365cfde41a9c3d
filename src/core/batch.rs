use crate::errors::{AppError, AppResult};
use crate::models::entry::NewEntry;
use crate::models::recurring::RecurringEntry;
use crate::remote::TimeService;
use chrono::NaiveDate;

pub struct BatchLogic;

impl BatchLogic {
    /// Submit every entry for every date, date-major, one call at a time.
    ///
    /// Stops at the first failure. Entries already submitted stay on the
    /// remote side; the error reports how many went through.
    pub fn submit_recurring(
        service: &dyn TimeService,
        user_id: u64,
        entries: &[RecurringEntry],
        dates: &[NaiveDate],
    ) -> AppResult<usize> {
        let mut submitted = 0;

        for date in dates {
            for entry in entries {
                let new_entry = NewEntry {
                    date: *date,
                    hours: entry.hours,
                    notes: entry.notes.clone(),
                    task_id: entry.task_id,
                    user_id,
                };

                if let Err(e) = service.create_entry(&new_entry) {
                    log::warn!("batch entry for task {} on {} failed: {}", entry.task_id, date, e);
                    return Err(AppError::BatchAborted {
                        submitted,
                        reason: e.to_string(),
                    });
                }
                submitted += 1;
            }
        }

        Ok(submitted)
    }
}
