//! Monday-anchored week computation.
//!
//! chrono numbers weekdays from Sunday = 0 (`num_days_from_sunday`), while a
//! Tickspot week runs Monday → Sunday. Sunday therefore sits at position 6 of
//! the week it closes, never at position 0 of the week it would open.

use crate::models::week_window::{DayLabel, WeekWindow};
use chrono::{Datelike, Duration, NaiveDate};

pub struct WeekCalculator;

impl WeekCalculator {
    /// Monday-first position of `date`: Mon = 0 … Sat = 5, Sun = 6.
    pub fn week_position(date: NaiveDate) -> usize {
        match date.weekday().num_days_from_sunday() {
            0 => 6,
            n => (n - 1) as usize,
        }
    }

    pub fn day_label_for_date(date: NaiveDate) -> DayLabel {
        // week_position is always within 0..7
        DayLabel::from_position(Self::week_position(date)).unwrap_or(DayLabel::Mon)
    }

    /// Monday of the week containing `reference`.
    ///
    /// A Sunday reference resolves to the Monday six days earlier, so Sunday
    /// closes the week that just ran. A Sunday-first "weekday 1" lookup
    /// (moment's `day(1)`) lands on the next day instead and yields the
    /// coming week; report and batch windows here never do that.
    pub fn start_of_week(reference: NaiveDate) -> NaiveDate {
        reference - Duration::days(Self::week_position(reference) as i64)
    }

    /// Sunday closing the week containing `reference` (the *next* Sunday
    /// when `reference` is Monday–Saturday).
    pub fn end_of_week(reference: NaiveDate) -> NaiveDate {
        Self::start_of_week(reference) + Duration::days(6)
    }

    pub fn week_window(reference: NaiveDate, include_weekend: bool) -> WeekWindow {
        let start = Self::start_of_week(reference);
        let days = if include_weekend { 7 } else { 5 };
        let ordered_dates: Vec<NaiveDate> =
            (0..days).map(|i| start + Duration::days(i)).collect();

        WeekWindow {
            start_date: start,
            end_date: start + Duration::days(days - 1),
            ordered_dates,
        }
    }

    pub fn current_week_window(include_weekend: bool) -> WeekWindow {
        Self::week_window(crate::utils::date::today(), include_weekend)
    }
}
