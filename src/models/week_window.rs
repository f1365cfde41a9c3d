use chrono::NaiveDate;
use serde::Serialize;

/// Three-letter day label, positioned Monday-first (Mon = 0 … Sun = 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum DayLabel {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

pub const DAY_LABELS: [DayLabel; 7] = [
    DayLabel::Mon,
    DayLabel::Tue,
    DayLabel::Wed,
    DayLabel::Thu,
    DayLabel::Fri,
    DayLabel::Sat,
    DayLabel::Sun,
];

impl DayLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayLabel::Mon => "Mon",
            DayLabel::Tue => "Tue",
            DayLabel::Wed => "Wed",
            DayLabel::Thu => "Thu",
            DayLabel::Fri => "Fri",
            DayLabel::Sat => "Sat",
            DayLabel::Sun => "Sun",
        }
    }

    pub fn from_position(idx: usize) -> Option<Self> {
        DAY_LABELS.get(idx).copied()
    }
}

/// Monday-anchored report period. Derived per request, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub ordered_dates: Vec<NaiveDate>, // 5 (Mon→Fri) or 7 (Mon→Sun)
}

impl WeekWindow {
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.ordered_dates.contains(date)
    }

    pub fn len(&self) -> usize {
        self.ordered_dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_dates.is_empty()
    }
}
