use crate::core::week::WeekCalculator;
use crate::models::catalog::{Catalog, TaskPath};
use crate::models::entry::TimeEntry;
use crate::models::report_row::{ReportExport, ReportRow};
use crate::models::week_window::WeekWindow;
use crate::utils::date::to_api_date;
use crate::utils::table::Table;

pub struct ReportAggregator;

impl ReportAggregator {
    /// Join `entries` against `catalog`, one block per date of `week`.
    ///
    /// Layout: header, then per date a spacer, the day summary and one detail
    /// row per task (first-seen order, hours summed), then a spacer and the
    /// footer. Entries dated outside the window never contribute.
    pub fn build_weekly_report(
        entries: &[TimeEntry],
        catalog: &Catalog,
        week: &WeekWindow,
    ) -> Vec<ReportRow> {
        let index = catalog.task_index();
        let mut rows = vec![ReportRow::Header];
        let mut total = 0.0;

        for date in &week.ordered_dates {
            rows.push(ReportRow::Spacer);

            let mut groups: Vec<(u64, f64)> = Vec::new();
            let mut day_hours = 0.0;
            for entry in entries.iter().filter(|e| e.date == *date) {
                day_hours += entry.hours;
                match groups.iter_mut().find(|(id, _)| *id == entry.task_id) {
                    Some((_, hours)) => *hours += entry.hours,
                    None => groups.push((entry.task_id, entry.hours)),
                }
            }

            rows.push(ReportRow::DaySummary {
                day: WeekCalculator::day_label_for_date(*date),
                date: *date,
                hours: day_hours,
            });
            total += day_hours;

            for (task_id, hours) in groups {
                let path = index.get(&task_id).cloned().unwrap_or_else(|| {
                    log::debug!("task {} not found in catalog", task_id);
                    TaskPath::default()
                });
                rows.push(ReportRow::ProjectDetail {
                    client: path.client,
                    project: path.project,
                    task: path.task,
                    hours,
                });
            }
        }

        rows.push(ReportRow::Spacer);
        rows.push(ReportRow::Footer { total });
        rows
    }

    /// Hours logged on the dates of `week`.
    pub fn weekly_total(entries: &[TimeEntry], week: &WeekWindow) -> f64 {
        entries
            .iter()
            .filter(|e| week.contains(&e.date))
            .map(|e| e.hours)
            .sum()
    }

    /// Box-drawn table; rules at the top, under the header, above the footer
    /// and at the bottom.
    pub fn render(rows: &[ReportRow]) -> String {
        let mut table = Table::new();
        for row in rows {
            table.add_row(row.cells().to_vec());
        }
        table.render(|index, size| index == 0 || index == 1 || index + 1 == size || index == size)
    }

    /// Flatten day summaries and details for CSV / JSON export.
    /// Detail rows inherit the day and date of the preceding summary.
    pub fn to_export(rows: &[ReportRow]) -> Vec<ReportExport> {
        let mut out = Vec::new();
        let mut current: Option<(String, String)> = None;

        for row in rows {
            match row {
                ReportRow::DaySummary { day, date, hours } => {
                    let d = (day.as_str().to_string(), to_api_date(date));
                    out.push(ReportExport {
                        day: d.0.clone(),
                        date: d.1.clone(),
                        client: String::new(),
                        project: String::new(),
                        task: String::new(),
                        hours: *hours,
                    });
                    current = Some(d);
                }
                ReportRow::ProjectDetail {
                    client,
                    project,
                    task,
                    hours,
                } => {
                    let (day, date) = current.clone().unwrap_or_default();
                    out.push(ReportExport {
                        day,
                        date,
                        client: client.clone(),
                        project: project.clone(),
                        task: task.clone(),
                        hours: *hours,
                    });
                }
                ReportRow::Header | ReportRow::Spacer | ReportRow::Footer { .. } => {}
            }
        }

        out
    }
}
