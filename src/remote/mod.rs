//! Remote time-tracking service boundary.

pub mod tickspot;

use crate::errors::AppResult;
use crate::models::account::{Role, User};
use crate::models::catalog::{Client, Project, Task};
use crate::models::entry::{NewEntry, TimeEntry};
use chrono::NaiveDate;

pub use tickspot::TickspotClient;

/// Every operation the tool needs from the remote service. Calls are
/// blocking and issued one at a time.
pub trait TimeService {
    fn list_clients(&self) -> AppResult<Vec<Client>>;

    fn list_projects_for_client(&self, client_id: u64) -> AppResult<Vec<Project>>;

    fn list_tasks_for_project(&self, project_id: u64) -> AppResult<Vec<Task>>;

    fn list_users(&self) -> AppResult<Vec<User>>;

    /// Subscriptions visible to the username/password pair.
    fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Entries of `user_id` dated within `start..=end`.
    fn list_entries_by_date_range(
        &self,
        user_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimeEntry>>;

    fn create_entry(&self, entry: &NewEntry) -> AppResult<()>;
}
