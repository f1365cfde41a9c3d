#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::rc::Rc;
use tickory::credentials::Credentials;
use tickory::errors::{AppError, AppResult};
use tickory::models::account::{Role, User};
use tickory::models::catalog::{Client, Project, Task};
use tickory::models::entry::{NewEntry, TimeEntry};
use tickory::remote::TimeService;
use tickory::ui::prompt::LinePrompter;

pub fn tk() -> Command {
    cargo_bin_cmd!("tickory")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Prompter fed by a fixed script, one answer per line.
pub fn scripted(lines: &[&str]) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
    let mut script = lines.join("\n");
    script.push('\n');
    LinePrompter::new(Cursor::new(script.into_bytes()), Vec::new())
}

#[derive(Default)]
pub struct MockState {
    pub clients: Vec<Client>,
    pub projects: HashMap<u64, Vec<Project>>,
    pub tasks: HashMap<u64, Vec<Task>>,
    pub users: Vec<User>,
    pub roles: Vec<Role>,
    pub entries: Vec<TimeEntry>,

    pub created: Vec<NewEntry>,
    /// 1-based create_entry call that fails.
    pub fail_create_on: Option<usize>,
    pub fail_tasks_for: Option<u64>,
    pub fail_roles: bool,

    pub create_calls: usize,
    pub client_calls: usize,
    pub project_calls: usize,
    pub task_calls: usize,
    pub entry_calls: usize,
    pub seen_credentials: Vec<Credentials>,
}

/// In-memory remote service; clones share state.
#[derive(Clone, Default)]
pub struct MockService {
    pub state: Rc<RefCell<MockState>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two clients (deliberately unsorted), three projects, four tasks.
    pub fn with_catalog() -> Self {
        let mock = Self::new();
        {
            let mut s = mock.state.borrow_mut();
            s.clients = vec![client(2, "Beta"), client(1, "Acme")];
            s.projects.insert(1, vec![project(10, "Website")]);
            s.projects.insert(2, vec![project(21, "Mobile"), project(20, "Backend")]);
            s.tasks.insert(10, vec![task(100, "Design"), task(101, "Build")]);
            s.tasks.insert(20, vec![task(200, "API")]);
            s.tasks.insert(21, vec![task(210, "iOS")]);
        }
        mock
    }

    pub fn connector(&self) -> impl Fn(&Credentials) -> AppResult<Box<dyn TimeService>> + use<> {
        let mock = self.clone();
        move |creds: &Credentials| {
            mock.state.borrow_mut().seen_credentials.push(creds.clone());
            Ok(Box::new(mock.clone()) as Box<dyn TimeService>)
        }
    }

    pub fn remote_calls(&self) -> usize {
        let s = self.state.borrow();
        s.client_calls + s.project_calls + s.task_calls
    }
}

pub fn client(id: u64, name: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        projects: Vec::new(),
    }
}

pub fn project(id: u64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        tasks: Vec::new(),
    }
}

pub fn task(id: u64, name: &str) -> Task {
    Task {
        id,
        name: name.to_string(),
    }
}

fn failure(path: &str) -> AppError {
    AppError::Remote {
        status: 500,
        path: path.to_string(),
    }
}

impl TimeService for MockService {
    fn list_clients(&self) -> AppResult<Vec<Client>> {
        let mut s = self.state.borrow_mut();
        s.client_calls += 1;
        Ok(s.clients.clone())
    }

    fn list_projects_for_client(&self, client_id: u64) -> AppResult<Vec<Project>> {
        let mut s = self.state.borrow_mut();
        s.project_calls += 1;
        Ok(s.projects.get(&client_id).cloned().unwrap_or_default())
    }

    fn list_tasks_for_project(&self, project_id: u64) -> AppResult<Vec<Task>> {
        let mut s = self.state.borrow_mut();
        s.task_calls += 1;
        if s.fail_tasks_for == Some(project_id) {
            return Err(failure("tasks.json"));
        }
        Ok(s.tasks.get(&project_id).cloned().unwrap_or_default())
    }

    fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.state.borrow().users.clone())
    }

    fn list_roles(&self) -> AppResult<Vec<Role>> {
        let s = self.state.borrow();
        if s.fail_roles {
            return Err(failure("roles.json"));
        }
        Ok(s.roles.clone())
    }

    fn list_entries_by_date_range(
        &self,
        _user_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimeEntry>> {
        let mut s = self.state.borrow_mut();
        s.entry_calls += 1;
        Ok(s
            .entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect())
    }

    fn create_entry(&self, entry: &NewEntry) -> AppResult<()> {
        let mut s = self.state.borrow_mut();
        s.create_calls += 1;
        if s.fail_create_on == Some(s.create_calls) {
            return Err(failure("entries.json"));
        }
        s.created.push(entry.clone());
        Ok(())
    }
}
