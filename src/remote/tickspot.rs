//! Blocking HTTP client for the Tickspot v2 API.
//!
//! Roles are listed with HTTP basic auth against `{base}/api/v2/roles.json`.
//! Every other call is scoped to a subscription:
//! `{base}/{subscription_id}/api/v2/...` with `Authorization: Token token=...`.
//! Only client projects are paginated; every other list is one request.

use crate::credentials::Credentials;
use crate::errors::{AppError, AppResult};
use crate::models::account::{Role, User};
use crate::models::catalog::{Client, Project, Task};
use crate::models::entry::{NewEntry, TimeEntry};
use crate::remote::TimeService;
use crate::utils::date::to_api_date;
use chrono::NaiveDate;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Items per page on paginated Tickspot endpoints.
pub const PAGE_SIZE: usize = 100;
pub const MAX_PAGES: u32 = 50;

pub struct TickspotClient {
    http: HttpClient,
    base_url: String,
    user_agent: String,
    credentials: Credentials,
}

impl TickspotClient {
    pub fn new(base_url: &str, credentials: &Credentials, contact: Option<&str>) -> AppResult<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        let who = contact
            .map(str::to_string)
            .or_else(|| credentials.username.clone())
            .unwrap_or_default();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: format!("Tickory ({})", who),
            credentials: credentials.clone(),
        })
    }

    fn api_url(&self, path: &str) -> AppResult<String> {
        let subscription = self.credentials.subscription_id.ok_or_else(|| {
            AppError::MissingCredentials("no Tickspot subscription selected".to_string())
        })?;
        Ok(format!("{}/{}/api/v2/{}", self.base_url, subscription, path))
    }

    fn authorized(&self, req: RequestBuilder) -> AppResult<RequestBuilder> {
        let token = self
            .credentials
            .token
            .as_deref()
            .ok_or_else(|| AppError::MissingCredentials("no API token".to_string()))?;
        Ok(req
            .header(USER_AGENT, &self.user_agent)
            .header(AUTHORIZATION, format!("Token token={}", token)))
    }

    fn check(resp: Response, path: &str) -> AppResult<Response> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            log::warn!("{} -> {}", path, status);
            Err(AppError::Remote {
                status: status.as_u16(),
                path: path.to_string(),
            })
        }
    }

    /// Single GET of a list endpoint.
    fn get_list<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> AppResult<Vec<T>> {
        log::debug!("GET {}", path);
        let req = self.http.get(self.api_url(path)?).query(query);
        let resp = Self::check(self.authorized(req)?.send()?, path)?;
        Ok(resp.json()?)
    }

    /// Page through a paginated endpoint (`?page=N`).
    ///
    /// Stops on an empty page or one shorter than [`PAGE_SIZE`]. More than
    /// [`MAX_PAGES`] pages is an error.
    fn get_paged<T: DeserializeOwned>(&self, path: &str) -> AppResult<Vec<T>> {
        let url = self.api_url(path)?;
        let mut out = Vec::new();

        for page in 1..=MAX_PAGES {
            log::debug!("GET {} page {}", path, page);
            let req = self.http.get(&url).query(&[("page", page.to_string())]);
            let resp = Self::check(self.authorized(req)?.send()?, path)?;
            let items: Vec<T> = resp.json()?;
            let last = items.len() < PAGE_SIZE;
            out.extend(items);
            if last {
                return Ok(out);
            }
        }

        log::warn!("{} still returning full pages after {} pages", path, MAX_PAGES);
        Err(AppError::Pagination {
            path: path.to_string(),
            pages: MAX_PAGES,
        })
    }
}

impl TimeService for TickspotClient {
    fn list_clients(&self) -> AppResult<Vec<Client>> {
        self.get_list("clients.json", &[])
    }

    fn list_projects_for_client(&self, client_id: u64) -> AppResult<Vec<Project>> {
        self.get_paged(&format!("clients/{}/projects.json", client_id))
    }

    fn list_tasks_for_project(&self, project_id: u64) -> AppResult<Vec<Task>> {
        self.get_list(&format!("projects/{}/tasks.json", project_id), &[])
    }

    fn list_users(&self) -> AppResult<Vec<User>> {
        self.get_list("users.json", &[])
    }

    fn list_roles(&self) -> AppResult<Vec<Role>> {
        let username = self.credentials.username.clone().unwrap_or_default();
        let url = format!("{}/api/v2/roles.json", self.base_url);

        log::debug!("GET roles.json as {}", username);
        let resp = self
            .http
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .basic_auth(username, self.credentials.password.clone())
            .send()?;
        let resp = Self::check(resp, "roles.json")?;
        Ok(resp.json()?)
    }

    fn list_entries_by_date_range(
        &self,
        user_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimeEntry>> {
        self.get_list(
            &format!("users/{}/entries.json", user_id),
            &[("start_date", to_api_date(&start)), ("end_date", to_api_date(&end))],
        )
    }

    fn create_entry(&self, entry: &NewEntry) -> AppResult<()> {
        let path = "entries.json";
        log::debug!("POST {} for task {} on {}", path, entry.task_id, entry.date);
        let req = self.http.post(self.api_url(path)?).json(entry);
        Self::check(self.authorized(req)?.send()?, path)?;
        Ok(())
    }
}
