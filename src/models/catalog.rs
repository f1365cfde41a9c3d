use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cached client → project → task tree, replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub last_updated: DateTime<Utc>, // ⇔ "lastUpdated" (ISO-8601)
    #[serde(default)]
    pub clients: Vec<Client>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
}

/// Resolved names of a catalog leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPath {
    pub client: String,
    pub project: String,
    pub task: String,
}

impl Catalog {
    pub fn new(last_updated: DateTime<Utc>, clients: Vec<Client>) -> Self {
        Self {
            last_updated,
            clients,
        }
    }

    /// A snapshot is fresh while fewer than `max_age_days + 1` whole days
    /// have elapsed since `last_updated`.
    pub fn is_stale(&self, now: DateTime<Utc>, max_age_days: i64) -> bool {
        (now - self.last_updated).num_days() > max_age_days
    }

    /// Task id → names index, built once per report. A duplicated id
    /// resolves to its last occurrence in tree order.
    pub fn task_index(&self) -> HashMap<u64, TaskPath> {
        let mut index = HashMap::new();
        for client in &self.clients {
            for project in &client.projects {
                for task in &project.tasks {
                    index.insert(
                        task.id,
                        TaskPath {
                            client: client.name.clone(),
                            project: project.name.clone(),
                            task: task.name.clone(),
                        },
                    );
                }
            }
        }
        index
    }

    pub fn client(&self, client_id: u64) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == client_id)
    }
}

impl Client {
    pub fn project(&self, project_id: u64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }
}
