use serde::{Deserialize, Serialize};

/// A Tickspot subscription the authenticated user has access to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub subscription_id: u64,
    pub company: String,
    pub api_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Role {
    pub fn label(&self) -> String {
        format!("{} (Subscription: {})", self.company, self.subscription_id)
    }
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
