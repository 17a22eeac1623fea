use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named conversation owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Thread {
    pub fn default_name(number: impl std::fmt::Display) -> String {
        format!("Thread {}", number)
    }
}
