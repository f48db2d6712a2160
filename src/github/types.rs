// GitHub API response types.
// Defines the repository record deserialized from the REST API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public repository record as returned by `GET /users/<user>/repos`.
/// Immutable snapshot; unknown fields in the response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}
