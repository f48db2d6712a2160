// GitHub API endpoint functions.
// Typed access to the public repositories listing.

use super::client::GitHubClient;
use super::types::Repository;
use crate::error::Result;

/// Page size requested from the API. One page is plenty for a portfolio.
const REPOS_PER_PAGE: &str = "100";

impl GitHubClient {
    /// Get a user's public repositories, most recently updated first.
    pub async fn user_repos(&self, user: &str) -> Result<Vec<Repository>> {
        let params = [("per_page", REPOS_PER_PAGE), ("sort", "updated")];
        let response = self
            .get_with_params(&format!("/users/{}/repos", user), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }
}
