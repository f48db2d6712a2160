// GitHub API module.
// Provides the client and types for the public repositories endpoint.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::Repository;
