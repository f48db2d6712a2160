// Cache module for the local repository snapshot.
// One JSON entry, read once at startup, overwritten after each fetch.

pub mod paths;
pub mod store;

pub use paths::{cache_dir, log_path, repos_path};
pub use store::{CachedData, REPOS_TTL, read_cached, read_if_valid, write_cached};
