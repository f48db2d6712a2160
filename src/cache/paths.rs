// Cache path utilities.
// Locates the repository snapshot and the diagnostics log on disk.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/portico on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "portico").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the cached repositories snapshot for a user.
pub fn repos_path(user: &str) -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(format!("repos-{}.json", sanitize_name(user))))
}

/// Path to the diagnostics log file.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("portico.log"))
}

/// Sanitize a name for use in filesystem paths.
/// Replaces problematic characters with underscores.
fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("simple"), "simple");
        assert_eq!(sanitize_name("with/slash"), "with_slash");
        assert_eq!(sanitize_name("user:name"), "user_name");
    }

    #[test]
    fn test_repos_path_uses_sanitized_user() {
        let path = repos_path("some/user").unwrap();
        assert!(path.ends_with("repos-some_user.json"));
    }
}
