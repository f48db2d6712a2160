// Cache store for reading and writing the repository snapshot.
// Handles JSON serialization, TTL checking, and atomic writes. A file that
// fails to parse is a cache miss, never an error.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::error::Result;

/// TTL for the repositories snapshot: 30 minutes.
pub const REPOS_TTL: Duration = Duration::from_secs(30 * 60);

/// Wrapper for cached data with its capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedData<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached.
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    /// Create a new cached data entry stamped with the current time.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// Age of this entry. Entries stamped in the future count as brand new.
    pub fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.cached_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Check if this cached data has expired based on TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    /// Check if this cached data is still valid (not expired).
    pub fn is_valid(&self, ttl: Duration) -> bool {
        !self.is_expired(ttl)
    }
}

/// Read a cached JSON entry. Missing or unreadable files are a miss.
pub fn read_cached<T: DeserializeOwned>(path: &Path) -> Option<CachedData<T>> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(cached) => Some(cached),
        Err(err) => {
            warn!(path = %path.display(), %err, "discarding unreadable cache entry");
            None
        }
    }
}

/// Read a cached JSON entry, returning None if expired.
pub fn read_if_valid<T: DeserializeOwned>(path: &Path, ttl: Duration) -> Option<T> {
    match read_cached::<T>(path) {
        Some(cached) if cached.is_valid(ttl) => Some(cached.data),
        _ => None,
    }
}

/// Write data to cache as JSON, stamped with the current time.
pub fn write_cached<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let cached = CachedData::new(data);
    let json = serde_json::to_string_pretty(&cached)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_write_and_read_cached() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_cached(&path, &data).unwrap();

        let cached: CachedData<TestData> = read_cached(&path).unwrap();
        assert_eq!(cached.data, data);
        assert!(cached.is_valid(REPOS_TTL));
    }

    #[test]
    fn test_ten_minute_old_entry_is_fresh() {
        let mut data = CachedData::new("test");
        data.cached_at = Utc::now() - chrono::Duration::minutes(10);

        assert!(data.is_valid(REPOS_TTL));
    }

    #[test]
    fn test_thirty_one_minute_old_entry_is_stale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stale.json");

        let mut data = CachedData::new(TestData {
            name: "old".to_string(),
            value: 1,
        });
        data.cached_at = Utc::now() - chrono::Duration::minutes(31);
        fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

        // Stale for the fast path, but still readable for the fallback.
        let valid: Option<TestData> = read_if_valid(&path, REPOS_TTL);
        assert!(valid.is_none());
        assert!(read_cached::<TestData>(&path).is_some());
    }

    #[test]
    fn test_corrupt_entry_is_a_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        fs::write(&path, "{ this is not json ").unwrap();

        assert!(read_cached::<TestData>(&path).is_none());
        let valid: Option<TestData> = read_if_valid(&path, REPOS_TTL);
        assert!(valid.is_none());
    }

    #[test]
    fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(read_cached::<TestData>(&path).is_none());
    }

    #[test]
    fn test_future_timestamp_counts_as_new() {
        let mut data = CachedData::new("test");
        data.cached_at = Utc::now() + chrono::Duration::minutes(5);

        assert_eq!(data.age(), Duration::ZERO);
        assert!(data.is_valid(REPOS_TTL));
    }
}
