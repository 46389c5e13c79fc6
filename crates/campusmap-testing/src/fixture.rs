//! JSON fixture loader.
//!
//! Loads files from this crate's `fixtures/` directory, e.g. canned NEIS responses.

use std::path::PathBuf;

use serde_json::Value;

/// # Example
/// ```no_run
/// use campusmap_testing::fixture::Fixture;
/// let body = Fixture::load("neis/school_info_search.json");
/// ```
pub struct Fixture;

impl Fixture {
    /// Absolute path of `relative_path` under `fixtures/`.
    pub fn path(relative_path: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(relative_path)
    }

    /// Load and parse a fixture JSON file.
    ///
    /// Panics if the file is missing or invalid JSON.
    pub fn load(relative_path: &str) -> Value {
        let full_path = Self::path(relative_path);
        let contents = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", relative_path, e))
    }
}
