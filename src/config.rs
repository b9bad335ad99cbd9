// Configuration for parsing and workspace scanning.
// Read once from environment variables, falling back to defaults.

use std::env;
use std::sync::OnceLock;
use tracing::warn;

static CONFIG: OnceLock<Config> = OnceLock::new();

const DEFAULT_PROJECT_MARKER: &str = "main.go";
const DEFAULT_MAX_NESTING: usize = 512;
const DEFAULT_SKIP_DIRS: &[&str] = &["vendor", "node_modules", ".git"];

#[derive(Debug, Clone)]
pub struct Config {
    /// File whose presence marks a project root (ROUTESCAN_PROJECT_MARKER)
    pub project_marker: String,

    /// Directory names never descended into (ROUTESCAN_SKIP_DIRS, comma separated)
    pub skip_dirs: Vec<String>,

    /// Larger files are skipped in workspace mode (ROUTESCAN_MAX_FILE_BYTES)
    pub max_file_bytes: u64,

    /// Deeper syntax nesting rejects the file (ROUTESCAN_MAX_NESTING)
    pub max_nesting: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_marker: DEFAULT_PROJECT_MARKER.to_string(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|dir| dir.to_string()).collect(),
            max_file_bytes: 8 * 1024 * 1024,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl Config {
    fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(val) = lookup("ROUTESCAN_PROJECT_MARKER") {
            let trimmed = val.trim();
            if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
                warn!(
                    value = %val,
                    fallback = %config.project_marker,
                    "invalid ROUTESCAN_PROJECT_MARKER, using default"
                );
            } else {
                config.project_marker = trimmed.to_string();
            }
        }

        if let Some(val) = lookup("ROUTESCAN_SKIP_DIRS") {
            config.skip_dirs = val
                .split(',')
                .map(str::trim)
                .filter(|dir| !dir.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(val) = lookup("ROUTESCAN_MAX_FILE_BYTES") {
            match val.trim().parse() {
                Ok(parsed) => config.max_file_bytes = parsed,
                Err(_) => warn!(
                    value = %val,
                    fallback = config.max_file_bytes,
                    "invalid ROUTESCAN_MAX_FILE_BYTES, using default"
                ),
            }
        }

        if let Some(val) = lookup("ROUTESCAN_MAX_NESTING") {
            match val.trim().parse() {
                Ok(parsed) if parsed > 0 => config.max_nesting = parsed,
                _ => warn!(
                    value = %val,
                    fallback = config.max_nesting,
                    "invalid ROUTESCAN_MAX_NESTING, using default"
                ),
            }
        }

        config
    }

    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }

    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|dir| dir == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project_marker, "main.go");
        assert_eq!(config.skip_dirs, vec!["vendor", "node_modules", ".git"]);
        assert_eq!(config.max_file_bytes, 8 * 1024 * 1024);
        assert_eq!(config.max_nesting, 512);
        assert!(config.is_skipped_dir("vendor"));
        assert!(!config.is_skipped_dir("internal"));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROUTESCAN_PROJECT_MARKER", "server.go"),
            ("ROUTESCAN_SKIP_DIRS", " third_party , ,testdata"),
            ("ROUTESCAN_MAX_FILE_BYTES", "1024"),
            ("ROUTESCAN_MAX_NESTING", "2000"),
        ]));
        assert_eq!(config.project_marker, "server.go");
        assert_eq!(config.skip_dirs, vec!["third_party", "testdata"]);
        assert_eq!(config.max_file_bytes, 1024);
        assert_eq!(config.max_nesting, 2000);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROUTESCAN_PROJECT_MARKER", "cmd/main.go"),
            ("ROUTESCAN_MAX_FILE_BYTES", "lots"),
            ("ROUTESCAN_MAX_NESTING", "0"),
        ]));
        assert_eq!(config.project_marker, "main.go");
        assert_eq!(config.max_file_bytes, 8 * 1024 * 1024);
        assert_eq!(config.max_nesting, 512);
    }
}
