// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Processing configuration loaded from environment variables.

use bsp_lite_core::SPAWN_CLASSNAME_PREFIX;

/// Processing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingConfig {
    /// Number of worker threads for parallel face processing.
    pub worker_threads: usize,
    /// Reconstruct faces in parallel.
    pub parallel: bool,
    /// Classname prefix that marks spawn entities.
    pub spawn_prefix: String,
    /// Keep going after a face fails; when false the first failure aborts.
    pub skip_failed_faces: bool,
}

/// Parse a boolean flag ("1"/"0", "true"/"false", "yes"/"no", "on"/"off")
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ProcessingConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            worker_threads: lookup("BSP_LITE_WORKER_THREADS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or_else(num_cpus::get),
            parallel: lookup("BSP_LITE_PARALLEL")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
            spawn_prefix: lookup("BSP_LITE_SPAWN_PREFIX")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| SPAWN_CLASSNAME_PREFIX.into()),
            skip_failed_faces: lookup("BSP_LITE_SKIP_FAILED_FACES")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }

    /// Sequential configuration, mostly for tests and small maps.
    pub fn sequential() -> Self {
        Self {
            worker_threads: 1,
            parallel: false,
            ..Self::from_lookup(|_| None)
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ProcessingConfig::from_lookup(|_| None);
        assert!(config.worker_threads >= 1);
        assert!(config.parallel);
        assert_eq!(config.spawn_prefix, "info_player_");
        assert!(config.skip_failed_faces);
    }

    #[test]
    fn test_overrides() {
        let config = ProcessingConfig::from_lookup(lookup_from(&[
            ("BSP_LITE_WORKER_THREADS", "3"),
            ("BSP_LITE_PARALLEL", "off"),
            ("BSP_LITE_SPAWN_PREFIX", "info_player_deathmatch"),
            ("BSP_LITE_SKIP_FAILED_FACES", "0"),
        ]));
        assert_eq!(config.worker_threads, 3);
        assert!(!config.parallel);
        assert_eq!(config.spawn_prefix, "info_player_deathmatch");
        assert!(!config.skip_failed_faces);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ProcessingConfig::from_lookup(lookup_from(&[
            ("BSP_LITE_WORKER_THREADS", "0"),
            ("BSP_LITE_PARALLEL", "maybe"),
            ("BSP_LITE_SPAWN_PREFIX", ""),
        ]));
        assert!(config.worker_threads >= 1);
        assert!(config.parallel);
        assert_eq!(config.spawn_prefix, SPAWN_CLASSNAME_PREFIX);
    }

    #[test]
    fn test_sequential() {
        let config = ProcessingConfig::sequential();
        assert_eq!(config.worker_threads, 1);
        assert!(!config.parallel);
    }
}
