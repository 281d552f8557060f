// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application configuration management.
//!
//! Persistent settings are stored in TOML format through `confy`. Missing
//! keys fall back to their defaults, so older config files keep loading as
//! fields are added.

use std::path::PathBuf;

use airport_db::DataFiles;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "airport-finder";

/// Where the OurAirports data files are published.
pub const DEFAULT_BASE_URL: &str = "https://davidmegginson.github.io/ourairports-data/";

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the CSV files, or the platform cache directory when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Base URL the data files are downloaded from
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// File name of each table inside the data directory
    #[serde(default)]
    pub files: DataFiles,

    /// Search radius for `nearest` when none is given, in nautical miles
    #[serde(default = "default_radius_nm")]
    pub default_radius_nm: f64,

    /// Result count for `nearest` when none is given
    #[serde(default = "default_max_results")]
    pub default_max_results: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_radius_nm() -> f64 {
    50.0
}

fn default_max_results() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            base_url: default_base_url(),
            files: DataFiles::default(),
            default_radius_nm: default_radius_nm(),
            default_max_results: default_max_results(),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, creating it with defaults on first run
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, "config")
    }

    /// Get the config file path for display to user
    pub fn get_config_path() -> Result<PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, "config")
    }

    /// Resolve the data directory: command line override, then config, then
    /// `<cache dir>/airport-finder/data`.
    pub fn resolve_data_dir(&self, cli_override: Option<PathBuf>) -> Option<PathBuf> {
        cli_override
            .or_else(|| self.data_dir.clone())
            .or_else(|| dirs::cache_dir().map(|dir| dir.join(APP_NAME).join("data")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.files, DataFiles::default());
        assert!(config.default_radius_nm > 0.0);
        assert_eq!(config.default_max_results, 10);
    }

    #[test]
    fn test_data_dir_precedence() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.resolve_data_dir(Some(PathBuf::from("/from/cli"))),
            Some(PathBuf::from("/from/cli"))
        );
        assert_eq!(config.resolve_data_dir(None), Some(PathBuf::from("/from/config")));
    }
}
