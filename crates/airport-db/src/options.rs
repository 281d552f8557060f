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

//! Source file naming and load options.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The six source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTable {
    Airports,
    Frequencies,
    Runways,
    Regions,
    Countries,
    Navaids,
}

impl DataTable {
    /// All tables in load order.
    pub const ALL: [DataTable; 6] = [
        DataTable::Airports,
        DataTable::Frequencies,
        DataTable::Runways,
        DataTable::Regions,
        DataTable::Countries,
        DataTable::Navaids,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Airports => "airports",
            Self::Frequencies => "frequencies",
            Self::Runways => "runways",
            Self::Regions => "regions",
            Self::Countries => "countries",
            Self::Navaids => "navaids",
        }
    }
}

impl fmt::Display for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// File name of each source table, relative to a data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFiles {
    #[serde(default = "default_airports")]
    pub airports: String,
    #[serde(default = "default_frequencies")]
    pub frequencies: String,
    #[serde(default = "default_runways")]
    pub runways: String,
    #[serde(default = "default_regions")]
    pub regions: String,
    #[serde(default = "default_countries")]
    pub countries: String,
    #[serde(default = "default_navaids")]
    pub navaids: String,
}

fn default_airports() -> String {
    "airports.csv".to_string()
}

fn default_frequencies() -> String {
    "airport-frequencies.csv".to_string()
}

fn default_runways() -> String {
    "runways.csv".to_string()
}

fn default_regions() -> String {
    "regions.csv".to_string()
}

fn default_countries() -> String {
    "countries.csv".to_string()
}

fn default_navaids() -> String {
    "navaids.csv".to_string()
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            airports: default_airports(),
            frequencies: default_frequencies(),
            runways: default_runways(),
            regions: default_regions(),
            countries: default_countries(),
            navaids: default_navaids(),
        }
    }
}

impl DataFiles {
    #[must_use]
    pub fn file_name(&self, table: DataTable) -> &str {
        match table {
            DataTable::Airports => &self.airports,
            DataTable::Frequencies => &self.frequencies,
            DataTable::Runways => &self.runways,
            DataTable::Regions => &self.regions,
            DataTable::Countries => &self.countries,
            DataTable::Navaids => &self.navaids,
        }
    }

    /// `(table, file name)` pairs for every table.
    pub fn iter(&self) -> impl Iterator<Item = (DataTable, &str)> {
        DataTable::ALL.into_iter().map(move |t| (t, self.file_name(t)))
    }
}

/// Paths to load from. Only airports are required; tables without a path stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub airports: Option<PathBuf>,
    pub frequencies: Option<PathBuf>,
    pub runways: Option<PathBuf>,
    pub regions: Option<PathBuf>,
    pub countries: Option<PathBuf>,
    pub navaids: Option<PathBuf>,
}

impl LoadOptions {
    /// Load only the airport table.
    #[must_use]
    pub fn airports_only(path: impl Into<PathBuf>) -> Self {
        Self {
            airports: Some(path.into()),
            ..Self::default()
        }
    }

    /// Every table, resolved against `base_dir` with the given file names.
    #[must_use]
    pub fn from_files(base_dir: &Path, files: &DataFiles) -> Self {
        let path = |t| Some(base_dir.join(files.file_name(t)));
        Self {
            airports: path(DataTable::Airports),
            frequencies: path(DataTable::Frequencies),
            runways: path(DataTable::Runways),
            regions: path(DataTable::Regions),
            countries: path(DataTable::Countries),
            navaids: path(DataTable::Navaids),
        }
    }

    /// Every table in `base_dir` using the default file names.
    #[must_use]
    pub fn preset(base_dir: &Path) -> Self {
        Self::from_files(base_dir, &DataFiles::default())
    }

    #[must_use]
    pub fn path(&self, table: DataTable) -> Option<&Path> {
        match table {
            DataTable::Airports => self.airports.as_deref(),
            DataTable::Frequencies => self.frequencies.as_deref(),
            DataTable::Runways => self.runways.as_deref(),
            DataTable::Regions => self.regions.as_deref(),
            DataTable::Countries => self.countries.as_deref(),
            DataTable::Navaids => self.navaids.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_paths() {
        let options = LoadOptions::preset(Path::new("/data"));
        assert_eq!(
            options.path(DataTable::Frequencies),
            Some(Path::new("/data/airport-frequencies.csv"))
        );
        assert_eq!(options.path(DataTable::Navaids), Some(Path::new("/data/navaids.csv")));
    }

    #[test]
    fn test_custom_file_names() {
        let files = DataFiles {
            runways: "rw.csv".to_string(),
            ..DataFiles::default()
        };
        let options = LoadOptions::from_files(Path::new("d"), &files);
        assert_eq!(options.path(DataTable::Runways), Some(Path::new("d/rw.csv")));
        assert_eq!(files.iter().count(), 6);
    }

    #[test]
    fn test_airports_only() {
        let options = LoadOptions::airports_only("a.csv");
        assert!(options.path(DataTable::Airports).is_some());
        assert!(DataTable::ALL[1..].iter().all(|t| options.path(*t).is_none()));
    }
}
