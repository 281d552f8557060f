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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::options::DataTable;

/// A source that could not be loaded. Loading carries on with the other sources.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no source configured for {0}")]
    MissingSource(DataTable),

    #[error("cannot open {table} source {}: {source}", path.display())]
    Open {
        table: DataTable,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed reading {table} source {}: {source}", path.display())]
    Read {
        table: DataTable,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl LoadError {
    /// The table this error belongs to.
    #[must_use]
    pub fn table(&self) -> DataTable {
        match self {
            Self::MissingSource(table) | Self::Open { table, .. } | Self::Read { table, .. } => *table,
        }
    }
}
