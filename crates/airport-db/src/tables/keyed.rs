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

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;

use crate::records::{Country, Region};

/// Record with a unique string code.
pub trait Coded {
    fn code(&self) -> &str;
}

impl Coded for Region {
    fn code(&self) -> &str {
        &self.iso_code
    }
}

impl Coded for Country {
    fn code(&self) -> &str {
        &self.iso_code
    }
}

/// Table keyed by a unique code. The first record for a code wins.
#[derive(Debug, Clone)]
pub struct CodeTable<T> {
    records: HashMap<String, T>,
}

impl<T: Coded> CodeTable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert a record. Returns `false` and keeps the existing record if the code is taken.
    pub fn insert(&mut self, record: T) -> bool {
        match self.records.entry(record.code().to_string()) {
            Entry::Occupied(entry) => {
                debug!("Ignoring duplicate code {}", entry.key());
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
                true
            }
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn find(&self, code: &str) -> Option<&T> {
        self.records.get(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

impl<T: Coded> Default for CodeTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coded> Extend<T> for CodeTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
