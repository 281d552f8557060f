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

use std::collections::HashMap;

use crate::records::{Frequency, Runway};

/// Record that belongs to an airport through its numeric id.
pub trait AirportOwned {
    fn airport_id(&self) -> u64;
}

impl AirportOwned for Frequency {
    fn airport_id(&self) -> u64 {
        self.airport_id
    }
}

impl AirportOwned for Runway {
    fn airport_id(&self) -> u64 {
        self.airport_id
    }
}

/// Records grouped by owning airport id, each group in insertion order.
#[derive(Debug, Clone)]
pub struct GroupedTable<T> {
    groups: HashMap<u64, Vec<T>>,
    len: usize,
}

impl<T: AirportOwned> GroupedTable<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: HashMap::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, record: T) {
        self.groups.entry(record.airport_id()).or_default().push(record);
        self.len += 1;
    }

    pub fn clear(&mut self) {
        self.groups.clear();
        self.len = 0;
    }

    /// Records owned by `airport_id`; empty when the airport has none.
    #[must_use]
    pub fn find_by_airport_id(&self, airport_id: u64) -> &[T] {
        self.groups.get(&airport_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of records across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.groups.values().flatten()
    }
}

impl<T: AirportOwned> Default for GroupedTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AirportOwned> Extend<T> for GroupedTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
