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

use crate::nearest;
use crate::records::Navaid;

/// Navaids in load order.
///
/// The link to an airport is the free-text `associated_airport` column, so
/// lookups scan and compare by value instead of going through an index.
#[derive(Debug, Clone, Default)]
pub struct NavaidTable {
    navaids: Vec<Navaid>,
}

impl NavaidTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, navaid: Navaid) {
        self.navaids.push(navaid);
    }

    pub fn clear(&mut self) {
        self.navaids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.navaids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.navaids.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Navaid> {
        self.navaids.iter()
    }

    /// Every navaid whose associated airport equals `icao_code`, in load order.
    #[must_use]
    pub fn find_by_airport_icao_code(&self, icao_code: &str) -> Vec<&Navaid> {
        if icao_code.is_empty() {
            return Vec::new();
        }
        self.navaids
            .iter()
            .filter(|n| n.associated_airport == icao_code)
            .collect()
    }

    /// Navaids within `radius_meters` (negative = unbounded), closest first.
    #[must_use]
    pub fn find_nearest_n(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
        max_results: Option<usize>,
    ) -> Vec<&Navaid> {
        nearest::nearest_n(&self.navaids, lat, lon, radius_meters, max_results)
    }
}

impl Extend<Navaid> for NavaidTable {
    fn extend<I: IntoIterator<Item = Navaid>>(&mut self, iter: I) {
        self.navaids.extend(iter);
    }
}

impl<'a> IntoIterator for &'a NavaidTable {
    type Item = &'a Navaid;
    type IntoIter = std::slice::Iter<'a, Navaid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nearest::UNBOUNDED_RADIUS;

    fn sample() -> NavaidTable {
        let mut table = NavaidTable::new();
        table.extend([
            Navaid::new(1, "LAX", 33.9331, -118.432).with_associated_airport("KLAX"),
            Navaid::new(2, "SMO", 34.0103, -118.457).with_associated_airport("KSMO"),
            Navaid::new(3, "IUWU", 33.95, -118.39).with_associated_airport("KLAX"),
            Navaid::new(4, "OCN", 33.2406, -117.418),
            Navaid::new(5, "YYC", 51.1, -114.0).with_associated_airport("CYYC"),
        ]);
        table
    }

    fn ids(navaids: &[&Navaid]) -> Vec<u64> {
        navaids.iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_find_by_airport_returns_all_matches_in_order() {
        let table = sample();
        assert_eq!(ids(&table.find_by_airport_icao_code("KLAX")), vec![1, 3]);
        assert_eq!(ids(&table.find_by_airport_icao_code("KSMO")), vec![2]);
        assert!(table.find_by_airport_icao_code("KJFK").is_empty());
    }

    #[test]
    fn test_unassociated_navaids_do_not_match_empty_code() {
        let table = sample();
        assert!(table.find_by_airport_icao_code("").is_empty());
    }

    #[test]
    fn test_nearest_navaids() {
        let table = sample();
        let near = table.find_nearest_n(33.9425, -118.408, 50_000.0, None);
        assert_eq!(ids(&near), vec![3, 1, 2]);

        let all = table.find_nearest_n(33.9425, -118.408, UNBOUNDED_RADIUS, Some(10));
        assert_eq!(all.len(), 5);
        assert_eq!(all.last().map(|n| n.id), Some(5));
    }
}
