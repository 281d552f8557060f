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

use std::collections::HashSet;

use log::debug;

use crate::category::AirportTypes;
use crate::nearest;
use crate::records::AirportRecord;

/// Optional region/country/continent filter for [`AirportTable::find_all`].
///
/// Each field is independent; `None` or an empty string matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AirportFilter<'a> {
    pub iso_region: Option<&'a str>,
    pub iso_country: Option<&'a str>,
    pub continent: Option<&'a str>,
}

impl<'a> AirportFilter<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn region(mut self, iso_region: &'a str) -> Self {
        self.iso_region = Some(iso_region);
        self
    }

    #[must_use]
    pub fn country(mut self, iso_country: &'a str) -> Self {
        self.iso_country = Some(iso_country);
        self
    }

    #[must_use]
    pub fn continent(mut self, continent: &'a str) -> Self {
        self.continent = Some(continent);
        self
    }

    fn matches(&self, airport: &AirportRecord) -> bool {
        field_matches(self.iso_region, &airport.iso_region)
            && field_matches(self.iso_country, &airport.iso_country)
            && field_matches(self.continent, &airport.continent)
    }
}

fn field_matches(filter: Option<&str>, value: &str) -> bool {
    match filter {
        Some(wanted) if !wanted.is_empty() => wanted == value,
        _ => true,
    }
}

/// Airports in load order. Ids are unique; the first airport loaded for an id wins.
#[derive(Debug, Clone, Default)]
pub struct AirportTable {
    airports: Vec<AirportRecord>,
    ids: HashSet<u64>,
}

impl AirportTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an airport. Returns `false` if its id is already present.
    pub fn insert(&mut self, airport: AirportRecord) -> bool {
        if !self.ids.insert(airport.id) {
            debug!("Ignoring duplicate airport id {} ({})", airport.id, airport.icao_code);
            return false;
        }
        self.airports.push(airport);
        true
    }

    pub fn clear(&mut self) {
        self.airports.clear();
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AirportRecord> {
        self.airports.iter()
    }

    /// Airports whose category is in `types`, in load order.
    pub fn iter_by_type(&self, types: AirportTypes) -> impl Iterator<Item = &AirportRecord> {
        self.airports
            .iter()
            .filter(move |a| types.contains(a.airport_type))
    }

    #[must_use]
    pub fn find_by_type(&self, types: AirportTypes) -> Vec<&AirportRecord> {
        self.iter_by_type(types).collect()
    }

    #[must_use]
    pub fn find_by_icao_code(&self, icao_code: &str) -> Option<&AirportRecord> {
        if icao_code.is_empty() {
            return None;
        }
        self.airports.iter().find(|a| a.icao_code == icao_code)
    }

    /// First airport with the given IATA code. An empty code matches nothing.
    #[must_use]
    pub fn find_by_iata_code(&self, iata_code: &str) -> Option<&AirportRecord> {
        if iata_code.is_empty() {
            return None;
        }
        self.airports
            .iter()
            .find(|a| a.iata_code.as_deref() == Some(iata_code))
    }

    #[must_use]
    pub fn find_by_region(&self, iso_region: &str, types: AirportTypes) -> Vec<&AirportRecord> {
        self.iter_by_type(types)
            .filter(|a| a.iso_region == iso_region)
            .collect()
    }

    #[must_use]
    pub fn find_by_country(&self, iso_country: &str, types: AirportTypes) -> Vec<&AirportRecord> {
        self.iter_by_type(types)
            .filter(|a| a.iso_country == iso_country)
            .collect()
    }

    #[must_use]
    pub fn find_by_continent(&self, continent: &str, types: AirportTypes) -> Vec<&AirportRecord> {
        self.iter_by_type(types)
            .filter(|a| a.continent == continent)
            .collect()
    }

    /// All airports matching both the location filter and the category set.
    #[must_use]
    pub fn find_all(&self, filter: &AirportFilter<'_>, types: AirportTypes) -> Vec<&AirportRecord> {
        self.iter_by_type(types)
            .filter(|a| filter.matches(a))
            .collect()
    }

    /// Closest airport of the given categories within `radius_meters` (negative = unbounded).
    #[must_use]
    pub fn find_nearest(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
        types: AirportTypes,
    ) -> Option<&AirportRecord> {
        nearest::nearest(self.iter_by_type(types), lat, lon, radius_meters)
    }

    /// Airports of the given categories within `radius_meters`, closest first.
    #[must_use]
    pub fn find_nearest_n(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
        max_results: Option<usize>,
        types: AirportTypes,
    ) -> Vec<&AirportRecord> {
        nearest::nearest_n(self.iter_by_type(types), lat, lon, radius_meters, max_results)
    }
}

impl Extend<AirportRecord> for AirportTable {
    fn extend<I: IntoIterator<Item = AirportRecord>>(&mut self, iter: I) {
        for airport in iter {
            self.insert(airport);
        }
    }
}

impl<'a> IntoIterator for &'a AirportTable {
    type Item = &'a AirportRecord;
    type IntoIter = std::slice::Iter<'a, AirportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::AirportType;
    use crate::nearest::UNBOUNDED_RADIUS;

    fn ids(airports: &[&AirportRecord]) -> Vec<u64> {
        airports.iter().map(|a| a.id).collect()
    }

    fn sample() -> AirportTable {
        let mut table = AirportTable::new();
        table.extend([
            AirportRecord::new(3632, "KLAX", AirportType::Large, 33.9425, -118.408)
                .with_iata_code("LAX")
                .with_location("NA", "US", "US-CA"),
            AirportRecord::new(1, "H1", AirportType::Heliport, 33.95, -118.40)
                .with_location("NA", "US", "US-CA"),
            AirportRecord::new(2, "KSMO", AirportType::Small, 34.0158, -118.451)
                .with_iata_code("SMO")
                .with_location("NA", "US", "US-CA"),
            AirportRecord::new(3, "KXXX", AirportType::Closed, 33.9, -118.3)
                .with_location("NA", "US", "US-CA"),
            AirportRecord::new(4, "KLAS", AirportType::Large, 36.08, -115.152)
                .with_iata_code("LAS")
                .with_location("NA", "US", "US-NV"),
            AirportRecord::new(5, "BIKF", AirportType::Large, 63.985, -22.6056)
                .with_iata_code("KEF")
                .with_location("EU", "IS", "IS-2"),
        ]);
        table
    }

    #[test]
    fn test_find_by_codes() {
        let table = sample();
        assert_eq!(table.find_by_icao_code("KLAX").map(|a| a.id), Some(3632));
        assert_eq!(table.find_by_iata_code("KEF").map(|a| a.id), Some(5));
        assert!(table.find_by_icao_code("ZZZZ").is_none());
        assert!(table.find_by_iata_code("ZZZ").is_none());
    }

    #[test]
    fn test_empty_iata_code_matches_nothing() {
        let table = sample();
        assert!(table.find_by_iata_code("").is_none());
        assert!(table.find_by_icao_code("").is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut table = sample();
        let dup = AirportRecord::new(3632, "DUPE", AirportType::Small, 0.0, 0.0);
        assert!(!table.insert(dup));
        assert_eq!(table.len(), 6);
        assert_eq!(table.find_by_icao_code("KLAX").map(|a| a.id), Some(3632));
        assert!(table.find_by_icao_code("DUPE").is_none());
    }

    #[test]
    fn test_category_filter_is_a_bit_test() {
        let table = sample();
        let large = table.find_by_type(AirportType::Large.into());
        assert!(large.iter().all(|a| a.airport_type == AirportType::Large));
        assert_eq!(ids(&large), vec![3632, 4, 5]);

        let small = table.find_by_type(AirportType::Small.into());
        let union = table.find_by_type(AirportType::Large | AirportType::Small);
        assert_eq!(union.len(), large.len() + small.len());
        let mut expected = ids(&large);
        expected.extend(ids(&small));
        let mut got = ids(&union);
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, expected);

        assert!(table.find_by_type(AirportTypes::NONE).is_empty());
        assert_eq!(table.find_by_type(AirportTypes::ALL).len(), 6);
    }

    #[test]
    fn test_find_by_region_country_continent() {
        let table = sample();
        assert_eq!(ids(&table.find_by_region("US-CA", AirportTypes::ACTIVE)), vec![3632, 1, 2]);
        assert_eq!(ids(&table.find_by_region("US-CA", AirportTypes::ALL)), vec![3632, 1, 2, 3]);
        assert_eq!(ids(&table.find_by_country("US", AirportType::Large.into())), vec![3632, 4]);
        assert_eq!(ids(&table.find_by_continent("EU", AirportTypes::ALL)), vec![5]);
        assert!(table.find_by_country("XX", AirportTypes::ALL).is_empty());
    }

    #[test]
    fn test_find_all_with_optional_filters() {
        let table = sample();
        assert_eq!(table.find_all(&AirportFilter::new(), AirportTypes::ALL).len(), 6);

        let filter = AirportFilter::new().country("US").region("");
        assert_eq!(ids(&table.find_all(&filter, AirportTypes::RUNWAYS)), vec![3632, 2, 4]);

        let filter = AirportFilter::new().continent("NA").region("US-NV");
        assert_eq!(ids(&table.find_all(&filter, AirportTypes::ALL)), vec![4]);

        let filter = AirportFilter::new().country("IS").continent("NA");
        assert!(table.find_all(&filter, AirportTypes::ALL).is_empty());
    }

    #[test]
    fn test_nearest_respects_category_and_radius() {
        let table = sample();
        let lax = table.find_nearest(33.9425, -118.408, 25_000.0, AirportTypes::ACTIVE);
        assert_eq!(lax.map(|a| a.id), Some(3632));

        // Zero radius still matches an airport at the exact query point
        let heli = table.find_nearest(33.95, -118.40, 0.0, AirportType::Heliport.into());
        assert_eq!(heli.map(|a| a.id), Some(1));

        assert!(table
            .find_nearest(0.0, 0.0, 1000.0, AirportTypes::ALL)
            .is_none());
    }

    #[test]
    fn test_nearest_n_orders_and_truncates() {
        let table = sample();
        let near = table.find_nearest_n(33.9425, -118.408, UNBOUNDED_RADIUS, Some(3), AirportTypes::ALL);
        assert_eq!(ids(&near), vec![3632, 1, 2]);

        let runways = table.find_nearest_n(33.9425, -118.408, UNBOUNDED_RADIUS, None, AirportTypes::RUNWAYS);
        assert_eq!(ids(&runways), vec![3632, 2, 4, 5]);
    }

    #[test]
    fn test_clear_resets_ids() {
        let mut table = sample();
        table.clear();
        assert!(table.is_empty());
        assert!(table.insert(AirportRecord::new(3632, "KLAX", AirportType::Large, 0.0, 0.0)));
    }
}
