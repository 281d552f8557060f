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

//! Denormalized airport view returned by the finder.

use crate::geo::Position;
use crate::records::{AirportRecord, Country, Frequency, Navaid, Region, Runway};

/// An airport together with everything that references it.
///
/// Region and country are default-valued (empty codes and names) when the
/// airport's codes have no matching record. The view is an owned copy;
/// changing it does not touch the tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub airport: AirportRecord,
    pub region: Region,
    pub country: Country,
    pub frequencies: Vec<Frequency>,
    pub runways: Vec<Runway>,
    pub navaids: Vec<Navaid>,
}

impl Airport {
    /// Build a view from an airport record and its already-resolved relations.
    #[must_use]
    pub fn assemble(
        airport: &AirportRecord,
        region: Option<&Region>,
        country: Option<&Country>,
        frequencies: &[Frequency],
        runways: &[Runway],
        navaids: &[&Navaid],
    ) -> Self {
        Self {
            airport: airport.clone(),
            region: region.cloned().unwrap_or_default(),
            country: country.cloned().unwrap_or_default(),
            frequencies: frequencies.to_vec(),
            runways: runways.to_vec(),
            navaids: navaids.iter().map(|n| (*n).clone()).collect(),
        }
    }

    #[must_use]
    pub fn icao_code(&self) -> &str {
        &self.airport.icao_code
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.airport.name
    }

    /// True when a region record was found for this airport.
    #[must_use]
    pub fn has_region(&self) -> bool {
        !self.region.iso_code.is_empty()
    }

    /// True when a country record was found for this airport.
    #[must_use]
    pub fn has_country(&self) -> bool {
        !self.country.iso_code.is_empty()
    }
}

impl Position for Airport {
    fn latitude(&self) -> f64 {
        self.airport.latitude
    }

    fn longitude(&self) -> f64 {
        self.airport.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::AirportType;

    #[test]
    fn test_missing_relations_default() {
        let record = AirportRecord::new(7, "XXXX", AirportType::Small, 1.0, 2.0);
        let view = Airport::assemble(&record, None, None, &[], &[], &[]);

        assert_eq!(view.region, Region::default());
        assert_eq!(view.country, Country::default());
        assert!(!view.has_region());
        assert!(!view.has_country());
        assert!(view.frequencies.is_empty() && view.runways.is_empty() && view.navaids.is_empty());
        assert_eq!(view.icao_code(), "XXXX");
    }

    #[test]
    fn test_relations_are_copied() {
        let record = AirportRecord::new(7, "BIKF", AirportType::Large, 63.985, -22.6056);
        let country = Country {
            iso_code: "IS".to_string(),
            name: "Iceland".to_string(),
            ..Country::default()
        };
        let navaid = Navaid::new(1, "KEF", 63.98, -22.6).with_associated_airport("BIKF");
        let view = Airport::assemble(&record, None, Some(&country), &[], &[], &[&navaid]);

        assert!(view.has_country());
        assert_eq!(view.country.name, "Iceland");
        assert_eq!(view.navaids, vec![navaid]);
    }
}
