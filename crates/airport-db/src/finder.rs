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

//! The airport finder: all six tables plus the queries that join them.
//!
//! Loading is a bulk, append-only phase. Queries borrow the finder
//! immutably and return owned [`Airport`] views assembled per result, so the
//! cost of joining is proportional to the result size rather than the table
//! size.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};

use crate::category::AirportTypes;
use crate::error::LoadError;
use crate::options::{DataTable, LoadOptions};
use crate::records::{AirportRecord, Country, Frequency, Navaid, Region, Runway};
use crate::source;
use crate::tables::{
    AirportFilter, AirportTable, CountryTable, FrequencyTable, NavaidTable, RegionTable, RunwayTable,
};
use crate::view::Airport;

/// In-memory airport database.
#[derive(Debug, Clone, Default)]
pub struct AirportFinder {
    airports: AirportTable,
    frequencies: FrequencyTable,
    runways: RunwayTable,
    regions: RegionTable,
    countries: CountryTable,
    navaids: NavaidTable,
}

impl AirportFinder {
    /// Create an empty finder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of every table with the sources in `options`.
    ///
    /// Existing data is cleared first, so loading twice does not duplicate
    /// frequencies, runways or navaids. Only airports whose category is in
    /// `types` are stored. A failing source does not stop the others; its
    /// error is returned and its table keeps whatever rows were read before
    /// the failure.
    pub fn load(&mut self, options: &LoadOptions, types: AirportTypes) -> Vec<LoadError> {
        self.clear();
        let mut errors = Vec::new();

        if options.airports.is_none() {
            errors.push(LoadError::MissingSource(DataTable::Airports));
        }

        for table in DataTable::ALL {
            let Some(path) = options.path(table) else {
                continue;
            };
            match self.load_table(table, path, types) {
                Ok(count) => info!("Loaded {} {} from {}", count, table, path.display()),
                Err(e) => {
                    warn!("{}", e);
                    errors.push(e);
                }
            }
        }

        errors
    }

    /// Load one table, returning the number of records stored.
    fn load_table(&mut self, table: DataTable, path: &Path, types: AirportTypes) -> Result<usize, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            table,
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let airports_before = self.airports.len();

        let result = match table {
            DataTable::Airports => source::read_airports(reader, |a| {
                if types.contains(a.airport_type) {
                    self.airports.insert(a);
                }
            }),
            DataTable::Frequencies => source::read_frequencies(reader, |f| self.frequencies.insert(f)),
            DataTable::Runways => source::read_runways(reader, |r| self.runways.insert(r)),
            DataTable::Regions => source::read_regions(reader, |r| {
                self.regions.insert(r);
            }),
            DataTable::Countries => source::read_countries(reader, |c| {
                self.countries.insert(c);
            }),
            DataTable::Navaids => source::read_navaids(reader, |n| self.navaids.insert(n)),
        };

        let count = result.map_err(|source| LoadError::Read {
            table,
            path: path.to_path_buf(),
            source,
        })?;

        // Rows outside the type mask or with a duplicate id are parsed but not stored
        Ok(match table {
            DataTable::Airports => self.airports.len() - airports_before,
            _ => count,
        })
    }

    /// Append airports, keeping only those whose category is in `types`.
    pub fn insert_airports<I>(&mut self, airports: I, types: AirportTypes)
    where
        I: IntoIterator<Item = AirportRecord>,
    {
        self.airports
            .extend(airports.into_iter().filter(|a| types.contains(a.airport_type)));
    }

    pub fn insert_frequencies<I: IntoIterator<Item = Frequency>>(&mut self, frequencies: I) {
        self.frequencies.extend(frequencies);
    }

    pub fn insert_runways<I: IntoIterator<Item = Runway>>(&mut self, runways: I) {
        self.runways.extend(runways);
    }

    pub fn insert_regions<I: IntoIterator<Item = Region>>(&mut self, regions: I) {
        self.regions.extend(regions);
    }

    pub fn insert_countries<I: IntoIterator<Item = Country>>(&mut self, countries: I) {
        self.countries.extend(countries);
    }

    pub fn insert_navaids<I: IntoIterator<Item = Navaid>>(&mut self, navaids: I) {
        self.navaids.extend(navaids);
    }

    /// Reset every table to empty.
    pub fn clear(&mut self) {
        self.airports.clear();
        self.frequencies.clear();
        self.runways.clear();
        self.regions.clear();
        self.countries.clear();
        self.navaids.clear();
    }

    #[must_use]
    pub fn airports(&self) -> &AirportTable {
        &self.airports
    }

    #[must_use]
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    #[must_use]
    pub fn runways(&self) -> &RunwayTable {
        &self.runways
    }

    #[must_use]
    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    #[must_use]
    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    #[must_use]
    pub fn navaids(&self) -> &NavaidTable {
        &self.navaids
    }

    /// Join an airport record with its region, country, frequencies, runways and navaids.
    #[must_use]
    pub fn assemble(&self, airport: &AirportRecord) -> Airport {
        let navaids = self.navaids.find_by_airport_icao_code(&airport.icao_code);
        Airport::assemble(
            airport,
            self.regions.find(&airport.iso_region),
            self.countries.find(&airport.iso_country),
            self.frequencies.find_by_airport_id(airport.id),
            self.runways.find_by_airport_id(airport.id),
            &navaids,
        )
    }

    fn assemble_all(&self, airports: Vec<&AirportRecord>) -> Vec<Airport> {
        airports.into_iter().map(|a| self.assemble(a)).collect()
    }

    #[must_use]
    pub fn find_airports_by_type(&self, types: AirportTypes) -> Vec<Airport> {
        self.assemble_all(self.airports.find_by_type(types))
    }

    #[must_use]
    pub fn find_airport_by_icao_code(&self, icao_code: &str) -> Option<Airport> {
        self.airports
            .find_by_icao_code(icao_code)
            .map(|a| self.assemble(a))
    }

    #[must_use]
    pub fn find_airport_by_iata_code(&self, iata_code: &str) -> Option<Airport> {
        self.airports
            .find_by_iata_code(iata_code)
            .map(|a| self.assemble(a))
    }

    #[must_use]
    pub fn find_airports_by_region(&self, iso_region: &str, types: AirportTypes) -> Vec<Airport> {
        self.assemble_all(self.airports.find_by_region(iso_region, types))
    }

    #[must_use]
    pub fn find_airports_by_country(&self, iso_country: &str, types: AirportTypes) -> Vec<Airport> {
        self.assemble_all(self.airports.find_by_country(iso_country, types))
    }

    #[must_use]
    pub fn find_airports_by_continent(&self, continent: &str, types: AirportTypes) -> Vec<Airport> {
        self.assemble_all(self.airports.find_by_continent(continent, types))
    }

    /// Every airport matching the location filter and category set.
    #[must_use]
    pub fn all_airports(&self, filter: &AirportFilter<'_>, types: AirportTypes) -> Vec<Airport> {
        self.assemble_all(self.airports.find_all(filter, types))
    }

    /// Closest airport within `radius_meters` (negative = unbounded).
    #[must_use]
    pub fn find_nearest_airport(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
        types: AirportTypes,
    ) -> Option<Airport> {
        self.airports
            .find_nearest(lat, lon, radius_meters, types)
            .map(|a| self.assemble(a))
    }

    /// Airports within `radius_meters`, closest first, at most `max_results` of them.
    #[must_use]
    pub fn find_nearest_airports(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
        max_results: Option<usize>,
        types: AirportTypes,
    ) -> Vec<Airport> {
        self.assemble_all(
            self.airports
                .find_nearest_n(lat, lon, radius_meters, max_results, types),
        )
    }

    /// Navaids within `radius_meters`, closest first.
    #[must_use]
    pub fn find_nearest_navaids(
        &self,
        lat: f64,
        lon: f64,
        radius_meters: f64,
        max_results: Option<usize>,
    ) -> Vec<Navaid> {
        self.navaids
            .find_nearest_n(lat, lon, radius_meters, max_results)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn find_navaids_by_airport_icao_code(&self, icao_code: &str) -> Vec<Navaid> {
        self.navaids
            .find_by_airport_icao_code(icao_code)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn all_navaids(&self) -> Vec<Navaid> {
        self.navaids.iter().cloned().collect()
    }
}
