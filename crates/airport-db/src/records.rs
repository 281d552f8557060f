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

//! Typed records stored in the entity tables.
//!
//! These are the validated shapes the ingestion adapters produce. Field
//! names follow the OurAirports data dictionary; optional numeric columns
//! are `Option` rather than zero so that "unknown" stays distinguishable.

use crate::category::AirportType;
use crate::geo::Position;

/// Airport row as stored in the airport table.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    /// Unique numeric id within a dataset snapshot.
    pub id: u64,
    /// ICAO (or local) identifier, e.g. "KLAX".
    pub icao_code: String,
    pub airport_type: AirportType,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_ft: Option<i32>,
    pub continent: String,
    pub iso_country: String,
    pub iso_region: String,
    pub municipality: String,
    pub scheduled_service: bool,
    pub gps_code: String,
    /// Three letter ticketing code; absent for most small fields.
    pub iata_code: Option<String>,
    pub local_code: String,
    pub home_link: String,
    pub wikipedia_link: String,
    pub keywords: String,
}

impl AirportRecord {
    /// Create a record with the identifying fields set and everything else empty.
    #[must_use]
    pub fn new(
        id: u64,
        icao_code: impl Into<String>,
        airport_type: AirportType,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            icao_code: icao_code.into(),
            airport_type,
            name: String::new(),
            latitude,
            longitude,
            elevation_ft: None,
            continent: String::new(),
            iso_country: String::new(),
            iso_region: String::new(),
            municipality: String::new(),
            scheduled_service: false,
            gps_code: String::new(),
            iata_code: None,
            local_code: String::new(),
            home_link: String::new(),
            wikipedia_link: String::new(),
            keywords: String::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_iata_code(mut self, iata_code: impl Into<String>) -> Self {
        self.iata_code = Some(iata_code.into());
        self
    }

    /// Set continent, ISO country and ISO region in one go.
    #[must_use]
    pub fn with_location(
        mut self,
        continent: impl Into<String>,
        iso_country: impl Into<String>,
        iso_region: impl Into<String>,
    ) -> Self {
        self.continent = continent.into();
        self.iso_country = iso_country.into();
        self.iso_region = iso_region.into();
        self
    }
}

impl Position for AirportRecord {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Administrative region (state, province) keyed by ISO code, e.g. "US-CA".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub id: u64,
    pub iso_code: String,
    pub local_code: String,
    pub name: String,
    pub continent: String,
    pub iso_country: String,
    pub wikipedia_link: String,
    pub keywords: String,
}

/// Country keyed by ISO 3166-1 alpha-2 code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Country {
    pub id: u64,
    pub iso_code: String,
    pub name: String,
    pub continent: String,
    pub wikipedia_link: String,
    pub keywords: String,
}

/// Radio frequency published for an airport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frequency {
    pub id: u64,
    /// Owning airport id.
    pub airport_id: u64,
    pub airport_ident: String,
    /// Short tag such as "TWR" or "ATIS".
    pub frequency_type: String,
    pub description: String,
    pub frequency_mhz: f64,
}

/// One end of a runway.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunwayEnd {
    pub ident: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation_ft: Option<i32>,
    pub heading_deg_true: Option<f64>,
    pub displaced_threshold_ft: Option<i32>,
}

/// Runway belonging to an airport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Runway {
    pub id: u64,
    /// Owning airport id.
    pub airport_id: u64,
    pub airport_ident: String,
    pub length_ft: Option<i32>,
    pub width_ft: Option<i32>,
    pub surface: String,
    pub lighted: bool,
    pub closed: bool,
    pub low_end: RunwayEnd,
    pub high_end: RunwayEnd,
}

/// Radio navigation aid (VOR, NDB, DME, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navaid {
    pub id: u64,
    pub filename: String,
    pub ident: String,
    pub name: String,
    pub navaid_type: String,
    pub frequency_khz: Option<u32>,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation_ft: Option<i32>,
    pub iso_country: String,
    pub dme_frequency_khz: Option<u32>,
    pub dme_channel: String,
    pub dme_latitude: Option<f64>,
    pub dme_longitude: Option<f64>,
    pub dme_elevation_ft: Option<i32>,
    pub slaved_variation_deg: Option<f64>,
    pub magnetic_variation_deg: Option<f64>,
    pub usage_type: String,
    pub power: String,
    /// ICAO code of the airport this navaid serves. Matched by value only;
    /// it may name an airport that is not loaded, or be empty.
    pub associated_airport: String,
}

impl Navaid {
    #[must_use]
    pub fn new(id: u64, ident: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            ident: ident.into(),
            latitude,
            longitude,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_associated_airport(mut self, icao_code: impl Into<String>) -> Self {
        self.associated_airport = icao_code.into();
        self
    }
}

impl Position for Navaid {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }
}
