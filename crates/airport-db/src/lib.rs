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

//! In-memory airport database with geospatial queries.
//!
//! Loads the OurAirports datasets (airports, frequencies, runways, regions,
//! countries and navaids) into indexed tables and answers code lookups,
//! category/location filters and nearest-neighbor searches. The library is
//! layered so each part can be used on its own:
//!
//! - **Geo**: haversine distance and unit conversions ([`geo`])
//! - **Categories**: airport type flags combined with `|` ([`AirportTypes`])
//! - **Tables**: one store per dataset, indexed by key or owning airport ([`tables`])
//! - **Search**: radius/count bounded nearest-neighbor ranking ([`nearest`])
//! - **Finder**: loads everything and joins results into [`Airport`] views
//!
//! # Quick Start
//!
//! ```no_run
//! use airport_db::{geo, AirportFinder, AirportTypes, LoadOptions};
//! use std::path::Path;
//!
//! let mut finder = AirportFinder::new();
//! let errors = finder.load(&LoadOptions::preset(Path::new("./data")), AirportTypes::ALL);
//! for e in &errors {
//!     eprintln!("{e}");
//! }
//!
//! let radius = geo::nautical_miles_to_meters(100.0);
//! for airport in finder.find_nearest_airports(33.9425, -118.408, radius, Some(10), AirportTypes::RUNWAYS) {
//!     println!("{} {}", airport.icao_code(), airport.name());
//! }
//! ```
//!
//! # Loading Records Directly
//!
//! Tables accept any iterator of typed records, so data does not have to
//! come from CSV files:
//!
//! ```
//! use airport_db::{AirportFinder, AirportRecord, AirportType, AirportTypes};
//!
//! let mut finder = AirportFinder::new();
//! finder.insert_airports(
//!     [
//!         AirportRecord::new(3632, "KLAX", AirportType::Large, 33.9425, -118.408).with_iata_code("LAX"),
//!         AirportRecord::new(1, "H1", AirportType::Heliport, 33.95, -118.40),
//!     ],
//!     AirportTypes::ALL,
//! );
//!
//! let found = finder.find_nearest_airports(33.9425, -118.408, 25_000.0, None, AirportTypes::RUNWAYS);
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].icao_code(), "KLAX");
//! ```

pub mod category;
pub mod error;
pub mod finder;
pub mod geo;
pub mod nearest;
pub mod options;
pub mod records;
pub mod source;
pub mod tables;
pub mod view;

pub use category::{AirportType, AirportTypes, ParseAirportTypeError};
pub use error::LoadError;
pub use finder::AirportFinder;
pub use geo::{distance, Position};
pub use nearest::{Neighbor, UNBOUNDED_RADIUS};
pub use options::{DataFiles, DataTable, LoadOptions};
pub use records::{AirportRecord, Country, Frequency, Navaid, Region, Runway, RunwayEnd};
pub use tables::AirportFilter;
pub use view::Airport;
