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

//! Entity tables.
//!
//! Each table is indexed for its dominant access pattern:
//!
//! - [`AirportTable`]: insertion-ordered list, scanned for code and filter lookups
//! - [`CodeTable`]: hash map keyed by ISO code (regions, countries)
//! - [`GroupedTable`]: hash map from owning airport id to an ordered group
//!   (frequencies, runways)
//! - [`NavaidTable`]: insertion-ordered list joined to airports by ICAO value
//!
//! Tables are append-only apart from `clear`. Duplicate unique keys keep the
//! first record loaded.

mod airport;
mod grouped;
mod keyed;
mod navaid;

pub use airport::{AirportFilter, AirportTable};
pub use grouped::{AirportOwned, GroupedTable};
pub use keyed::{CodeTable, Coded};
pub use navaid::NavaidTable;

use crate::records::{Country, Frequency, Region, Runway};

/// Regions keyed by ISO region code.
pub type RegionTable = CodeTable<Region>;

/// Countries keyed by ISO country code.
pub type CountryTable = CodeTable<Country>;

/// Frequencies grouped by owning airport id.
pub type FrequencyTable = GroupedTable<Frequency>;

/// Runways grouped by owning airport id.
pub type RunwayTable = GroupedTable<Runway>;
