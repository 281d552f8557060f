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

//! Plain text rendering of query results.

use std::fmt::Write;

use airport_db::{geo, Airport, Navaid, Runway};

/// Navaid frequencies at or above this are VHF and shown in MHz.
const VHF_THRESHOLD_KHZ: u32 = 108_000;

/// Format a navaid frequency, e.g. `113.600 MHz` for a VOR or `350 kHz` for an NDB.
pub fn frequency_label(khz: Option<u32>) -> String {
    match khz {
        Some(khz) if khz >= VHF_THRESHOLD_KHZ => format!("{:.3} MHz", f64::from(khz) / 1000.0),
        Some(khz) => format!("{khz} kHz"),
        None => "-".to_string(),
    }
}

pub fn distance_label(meters: f64) -> String {
    format!("{:.1} NM", geo::meters_to_nautical_miles(meters))
}

/// Prefer the joined name, falling back to the code when the join found nothing.
fn or_code<'a>(name: &'a str, code: &'a str) -> &'a str {
    if name.is_empty() {
        code
    } else {
        name
    }
}

/// One line summary: codes, category, name and location.
pub fn airport_line(airport: &Airport) -> String {
    let record = &airport.airport;
    let mut location = Vec::new();
    if !record.municipality.is_empty() {
        location.push(record.municipality.as_str());
    }
    location.push(or_code(&airport.region.name, &record.iso_region));
    location.push(or_code(&airport.country.name, &record.iso_country));
    location.retain(|part| !part.is_empty());

    format!(
        "{:<8} {:<4} {:<15} {} ({})",
        record.icao_code,
        record.iata_code.as_deref().unwrap_or("-"),
        record.airport_type,
        record.name,
        location.join(", ")
    )
}

fn runway_line(runway: &Runway) -> String {
    let length = runway.length_ft.map_or_else(|| "?".to_string(), |ft| ft.to_string());
    let mut line = format!(
        "{}/{} {} ft {}",
        runway.low_end.ident, runway.high_end.ident, length, runway.surface
    );
    if runway.lighted {
        line.push_str(" lighted");
    }
    if runway.closed {
        line.push_str(" closed");
    }
    line
}

pub fn navaid_line(navaid: &Navaid) -> String {
    format!(
        "{:<5} {:<8} {:>12} {}",
        navaid.ident,
        navaid.navaid_type,
        frequency_label(navaid.frequency_khz),
        navaid.name
    )
}

/// Multi-line report with every joined relation.
pub fn airport_details(airport: &Airport) -> String {
    let record = &airport.airport;
    let mut out = airport_line(airport);

    let elevation = record
        .elevation_ft
        .map_or_else(String::new, |ft| format!(", elevation {ft} ft"));
    let _ = write!(out, "\n  position {:.4}, {:.4}{}", record.latitude, record.longitude, elevation);
    if record.scheduled_service {
        out.push_str("\n  scheduled service");
    }

    if !airport.frequencies.is_empty() {
        out.push_str("\n  frequencies:");
        for f in &airport.frequencies {
            let _ = write!(out, "\n    {:<8} {:>8.3} {}", f.frequency_type, f.frequency_mhz, f.description);
        }
    }
    if !airport.runways.is_empty() {
        out.push_str("\n  runways:");
        for r in &airport.runways {
            let _ = write!(out, "\n    {}", runway_line(r));
        }
    }
    if !airport.navaids.is_empty() {
        out.push_str("\n  navaids:");
        for n in &airport.navaids {
            let _ = write!(out, "\n    {}", navaid_line(n));
        }
    }
    out
}
