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

//! A guided tour of the finder's queries around Los Angeles.

use airport_db::{geo, AirportFinder, AirportType, AirportTypes, Position};

use crate::report;

const LAX_LAT: f64 = 33.942_501;
const LAX_LON: f64 = -118.407_997;

pub fn run(finder: &AirportFinder) {
    if let Some(airport) = finder.find_airport_by_icao_code("KLAX") {
        println!("Airport by ICAO code:\n{}", report::airport_details(&airport));
    }

    if let Some(airport) = finder.find_airport_by_iata_code("DUS") {
        println!("\nAirport by IATA code:\n{}", report::airport_line(&airport));
    }

    if let Some(airport) = finder.find_nearest_airport(LAX_LAT, LAX_LON, 25_000.0, AirportTypes::ACTIVE) {
        println!("\nNearest airport:\n{}", report::airport_line(&airport));
    }

    let radius = geo::nautical_miles_to_meters(100.0);
    let nearest = finder.find_nearest_airports(LAX_LAT, LAX_LON, radius, Some(10), AirportTypes::RUNWAYS);
    if !nearest.is_empty() {
        println!("\nNearest airports:");
        for (i, airport) in nearest.iter().enumerate() {
            println!(
                "#{}: {} {}",
                i + 1,
                report::distance_label(airport.distance_from(LAX_LAT, LAX_LON)),
                report::airport_line(airport)
            );
        }
    }

    print_list("Large airports in US-CA", &finder.find_airports_by_region("US-CA", AirportType::Large.into()));
    print_list(
        "Large and medium airports in IS",
        &finder.find_airports_by_country("IS", AirportType::Large | AirportType::Medium),
    );

    let navaids = finder.find_nearest_navaids(LAX_LAT, LAX_LON, 50_000.0, Some(10));
    if !navaids.is_empty() {
        println!("\nNearest navaids:");
        for (i, navaid) in navaids.iter().enumerate() {
            println!(
                "#{} {} {}",
                i + 1,
                report::distance_label(navaid.distance_from(LAX_LAT, LAX_LON)),
                report::navaid_line(navaid)
            );
        }
    }

    let navaids = finder.find_navaids_by_airport_icao_code("CYYC");
    if !navaids.is_empty() {
        println!("\nNavaids associated with CYYC:");
        for (i, navaid) in navaids.iter().enumerate() {
            println!("#{} {}", i + 1, report::navaid_line(navaid));
        }
    }
}

fn print_list(title: &str, airports: &[airport_db::Airport]) {
    if airports.is_empty() {
        return;
    }
    println!("\n{title}:");
    for (i, airport) in airports.iter().enumerate() {
        println!("#{}: {}", i + 1, report::airport_line(airport));
    }
}
