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

mod config;
mod demo;
mod download;
mod report;

use std::path::{Path, PathBuf};

use airport_db::{
    geo, AirportFinder, AirportTypes, LoadOptions, Navaid, Position, UNBOUNDED_RADIUS,
};
use clap::{Parser, Subcommand};
use config::AppConfig;
use download::Downloader;
use log::{debug, warn, LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the OurAirports CSV files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Airport types to load: comma separated (large,medium,small,heliport,seaplane,closed) or all/active/runways
    #[arg(short, long, global = true, default_value = "all")]
    types: AirportTypes,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download the data files into the data directory
    Download {
        /// Fetch files even if they already exist
        #[arg(short, long)]
        force: bool,
    },

    /// Show an airport by ICAO code
    Icao { code: String },

    /// Show an airport by IATA code
    Iata { code: String },

    /// Airports closest to a position
    #[command(allow_negative_numbers = true)]
    Nearest {
        lat: f64,
        lon: f64,
        #[command(flatten)]
        bounds: SearchBounds,
    },

    /// Airports in an ISO region, e.g. US-CA
    Region { code: String },

    /// Airports in an ISO country, e.g. IS
    Country { code: String },

    /// Airports on a continent, e.g. EU
    Continent { code: String },

    /// Navaids closest to a position
    #[command(allow_negative_numbers = true)]
    NavaidsNear {
        lat: f64,
        lon: f64,
        #[command(flatten)]
        bounds: SearchBounds,
    },

    /// Navaids associated with an airport ICAO code
    NavaidsFor { icao: String },

    /// Download missing data and run a tour of the queries
    Demo,
}

#[derive(clap::Args, Debug)]
struct SearchBounds {
    /// Search radius in nautical miles
    #[arg(short, long)]
    radius_nm: Option<f64>,

    /// Ignore the radius and search the whole table
    #[arg(long, conflicts_with = "radius_nm")]
    unbounded: bool,

    /// Maximum number of results, 0 for no limit
    #[arg(short = 'n', long)]
    max: Option<usize>,
}

impl SearchBounds {
    fn radius_meters(&self, config: &AppConfig) -> f64 {
        if self.unbounded {
            UNBOUNDED_RADIUS
        } else {
            geo::nautical_miles_to_meters(self.radius_nm.unwrap_or(config.default_radius_nm))
        }
    }

    fn max_results(&self, config: &AppConfig) -> Option<usize> {
        match self.max.unwrap_or(config.default_max_results) {
            0 => None,
            n => Some(n),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_finder(config: &AppConfig, data_dir: &Path, types: AirportTypes) -> AirportFinder {
    let mut finder = AirportFinder::new();
    let errors = finder.load(&LoadOptions::from_files(data_dir, &config.files), types);
    for e in &errors {
        warn!("{}", e);
    }
    if finder.airports().is_empty() {
        eprintln!(
            "No airports loaded from {}. Run `airport-finder download` first.",
            data_dir.display()
        );
    }
    finder
}

fn print_airports(airports: &[airport_db::Airport]) {
    if airports.is_empty() {
        println!("No airports found");
    }
    for airport in airports {
        println!("{}", report::airport_line(airport));
    }
}

fn print_navaids(navaids: &[Navaid], origin: Option<(f64, f64)>) {
    if navaids.is_empty() {
        println!("No navaids found");
    }
    for navaid in navaids {
        match origin {
            Some((lat, lon)) => println!(
                "{:>9} {}",
                report::distance_label(navaid.distance_from(lat, lon)),
                report::navaid_line(navaid)
            ),
            None => println!("{}", report::navaid_line(navaid)),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Could not load config ({}), using defaults", e);
        AppConfig::default()
    });
    if let Ok(path) = AppConfig::get_config_path() {
        debug!("Config file: {}", path.display());
    }

    let data_dir = config
        .resolve_data_dir(cli.data_dir)
        .ok_or("could not determine a data directory, pass --data-dir")?;
    debug!("Data directory: {}", data_dir.display());

    if let Command::Download { force } = cli.command {
        let fetched = Downloader::new(config.base_url.as_str())?.download_all(&data_dir, &config.files, force)?;
        println!("Downloaded {} file(s) into {}", fetched.len(), data_dir.display());
        return Ok(());
    }

    if let Command::Demo = cli.command {
        Downloader::new(config.base_url.as_str())?.download_all(&data_dir, &config.files, false)?;
    }

    let finder = load_finder(&config, &data_dir, cli.types);

    match cli.command {
        Command::Download { .. } => {}
        Command::Demo => demo::run(&finder),
        Command::Icao { code } => match finder.find_airport_by_icao_code(&code) {
            Some(airport) => println!("{}", report::airport_details(&airport)),
            None => println!("No airport with ICAO code {code}"),
        },
        Command::Iata { code } => match finder.find_airport_by_iata_code(&code) {
            Some(airport) => println!("{}", report::airport_details(&airport)),
            None => println!("No airport with IATA code {code}"),
        },
        Command::Nearest { lat, lon, bounds } => {
            let airports = finder.find_nearest_airports(
                lat,
                lon,
                bounds.radius_meters(&config),
                bounds.max_results(&config),
                cli.types,
            );
            if airports.is_empty() {
                println!("No airports found");
            }
            for airport in &airports {
                println!(
                    "{:>9} {}",
                    report::distance_label(airport.distance_from(lat, lon)),
                    report::airport_line(airport)
                );
            }
        }
        Command::Region { code } => print_airports(&finder.find_airports_by_region(&code, cli.types)),
        Command::Country { code } => print_airports(&finder.find_airports_by_country(&code, cli.types)),
        Command::Continent { code } => print_airports(&finder.find_airports_by_continent(&code, cli.types)),
        Command::NavaidsNear { lat, lon, bounds } => {
            let navaids = finder.find_nearest_navaids(
                lat,
                lon,
                bounds.radius_meters(&config),
                bounds.max_results(&config),
            );
            print_navaids(&navaids, Some((lat, lon)));
        }
        Command::NavaidsFor { icao } => print_navaids(&finder.find_navaids_by_airport_icao_code(&icao), None),
    }

    Ok(())
}
