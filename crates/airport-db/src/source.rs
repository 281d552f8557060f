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

//! CSV ingestion for the OurAirports data files.
//!
//! Columns are bound by header name as documented at
//! <https://ourairports.com/help/data-dictionary.html>. A row that cannot be
//! deserialized (bad id, bad required coordinate, wrong column count) is
//! logged and skipped; only I/O failures abort a file. Optional numeric
//! columns that are empty or malformed become `None`.
//!
//! Readers hand records to a sink as they are parsed, so rows read before an
//! I/O failure are kept.

use std::io::Read;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::category::AirportType;
use crate::options::DataTable;
use crate::records::{AirportRecord, Country, Frequency, Navaid, Region, Runway, RunwayEnd};

/// OurAirports flags are "yes"/"no" or "1"/"0".
fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "yes" | "true" | "1")
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(parse_flag(&value))
}

/// A CSV row shape that converts into a stored record.
trait SourceRow: DeserializeOwned {
    type Record;

    const TABLE: DataTable;

    /// `None` drops the row without it counting as malformed.
    fn into_record(self) -> Option<Self::Record>;
}

/// Stream rows of `R` into `sink`, returning the number of records produced.
fn read_rows<R, Row>(reader: R, mut sink: impl FnMut(Row::Record)) -> Result<usize, csv::Error>
where
    R: Read,
    Row: SourceRow,
{
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut count = 0;
    for result in csv_reader.deserialize::<Row>() {
        match result {
            Ok(row) => {
                if let Some(record) = row.into_record() {
                    sink(record);
                    count += 1;
                }
            }
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                let line = e.position().map_or(0, csv::Position::line);
                warn!("Skipping {} row at line {}: {}", Row::TABLE, line, e);
            }
        }
    }

    Ok(count)
}

#[derive(Debug, Deserialize)]
struct AirportRow {
    id: u64,
    ident: String,
    #[serde(rename = "type")]
    airport_type: String,
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
    #[serde(deserialize_with = "csv::invalid_option")]
    elevation_ft: Option<i32>,
    continent: String,
    iso_country: String,
    iso_region: String,
    municipality: String,
    #[serde(deserialize_with = "deserialize_flag")]
    scheduled_service: bool,
    gps_code: String,
    iata_code: Option<String>,
    local_code: String,
    home_link: String,
    wikipedia_link: String,
    keywords: String,
}

impl SourceRow for AirportRow {
    type Record = AirportRecord;

    const TABLE: DataTable = DataTable::Airports;

    fn into_record(self) -> Option<AirportRecord> {
        let airport_type = match self.airport_type.parse::<AirportType>() {
            Ok(t) => t,
            Err(e) => {
                debug!("Skipping airport {} ({}): {}", self.id, self.ident, e);
                return None;
            }
        };

        Some(AirportRecord {
            id: self.id,
            icao_code: self.ident,
            airport_type,
            name: self.name,
            latitude: self.latitude_deg,
            longitude: self.longitude_deg,
            elevation_ft: self.elevation_ft,
            continent: self.continent,
            iso_country: self.iso_country,
            iso_region: self.iso_region,
            municipality: self.municipality,
            scheduled_service: self.scheduled_service,
            gps_code: self.gps_code,
            iata_code: self.iata_code.filter(|code| !code.is_empty()),
            local_code: self.local_code,
            home_link: self.home_link,
            wikipedia_link: self.wikipedia_link,
            keywords: self.keywords,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FrequencyRow {
    id: u64,
    airport_ref: u64,
    airport_ident: String,
    #[serde(rename = "type")]
    frequency_type: String,
    description: String,
    frequency_mhz: f64,
}

impl SourceRow for FrequencyRow {
    type Record = Frequency;

    const TABLE: DataTable = DataTable::Frequencies;

    fn into_record(self) -> Option<Frequency> {
        Some(Frequency {
            id: self.id,
            airport_id: self.airport_ref,
            airport_ident: self.airport_ident,
            frequency_type: self.frequency_type,
            description: self.description,
            frequency_mhz: self.frequency_mhz,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RunwayRow {
    id: u64,
    airport_ref: u64,
    airport_ident: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    length_ft: Option<i32>,
    #[serde(deserialize_with = "csv::invalid_option")]
    width_ft: Option<i32>,
    surface: String,
    #[serde(deserialize_with = "deserialize_flag")]
    lighted: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    closed: bool,
    le_ident: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    le_latitude_deg: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    le_longitude_deg: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    le_elevation_ft: Option<i32>,
    #[serde(rename = "le_heading_degT", deserialize_with = "csv::invalid_option")]
    le_heading_deg_true: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    le_displaced_threshold_ft: Option<i32>,
    he_ident: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    he_latitude_deg: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    he_longitude_deg: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    he_elevation_ft: Option<i32>,
    #[serde(rename = "he_heading_degT", deserialize_with = "csv::invalid_option")]
    he_heading_deg_true: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    he_displaced_threshold_ft: Option<i32>,
}

impl SourceRow for RunwayRow {
    type Record = Runway;

    const TABLE: DataTable = DataTable::Runways;

    fn into_record(self) -> Option<Runway> {
        Some(Runway {
            id: self.id,
            airport_id: self.airport_ref,
            airport_ident: self.airport_ident,
            length_ft: self.length_ft,
            width_ft: self.width_ft,
            surface: self.surface,
            lighted: self.lighted,
            closed: self.closed,
            low_end: RunwayEnd {
                ident: self.le_ident,
                latitude: self.le_latitude_deg,
                longitude: self.le_longitude_deg,
                elevation_ft: self.le_elevation_ft,
                heading_deg_true: self.le_heading_deg_true,
                displaced_threshold_ft: self.le_displaced_threshold_ft,
            },
            high_end: RunwayEnd {
                ident: self.he_ident,
                latitude: self.he_latitude_deg,
                longitude: self.he_longitude_deg,
                elevation_ft: self.he_elevation_ft,
                heading_deg_true: self.he_heading_deg_true,
                displaced_threshold_ft: self.he_displaced_threshold_ft,
            },
        })
    }
}

#[derive(Debug, Deserialize)]
struct RegionRow {
    id: u64,
    code: String,
    local_code: String,
    name: String,
    continent: String,
    iso_country: String,
    wikipedia_link: String,
    keywords: String,
}

impl SourceRow for RegionRow {
    type Record = Region;

    const TABLE: DataTable = DataTable::Regions;

    fn into_record(self) -> Option<Region> {
        Some(Region {
            id: self.id,
            iso_code: self.code,
            local_code: self.local_code,
            name: self.name,
            continent: self.continent,
            iso_country: self.iso_country,
            wikipedia_link: self.wikipedia_link,
            keywords: self.keywords,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CountryRow {
    id: u64,
    code: String,
    name: String,
    continent: String,
    wikipedia_link: String,
    keywords: String,
}

impl SourceRow for CountryRow {
    type Record = Country;

    const TABLE: DataTable = DataTable::Countries;

    fn into_record(self) -> Option<Country> {
        Some(Country {
            id: self.id,
            iso_code: self.code,
            name: self.name,
            continent: self.continent,
            wikipedia_link: self.wikipedia_link,
            keywords: self.keywords,
        })
    }
}

#[derive(Debug, Deserialize)]
struct NavaidRow {
    id: u64,
    filename: String,
    ident: String,
    name: String,
    #[serde(rename = "type")]
    navaid_type: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    frequency_khz: Option<u32>,
    latitude_deg: f64,
    longitude_deg: f64,
    #[serde(deserialize_with = "csv::invalid_option")]
    elevation_ft: Option<i32>,
    iso_country: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    dme_frequency_khz: Option<u32>,
    dme_channel: String,
    #[serde(deserialize_with = "csv::invalid_option")]
    dme_latitude_deg: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    dme_longitude_deg: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    dme_elevation_ft: Option<i32>,
    #[serde(deserialize_with = "csv::invalid_option")]
    slaved_variation_deg: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    magnetic_variation_deg: Option<f64>,
    #[serde(rename = "usageType")]
    usage_type: String,
    power: String,
    associated_airport: String,
}

impl SourceRow for NavaidRow {
    type Record = Navaid;

    const TABLE: DataTable = DataTable::Navaids;

    fn into_record(self) -> Option<Navaid> {
        Some(Navaid {
            id: self.id,
            filename: self.filename,
            ident: self.ident,
            name: self.name,
            navaid_type: self.navaid_type,
            frequency_khz: self.frequency_khz,
            latitude: self.latitude_deg,
            longitude: self.longitude_deg,
            elevation_ft: self.elevation_ft,
            iso_country: self.iso_country,
            dme_frequency_khz: self.dme_frequency_khz,
            dme_channel: self.dme_channel,
            dme_latitude: self.dme_latitude_deg,
            dme_longitude: self.dme_longitude_deg,
            dme_elevation_ft: self.dme_elevation_ft,
            slaved_variation_deg: self.slaved_variation_deg,
            magnetic_variation_deg: self.magnetic_variation_deg,
            usage_type: self.usage_type,
            power: self.power,
            associated_airport: self.associated_airport,
        })
    }
}

/// Read `airports.csv`. Rows with a category outside [`AirportType`] are dropped.
pub fn read_airports<R: Read>(reader: R, sink: impl FnMut(AirportRecord)) -> Result<usize, csv::Error> {
    read_rows::<R, AirportRow>(reader, sink)
}

/// Read `airport-frequencies.csv`.
pub fn read_frequencies<R: Read>(reader: R, sink: impl FnMut(Frequency)) -> Result<usize, csv::Error> {
    read_rows::<R, FrequencyRow>(reader, sink)
}

/// Read `runways.csv`.
pub fn read_runways<R: Read>(reader: R, sink: impl FnMut(Runway)) -> Result<usize, csv::Error> {
    read_rows::<R, RunwayRow>(reader, sink)
}

/// Read `regions.csv`.
pub fn read_regions<R: Read>(reader: R, sink: impl FnMut(Region)) -> Result<usize, csv::Error> {
    read_rows::<R, RegionRow>(reader, sink)
}

/// Read `countries.csv`.
pub fn read_countries<R: Read>(reader: R, sink: impl FnMut(Country)) -> Result<usize, csv::Error> {
    read_rows::<R, CountryRow>(reader, sink)
}

/// Read `navaids.csv`.
pub fn read_navaids<R: Read>(reader: R, sink: impl FnMut(Navaid)) -> Result<usize, csv::Error> {
    read_rows::<R, NavaidRow>(reader, sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRPORTS_CSV: &str = r#""id","ident","type","name","latitude_deg","longitude_deg","elevation_ft","continent","iso_country","iso_region","municipality","scheduled_service","gps_code","iata_code","local_code","home_link","wikipedia_link","keywords"
3632,"KLAX","large_airport","Los Angeles International Airport",33.942501,-118.407997,125,"NA","US","US-CA","Los Angeles","yes","KLAX","LAX","LAX","https://www.flylax.com/","https://en.wikipedia.org/wiki/Los_Angeles_International_Airport",
6523,"00A","heliport","Total Rf Heliport",40.070985,-74.933689,11,"NA","US","US-PA","Bensalem","no","K00A","","00A","","",
7,"BAL1","balloonport","Some Balloonport",40.0,-75.0,,"NA","US","US-PA","","no","","","","","",
oops,"BAD1","small_airport","Bad Id",40.0,-75.0,,"NA","US","US-PA","","no","","","","","",
8,"BAD2","small_airport","Bad Latitude",north,-75.0,,"NA","US","US-PA","","no","","","","","",
9,"NOEL","small_airport","No Elevation",41.0,-76.0,unknown,"NA","US","US-PA","","no","","","","","",
"#;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("yes"));
        assert!(parse_flag("YES"));
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(!parse_flag("no"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_read_airports() {
        let mut airports = Vec::new();
        let count = read_airports(AIRPORTS_CSV.as_bytes(), |a| airports.push(a)).unwrap();
        assert_eq!(count, 3);
        let ids: Vec<u64> = airports.iter().map(|a| a.id).collect();
        // balloonport, bad id and bad latitude rows are skipped
        assert_eq!(ids, vec![3632, 6523, 9]);

        let lax = &airports[0];
        assert_eq!(lax.icao_code, "KLAX");
        assert_eq!(lax.airport_type, AirportType::Large);
        assert_eq!(lax.iata_code.as_deref(), Some("LAX"));
        assert_eq!(lax.elevation_ft, Some(125));
        assert_eq!(lax.iso_region, "US-CA");
        assert!(lax.scheduled_service);
        assert!(lax.keywords.is_empty());

        let heliport = &airports[1];
        assert_eq!(heliport.airport_type, AirportType::Heliport);
        assert_eq!(heliport.iata_code, None);
        assert!(!heliport.scheduled_service);

        assert_eq!(airports[2].elevation_ft, None);
    }

    #[test]
    fn test_read_frequencies() {
        let csv = r#""id","airport_ref","airport_ident","type","description","frequency_mhz"
60768,3632,"KLAX","ATIS","ATIS",133.8
60769,3632,"KLAX","TWR","TOWER",not-a-number
"#;
        let mut frequencies = Vec::new();
        read_frequencies(csv.as_bytes(), |f| frequencies.push(f)).unwrap();
        assert_eq!(frequencies.len(), 1);
        assert_eq!(frequencies[0].airport_id, 3632);
        assert_eq!(frequencies[0].frequency_type, "ATIS");
        assert!((frequencies[0].frequency_mhz - 133.8).abs() < 1e-9);
    }

    #[test]
    fn test_read_runways_uses_each_end_column() {
        let csv = r#""id","airport_ref","airport_ident","length_ft","width_ft","surface","lighted","closed","le_ident","le_latitude_deg","le_longitude_deg","le_elevation_ft","le_heading_degT","le_displaced_threshold_ft","he_ident","he_latitude_deg","he_longitude_deg","he_elevation_ft","he_heading_degT","he_displaced_threshold_ft"
240922,3632,"KLAX",12091,150,"CON",1,0,"07L",33.9358,-118.419,119,83,,"25R",33.9399,-118.38,94,263,957
"#;
        let mut runways = Vec::new();
        read_runways(csv.as_bytes(), |r| runways.push(r)).unwrap();
        assert_eq!(runways.len(), 1);

        let runway = &runways[0];
        assert_eq!(runway.length_ft, Some(12091));
        assert!(runway.lighted);
        assert!(!runway.closed);
        assert_eq!(runway.low_end.ident, "07L");
        assert_eq!(runway.low_end.latitude, Some(33.9358));
        assert_eq!(runway.low_end.longitude, Some(-118.419));
        assert_eq!(runway.low_end.displaced_threshold_ft, None);
        assert_eq!(runway.high_end.longitude, Some(-118.38));
        assert_eq!(runway.high_end.heading_deg_true, Some(263.0));
        assert_eq!(runway.high_end.displaced_threshold_ft, Some(957));
    }

    #[test]
    fn test_read_regions_and_countries() {
        let regions_csv = r#""id","code","local_code","name","continent","iso_country","wikipedia_link","keywords"
306080,"US-CA","CA","California","NA","US","https://en.wikipedia.org/wiki/California",
"#;
        let countries_csv = r#""id","code","name","continent","wikipedia_link","keywords"
302755,"US","United States","NA","https://en.wikipedia.org/wiki/United_States","America"
"#;
        let mut regions = Vec::new();
        read_regions(regions_csv.as_bytes(), |r| regions.push(r)).unwrap();
        assert_eq!(regions[0].iso_code, "US-CA");
        assert_eq!(regions[0].local_code, "CA");
        assert_eq!(regions[0].iso_country, "US");

        let mut countries = Vec::new();
        read_countries(countries_csv.as_bytes(), |c| countries.push(c)).unwrap();
        assert_eq!(countries[0].iso_code, "US");
        assert_eq!(countries[0].keywords, "America");
    }

    #[test]
    fn test_read_navaids() {
        let csv = r#""id","filename","ident","name","type","frequency_khz","latitude_deg","longitude_deg","elevation_ft","iso_country","dme_frequency_khz","dme_channel","dme_latitude_deg","dme_longitude_deg","dme_elevation_ft","slaved_variation_deg","magnetic_variation_deg","usageType","power","associated_airport"
90184,"Los_Angeles_VORTAC_US","LAX","Los Angeles","VORTAC",113600,33.933101654052734,-118.43199920654297,182,"US",113600,"083X",33.9334,-118.432,180,15.001,13.076,"BOTH","HIGH","KLAX"
90185,"Somewhere_NDB_US","SMW","Somewhere","NDB",,34.0,-117.0,,"US",,,,,,,,"LO","LOW",""
"#;
        let mut navaids = Vec::new();
        read_navaids(csv.as_bytes(), |n| navaids.push(n)).unwrap();
        assert_eq!(navaids.len(), 2);
        assert_eq!(navaids[0].navaid_type, "VORTAC");
        assert_eq!(navaids[0].frequency_khz, Some(113_600));
        assert_eq!(navaids[0].dme_channel, "083X");
        assert_eq!(navaids[0].usage_type, "BOTH");
        assert_eq!(navaids[0].associated_airport, "KLAX");
        assert_eq!(navaids[1].frequency_khz, None);
        assert!(navaids[1].associated_airport.is_empty());
    }

    #[test]
    fn test_row_with_wrong_column_count_is_skipped() {
        let csv = r#""id","code","name","continent","wikipedia_link","keywords"
1,"AA","Alpha","EU","",""
2,"BB"
3,"CC","Charlie","AS","",""
"#;
        let mut countries = Vec::new();
        let count = read_countries(csv.as_bytes(), |c| countries.push(c)).unwrap();
        assert_eq!(count, 2);
        let codes: Vec<&str> = countries.iter().map(|c| c.iso_code.as_str()).collect();
        assert_eq!(codes, vec!["AA", "CC"]);
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "connection dropped"))
        }
    }

    #[test]
    fn test_io_error_aborts_but_keeps_rows_already_read() {
        let csv = r#""id","code","name","continent","wikipedia_link","keywords"
1,"AA","Alpha","EU","",""
2,"BB","Bravo","EU","",""
"#;
        let mut countries = Vec::new();
        let result = read_countries(csv.as_bytes().chain(BrokenPipe), |c| countries.push(c));

        let err = result.unwrap_err();
        assert!(err.is_io_error());
        let codes: Vec<&str> = countries.iter().map(|c| c.iso_code.as_str()).collect();
        assert_eq!(codes, vec!["AA", "BB"]);
    }
}
