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

//! Great-circle distance and unit conversions.
//!
//! All distances are in meters on a spherical Earth model.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

const METERS_PER_MILE: f64 = 1609.34;
const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;
const MILES_PER_METER: f64 = 0.000_621_373;
const NAUTICAL_MILES_PER_METER: f64 = 0.000_539_957;

/// Calculate the distance in meters between two lat/lon points using the Haversine formula.
#[must_use]
pub fn distance(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
    let lat1 = from_lat.to_radians();
    let lat2 = to_lat.to_radians();
    let delta_lat = lat2 - lat1;
    let delta_lon = (to_lon - from_lon).to_radians();

    let a = (delta_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon * 0.5).sin().powi(2);
    // Rounding can push `a` a hair past 1.0 for antipodal points
    let c = 2.0 * a.sqrt().min(1.0).asin();

    c * EARTH_RADIUS_METERS
}

#[must_use]
pub fn kilometers_to_meters(km: f64) -> f64 {
    km * 1000.0
}

#[must_use]
pub fn miles_to_meters(mi: f64) -> f64 {
    mi * METERS_PER_MILE
}

#[must_use]
pub fn nautical_miles_to_meters(nm: f64) -> f64 {
    nm * METERS_PER_NAUTICAL_MILE
}

#[must_use]
pub fn meters_to_kilometers(m: f64) -> f64 {
    m * 0.001
}

#[must_use]
pub fn meters_to_miles(m: f64) -> f64 {
    m * MILES_PER_METER
}

#[must_use]
pub fn meters_to_nautical_miles(m: f64) -> f64 {
    m * NAUTICAL_MILES_PER_METER
}

/// Anything with a position in degrees that can take part in a distance search.
pub trait Position {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;

    /// Distance in meters from the given point to this position.
    fn distance_from(&self, lat: f64, lon: f64) -> f64 {
        distance(lat, lon, self.latitude(), self.longitude())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAX: (f64, f64) = (33.9425, -118.408);
    const MIA: (f64, f64) = (25.7932, -80.2906);

    #[test]
    fn test_lax_to_mia() {
        // Published great-circle figure is ~3,757 km; the 6,371 km sphere lands at ~3,762.6 km
        let km = meters_to_kilometers(distance(LAX.0, LAX.1, MIA.0, MIA.1));
        assert!((km - 3757.0).abs() < 10.0, "got {km}");
        assert!((km - 3762.6).abs() < 0.5, "got {km}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = [LAX, MIA, (0.0, 0.0), (-33.9461, 151.1772), (64.13, -21.94), (89.9, 179.9)];
        for a in points {
            for b in points {
                let ab = distance(a.0, a.1, b.0, b.1);
                let ba = distance(b.0, b.1, a.0, a.1);
                assert!((ab - ba).abs() < 1e-6, "{a:?} -> {b:?}: {ab} vs {ba}");
            }
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        assert!(distance(LAX.0, LAX.1, LAX.0, LAX.1).abs() < f64::EPSILON);
        assert!(distance(-45.0, 170.0, -45.0, 170.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let d = distance(0.0, 0.0, 0.0, 180.0);
        let half = std::f64::consts::PI * EARTH_RADIUS_METERS;
        assert!((d - half).abs() < 1.0);
    }

    #[test]
    fn test_unit_conversions() {
        assert!((nautical_miles_to_meters(100.0) - 185_200.0).abs() < 1e-9);
        assert!((miles_to_meters(1.0) - 1609.34).abs() < 1e-9);
        assert!((kilometers_to_meters(25.0) - 25_000.0).abs() < 1e-9);
        assert!((meters_to_nautical_miles(1852.0) - 1.0).abs() < 1e-3);
        assert!((meters_to_miles(1609.34) - 1.0).abs() < 1e-3);
    }
}
