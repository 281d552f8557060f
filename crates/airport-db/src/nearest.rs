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

//! Nearest-neighbor search by great-circle distance.
//!
//! Searches are brute force over the candidates handed in: compute the
//! distance to each, drop those outside the radius, stable-sort by distance
//! and truncate. Tables hold a few tens of thousands of records, so a
//! linear pass is fast enough and keeps results in a well-defined order.

use std::cmp::Ordering;

use crate::geo::Position;

/// Radius value that disables the distance bound.
pub const UNBOUNDED_RADIUS: f64 = -1.0;

/// A candidate together with its distance from the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a, T> {
    pub item: &'a T,
    pub distance_meters: f64,
}

/// Negative radii mean "no bound".
fn effective_radius(radius_meters: f64) -> f64 {
    if radius_meters < 0.0 {
        f64::MAX
    } else {
        radius_meters
    }
}

/// Return the candidate closest to `(lat, lon)` within `radius_meters`.
///
/// On equal distances the candidate seen first wins.
pub fn nearest<'a, T, I>(candidates: I, lat: f64, lon: f64, radius_meters: f64) -> Option<&'a T>
where
    T: Position + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let radius = effective_radius(radius_meters);
    let mut best: Option<(&'a T, f64)> = None;

    for candidate in candidates {
        let distance = candidate.distance_from(lat, lon);
        if distance > radius {
            continue;
        }
        match best {
            Some((_, min)) if distance >= min => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(item, _)| item)
}

/// Rank candidates within `radius_meters` of `(lat, lon)` by ascending distance.
///
/// Candidates at equal distance keep their input order. `max_results` of
/// `None` returns every candidate inside the radius.
pub fn rank_by_distance<'a, T, I>(
    candidates: I,
    lat: f64,
    lon: f64,
    radius_meters: f64,
    max_results: Option<usize>,
) -> Vec<Neighbor<'a, T>>
where
    T: Position + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let radius = effective_radius(radius_meters);

    let mut neighbors: Vec<Neighbor<'a, T>> = candidates
        .into_iter()
        .map(|item| Neighbor {
            item,
            distance_meters: item.distance_from(lat, lon),
        })
        .filter(|n| n.distance_meters <= radius)
        .collect();

    // `sort_by` is stable, which keeps table order for ties
    neighbors.sort_by(|a, b| {
        a.distance_meters
            .partial_cmp(&b.distance_meters)
            .unwrap_or(Ordering::Equal)
    });

    if let Some(max) = max_results {
        neighbors.truncate(max);
    }
    neighbors
}

/// Like [`rank_by_distance`] but returns only the records.
pub fn nearest_n<'a, T, I>(
    candidates: I,
    lat: f64,
    lon: f64,
    radius_meters: f64,
    max_results: Option<usize>,
) -> Vec<&'a T>
where
    T: Position + 'a,
    I: IntoIterator<Item = &'a T>,
{
    rank_by_distance(candidates, lat, lon, radius_meters, max_results)
        .into_iter()
        .map(|n| n.item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Point {
        name: &'static str,
        lat: f64,
        lon: f64,
    }

    impl Position for Point {
        fn latitude(&self) -> f64 {
            self.lat
        }

        fn longitude(&self) -> f64 {
            self.lon
        }
    }

    fn point(name: &'static str, lat: f64, lon: f64) -> Point {
        Point { name, lat, lon }
    }

    fn names(points: &[&Point]) -> Vec<&'static str> {
        points.iter().map(|p| p.name).collect()
    }

    fn sample() -> Vec<Point> {
        vec![
            point("far", 10.0, 10.0),
            point("near", 0.1, 0.0),
            point("origin", 0.0, 0.0),
            point("mid", 1.0, 0.0),
        ]
    }

    #[test]
    fn test_ranked_results_are_sorted() {
        let points = sample();
        let ranked = rank_by_distance(&points, 0.0, 0.0, UNBOUNDED_RADIUS, None);
        assert_eq!(ranked.len(), 4);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].distance_meters <= w[1].distance_meters));
        assert_eq!(ranked[0].item.name, "origin");
    }

    #[test]
    fn test_truncation_keeps_prefix() {
        let points = sample();
        let all = nearest_n(&points, 0.0, 0.0, UNBOUNDED_RADIUS, None);
        for n in 0..=all.len() {
            let top = nearest_n(&points, 0.0, 0.0, UNBOUNDED_RADIUS, Some(n));
            assert_eq!(top, all[..n].to_vec());
        }
        assert!(nearest_n(&points, 0.0, 0.0, UNBOUNDED_RADIUS, Some(0)).is_empty());
    }

    #[test]
    fn test_radius_bounds_results() {
        let points = sample();
        // ~11.1 km to "near", ~111 km to "mid"
        let within = nearest_n(&points, 0.0, 0.0, 50_000.0, None);
        assert_eq!(names(&within), vec!["origin", "near"]);
    }

    #[test]
    fn test_zero_radius_only_matches_exact_position() {
        let points = sample();
        assert_eq!(names(&nearest_n(&points, 0.0, 0.0, 0.0, None)), vec!["origin"]);
        assert!(nearest_n(&points, 0.0, 0.0001, 0.0, None).is_empty());
        assert_eq!(nearest(&points, 1.0, 0.0, 0.0).map(|p| p.name), Some("mid"));
        assert!(nearest(&points, 1.0, 0.0001, 0.0).is_none());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let points = vec![
            point("east", 0.0, 1.0),
            point("north", 1.0, 0.0),
            point("west", 0.0, -1.0),
        ];
        let ranked = nearest_n(&points, 0.0, 0.0, UNBOUNDED_RADIUS, None);
        assert_eq!(names(&ranked), vec!["east", "north", "west"]);
        // Single nearest: first one seen wins the tie
        assert_eq!(nearest(&points, 0.0, 0.0, UNBOUNDED_RADIUS).map(|p| p.name), Some("east"));
    }

    #[test]
    fn test_nearest_matches_head_of_ranking() {
        let points = sample();
        let single = nearest(&points, 0.5, 0.2, UNBOUNDED_RADIUS);
        let ranked = nearest_n(&points, 0.5, 0.2, UNBOUNDED_RADIUS, Some(1));
        assert_eq!(single, ranked.first().copied());
    }

    #[test]
    fn test_empty_candidates() {
        let points: Vec<Point> = Vec::new();
        assert!(nearest(&points, 0.0, 0.0, UNBOUNDED_RADIUS).is_none());
        assert!(nearest_n(&points, 0.0, 0.0, UNBOUNDED_RADIUS, Some(5)).is_empty());
    }
}
