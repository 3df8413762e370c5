//! Splitting of rings and paths that cross the ±180° meridian.
//!
//! Two consecutive vertices more than 180° of longitude apart are taken to
//! cross the antimeridian rather than the whole globe. Projected naively
//! they produce a stroke across the full width of the map, so the geometry
//! is cut at the crossing and each fragment is drawn on its own.

use map_common::Coordinate;

/// Longitude of the antimeridian.
const DATELINE: f64 = 180.0;

/// Direction of travel across the antimeridian between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingDirection {
    /// From positive to negative longitude (east hemisphere into west).
    West,
    /// From negative to positive longitude.
    East,
    None,
}

/// Classify the segment `a -> b`.
///
/// A segment crosses when `|a.lon - b.lon| > 180` and the endpoints lie on
/// opposite sides of the prime meridian.
pub fn crosses_antimeridian(a: Coordinate, b: Coordinate) -> CrossingDirection {
    if (a.lon - b.lon).abs() <= DATELINE {
        return CrossingDirection::None;
    }
    if a.lon > 0.0 && b.lon < 0.0 {
        CrossingDirection::West
    } else if a.lon < 0.0 && b.lon > 0.0 {
        CrossingDirection::East
    } else {
        CrossingDirection::None
    }
}

/// Latitude assigned to the boundary vertex of `a -> b`:
/// `a.lat + (180 - |a.lon|) / |a.lon - b.lon| * (b.lat - a.lat)`.
fn crossing_latitude(a: Coordinate, b: Coordinate) -> f64 {
    let ratio = (DATELINE - a.lon.abs()) / (a.lon - b.lon).abs();
    a.lat + ratio * (b.lat - a.lat)
}

/// Whether any segment of `coords` (optionally including the closing
/// segment back to the first vertex) crosses.
fn has_crossing(coords: &[Coordinate], closed: bool) -> bool {
    let pairs = coords.windows(2).map(|w| (w[0], w[1]));
    let closing = match (closed, coords.first(), coords.last()) {
        (true, Some(first), Some(last)) if coords.len() > 1 => Some((*last, *first)),
        _ => None,
    };
    pairs
        .chain(closing)
        .any(|(a, b)| crosses_antimeridian(a, b) != CrossingDirection::None)
}

/// Split a polygon ring into a west part (longitude < 0) and an east part
/// (longitude >= 0).
///
/// Every original vertex lands in exactly one part, in ring order. At each
/// crossing a boundary vertex at the crossing latitude is appended to both
/// parts: `+180` to the east part and `-180` to the west part. Empty parts
/// are omitted. A ring without a crossing is returned unchanged as the only
/// part.
pub fn split_ring(ring: &[Coordinate]) -> Vec<Vec<Coordinate>> {
    if !has_crossing(ring, true) {
        return vec![ring.to_vec()];
    }

    let mut west = Vec::new();
    let mut east = Vec::new();

    for (i, &current) in ring.iter().enumerate() {
        let next = ring[(i + 1) % ring.len()];

        if current.lon < 0.0 {
            west.push(current);
        } else {
            east.push(current);
        }

        match crosses_antimeridian(current, next) {
            CrossingDirection::West => {
                let lat = crossing_latitude(current, next);
                east.push(Coordinate::new(DATELINE, lat));
                west.push(Coordinate::new(-DATELINE, lat));
            }
            CrossingDirection::East => {
                let lat = crossing_latitude(current, next);
                west.push(Coordinate::new(-DATELINE, lat));
                east.push(Coordinate::new(DATELINE, lat));
            }
            CrossingDirection::None => {}
        }
    }

    [west, east]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect()
}

/// Split an open path into segments at each antimeridian crossing.
///
/// The segment being built ends with a boundary vertex on its own side of
/// the line (`+180` when going west, `-180` when going east) and the next
/// segment starts from the opposite boundary at the same latitude. A path
/// without a crossing is returned unchanged as the only segment.
pub fn split_path(path: &[Coordinate]) -> Vec<Vec<Coordinate>> {
    if !has_crossing(path, false) {
        return vec![path.to_vec()];
    }

    let mut segments = Vec::new();
    let mut current: Vec<Coordinate> = Vec::new();

    for (i, &vertex) in path.iter().enumerate() {
        current.push(vertex);

        let Some(&next) = path.get(i + 1) else {
            break;
        };

        let (end, start) = match crosses_antimeridian(vertex, next) {
            CrossingDirection::West => (DATELINE, -DATELINE),
            CrossingDirection::East => (-DATELINE, DATELINE),
            CrossingDirection::None => continue,
        };

        let lat = crossing_latitude(vertex, next);
        current.push(Coordinate::new(end, lat));
        segments.push(std::mem::take(&mut current));
        current.push(Coordinate::new(start, lat));
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lon: f64, lat: f64) -> Coordinate {
        Coordinate::new(lon, lat)
    }

    #[test]
    fn test_direction() {
        assert_eq!(crosses_antimeridian(c(170.0, 0.0), c(-170.0, 0.0)), CrossingDirection::West);
        assert_eq!(crosses_antimeridian(c(-170.0, 0.0), c(170.0, 0.0)), CrossingDirection::East);
        assert_eq!(crosses_antimeridian(c(-90.0, 0.0), c(89.0, 0.0)), CrossingDirection::None);
        assert_eq!(crosses_antimeridian(c(10.0, 0.0), c(20.0, 0.0)), CrossingDirection::None);
    }

    #[test]
    fn test_crossing_latitude() {
        // ratio = 10 / 340
        let lat = crossing_latitude(c(170.0, 0.0), c(-170.0, 34.0));
        assert!((lat - 1.0).abs() < 1e-12);
        let flat = crossing_latitude(c(-175.0, -20.0), c(175.0, -20.0));
        assert!((flat + 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_ring_without_crossing_unchanged() {
        let ring = vec![c(0.0, 0.0), c(10.0, 0.0), c(10.0, 10.0), c(0.0, 0.0)];
        assert_eq!(split_ring(&ring), vec![ring]);
    }

    #[test]
    fn test_ring_straddling_dateline() {
        let ring = vec![
            c(170.0, -10.0),
            c(-170.0, -10.0),
            c(-170.0, 10.0),
            c(170.0, 10.0),
            c(170.0, -10.0),
        ];
        let parts = split_ring(&ring);
        assert_eq!(parts.len(), 2);

        let west = &parts[0];
        let east = &parts[1];
        assert_eq!(
            west,
            &vec![c(-180.0, -10.0), c(-170.0, -10.0), c(-170.0, 10.0), c(-180.0, 10.0)]
        );
        assert_eq!(
            east,
            &vec![c(170.0, -10.0), c(180.0, -10.0), c(180.0, 10.0), c(170.0, 10.0), c(170.0, -10.0)]
        );
    }

    #[test]
    fn test_path_without_crossing_unchanged() {
        let path = vec![c(151.2093, -33.8688), c(144.9631, -37.8136)];
        assert_eq!(split_path(&path), vec![path]);
    }

    #[test]
    fn test_path_going_west() {
        let path = vec![c(160.0, 0.0), c(170.0, 0.0), c(-170.0, 34.0), c(-160.0, 34.0)];
        let segments = split_path(&path);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0][..2], [c(160.0, 0.0), c(170.0, 0.0)]);
        assert_eq!(segments[0][2].lon, 180.0);
        assert!((segments[0][2].lat - 1.0).abs() < 1e-12);
        assert_eq!(segments[1][0].lon, -180.0);
        assert_eq!(segments[1][0].lat, segments[0][2].lat);
        assert_eq!(segments[1][1..], [c(-170.0, 34.0), c(-160.0, 34.0)]);
    }

    #[test]
    fn test_path_going_east() {
        let path = vec![c(-170.0, 0.0), c(170.0, 0.0)];
        let segments = split_path(&path);
        assert_eq!(
            segments,
            vec![
                vec![c(-170.0, 0.0), c(-180.0, 0.0)],
                vec![c(180.0, 0.0), c(170.0, 0.0)],
            ]
        );
    }

    #[test]
    fn test_path_crossing_twice() {
        let path = vec![c(170.0, 0.0), c(-170.0, 0.0), c(170.0, 0.0)];
        assert_eq!(split_path(&path).len(), 3);
    }
}
