//! Test support shared across the static map workspace.
//!
//! - [`sources`]: in-memory tile sources (static, failing, counting), so no
//!   test talks to a tile server
//! - [`generators`]: synthetic PNG tiles
//! - [`fixtures`]: WKT geometries for the drawable shapes and their edge cases
//! - Float assertions for projected values
//!
//! Crates that `test-utils` itself depends on (`map-common`, `tile-fetcher`)
//! may only use it from their `tests/` directory.

pub mod fixtures;
pub mod generators;
pub mod sources;

pub use generators::*;
pub use sources::*;

/// Assert two numbers are within `epsilon` of each other.
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(148.08620001, 148.0862, 1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left = $left as f64;
        let right = $right as f64;
        let epsilon = $epsilon as f64;
        if !((left - right).abs() <= epsilon) {
            panic!(
                "assertion failed: `|left - right| <= {:e}`\n  left: {}\n right: {}",
                epsilon, left, right
            );
        }
    }};
}

/// Assert two values with `lon`/`lat` fields are within `epsilon` degrees
/// on both axes.
///
/// ```
/// use map_common::Coordinate;
/// use test_utils::assert_coordinate_approx_eq;
///
/// assert_coordinate_approx_eq!(
///     Coordinate::new(180.0, -9.9999999),
///     Coordinate::new(180.0, -10.0),
///     1e-6
/// );
/// ```
#[macro_export]
macro_rules! assert_coordinate_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let (left, right) = ($left, $right);
        $crate::assert_approx_eq!(left.lon, right.lon, $epsilon);
        $crate::assert_approx_eq!(left.lat, right.lat, $epsilon);
    }};
}
