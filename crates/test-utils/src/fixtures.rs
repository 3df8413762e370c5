//! Common test fixtures for static map tests.
//!
//! This module provides pre-defined geometries that represent common
//! scenarios in preview map rendering.

/// WKT geometries used across the test suite.
pub mod wkt {
    /// Sydney, Australia
    pub const SYDNEY: &str = "POINT(151.2093 -33.8688)";

    /// Melbourne, Australia
    pub const MELBOURNE: &str = "POINT(144.9631 -37.8136)";

    /// Suva, Fiji, a few degrees west of the antimeridian
    pub const SUVA: &str = "POINT(178.4419 -18.1416)";

    /// McMurdo Station, Antarctica
    pub const MCMURDO: &str = "POINT(166.6863 -77.8419)";

    /// Sydney to Melbourne
    pub const SYDNEY_MELBOURNE: &str = "LINESTRING(151.2093 -33.8688, 144.9631 -37.8136)";

    /// Rough outline of eastern Australia
    pub const EASTERN_AUSTRALIA: &str =
        "POLYGON((140 -10,155 -10,155 -40,140 -40,140 -10))";

    /// Box straddling the antimeridian
    pub const DATELINE_BOX: &str = "POLYGON((170 -10,-170 -10,-170 10,170 10,170 -10))";

    /// Path crossing the antimeridian twice (Fiji -> Samoa -> Fiji)
    pub const DATELINE_ROUND_TRIP: &str =
        "LINESTRING(178.4 -18.1, -171.8 -13.8, 178.4 -18.1)";

    /// Syntactically valid but not drawable
    pub const MULTIPOLYGON: &str =
        "MULTIPOLYGON(((0 0,1 0,1 1,0 1,0 0)),((5 5,6 5,6 6,5 6,5 5)))";

    /// Not WKT at all
    pub const GARBAGE: &str = "POINT(abc def";
}

/// Common bounding box definitions for testing, as
/// `(min_lon, min_lat, max_lon, max_lat)`.
pub mod bbox {
    /// Global bounding box (-180 to 180, -90 to 90)
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Sydney to Melbourne
    pub const SYDNEY_MELBOURNE: (f64, f64, f64, f64) = (144.9631, -37.8136, 151.2093, -33.8688);

    /// Single point (degenerate bbox)
    pub const POINT: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 0.0);
}
