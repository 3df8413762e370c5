//! Tests for loading map styles from JSON.

use map_common::MapError;
use renderer::style::{MapStyle, Rgba8};
use std::io::Write;

#[test]
fn test_default_style_matches_osm_look() {
    let style = MapStyle::default();
    assert_eq!(style.background, Rgba8::rgb(0xc4, 0xe4, 0xff));
    assert_eq!(style.stroke.color, Rgba8::rgb(0, 0, 255));
    assert_eq!(style.stroke.width, 3.0);
    assert_eq!(style.fill, Rgba8::rgba(0, 0, 255, 51));
    assert_eq!(style.marker.radius, 8.0);
    assert_eq!(style.caption.lines[0].text, "(c) OpenStreetMap contributors");
    assert_eq!(
        style.caption.lines[1].text,
        "https://www.openstreetmap.org/copyright"
    );
    assert_eq!(style.error_text, "Error loading world map");
}

#[test]
fn test_full_style_from_json() {
    let json = r##"{
        "background": "#aad3df",
        "stroke": { "color": "#d63e2a", "width": 4.5 },
        "fill": "#d63e2a40",
        "marker": { "radius": 6, "fill": "#00ff00", "outline": "#000000", "outline_width": 1 },
        "caption": {
            "lines": [ { "text": "tiles: local", "color": "#333333" } ],
            "size": 10,
            "background": "#00000000"
        },
        "error_text": "no world tile",
        "error_color": "#ff00ff",
        "error_size": 18
    }"##;

    let style = MapStyle::from_json(json).unwrap();
    assert_eq!(style.background, Rgba8::rgb(0xaa, 0xd3, 0xdf));
    assert_eq!(style.stroke.width, 4.5);
    assert_eq!(style.fill.a, 0x40);
    assert_eq!(style.marker.fill, Rgba8::rgb(0, 255, 0));
    assert_eq!(style.caption.lines.len(), 1);
    assert_eq!(style.caption.background.a, 0);
    assert_eq!(style.error_text, "no world tile");
    assert_eq!(style.error_size, 18.0);
}

#[test]
fn test_json_round_trip() {
    let mut style = MapStyle::default();
    style.stroke.color = Rgba8::rgba(10, 20, 30, 40);
    let json = style.to_json().unwrap();
    assert!(json.contains("#0a141e28"));
    assert_eq!(MapStyle::from_json(&json).unwrap(), style);
}

#[test]
fn test_negative_width_rejected() {
    let err = MapStyle::from_json(r#"{ "stroke": { "width": -1 } }"#).unwrap_err();
    match err {
        MapError::InvalidParameter { param, .. } => assert_eq!(param, "stroke.width"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_malformed_json_rejected() {
    let err = MapStyle::from_json("{ not json").unwrap_err();
    assert!(matches!(err, MapError::InvalidParameter { .. }));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r##"{{ "background": "#ffffff" }}"##).unwrap();

    let style = MapStyle::from_file(file.path()).unwrap();
    assert_eq!(style.background, Rgba8::rgb(255, 255, 255));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MapStyle::from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, MapError::InvalidParameter { .. }));
}
