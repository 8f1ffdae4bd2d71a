//! Integration tests for rectangles and JSON passthrough.

use std::collections::BTreeMap;

use selkit_objects::{JsonError, Rectangle, from_json, to_json};

#[test]
fn test_rectangle_area() {
    let r = Rectangle::new(10.0, 20.0);
    assert_eq!(r.width, 10.0);
    assert_eq!(r.height, 20.0);
    assert_eq!(r.area(), 200.0);
}

#[test]
fn test_area_tracks_field_changes() {
    let mut r = Rectangle::new(2.0, 3.0);
    r.width = 5.0;
    assert_eq!(r.area(), 15.0);
}

#[test]
fn test_to_json_rectangle() {
    let json = to_json(&Rectangle::new(10.0, 20.0)).unwrap();
    assert_eq!(json, r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_to_json_passthrough_values() {
    assert_eq!(to_json(&[1, 2]).unwrap(), "[1,2]");
    assert_eq!(to_json("text").unwrap(), r#""text""#);

    let mut map = BTreeMap::new();
    let _ = map.insert("height", 10);
    let _ = map.insert("width", 20);
    assert_eq!(to_json(&map).unwrap(), r#"{"height":10,"width":20}"#);
}

#[test]
fn test_from_json_gives_working_rectangle() {
    let r: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#).unwrap();
    assert_eq!(r, Rectangle::new(10.0, 20.0));
    assert_eq!(r.area(), 200.0);
}

#[test]
fn test_round_trip_rectangle() {
    let original = Rectangle::new(1.5, 4.0);
    let decoded: Rectangle = from_json(&to_json(&original).unwrap()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_from_json_rejects_wrong_shape() {
    let err = from_json::<Rectangle>(r#"{ "width": 10 }"#).unwrap_err();
    assert!(matches!(err, JsonError::Decode(_)));
    assert!(err.to_string().starts_with("failed to decode JSON"));
}

#[test]
fn test_from_json_rejects_invalid_text() {
    assert!(from_json::<Vec<u8>>("[1, 2").is_err());
}

#[test]
fn test_to_json_rejects_non_string_keys() {
    let mut map = BTreeMap::new();
    let _ = map.insert(vec![1_u8], 1);
    assert!(matches!(to_json(&map), Err(JsonError::Encode(_))));
}
