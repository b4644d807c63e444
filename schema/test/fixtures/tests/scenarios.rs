#![allow(clippy::approx_constant)]

use serde_json::json;
use wiretype::{
    codec::{from_wire, to_wire, validate_record, validate_value},
    core::value::{RecordValue, UnboxedValue, UnionValue},
    prelude::*,
};
use wiretype_testing_fixtures::{
    A, A_MODEL, B, B_MODEL, C, C_MODEL, Circle, LOCATION, Location, OFFSET, Offset, POINT, Point,
    RECTANGLE, Rectangle, SHAPE, Shape,
};

fn offset(v: f64) -> Offset {
    Offset::from_f64(v).expect("finite offset")
}

fn point(left: f64, top: f64) -> Point {
    Point::new(offset(left), offset(top)).expect("valid point")
}

fn float(v: f64) -> Value {
    Value::Float(Float64::try_new(v).expect("finite"))
}

///
/// Unboxed
///

#[test]
fn offset_over_float_validates() {
    let value = offset(1.2);

    assert_eq!(value.get(), 1.2);
    assert!(UnboxedValue::new(&OFFSET, float(1.2)).is_ok());
}

#[test]
fn offset_over_text_is_a_type_mismatch() {
    let err = UnboxedValue::new(&OFFSET, Value::from("x")).unwrap_err();

    assert!(matches!(err, ValidateError::TypeMismatch { .. }));
    assert_eq!(err.to_string(), "type mismatch at $: expected Float, found \"x\"");
}

#[test]
fn non_finite_float_is_not_an_offset() {
    assert!(Offset::from_f64(f64::NAN).is_none());
    assert!(Offset::from_f64(f64::INFINITY).is_none());
}

///
/// Record
///

#[test]
fn point_serializes_with_alias() {
    let point = point(3.14, 1.592);
    let wire = to_wire(&point);

    assert_eq!(wire, json!({ "x": 3.14, "top": 1.592 }));
    assert_eq!(from_wire::<Point>(&wire).expect("point"), point);
}

#[test]
fn point_rejects_bare_float_for_offset() {
    let err = RecordValue::new(&POINT, vec![float(3.14), offset(1.592).to_value()]).unwrap_err();

    assert_eq!(err.field(), Some("left"));
}

///
/// Union
///

#[test]
fn rectangle_of_points_validates() {
    let rectangle = Rectangle::new(point(0.0, 1.0), point(1.0, 0.0)).expect("rectangle");

    assert!(validate_value(&rectangle.to_value(), &Shape::type_model()).is_ok());
}

#[test]
fn rectangle_with_int_corner_names_the_field() {
    let err = UnionValue::from_tag(
        &SHAPE,
        &RECTANGLE,
        vec![Value::Int(1), point(1.0, 0.0).to_value()],
    )
    .unwrap_err();

    assert_eq!(err.field(), Some("upper_left"));
    assert!(matches!(err, ValidateError::TypeMismatch { .. }));
}

#[test]
fn shape_itself_cannot_be_instantiated() {
    let err = UnionValue::new(&SHAPE, "shape", vec![]).unwrap_err();

    assert!(matches!(err, ValidateError::UnknownTag { .. }));
}

#[test]
fn every_variant_constructs() {
    let shapes: [Shape; 2] = [
        Rectangle::new(point(0.0, 1.0), point(1.0, 0.0))
            .expect("rectangle")
            .into(),
        Circle::new(point(0.0, 0.0), offset(2.0))
            .expect("circle")
            .into(),
    ];

    for shape in shapes {
        let wire = to_wire(&shape);
        assert_eq!(from_wire::<Shape>(&wire).expect("shape"), shape);
    }
}

///
/// Wrapper chain
///

#[test]
fn chain_of_wrappers_validates() {
    let a = A::new("x".to_string()).expect("a");
    let b = B::new(a).expect("b");
    let c = C::new(b).expect("c");

    assert_eq!(c.get().get().get(), "x");
    assert_eq!(to_wire(&c), json!("x"));
    assert_eq!(from_wire::<C>(&json!("x")).expect("c"), c);
}

#[test]
fn raw_text_where_wrapper_required_fails() {
    let err = UnboxedValue::new(&B_MODEL, Value::from("x")).unwrap_err();
    assert!(matches!(err, ValidateError::TypeMismatch { .. }));

    // the right wrapper at the wrong depth fails too
    let a = A::new("x".to_string()).expect("a").to_value();
    assert!(UnboxedValue::new(&C_MODEL, a.clone()).is_err());
    assert!(UnboxedValue::new(&B_MODEL, a).is_ok());
    assert!(UnboxedValue::new(&A_MODEL, Value::from("x")).is_ok());
}

///
/// Optional field
///

#[test]
fn location_with_absent_name_round_trips() {
    let location = Location::new(
        None,
        "3.14".parse().expect("lat"),
        "1.592".parse().expect("lng"),
    )
    .expect("location");

    assert!(validate_record(&location).is_ok());

    let wire = to_wire(&location);
    assert_eq!(wire, json!({ "name": null, "lat": "3.14", "lng": "1.592" }));
    assert_eq!(from_wire::<Location>(&wire).expect("location"), location);
}

#[test]
fn constructed_values_expose_their_fields() {
    let circle = Circle::new(point(1.0, 2.0), offset(3.0)).expect("circle");
    assert_eq!(circle.origin().top(), offset(2.0));
    assert_eq!(circle.radius().get(), 3.0);

    let location = Location::new(
        Some("Seoul".to_string()),
        "37.5665".parse().expect("lat"),
        "126.9780".parse().expect("lng"),
    )
    .expect("location");
    assert_eq!(location.name(), Some("Seoul"));
    assert_eq!(location.lat().to_string(), "37.5665");
}

#[test]
fn location_name_rejects_non_text() {
    let lat = Value::Decimal("3.14".parse().expect("lat"));
    let lng = Value::Decimal("1.592".parse().expect("lng"));

    let err = RecordValue::new(&LOCATION, vec![Value::Int(7), lat, lng]).unwrap_err();
    assert_eq!(err.field(), Some("name"));
}
