mod common;
use std::collections::BTreeMap;

use anyhow::Result;
use nilcheck::{ErrorKind, Inspect, Kind, NilChecker, Segment};

#[derive(Inspect)]
struct Point(i32, Option<Box<i32>>);

#[derive(Inspect)]
struct Marker;

#[derive(Inspect)]
enum Shape {
    Circle { center: Point, radius: Option<Box<f64>> },
    Line(Option<Box<Point>>, Option<Box<Point>>),
    Empty,
}

#[derive(Inspect)]
struct Cached {
    value: u8,
    #[nilcheck(skip)]
    #[allow(unused)]
    memo: Option<Box<u8>>,
}

#[derive(Inspect)]
struct Wrapper<T> {
    inner: T,
}

#[derive(Inspect)]
struct Keyword {
    r#type: Option<Box<str>>,
}

#[derive(Inspect)]
struct Catalog<'a> {
    titles: BTreeMap<&'a str, Option<&'a Point>>,
}

fn steps(err: &nilcheck::CheckError) -> Vec<Segment> { err.path().unwrap().steps().cloned().collect() }

#[test]
fn tuple_struct_fields_are_numbered() {
    let err = nilcheck::check(&Point(1, None)).unwrap_err();
    assert_eq!(steps(&err), [Segment::Field("1")]);
    assert_eq!(nilcheck::check(&Point(1, Some(Box::new(2)))), Ok(()));
}

#[test]
fn unit_struct_has_no_children() {
    assert_eq!(Marker.kind(), Kind::Struct);
    assert_eq!(Marker.children().count(), 0);
    assert_eq!(nilcheck::check(&Marker), Ok(()));
}

#[test]
fn enum_reports_active_variant_fields() {
    let circle = Shape::Circle { center: Point(0, Some(Box::new(0))), radius: None };
    let err = nilcheck::check(&circle).unwrap_err();
    assert_eq!(steps(&err), [Segment::Field("Circle::radius")]);

    let line = Shape::Line(Some(Box::new(Point(0, Some(Box::new(0))))), Some(Box::new(Point(3, None))));
    let err = nilcheck::check(&line).unwrap_err();
    assert_eq!(steps(&err), [Segment::Field("Line::1"), Segment::Field("1")]);

    assert_eq!(nilcheck::check(&Shape::Empty), Ok(()));
}

#[test]
fn skipped_fields_are_not_visited() -> Result<()> {
    nilcheck::check(&Cached { value: 1, memo: None })?;
    Ok(())
}

#[test]
fn generic_parameters_are_inspected() {
    assert_eq!(nilcheck::check(&Wrapper { inner: 5u8 }), Ok(()));

    let err = nilcheck::check(&Wrapper { inner: None::<Box<u8>> }).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NilValue);
    assert_eq!(steps(&err), [Segment::Field("inner")]);
    assert_eq!(err.path().unwrap().segments()[0].to_string(), "Wrapper<Option<Box<u8>>>");
}

#[test]
fn raw_identifiers_are_unprefixed() {
    let err = nilcheck::check(&Keyword { r#type: None }).unwrap_err();
    assert_eq!(steps(&err), [Segment::Field("type")]);
    assert_eq!(nilcheck::check(&Keyword { r#type: Some("fn".into()) }), Ok(()));
}

#[test]
fn borrowed_fields_work_with_lifetimes() {
    let origin = Point(0, Some(Box::new(0)));
    let catalog = Catalog { titles: BTreeMap::from([("origin", Some(&origin)), ("unset", None)]) };

    let err = NilChecker::new().check(&catalog).unwrap_err();
    assert_eq!(steps(&err), [Segment::Field("titles"), Segment::Key("unset".to_owned())]);
}
