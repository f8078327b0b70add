mod common;
use std::collections::HashMap;

use anyhow::Result;
use common::*;
use maplit::hashmap;
use nilcheck::{CheckError, ErrorKind, Inspect, NilChecker, Segment};

fn values_with_absent_references() -> Vec<Box<dyn Inspect>> {
    vec![
        Box::new(None::<Box<Record>>),
        Box::new(None::<Box<i32>>),
        Box::new(None::<HashMap<String, String>>),
        Box::new(None::<Vec<String>>),
        Box::new([None::<Box<i32>>]),
        Box::new(Pipe::default()),
        Box::new(hashmap! { "y".to_owned() => Box::new(Pipe::default()) as Box<dyn Inspect> }),
        Box::new(hashmap! { "y".to_owned() => None::<Box<i32>> }),
        Box::new(hashmap! { None::<Box<i32>> => "x".to_owned() }),
        Box::new(Envelope { bundle: bundle_with_closed_pipe() }),
        Box::new(None::<fn()>),
        Box::new(None::<Box<dyn Fn() -> u8>>),
    ]
}

fn noop() {}

#[test]
fn every_absent_reference_is_found() {
    let mut checker = NilChecker::new();
    for value in values_with_absent_references() {
        let result = checker.check_dyn(Some(&*value));
        assert!(result.is_err(), "should find an absent reference in {}", (*value).type_name());
    }
}

#[test]
fn populated_values_pass() -> Result<()> {
    let (pipe, _receiver) = open_pipe();
    let values: Vec<Box<dyn Inspect>> = vec![
        Box::new(Record::default()),
        Box::new(pipe),
        Box::new(6),
        Box::new("hello"),
        Box::new(HashMap::<String, String>::new()),
        Box::new([] as [Option<Box<i32>>; 0]),
        Box::new(Some(noop as fn())),
        Box::new(Some(Box::new(|| 1u8) as Box<dyn Fn() -> u8>)),
    ];

    let mut checker = NilChecker::new();
    for value in &values {
        checker.check_dyn(Some(&**value))?;
    }
    Ok(())
}

#[test]
fn untyped_input_is_not_a_nil_value() {
    let err = NilChecker::new().check_dyn(None).unwrap_err();
    assert_eq!(err, CheckError::InvalidInput);
    assert_eq!(err.path(), None);
}

#[test]
fn nested_failure_reports_full_path() {
    let envelope = Envelope { bundle: bundle_with_closed_pipe() };
    let err = nilcheck::check(&envelope).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NilValue);
    let path = err.path().unwrap();
    assert_eq!(
        path.steps().cloned().collect::<Vec<_>>(),
        [Segment::Field("bundle"), Segment::Field("attachments"), Segment::Key("y".to_owned()), Segment::Field("channel")]
    );
    assert_eq!(err.type_name().unwrap().short(), "Option<Sender<i32>>");
    assert!(err.to_string().starts_with("Option<Sender<i32>> is absent at Envelope → bundle → Bundle"), "{err}");
}

#[test]
fn second_field_absent() {
    let bundle = Bundle { record: Record { name: "first".into(), number: 1, other_number: 1.5 }, ..Default::default() };
    let err = nilcheck::check(&bundle).unwrap_err();
    assert_eq!(err.path().unwrap().steps().next(), Some(&Segment::Field("pointer")));
}

#[test]
fn slice_element_one_absent() {
    #[derive(Inspect)]
    struct Shelf {
        records: Vec<Option<Box<Record>>>,
    }

    let shelf = Shelf { records: vec![Some(Box::default()), None, Some(Box::default())] };
    let err = nilcheck::check(&shelf).unwrap_err();
    assert_eq!(err.path().unwrap().steps().cloned().collect::<Vec<_>>(), [Segment::Field("records"), Segment::Index(1)]);
    assert!(err.to_string().contains("[1]"), "{err}");
}

#[test]
fn map_key_is_rendered_into_path() {
    let scores = hashmap! { 7u32 => Some(Box::new(1.0f64)), 11u32 => None };
    let err = nilcheck::check(&scores).unwrap_err();
    assert_eq!(err.path().unwrap().last(), Some(&Segment::Type(nilcheck::TypeName(std::any::type_name::<Option<Box<f64>>>()))));
    assert!(err.path().unwrap().contains(&Segment::Key("11".to_owned())));
}

#[test]
fn absent_map_key() {
    let err = nilcheck::check(&hashmap! { None::<Box<i32>> => "x" }).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NilMapKey);
    assert_eq!(err.type_name().unwrap().short(), "Option<Box<i32>>");
}

#[test]
fn empty_collections_are_valid() -> Result<()> {
    nilcheck::check(&Vec::<Option<Box<Record>>>::new())?;
    nilcheck::check(&HashMap::<String, Option<Box<Record>>>::new())?;
    nilcheck::check(&Some(Vec::<String>::new()))?;
    Ok(())
}

#[test]
fn channel_present_and_absent() {
    let (pipe, _receiver) = open_pipe();
    assert_eq!(nilcheck::check(&pipe), Ok(()));
    assert_eq!(nilcheck::check(&Pipe::default()).map_err(|e| e.kind()), Err(ErrorKind::NilValue));
}

#[test]
fn function_present_and_absent() {
    let handler: Option<fn(u8) -> u8> = Some(|x| x + 1);
    assert_eq!(nilcheck::check(&handler), Ok(()));

    let err = nilcheck::check(&None::<Box<dyn Fn() -> u8>>).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NilValue);
    assert_eq!(err.type_name().unwrap().short(), "Option<Box<dyn Fn() -> u8>>");
}
