use std::{collections::HashMap, sync::mpsc};

use nilcheck::Inspect;
use tracing::Level;

#[derive(Debug, Default, Inspect)]
pub struct Record {
    pub name: String,
    pub number: i64,
    pub other_number: f64,
}

#[derive(Default, Inspect)]
pub struct Bundle {
    pub record: Record,
    pub pointer: Option<Box<Record>>,
    pub labels: Option<HashMap<String, String>>,
    pub attachments: Option<HashMap<String, Box<dyn Inspect>>>,
    pub tags: Option<Vec<String>>,
    pub any: Option<Box<dyn Inspect>>,
}

#[derive(Default, Inspect)]
pub struct Pipe {
    pub channel: Option<mpsc::Sender<i32>>,
}

#[derive(Inspect)]
pub struct Envelope {
    pub bundle: Bundle,
}

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() { let _ = tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().try_init(); }

/// A pipe with a live channel. The receiver is returned so the channel stays open.
#[allow(unused)]
pub fn open_pipe() -> (Pipe, mpsc::Receiver<i32>) {
    let (sender, receiver) = mpsc::channel();
    (Pipe { channel: Some(sender) }, receiver)
}

/// A bundle with every reference populated except those reached through `Pipe::default()`.
#[allow(unused)]
pub fn bundle_with_closed_pipe() -> Bundle {
    Bundle {
        pointer: Some(Box::new(Record::default())),
        labels: Some(HashMap::new()),
        attachments: Some(HashMap::from([("y".to_owned(), Box::new(Pipe::default()) as Box<dyn Inspect>)])),
        tags: Some(Vec::new()),
        any: Some(Box::new(Pipe::default())),
        ..Default::default()
    }
}
