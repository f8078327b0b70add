//! # nilcheck-core
//!
//! Deep structural validation of in-memory values. A [`NilChecker`] walks a value's fields,
//! elements and referents and reports the first absent reference (a `None`, a dropped
//! `Weak`) it finds, together with the path that leads to it.
//!
//! Values take part through the [`Inspect`] trait. The standard library's pointers,
//! wrappers, collections, tuples, channels and function types are covered here; user types
//! derive it with `#[derive(Inspect)]` from the `nilcheck` crate.
//!
//! Cycles formed through `Rc`, `Arc` or `Weak` terminate: a referent already visited during
//! the current check is treated as validated.

pub mod checker;
pub mod config;
pub mod error;
pub mod inspect;
pub mod logger;
pub mod path;
pub mod util;

pub use checker::NilChecker;
pub use config::{CheckerConfig, MapOrder};
pub use error::{CheckError, ErrorKind};
pub use inspect::{Child, Children, Identity, Inspect, Kind, Referent, ReferentVisitor};
pub use logger::{Logger, NoopLogger, RecordingLogger, TracingLogger};
pub use path::{Path, Segment};
pub use util::TypeName;

/// Checks `value` with a fresh checker using the default configuration and logger.
pub fn check<T: Inspect>(value: &T) -> Result<(), CheckError> { NilChecker::new().check(value) }
