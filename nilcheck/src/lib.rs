//! # nilcheck
//!
//! Deep structural validation for in-memory values: walk everything reachable from a value
//! and fail on the first absent reference, reporting where it was found.
//!
//! ## Key Features
//!
//! - **Derive-based introspection**: `#[derive(Inspect)]` on structs and enums; the
//!   standard library's pointers, wrappers, collections and channels work out of the box
//! - **Cycle-safe**: graphs built from `Rc`, `Arc` and `Weak` terminate
//! - **Localized failures**: every error carries the path from the root to the offending node
//! - **Injected logging**: per-node trace and per-call summary go to a [`Logger`], `tracing`
//!   by default
//!
//! ## Example
//!
//! ```rust
//! use nilcheck::{ErrorKind, Inspect, NilChecker, Segment};
//!
//! #[derive(Inspect)]
//! struct Album {
//!     name: String,
//!     artist: Option<Box<Artist>>,
//!     year: u16,
//! }
//!
//! #[derive(Inspect)]
//! struct Artist {
//!     name: String,
//! }
//!
//! let mut checker = NilChecker::new();
//!
//! let complete = Album { name: "Origin of Symmetry".into(), artist: Some(Box::new(Artist { name: "Muse".into() })), year: 2001 };
//! assert!(checker.check(&complete).is_ok());
//!
//! let missing = Album { name: "Untitled".into(), artist: None, year: 2001 };
//! let err = checker.check(&missing).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NilValue);
//! assert!(err.path().unwrap().contains(&Segment::Field("artist")));
//! ```
//!
//! ## Concurrency
//!
//! [`NilChecker::check`] takes `&mut self`; a checker runs one check at a time. Use one
//! checker per thread, or the free function [`check`] which builds a fresh one per call.

pub use nilcheck_core::*;

#[cfg(feature = "derive")]
pub use nilcheck_derive::Inspect;
