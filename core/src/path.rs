//! Paths from the traversal root to a node.
//!
//! While walking, the checker keeps the path as a chain of [`Trail`] frames living on the
//! call stack: every recursive step links a new frame to its parent and nothing is ever
//! mutated or popped. A [`Path`] is only materialized when a violation is reported.

use std::fmt;

use crate::util::TypeName;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Type of the node visited at this step
    Type(TypeName),
    Field(&'static str),
    Index(usize),
    /// Rendered map key
    Key(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Type(name) => fmt::Display::fmt(name, f),
            Segment::Field(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "[{index}]"),
            Segment::Key(key) => write!(f, "[{key:?}]"),
        }
    }
}

const SEPARATOR: &str = " → ";

/// Owned path reported with a violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn segments(&self) -> &[Segment] { &self.0 }

    pub fn last(&self) -> Option<&Segment> { self.0.last() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn contains(&self, segment: &Segment) -> bool { self.0.contains(segment) }

    /// Field names, indices and keys only, without the type name of every step.
    pub fn steps(&self) -> impl Iterator<Item = &Segment> { self.0.iter().filter(|segment| !matches!(segment, Segment::Type(_))) }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        Ok(())
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self { Path(iter.into_iter().collect()) }
}

/// One frame of the in-flight path. Frames borrow their parent, so a branch can never
/// observe segments pushed by a sibling.
pub(crate) struct Trail<'p> {
    segment: Segment,
    parent: Option<&'p Trail<'p>>,
}

impl<'p> Trail<'p> {
    pub fn root(segment: Segment) -> Self { Trail { segment, parent: None } }

    pub fn push(&'p self, segment: Segment) -> Trail<'p> { Trail { segment, parent: Some(self) } }

    pub fn to_path(&self) -> Path {
        let mut segments = Vec::new();
        let mut frame = Some(self);
        while let Some(current) = frame {
            segments.push(current.segment.clone());
            frame = current.parent;
        }
        segments.reverse();
        Path(segments)
    }
}

impl fmt::Display for Trail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            fmt::Display::fmt(parent, f)?;
            f.write_str(SEPARATOR)?;
        }
        fmt::Display::fmt(&self.segment, f)
    }
}
