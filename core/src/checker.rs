//! The traversal engine.

use std::{collections::HashSet, fmt, sync::Arc};

use crate::{
    config::{CheckerConfig, MapOrder},
    error::CheckError,
    inspect::{Child, Identity, Inspect, Kind, Referent},
    logger::{Level, Logger, TracingLogger},
    path::{Segment, Trail},
    util::TypeName,
};

/// Walks a value graph depth-first and reports the first absent reference it meets.
///
/// A checker carries per-call state (the visited identities), which is why [`check`]
/// takes `&mut self`: one instance serves one check at a time. Use a checker per thread
/// when checking concurrently.
///
/// [`check`]: NilChecker::check
pub struct NilChecker {
    config: CheckerConfig,
    logger: Arc<dyn Logger>,
    /// Visited identities in the order they were first reached
    visited: Vec<Identity>,
    seen: HashSet<Identity>,
}

impl NilChecker {
    pub fn new() -> Self {
        Self { config: CheckerConfig::default(), logger: Arc::new(TracingLogger), visited: Vec::new(), seen: HashSet::new() }
    }

    pub fn with_config(mut self, config: CheckerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = Some(max_depth);
        self
    }

    pub fn with_map_order(mut self, map_order: MapOrder) -> Self {
        self.config.map_order = map_order;
        self
    }

    pub fn config(&self) -> &CheckerConfig { &self.config }

    /// Identities recorded by the most recent check, in first-visit order.
    pub fn visited(&self) -> &[Identity] { &self.visited }

    pub fn check<T: Inspect>(&mut self, value: &T) -> Result<(), CheckError> { self.check_dyn(Some(value)) }

    /// Checks a type-erased value. `None` stands for a value without any type information
    /// and fails with [`CheckError::InvalidInput`].
    #[cfg_attr(feature = "instrument", tracing::instrument(level = "debug", skip_all))]
    pub fn check_dyn(&mut self, value: Option<&dyn Inspect>) -> Result<(), CheckError> {
        let Some(root) = value else {
            return Err(CheckError::InvalidInput);
        };

        self.visited.clear();
        self.seen.clear();
        // The root is reachable again only through a cycle; treat it as already entered.
        self.seen.insert(Identity::of(root));

        let result = self.visit(root, None, 0);
        self.logger.emit(
            Level::DEBUG,
            format_args!("checked {}: visited reference identities {:?}", TypeName(root.type_name()), self.visited),
        );
        result
    }

    fn visit(&mut self, node: &dyn Inspect, parent: Option<&Trail<'_>>, depth: usize) -> Result<(), CheckError> {
        let type_name = TypeName(node.type_name());
        let segment = Segment::Type(type_name);
        let trail = match parent {
            Some(parent) => parent.push(segment),
            None => Trail::root(segment),
        };
        self.logger.emit(Level::TRACE, format_args!("path: {trail}"));

        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(CheckError::DepthExceeded { path: trail.to_path(), limit });
            }
        }

        let kind = node.kind();
        if kind.can_be_absent() && node.is_absent() {
            return Err(CheckError::NilValue { path: trail.to_path(), type_name });
        }

        match kind {
            Kind::Reference => node.with_referent(&mut |referent| match referent {
                Referent::Addressed(identity, target) => {
                    // Already on the way down (or fully checked): this closes a cycle.
                    if !self.seen.insert(identity) {
                        return Ok(());
                    }
                    self.visited.push(identity);
                    self.visit(target, Some(&trail), depth + 1)
                }
                Referent::Held(_) | Referent::Unaddressable => Err(CheckError::Unaddressable { path: trail.to_path(), type_name }),
            }),
            Kind::Interface => node.with_referent(&mut |referent| match referent {
                Referent::Addressed(_, target) | Referent::Held(target) => self.visit(target, Some(&trail), depth + 1),
                Referent::Unaddressable => Err(CheckError::Unaddressable { path: trail.to_path(), type_name }),
            }),
            Kind::Struct | Kind::Array | Kind::Slice => self.visit_children(node.children(), &trail, depth),
            Kind::Map => match self.config.map_order {
                MapOrder::Native => self.visit_children(node.children(), &trail, depth),
                MapOrder::Sorted => {
                    let mut entries: Vec<Child<'_>> = node.children().collect();
                    entries.sort_by_cached_key(|child| match child {
                        Child::Entry(key, _) => Some(key_label(*key)),
                        _ => None,
                    });
                    self.visit_children(entries.into_iter(), &trail, depth)
                }
            },
            Kind::Channel | Kind::Function | Kind::Scalar | Kind::String => Ok(()),
            Kind::Other(kind) => Err(CheckError::UnsupportedKind { path: trail.to_path(), type_name, kind }),
        }
    }

    fn visit_children<'c>(
        &mut self,
        children: impl Iterator<Item = Child<'c>>,
        trail: &Trail<'_>,
        depth: usize,
    ) -> Result<(), CheckError> {
        for child in children {
            match child {
                Child::Field(name, value) => self.visit(value, Some(&trail.push(Segment::Field(name))), depth + 1)?,
                Child::Element(index, value) => self.visit(value, Some(&trail.push(Segment::Index(index))), depth + 1)?,
                Child::Entry(key, value) => {
                    if key.kind().can_be_absent() && key.is_absent() {
                        return Err(CheckError::NilMapKey { path: trail.to_path(), type_name: TypeName(key.type_name()) });
                    }
                    self.visit(value, Some(&trail.push(Segment::Key(key_label(key)))), depth + 1)?
                }
            }
        }
        Ok(())
    }
}

/// Rendering of a map key for its path segment. Keys without a textual form render as
/// their type.
fn key_label(key: &dyn Inspect) -> String { key.label().unwrap_or_else(|| format!("<{} value>", TypeName(key.type_name()))) }

impl Default for NilChecker {
    fn default() -> Self { Self::new() }
}

impl fmt::Debug for NilChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NilChecker").field("config", &self.config).field("visited", &self.visited).finish_non_exhaustive()
    }
}
