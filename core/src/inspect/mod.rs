//! The introspection capability the checker is written against.
//!
//! A value takes part in a check by implementing [`Inspect`]. The trait answers four
//! questions about a node: what structural [`Kind`] it has, whether it is absent, which
//! children it holds, and (for references and wrappers) what it points at. Implementations
//! for the standard library live in the submodules; user types get one from
//! `#[derive(Inspect)]`.

mod collections;
mod pointers;
mod primitives;
mod sync;

use std::fmt;

use crate::error::CheckError;

/// Structural classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Booleans, numbers, characters and the unit type
    Scalar,
    String,
    /// Pointer-like values that own or borrow a referent with a stable address
    Reference,
    /// Wrappers that hold at most one value without a stable identity of their own
    Interface,
    /// Aggregate by field: structs, tuples, enums
    Struct,
    /// Fixed-size sequence
    Array,
    /// Growable or borrowed sequence
    Slice,
    Map,
    Channel,
    Function,
    /// Anything the checker cannot classify; the name is reported back to the caller
    Other(&'static str),
}

impl Kind {
    /// Whether a value of this kind can legitimately hold no target.
    pub fn can_be_absent(&self) -> bool {
        matches!(self, Kind::Reference | Kind::Interface | Kind::Map | Kind::Slice | Kind::Channel | Kind::Function)
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Kind::Scalar => "scalar",
            Kind::String => "string",
            Kind::Reference => "reference",
            Kind::Interface => "interface",
            Kind::Struct => "struct",
            Kind::Array => "array",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Channel => "channel",
            Kind::Function => "function",
            Kind::Other(name) => name,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Stable token for "the same underlying storage" within one check.
///
/// The referent's type is part of the identity: a struct and its first field share an
/// address but are different nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    address: usize,
    type_name: &'static str,
}

impl Identity {
    pub fn of<T: Inspect + ?Sized>(referent: &T) -> Self {
        Self { address: referent as *const T as *const () as usize, type_name: referent.type_name() }
    }

    pub fn address(&self) -> usize { self.address }

    pub fn type_name(&self) -> &'static str { self.type_name }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}:{}", self.address, crate::util::short_type_name(self.type_name))
    }
}

/// A child of a composite node.
pub enum Child<'a> {
    /// A named field of a struct, tuple or enum variant
    Field(&'static str, &'a dyn Inspect),
    /// An element of an array or sequence
    Element(usize, &'a dyn Inspect),
    /// A key/value pair of a map. Sets report their members as keys with a unit value.
    Entry(&'a dyn Inspect, &'a dyn Inspect),
}

pub type Children<'a> = Box<dyn Iterator<Item = Child<'a>> + 'a>;

/// What a reference or wrapper exposes when asked for its target.
pub enum Referent<'a> {
    /// Target with a stable identity. Required for [`Kind::Reference`] nodes.
    Addressed(Identity, &'a dyn Inspect),
    /// Target held by value, e.g. the contents of an `Option` or a `RefCell`
    Held(&'a dyn Inspect),
    /// A target exists but cannot be reached right now (exclusively borrowed, locked, or gone)
    Unaddressable,
}

/// Callback handed to [`Inspect::with_referent`].
pub type ReferentVisitor<'v> = dyn FnMut(Referent<'_>) -> Result<(), CheckError> + 'v;

/// Runtime introspection of a value node.
pub trait Inspect {
    fn kind(&self) -> Kind;

    /// Full type name of this node, used for path segments and error messages.
    fn type_name(&self) -> &'static str { std::any::type_name::<Self>() }

    /// Only consulted when [`Kind::can_be_absent`] holds for [`Inspect::kind`].
    fn is_absent(&self) -> bool { false }

    /// Textual rendering used when this value appears as a map key.
    fn label(&self) -> Option<String> { None }

    fn children(&self) -> Children<'_> { Box::new(std::iter::empty()) }

    /// Hands the target of a reference or wrapper to `visit`. Guards (borrows, locks,
    /// upgraded weak pointers) are held for as long as `visit` runs.
    fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> { visit(Referent::Unaddressable) }
}
