use thiserror::Error;

use crate::{path::Path, util::TypeName};

/// A violation found while checking a value. Only the first violation in traversal order
/// is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The supplied value carries no type information at all
    #[error("supplied value is not valid: it carries no type information")]
    InvalidInput,

    #[error("{type_name} is absent at {path}")]
    NilValue { path: Path, type_name: TypeName },

    #[error("map key of type {type_name} is absent at {path}")]
    NilMapKey { path: Path, type_name: TypeName },

    /// A present reference whose target cannot be reached (contended lock, outstanding
    /// mutable borrow, or no stable identity)
    #[error("cannot address the target of {type_name} at {path}")]
    Unaddressable { path: Path, type_name: TypeName },

    #[error("unhandled kind '{kind}' of {type_name} at {path}")]
    UnsupportedKind { path: Path, type_name: TypeName, kind: &'static str },

    #[error("maximum depth of {limit} exceeded at {path}")]
    DepthExceeded { path: Path, limit: usize },
}

/// Discriminant of a [`CheckError`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NilValue,
    NilMapKey,
    Unaddressable,
    UnsupportedKind,
    DepthExceeded,
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::InvalidInput => ErrorKind::InvalidInput,
            CheckError::NilValue { .. } => ErrorKind::NilValue,
            CheckError::NilMapKey { .. } => ErrorKind::NilMapKey,
            CheckError::Unaddressable { .. } => ErrorKind::Unaddressable,
            CheckError::UnsupportedKind { .. } => ErrorKind::UnsupportedKind,
            CheckError::DepthExceeded { .. } => ErrorKind::DepthExceeded,
        }
    }

    /// Where the violation happened. `None` only for [`CheckError::InvalidInput`].
    pub fn path(&self) -> Option<&Path> {
        match self {
            CheckError::InvalidInput => None,
            CheckError::NilValue { path, .. }
            | CheckError::NilMapKey { path, .. }
            | CheckError::Unaddressable { path, .. }
            | CheckError::UnsupportedKind { path, .. }
            | CheckError::DepthExceeded { path, .. } => Some(path),
        }
    }

    /// Type of the offending node, where one is known.
    pub fn type_name(&self) -> Option<TypeName> {
        match self {
            CheckError::NilValue { type_name, .. }
            | CheckError::NilMapKey { type_name, .. }
            | CheckError::Unaddressable { type_name, .. }
            | CheckError::UnsupportedKind { type_name, .. } => Some(*type_name),
            CheckError::InvalidInput | CheckError::DepthExceeded { .. } => None,
        }
    }
}
