//! Wrappers that hold a value without a stable identity of their own, and channel handles.

use std::{
    cell::RefCell,
    sync::{mpsc, Mutex, RwLock, TryLockError},
};

use super::{Inspect, Kind, Referent, ReferentVisitor};
use crate::error::CheckError;

impl<T: Inspect> Inspect for Option<T> {
    fn kind(&self) -> Kind { Kind::Interface }

    fn is_absent(&self) -> bool { self.is_none() }

    fn label(&self) -> Option<String> { self.as_ref().and_then(|value| value.label()) }

    fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> {
        match self {
            Some(value) => visit(Referent::Held(value)),
            None => visit(Referent::Unaddressable),
        }
    }
}

// An outstanding mutable borrow means the contents cannot be looked at right now.
impl<T: Inspect> Inspect for RefCell<T> {
    fn kind(&self) -> Kind { Kind::Interface }

    fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> {
        match self.try_borrow() {
            Ok(guard) => visit(Referent::Held(&*guard)),
            Err(_) => visit(Referent::Unaddressable),
        }
    }
}

// Never blocks. A poisoned lock still holds a value worth checking.
impl<T: Inspect> Inspect for Mutex<T> {
    fn kind(&self) -> Kind { Kind::Interface }

    fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> {
        match self.try_lock() {
            Ok(guard) => visit(Referent::Held(&*guard)),
            Err(TryLockError::Poisoned(poisoned)) => visit(Referent::Held(&*poisoned.into_inner())),
            Err(TryLockError::WouldBlock) => visit(Referent::Unaddressable),
        }
    }
}

impl<T: Inspect> Inspect for RwLock<T> {
    fn kind(&self) -> Kind { Kind::Interface }

    fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> {
        match self.try_read() {
            Ok(guard) => visit(Referent::Held(&*guard)),
            Err(TryLockError::Poisoned(poisoned)) => visit(Referent::Held(&*poisoned.into_inner())),
            Err(TryLockError::WouldBlock) => visit(Referent::Unaddressable),
        }
    }
}

impl<T> Inspect for mpsc::Sender<T> {
    fn kind(&self) -> Kind { Kind::Channel }
}

impl<T> Inspect for mpsc::SyncSender<T> {
    fn kind(&self) -> Kind { Kind::Channel }
}

impl<T> Inspect for mpsc::Receiver<T> {
    fn kind(&self) -> Kind { Kind::Channel }
}
