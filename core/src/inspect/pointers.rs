use std::{rc, sync};

use super::{Identity, Inspect, Kind, Referent, ReferentVisitor};
use crate::error::CheckError;

macro_rules! impl_pointer {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: Inspect> Inspect for $ptr {
                fn kind(&self) -> Kind { Kind::Reference }
                fn label(&self) -> Option<String> { (**self).label() }
                fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> {
                    let target: &T = self;
                    visit(Referent::Addressed(Identity::of(target), target))
                }
            }
        )*
    };
}

impl_pointer!(&T, &mut T, Box<T>, rc::Rc<T>, sync::Arc<T>);

// Trait objects are unsized, so they need their own impls next to the sized ones above.
macro_rules! impl_dyn_pointer {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl Inspect for $ptr {
                fn kind(&self) -> Kind { Kind::Reference }
                fn label(&self) -> Option<String> { (**self).label() }
                fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> {
                    let target: &dyn Inspect = &**self;
                    visit(Referent::Addressed(Identity::of(target), target))
                }
            }
        )*
    };
}

impl_dyn_pointer!(
    &(dyn Inspect + '_),
    &mut (dyn Inspect + '_),
    Box<dyn Inspect + '_>,
    Box<dyn Inspect + Send + Sync + '_>,
    rc::Rc<dyn Inspect + '_>,
    sync::Arc<dyn Inspect + '_>,
    sync::Arc<dyn Inspect + Send + Sync + '_>,
);

// A weak pointer whose target was dropped is the closest thing Rust has to a dangling
// reference; it reports itself as absent.
impl<T: Inspect> Inspect for rc::Weak<T> {
    fn kind(&self) -> Kind { Kind::Reference }

    fn is_absent(&self) -> bool { self.strong_count() == 0 }

    fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> {
        match self.upgrade() {
            Some(strong) => visit(Referent::Addressed(Identity::of(&*strong), &*strong)),
            None => visit(Referent::Unaddressable),
        }
    }
}

impl<T: Inspect> Inspect for sync::Weak<T> {
    fn kind(&self) -> Kind { Kind::Reference }

    fn is_absent(&self) -> bool { self.strong_count() == 0 }

    // The target can be dropped on another thread between `is_absent` and here.
    fn with_referent(&self, visit: &mut ReferentVisitor<'_>) -> Result<(), CheckError> {
        match self.upgrade() {
            Some(strong) => visit(Referent::Addressed(Identity::of(&*strong), &*strong)),
            None => visit(Referent::Unaddressable),
        }
    }
}

impl<T: ?Sized> Inspect for *const T {
    fn kind(&self) -> Kind { Kind::Other("raw pointer") }
}

impl<T: ?Sized> Inspect for *mut T {
    fn kind(&self) -> Kind { Kind::Other("raw pointer") }
}
