use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    hash::BuildHasher,
    marker::PhantomData,
    rc::Rc,
    sync::Arc,
};

use super::{Child, Children, Inspect, Kind};

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn kind(&self) -> Kind { Kind::Array }

    fn children(&self) -> Children<'_> { Box::new(self.iter().enumerate().map(|(index, value)| Child::Element(index, value))) }
}

macro_rules! impl_sequence {
    ($($seq:ty),* $(,)?) => {
        $(
            impl<T: Inspect> Inspect for $seq {
                fn kind(&self) -> Kind { Kind::Slice }

                fn children(&self) -> Children<'_> {
                    Box::new(self.iter().enumerate().map(|(index, value)| Child::Element(index, value)))
                }
            }
        )*
    };
}

impl_sequence!(Vec<T>, VecDeque<T>, &[T], &mut [T], Box<[T]>, Rc<[T]>, Arc<[T]>);

impl<K: Inspect, V: Inspect, S: BuildHasher> Inspect for HashMap<K, V, S> {
    fn kind(&self) -> Kind { Kind::Map }

    fn children(&self) -> Children<'_> { Box::new(self.iter().map(|(key, value)| Child::Entry(key, value))) }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn kind(&self) -> Kind { Kind::Map }

    fn children(&self) -> Children<'_> { Box::new(self.iter().map(|(key, value)| Child::Entry(key, value))) }
}

// Sets are maps whose values carry no information.
impl<K: Inspect, S: BuildHasher> Inspect for HashSet<K, S> {
    fn kind(&self) -> Kind { Kind::Map }

    fn children(&self) -> Children<'_> { Box::new(self.iter().map(|key| Child::Entry(key, &()))) }
}

impl<K: Inspect> Inspect for BTreeSet<K> {
    fn kind(&self) -> Kind { Kind::Map }

    fn children(&self) -> Children<'_> { Box::new(self.iter().map(|key| Child::Entry(key, &()))) }
}

macro_rules! impl_tuple {
    ($(($($name:ident $index:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Inspect),+> Inspect for ($($name,)+) {
                fn kind(&self) -> Kind { Kind::Struct }

                fn children(&self) -> Children<'_> {
                    Box::new([$(Child::Field(stringify!($index), &self.$index)),+].into_iter())
                }
            }
        )*
    };
}

impl_tuple!(
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
    (A 0, B 1, C 2, D 3, E 4),
    (A 0, B 1, C 2, D 3, E 4, F 5),
);

impl<T: ?Sized> Inspect for PhantomData<T> {
    fn kind(&self) -> Kind { Kind::Struct }
}
