use std::{borrow::Cow, rc::Rc, sync::Arc};

use super::{Inspect, Kind};

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn kind(&self) -> Kind { Kind::Scalar }
                fn label(&self) -> Option<String> { Some(self.to_string()) }
            }
        )*
    };
}

impl_scalar!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Inspect for () {
    fn kind(&self) -> Kind { Kind::Scalar }
    fn label(&self) -> Option<String> { Some("()".to_owned()) }
}

// `str` is unsized, so every way of holding one is a string node in its own right.
macro_rules! impl_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn kind(&self) -> Kind { Kind::String }
                fn label(&self) -> Option<String> { Some(self.to_string()) }
            }
        )*
    };
}

impl_string!(String, &str, &mut str, Box<str>, Rc<str>, Arc<str>, Cow<'_, str>);

// Function pointers and closures are leaves: present or absent, never descended into.
macro_rules! impl_function {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Inspect for fn($($arg),*) -> R {
            fn kind(&self) -> Kind { Kind::Function }
        }
    };
}

impl_function!();
impl_function!(A);
impl_function!(A, B);
impl_function!(A, B, C);

macro_rules! impl_closure {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Inspect for Box<dyn Fn($($arg),*) -> R + '_> {
            fn kind(&self) -> Kind { Kind::Function }
        }
        impl<R, $($arg),*> Inspect for Box<dyn Fn($($arg),*) -> R + Send + Sync + '_> {
            fn kind(&self) -> Kind { Kind::Function }
        }
        impl<R, $($arg),*> Inspect for Arc<dyn Fn($($arg),*) -> R + Send + Sync + '_> {
            fn kind(&self) -> Kind { Kind::Function }
        }
        impl<R, $($arg),*> Inspect for &(dyn Fn($($arg),*) -> R + '_) {
            fn kind(&self) -> Kind { Kind::Function }
        }
    };
}

impl_closure!();
impl_closure!(A);
impl_closure!(A, B);
