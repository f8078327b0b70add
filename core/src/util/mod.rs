mod type_name;

pub use type_name::{short_type_name, TypeName};
