use std::fmt;

/// Strips module paths from a type name as produced by [`std::any::type_name`].
///
/// `alloc::boxed::Box<my_crate::model::Album>` becomes `Box<Album>`. Generic arguments,
/// references and tuple punctuation are kept.
pub fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    // Start of the identifier path currently being written
    let mut path_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                short.truncate(path_start);
            }
            c if c.is_alphanumeric() || c == '_' => short.push(c),
            c => {
                short.push(c);
                path_start = short.len();
            }
        }
    }
    short
}

/// A type name as reported by a node. Displays without module paths; the alternate
/// form (`{:#}`) displays the full name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeName(pub &'static str);

impl TypeName {
    pub fn full(&self) -> &'static str { self.0 }

    pub fn short(&self) -> String { short_type_name(self.0) }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.0)
        } else {
            f.write_str(&self.short())
        }
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "TypeName({})", self.0) }
}

impl From<&'static str> for TypeName {
    fn from(name: &'static str) -> Self { TypeName(name) }
}
