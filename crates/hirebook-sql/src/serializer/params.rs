use super::{Formatter, ToSql};

use hirebook_core::{driver::PlaceholderStyle, stmt::Value};

pub trait Params {
    /// Stores a parameter and returns the placeholder referencing it.
    fn push(&mut self, param: Value) -> Placeholder;
}

/// A positional parameter reference, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Value> {
    fn push(&mut self, value: Value) -> Placeholder {
        Vec::push(self, value);
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        let _ = match f.serializer.capability.placeholder {
            PlaceholderStyle::Dollar => write!(&mut f.dst, "${}", self.0),
            PlaceholderStyle::NumberedQuestion => write!(&mut f.dst, "?{}", self.0),
        };
    }
}
