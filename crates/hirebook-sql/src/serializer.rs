#[macro_use]
mod fmt;
pub use fmt::ToSql;

mod create_table;

mod delim;
pub use delim::Comma;

mod filter;
pub use filter::{Filter, Predicate, WhereClause};

mod ident;
pub use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

mod statement;
pub use statement::Statement;

mod update;
pub use update::SetClause;

mod value;

use hirebook_core::{driver::Capability, stmt::Value};

/// Serializes statements and statement fragments to SQL text for one
/// database dialect.
///
/// Values are never written into the SQL text. Every value is pushed onto
/// the parameter list and referenced by a positional placeholder whose
/// number is its 1-based position in that list.
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The dialect differences: placeholder syntax, `ILIKE` support and
    /// column storage types.
    capability: &'static Capability,
}

/// Accumulates SQL text and the parameters it references.
#[derive(Debug)]
pub struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: String,

    /// Where to store parameters
    params: Vec<Value>,
}

impl Serializer {
    pub fn new(capability: &'static Capability) -> Serializer {
        Serializer { capability }
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(&Capability::POSTGRESQL)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(&Capability::SQLITE)
    }

    pub fn capability(&self) -> &'static Capability {
        self.capability
    }

    /// Starts a new statement.
    pub fn statement(&self) -> Formatter<'_> {
        Formatter {
            serializer: self,
            dst: String::new(),
            params: Vec::new(),
        }
    }
}

impl Formatter<'_> {
    /// Appends a fragment.
    pub fn push(&mut self, fragment: impl ToSql) -> &mut Self {
        fragment.to_sql(self);
        self
    }

    /// Appends a placeholder bound to `value`.
    pub fn param(&mut self, value: impl Into<Value>) -> &mut Self {
        self.push(value.into())
    }

    pub fn finish(self) -> Statement {
        Statement {
            sql: self.dst,
            params: self.params,
        }
    }
}
