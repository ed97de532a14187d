pub mod serializer;
pub use serializer::{
    Comma, Filter, Formatter, Ident, Params, Placeholder, Predicate, Serializer, SetClause, Statement,
    ToSql, WhereClause,
};
