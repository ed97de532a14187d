/// The type of a value flowing between a repository and the storage
/// collaborator.
///
/// Drivers use the expected type of each returned column to decode rows,
/// since storage types do not always identify the value type on their own
/// (SQLite stores booleans as integers, for example).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I64,
    F64,
    String,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Bool => "bool",
            Type::I64 => "i64",
            Type::F64 => "f64",
            Type::String => "String",
        }
    }
}
