use crate::stmt::{Type, Value};

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The statement text. Placeholders are numbered from 1 and every value
    /// is passed through `params`, never spliced into the text.
    pub sql: String,

    /// Parameter values; `params[i]` binds placeholder `i + 1`.
    pub params: Vec<Value>,

    /// The type of each returned column when the statement returns rows.
    /// `None` means the statement only reports the number of affected rows.
    pub ret: Option<Vec<Type>>,
}
