use hirebook_core::{
    driver::operation::QuerySql,
    stmt::{Type, Value},
};

/// A complete statement: SQL text plus the values its placeholders bind.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Statement {
    /// Converts into an operation that returns rows of the given column
    /// types.
    pub fn query(self, ret: Vec<Type>) -> QuerySql {
        QuerySql {
            sql: self.sql,
            params: self.params,
            ret: Some(ret),
        }
    }

    /// Converts into an operation that only reports the affected row count.
    pub fn execute(self) -> QuerySql {
        QuerySql {
            sql: self.sql,
            params: self.params,
            ret: None,
        }
    }
}
