mod query_sql;
pub use query_sql::QuerySql;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a SQL statement with positional parameters
    QuerySql(QuerySql),
}

impl Operation {
    pub fn as_query_sql(&self) -> Option<&QuerySql> {
        match self {
            Operation::QuerySql(op) => Some(op),
        }
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
