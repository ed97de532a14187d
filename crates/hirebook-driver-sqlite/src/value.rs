use hirebook_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core Hirebook value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a Hirebook value.
    ///
    /// SQLite has no boolean storage class and may hand back an integer for
    /// a `REAL` column, so the expected type decides the conversion.
    pub fn from_sql(row: &Row, index: usize, ty: stmt::Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver)?;

        let core_value = match (value, ty) {
            (SqlValue::Null, _) => CoreValue::Null,
            (SqlValue::Integer(value), stmt::Type::Bool) => CoreValue::Bool(value != 0),
            (SqlValue::Integer(value), stmt::Type::I64) => CoreValue::I64(value),
            (SqlValue::Integer(value), stmt::Type::F64) => CoreValue::F64(value as f64),
            (SqlValue::Real(value), stmt::Type::F64) => CoreValue::F64(value),
            (SqlValue::Text(value), stmt::Type::String) => CoreValue::String(value),
            (value, ty) => {
                return Err(hirebook_core::err!(
                    "unexpected SQLite value in column {index}; value={value:?}, ty={}",
                    ty.name()
                ))
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            CoreValue::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
