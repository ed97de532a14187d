use hirebook_core::{
    err,
    stmt::{self, Value as CoreValue},
    Result,
};
use postgres::{
    types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type},
    Column, Row,
};

#[derive(Debug)]
pub struct Value(pub(crate) CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts a PostgreSQL value within a row to a Hirebook value.
    pub fn from_sql(index: usize, row: &Row, column: &Column, expected: stmt::Type) -> Result<CoreValue> {
        let ty = column.type_();
        let decode = |e: postgres::Error| err!("failed to decode column `{}`: {e}", column.name());

        // The inner representation of the PostgreSQL type enum is not
        // accessible, so each type is matched by hand.
        let value = if *ty == Type::TEXT || *ty == Type::VARCHAR {
            row.try_get::<usize, Option<String>>(index)
                .map_err(decode)?
                .map(CoreValue::String)
        } else if *ty == Type::BOOL {
            row.try_get::<usize, Option<bool>>(index)
                .map_err(decode)?
                .map(CoreValue::Bool)
        } else if *ty == Type::INT4 {
            row.try_get::<usize, Option<i32>>(index)
                .map_err(decode)?
                .map(|v| CoreValue::I64(v.into()))
        } else if *ty == Type::INT8 {
            row.try_get::<usize, Option<i64>>(index)
                .map_err(decode)?
                .map(CoreValue::I64)
        } else if *ty == Type::FLOAT4 {
            row.try_get::<usize, Option<f32>>(index)
                .map_err(decode)?
                .map(|v| CoreValue::F64(v.into()))
        } else if *ty == Type::FLOAT8 {
            row.try_get::<usize, Option<f64>>(index)
                .map_err(decode)?
                .map(CoreValue::F64)
        } else {
            return Err(err!(
                "unsupported PostgreSQL type `{ty}` for column `{}`; expected={}",
                column.name(),
                expected.name()
            ));
        };

        let value = value.unwrap_or(CoreValue::Null);

        match (value, expected) {
            (CoreValue::I64(v), stmt::Type::F64) => Ok(CoreValue::F64(v as f64)),
            (value, _) if value.is_null() || value.ty() == Some(expected) => Ok(value),
            (value, _) => Err(hirebook_core::Error::type_conversion(value, expected.name())),
        }
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::I64(value) => match *ty {
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                Type::FLOAT8 => (*value as f64).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::String(value) => value.to_sql(ty, out),
            stmt::Value::Null => Ok(IsNull::Yes),
        }
    }

    accepts!(BOOL, INT4, INT8, FLOAT4, FLOAT8, TEXT, VARCHAR);
    to_sql_checked!();
}
