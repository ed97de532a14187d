use crate::{
    stmt::{Type, Value},
    Error, Result,
};

/// Maps a resource's API field names to storage columns.
///
/// The mapping doubles as the list of fields a partial update may touch, and
/// carries each column's type so a value is checked before it is bound.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMapping {
    /// Resource name, used in error messages.
    resource: &'static str,

    fields: &'static [MappedField],
}

/// One updatable field of a [`ColumnMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedField {
    /// API field name
    pub name: &'static str,

    /// Storage column name
    pub column: &'static str,

    pub ty: Type,

    /// `true` when the column accepts `NULL`.
    pub nullable: bool,
}

/// How [`ColumnMapping::assign`] treats a field that is not in the mapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnknownFields {
    /// Fail with [`Error::unknown_field`].
    #[default]
    Reject,

    /// Use the field name itself as the column name, provided it is a plain
    /// SQL identifier. The value is bound unchecked.
    Passthrough,
}

impl MappedField {
    pub const fn new(name: &'static str, column: &'static str, ty: Type) -> MappedField {
        MappedField {
            name,
            column,
            ty,
            nullable: false,
        }
    }

    pub const fn nullable(self) -> MappedField {
        MappedField {
            nullable: true,
            ..self
        }
    }

    /// Checks `value` against the column type. `I64` widens to `F64`.
    fn check(&self, resource: &'static str, value: &Value) -> Result<Value> {
        match (value, self.ty) {
            (Value::Null, _) if self.nullable => Ok(Value::Null),
            (Value::I64(v), Type::F64) => Ok(Value::F64(*v as f64)),
            (value, ty) if value.ty() == Some(ty) => Ok(value.clone()),
            (value, _) => Err(Error::invalid_value(
                resource,
                self.name,
                self.ty,
                value.ty().map(Type::name).unwrap_or("null"),
            )),
        }
    }
}

impl ColumnMapping {
    pub const fn new(resource: &'static str, fields: &'static [MappedField]) -> ColumnMapping {
        ColumnMapping { resource, fields }
    }

    /// Returns the mapped field named `name`.
    pub fn get(&self, name: &str) -> Option<&'static MappedField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Resolves the storage column for `field` and the value to bind to it.
    ///
    /// Mapped fields fail with [`Error::invalid_value`] when `value` does not
    /// fit the column. Unmapped fields fail with [`Error::unknown_field`]
    /// unless `unknown` lets them through.
    pub fn assign<'a>(
        &self,
        field: &'a str,
        value: &Value,
        unknown: UnknownFields,
    ) -> Result<(&'a str, Value)> {
        if let Some(mapped) = self.get(field) {
            return Ok((mapped.column, mapped.check(self.resource, value)?));
        }

        match unknown {
            UnknownFields::Passthrough if is_plain_identifier(field) => Ok((field, value.clone())),
            _ => Err(Error::unknown_field(self.resource, field)),
        }
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
