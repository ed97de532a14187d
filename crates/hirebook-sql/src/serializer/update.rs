use super::{Comma, Formatter, Ident, Serializer, ToSql};

use hirebook_core::{
    schema::{ColumnMapping, UnknownFields},
    stmt::{Assignments, Value},
    Error, Result,
};

/// The compiled `SET` list of a partial update.
///
/// Fragment `i` (0-based) is `"<column>"=<placeholder i + 1>` and binds
/// `values[i]`. Pushed into a statement, the placeholders are renumbered
/// after whatever the statement already binds.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    columns: Vec<String>,
    fragments: Vec<String>,
    values: Vec<Value>,
}

struct Assign<'a>(&'a str, &'a Value);

impl SetClause {
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The fragments joined with `, `.
    pub fn sql(&self) -> String {
        self.fragments.join(", ")
    }

    fn assigns(&self) -> impl Iterator<Item = Assign<'_>> {
        self.columns
            .iter()
            .zip(&self.values)
            .map(|(column, value)| Assign(column, value))
    }
}

impl Serializer {
    /// Compiles a sparse set of field assignments into a `SET` list.
    ///
    /// Fields are visited in the assignments' iteration order; each field is
    /// renamed through `mapping`, its value is checked against the column
    /// type and becomes the next parameter. Fails with
    /// [`Error::empty_update`] when there is nothing to assign, with
    /// [`Error::invalid_value`] when a value does not fit its column, and
    /// with [`Error::unknown_field`] when a field is not mapped and `unknown`
    /// does not allow it through.
    pub fn partial_update(
        &self,
        assignments: &Assignments,
        mapping: &ColumnMapping,
        unknown: UnknownFields,
    ) -> Result<SetClause> {
        if assignments.is_empty() {
            return Err(Error::empty_update());
        }

        let mut columns = Vec::with_capacity(assignments.len());
        let mut values = Vec::with_capacity(assignments.len());

        for (field, value) in assignments.iter() {
            let (column, value) = mapping.assign(field, value, unknown)?;
            columns.push(column.to_string());
            values.push(value);
        }

        let mut set = SetClause {
            columns,
            fragments: vec![],
            values,
        };

        let mut f = self.statement();
        let mut fragments = Vec::with_capacity(set.values.len());
        for assign in set.assigns() {
            fmt!(&mut f, assign);
            fragments.push(std::mem::take(&mut f.dst));
        }

        debug_assert_eq!(f.params, set.values);
        set.fragments = fragments;
        Ok(set)
    }
}

impl ToSql for Assign<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0) "=" self.1);
    }
}

impl ToSql for &SetClause {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Comma(self.assigns()));
    }
}
