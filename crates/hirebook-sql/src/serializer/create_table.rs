use super::{Comma, Formatter, Ident, Serializer, ToSql};

use hirebook_core::schema::db::{Column, ForeignKey, Table};

impl Serializer {
    /// Serializes a `CREATE TABLE IF NOT EXISTS` statement for `table`.
    pub fn create_table(&self, table: &Table) -> String {
        let mut f = self.statement();
        fmt!(&mut f, "CREATE TABLE IF NOT EXISTS " Ident(&table.name) " (" TableBody(table) "\n)");

        let stmt = f.finish();
        assert!(
            stmt.params.is_empty(),
            "creating a table shouldn't involve any parameters"
        );
        stmt.sql
    }
}

struct TableBody<'a>(&'a Table);

impl ToSql for TableBody<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = self.0;
        let mut s = "\n    ";

        for column in &table.columns {
            fmt!(f, s ColumnDef(column));
            s = ",\n    ";
        }

        // An auto-incrementing column declares the primary key inline.
        if table.auto_increment_column().is_none() && !table.primary_key.is_empty() {
            fmt!(f, s "PRIMARY KEY (" Comma(table.primary_key.iter().map(Ident)) ")");
        }

        for unique in &table.unique {
            fmt!(f, s "UNIQUE (" Comma(unique.iter().map(Ident)) ")");
        }

        for foreign_key in &table.foreign_keys {
            fmt!(f, s foreign_key);
        }
    }
}

struct ColumnDef<'a>(&'a Column);

impl ToSql for ColumnDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = self.0;
        let capability = f.serializer.capability;
        let ty = capability.storage_types.for_type(column.ty);

        fmt!(f, Ident(&column.name) " " ty);

        if column.auto_increment {
            fmt!(f, " " capability.auto_increment);
        } else if !column.nullable {
            fmt!(f, " NOT NULL");
        }
    }
}

impl ToSql for &ForeignKey {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(
            f,
            "FOREIGN KEY (" Comma(self.columns.iter().map(Ident)) ") REFERENCES "
            Ident(&self.target_table) " (" Comma(self.target_columns.iter().map(Ident)) ")"
        );

        if self.on_delete_cascade {
            fmt!(f, " ON DELETE CASCADE");
        }
    }
}
