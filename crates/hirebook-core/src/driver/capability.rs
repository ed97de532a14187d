use crate::stmt::Type;

#[derive(Debug)]
pub struct Capability {
    /// How positional parameters are written in statement text.
    pub placeholder: PlaceholderStyle,

    /// When true, the database has a native case-insensitive `ILIKE`
    /// operator. Otherwise `LIKE` is used, which SQLite already evaluates
    /// case-insensitively for ASCII text.
    pub native_ilike: bool,

    /// SQL keyword sequence used to declare an auto-incrementing integer
    /// primary key column.
    pub auto_increment: &'static str,

    /// Column storage types used when creating tables
    pub storage_types: StorageTypes,
}

#[derive(Debug)]
pub struct StorageTypes {
    pub bool: &'static str,
    pub i64: &'static str,
    pub f64: &'static str,
    pub string: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `$1`, `$2`, ...
    Dollar,

    /// `?1`, `?2`, ...
    NumberedQuestion,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        placeholder: PlaceholderStyle::NumberedQuestion,
        native_ilike: false,
        auto_increment: "PRIMARY KEY AUTOINCREMENT",
        storage_types: StorageTypes::SQLITE,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        placeholder: PlaceholderStyle::Dollar,
        native_ilike: true,
        auto_increment: "GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY",
        storage_types: StorageTypes::POSTGRESQL,
    };
}

impl StorageTypes {
    /// SQLite storage types. An auto-incrementing key must be declared
    /// exactly `INTEGER` for SQLite to alias it to the rowid.
    pub const SQLITE: StorageTypes = StorageTypes {
        bool: "BOOLEAN",
        i64: "INTEGER",
        f64: "REAL",
        string: "TEXT",
    };

    /// PostgreSQL storage types
    pub const POSTGRESQL: StorageTypes = StorageTypes {
        bool: "BOOLEAN",
        i64: "BIGINT",
        f64: "DOUBLE PRECISION",
        string: "TEXT",
    };

    pub fn for_type(&self, ty: Type) -> &'static str {
        match ty {
            Type::Bool => self.bool,
            Type::I64 => self.i64,
            Type::F64 => self.f64,
            Type::String => self.string,
        }
    }
}
