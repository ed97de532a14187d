use crate::stmt::Type;

#[derive(Debug, Clone)]
pub struct Column {
    /// Column name in the database
    pub name: String,

    /// Value type of the column
    pub ty: Type,

    /// True when the column accepts `NULL`
    pub nullable: bool,

    /// True when the database assigns the value. Only valid for a sole
    /// `I64` primary key column.
    pub auto_increment: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        Column {
            name: name.into(),
            ty,
            nullable: false,
            auto_increment: false,
        }
    }

    pub fn nullable(mut self) -> Column {
        self.nullable = true;
        self
    }

    pub fn auto_increment(mut self) -> Column {
        self.auto_increment = true;
        self
    }
}
