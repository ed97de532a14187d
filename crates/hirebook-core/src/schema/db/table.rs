use super::Column;

#[derive(Debug, Clone)]
pub struct Table {
    /// Table name in the database
    pub name: String,

    pub columns: Vec<Column>,

    /// Primary key column names
    pub primary_key: Vec<String>,

    /// Additional unique constraints, each a list of column names
    pub unique: Vec<Vec<String>>,

    pub foreign_keys: Vec<ForeignKey>,
}

#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub columns: Vec<String>,
    pub target_table: String,
    pub target_columns: Vec<String>,

    /// When true, rows referencing a deleted target row are deleted too.
    pub on_delete_cascade: bool,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            columns: vec![],
            primary_key: vec![],
            unique: vec![],
            foreign_keys: vec![],
        }
    }

    pub fn column(mut self, column: Column) -> Table {
        self.columns.push(column);
        self
    }

    pub fn primary_key(mut self, columns: &[&str]) -> Table {
        self.primary_key = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn unique(mut self, columns: &[&str]) -> Table {
        self.unique.push(columns.iter().map(|c| c.to_string()).collect());
        self
    }

    pub fn references(mut self, columns: &[&str], target_table: &str, target_columns: &[&str]) -> Table {
        self.foreign_keys.push(ForeignKey {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            target_table: target_table.to_string(),
            target_columns: target_columns.iter().map(|c| c.to_string()).collect(),
            on_delete_cascade: true,
        });
        self
    }

    /// Returns the auto-incrementing column, if the table has one.
    pub fn auto_increment_column(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.auto_increment)
    }
}
