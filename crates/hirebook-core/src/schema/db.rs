mod column;
pub use column::Column;

mod table;
pub use table::{ForeignKey, Table};

/// Description of the tables backing the resources.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }
}
