use crate::models::{ReadingTable, Table};

pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    /// Tables must be passed in dependency order; this is checked up front
    /// rather than sorted, since the schema here is small enough to declare
    /// by hand.
    pub fn new(tables: Vec<Box<dyn Table>>) -> Self {
        for (index, table) in tables.iter().enumerate() {
            for dependency in table.dependencies() {
                assert!(
                    tables[..index].iter().any(|t| t.name() == dependency),
                    "table '{}' declared before its dependency '{}'",
                    table.name(),
                    dependency,
                );
            }
        }

        Self { tables }
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![Box::new(ReadingTable)])
    }
}
