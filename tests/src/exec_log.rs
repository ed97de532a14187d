use crate::logging_driver::DriverOp;
use hirebook_core::{driver::operation::QuerySql, stmt::Value};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// The statement text and parameters of every logged operation, in
    /// execution order.
    pub fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| op.operation.as_query_sql())
            .map(|QuerySql { sql, params, .. }| (sql.clone(), params.clone()))
            .collect()
    }

    /// The most recent statement starting with `prefix`.
    pub fn last_starting_with(&self, prefix: &str) -> Option<(String, Vec<Value>)> {
        self.statements()
            .into_iter()
            .rev()
            .find(|(sql, _)| sql.starts_with(prefix))
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
