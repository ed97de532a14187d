use super::Value;
use crate::Result;

use std::ops;

/// A row returned by the storage collaborator, in the order of the
/// statement's select or returning list.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValueRecord {
    fields: Vec<Value>,
}

impl ValueRecord {
    pub fn from_vec(fields: Vec<Value>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consumes the record, yielding its fields in order.
    pub fn into_fields(self) -> Fields {
        Fields {
            iter: self.fields.into_iter(),
        }
    }
}

impl ops::Index<usize> for ValueRecord {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        &self.fields[index]
    }
}

impl IntoIterator for ValueRecord {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Sequential reader over the fields of a [`ValueRecord`].
///
/// Loading a model reads the columns in select-list order; running out of
/// columns is reported as an error rather than a panic.
#[derive(Debug)]
pub struct Fields {
    iter: std::vec::IntoIter<Value>,
}

impl Fields {
    pub fn next_value(&mut self) -> Result<Value> {
        self.iter
            .next()
            .ok_or_else(|| err!("record has fewer columns than expected"))
    }
}
