use super::Value;
use crate::Result;

use indexmap::IndexMap;

/// A sparse set of field assignments for a partial update.
///
/// Keys are API field names. Iteration order is insertion order, which is
/// the order placeholders are numbered in when the assignments are compiled
/// into a `SET` clause. Assigning `Value::Null` sets the column to SQL
/// `NULL`; fields that should stay untouched are simply not present.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assignments {
    fields: IndexMap<String, Value>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds assignments from a JSON object, keeping the object's key order.
    pub fn from_json(json: serde_json::Value) -> Result<Assignments> {
        let serde_json::Value::Object(object) = json else {
            bail!("update payload must be a JSON object");
        };

        let mut assignments = Assignments::new();
        for (field, value) in object {
            assignments.set(field, Value::from_json(value)?);
        }
        Ok(assignments)
    }

    /// Sets `field` to `value`. Setting a field twice keeps its original
    /// position and replaces the value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Assignments
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut assignments = Assignments::new();
        for (field, value) in iter {
            assignments.set(field, value);
        }
        assignments
    }
}
