use super::{delim::And, Formatter, Ident, Serializer, ToSql};

use hirebook_core::{stmt::Value, Error, Result};

/// A set of optional search predicates for one resource.
pub trait Filter {
    /// Returns the active predicates in compilation order.
    fn predicates(&self) -> Vec<Predicate<'_>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'a> {
    /// Case-insensitive substring match of `term` against `column`.
    Contains { column: &'a str, term: &'a str },

    /// `min <= column` and/or `column <= max`. `field` names the pair in
    /// errors.
    Range {
        field: &'a str,
        column: &'a str,
        min: Option<i64>,
        max: Option<i64>,
    },

    /// `column > 0`. Binds no value.
    Positive { column: &'a str },
}

/// The compiled conditions of a list query, joined with `AND`.
///
/// An empty clause renders nothing at all, not `WHERE TRUE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    conditions: Vec<Condition>,
    fragments: Vec<String>,
    values: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
enum Condition {
    /// `"column" <op> <value>`, followed by `suffix`.
    Compare {
        column: String,
        op: &'static str,
        value: Value,
        suffix: &'static str,
    },

    /// `"column" > 0`
    Positive { column: String },
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The fragments joined with ` AND `, without the `WHERE` keyword.
    pub fn sql(&self) -> String {
        self.fragments.join(" AND ")
    }
}

impl Serializer {
    /// Compiles the active predicates of `filter` into a [`WhereClause`].
    ///
    /// Range bounds are checked before anything is compiled; a lower bound
    /// above its upper bound fails with [`Error::invalid_filter_range`].
    pub fn filter(&self, filter: &impl Filter) -> Result<WhereClause> {
        let predicates = filter.predicates();

        for predicate in &predicates {
            if let Predicate::Range {
                field,
                min: Some(min),
                max: Some(max),
                ..
            } = predicate
            {
                if min > max {
                    return Err(Error::invalid_filter_range(*field, *min, *max));
                }
            }
        }

        let mut conditions = vec![];

        for predicate in predicates {
            match predicate {
                Predicate::Contains { column, term } => {
                    let op = if self.capability.native_ilike {
                        " ILIKE "
                    } else {
                        " LIKE "
                    };
                    conditions.push(Condition::Compare {
                        column: column.to_string(),
                        op,
                        value: Value::String(contains_pattern(term)),
                        suffix: " ESCAPE '\\'",
                    });
                }
                Predicate::Range {
                    column, min, max, ..
                } => {
                    if let Some(min) = min {
                        conditions.push(Condition::compare(column, " >= ", min));
                    }
                    if let Some(max) = max {
                        conditions.push(Condition::compare(column, " <= ", max));
                    }
                }
                Predicate::Positive { column } => {
                    conditions.push(Condition::Positive {
                        column: column.to_string(),
                    });
                }
            }
        }

        let mut f = self.statement();
        let mut fragments = Vec::with_capacity(conditions.len());
        for condition in &conditions {
            fmt!(&mut f, condition);
            fragments.push(std::mem::take(&mut f.dst));
        }

        Ok(WhereClause {
            conditions,
            fragments,
            values: f.finish().params,
        })
    }
}

impl Condition {
    fn compare(column: &str, op: &'static str, bound: i64) -> Condition {
        Condition::Compare {
            column: column.to_string(),
            op,
            value: Value::I64(bound),
            suffix: "",
        }
    }
}

/// Wraps `term` in `%` wildcards, escaping LIKE metacharacters so the term
/// only ever matches literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl ToSql for &Condition {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Condition::Compare {
                column,
                op,
                value,
                suffix,
            } => {
                f.push(Ident(column)).push(*op).push(value).push(*suffix);
            }
            Condition::Positive { column } => fmt!(f, Ident(column) " > 0"),
        }
    }
}

impl ToSql for &WhereClause {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.is_empty() {
            return;
        }

        fmt!(f, " WHERE " And(&self.conditions));
    }
}
