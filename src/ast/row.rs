use crate::ast::Expression;
use serde::{Deserialize, Serialize};

/// A list of expressions, used as the right side of an `IN` comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row<'a> {
    pub values: Vec<Expression<'a>>,
}

impl<'a> Row<'a> {
    pub fn new() -> Self {
        Row { values: Vec::new() }
    }

    /// Appends a value to the row.
    pub fn push<T>(mut self, value: T) -> Self
    where
        T: Into<Expression<'a>>,
    {
        self.values.push(value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a, T> From<Vec<T>> for Row<'a>
where
    T: Into<Expression<'a>>,
{
    fn from(values: Vec<T>) -> Self {
        Row {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}
