use crate::ast::Value;
use std::sync::Arc;

/// The rows a driver returned for a query.
#[derive(Debug, Default)]
pub struct ResultSet {
    pub(crate) columns: Arc<Vec<String>>,
    pub(crate) rows: Vec<Vec<Value<'static>>>,
}

impl ResultSet {
    /// Creates a new instance, bound to the given column names and result
    /// rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value<'static>>>) -> Self {
        ResultSet {
            columns: Arc::new(columns),
            rows,
        }
    }

    /// The names of the columns, in the order they appear in every row.
    pub fn columns(&self) -> &Vec<String> {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row, if the query returned any.
    pub fn first(&self) -> Option<ResultRow<'_>> {
        self.get(0)
    }

    /// The row at the given position.
    pub fn get(&self, index: usize) -> Option<ResultRow<'_>> {
        self.rows.get(index).map(|values| ResultRow {
            columns: self.columns.clone(),
            values,
        })
    }
}

/// A view over one row of a [`ResultSet`].
#[derive(Debug)]
pub struct ResultRow<'a> {
    pub(crate) columns: Arc<Vec<String>>,
    pub(crate) values: &'a [Value<'static>],
}

impl<'a> ResultRow<'a> {
    /// The value at the given column index.
    pub fn at(&self, index: usize) -> Option<&Value<'static>> {
        self.values.get(index)
    }

    /// The value in the named column.
    pub fn get(&self, name: &str) -> Option<&Value<'static>> {
        self.columns
            .iter()
            .position(|column| column == name)
            .and_then(|index| self.values.get(index))
    }
}
