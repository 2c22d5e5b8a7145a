use crate::ast::Table;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A column reference, optionally qualified with a table and carrying an
/// alias for the projection list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column<'a> {
    pub name: Cow<'a, str>,
    pub table: Option<Table<'a>>,
    pub alias: Option<Cow<'a, str>>,
}

impl<'a> Column<'a> {
    /// Creates a bare column reference.
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Column {
            name: name.into(),
            table: None,
            alias: None,
        }
    }

    /// Qualifies the column with a table.
    pub fn table(mut self, table: impl Into<Table<'a>>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Aliases the column for the projection list.
    pub fn alias(mut self, alias: impl Into<Cow<'a, str>>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl<'a> From<&'a str> for Column<'a> {
    fn from(name: &'a str) -> Self {
        Column::new(name)
    }
}

impl From<String> for Column<'_> {
    fn from(name: String) -> Self {
        Column::new(name)
    }
}

impl<'a> From<(&'a str, &'a str)> for Column<'a> {
    fn from((table, name): (&'a str, &'a str)) -> Self {
        Column::new(name).table(table)
    }
}

impl<'a> From<(&'a str, &'a str, &'a str)> for Column<'a> {
    fn from((schema, table, name): (&'a str, &'a str, &'a str)) -> Self {
        Column::new(name).table(Table::new(table).schema(schema))
    }
}
