use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A table reference in the `FROM` clause, optionally qualified with a
/// schema and carrying an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<'a> {
    pub name: Cow<'a, str>,
    pub schema: Option<Cow<'a, str>>,
    pub alias: Option<Cow<'a, str>>,
}

impl<'a> Table<'a> {
    /// Creates a table reference with the given name.
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Table {
            name: name.into(),
            schema: None,
            alias: None,
        }
    }

    /// Qualifies the table with a schema.
    pub fn schema(mut self, schema: impl Into<Cow<'a, str>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Aliases the table for the duration of the query.
    pub fn alias(mut self, alias: impl Into<Cow<'a, str>>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The name the table is referred to in conditions: the alias when
    /// present, the table name otherwise.
    pub fn reference(&self) -> &str {
        match self.alias {
            Some(ref alias) => alias.as_ref(),
            None => self.name.as_ref(),
        }
    }
}

impl<'a> From<&'a str> for Table<'a> {
    fn from(name: &'a str) -> Self {
        Table::new(name)
    }
}

impl<'a> From<(&'a str, &'a str)> for Table<'a> {
    fn from((schema, name): (&'a str, &'a str)) -> Self {
        Table::new(name).schema(schema)
    }
}

impl From<String> for Table<'_> {
    fn from(name: String) -> Self {
        Table::new(name)
    }
}

impl From<(String, String)> for Table<'_> {
    fn from((schema, name): (String, String)) -> Self {
        Table::new(name).schema(schema)
    }
}
