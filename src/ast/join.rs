use crate::ast::{Filter, Table};
use serde::{Deserialize, Serialize};

/// The `JOIN` table and conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinData<'a> {
    pub(crate) table: Table<'a>,
    pub(crate) conditions: Filter<'a>,
}

impl<'a> JoinData<'a> {
    /// A join with no `ON` conditions, used for `CROSS JOIN`.
    pub fn all_rows(table: impl Into<Table<'a>>) -> Self {
        JoinData {
            table: table.into(),
            conditions: Filter::NoCondition,
        }
    }
}

/// A representation of a `JOIN` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Join<'a> {
    /// Implements an `INNER JOIN` with given `JoinData`.
    Inner(JoinData<'a>),
    /// Implements a `LEFT OUTER JOIN` with given `JoinData`.
    LeftOuter(JoinData<'a>),
    /// Implements a `RIGHT OUTER JOIN` with given `JoinData`.
    RightOuter(JoinData<'a>),
    /// Implements a `FULL OUTER JOIN` with given `JoinData`.
    FullOuter(JoinData<'a>),
    /// Implements a `CROSS JOIN` with given `JoinData`.
    Cross(JoinData<'a>),
}

impl<'a> Join<'a> {
    pub(crate) fn data(&self) -> &JoinData<'a> {
        match self {
            Join::Inner(data)
            | Join::LeftOuter(data)
            | Join::RightOuter(data)
            | Join::FullOuter(data)
            | Join::Cross(data) => data,
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut JoinData<'a> {
        match self {
            Join::Inner(data)
            | Join::LeftOuter(data)
            | Join::RightOuter(data)
            | Join::FullOuter(data)
            | Join::Cross(data) => data,
        }
    }
}

/// An item that can be joined.
pub trait Joinable<'a> {
    /// Add the `JOIN` conditions.
    ///
    /// ```rust
    /// # use squill::{ast::*, dialect, visitor::render_select};
    /// # fn main() -> Result<(), squill::error::Error> {
    /// let join = "posts".on(("posts", "user_id").equals(Column::from(("users", "id"))));
    /// let query = Select::from_table("users").inner_join(join);
    /// let sql = render_select(&query, dialect::for_product("postgresql")?)?;
    ///
    /// assert_eq!(
    ///     "SELECT * FROM users INNER JOIN posts ON posts.user_id = users.id",
    ///     sql
    /// );
    /// # Ok(())
    /// # }
    /// ```
    fn on<T>(self, conditions: T) -> JoinData<'a>
    where
        T: Into<Filter<'a>>;
}

impl<'a, U> Joinable<'a> for U
where
    U: Into<Table<'a>>,
{
    fn on<T>(self, conditions: T) -> JoinData<'a>
    where
        T: Into<Filter<'a>>,
    {
        JoinData {
            table: self.into(),
            conditions: conditions.into(),
        }
    }
}

impl<'a> From<Table<'a>> for JoinData<'a> {
    fn from(table: Table<'a>) -> Self {
        JoinData::all_rows(table)
    }
}

impl<'a> From<&'a str> for JoinData<'a> {
    fn from(table: &'a str) -> Self {
        JoinData::all_rows(table)
    }
}

impl<'a> From<(&'a str, &'a str)> for JoinData<'a> {
    fn from(table: (&'a str, &'a str)) -> Self {
        JoinData::all_rows(table)
    }
}
