use crate::ast::{Column, CompareOp, Filter, Function, Row, Select, Value};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Anything that can appear as an operand: a projection item, a condition
/// side, an ordering or grouping key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression<'a> {
    /// A column reference.
    Column(Box<Column<'a>>),
    /// A literal value.
    Value(Box<Value<'a>>),
    /// An aggregate function call.
    Function(Box<Function<'a>>),
    /// A raw SQL fragment, rendered as-is.
    Raw(Cow<'a, str>),
    /// A list of values, the right side of an `IN` comparison.
    Row(Row<'a>),
    /// A subquery, rendered in parentheses.
    Select(Box<Select<'a>>),
}

impl<'a> Expression<'a> {
    /// Builds a comparison between `self` and another expression. Used where
    /// the left side is not a plain column, e.g. `HAVING COUNT(*) > 10`.
    ///
    /// ```rust
    /// # use squill::{ast::*, dialect, visitor::render_select};
    /// # fn main() -> Result<(), squill::error::Error> {
    /// let query = Select::from_table("orders")
    ///     .column("customer")
    ///     .group_by("customer")
    ///     .having(Expression::from(count(asterisk())).compare(CompareOp::GreaterThan, 10));
    ///
    /// let sql = render_select(&query, dialect::for_product("postgresql")?)?;
    ///
    /// assert_eq!(
    ///     "SELECT customer FROM orders GROUP BY customer HAVING COUNT(*) > 10",
    ///     sql
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn compare<T>(self, op: CompareOp, other: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        Filter::binary(self, op, other)
    }
}

/// The `*` projection.
pub fn asterisk() -> Expression<'static> {
    Expression::Raw("*".into())
}

impl<'a> From<Column<'a>> for Expression<'a> {
    fn from(col: Column<'a>) -> Self {
        Expression::Column(Box::new(col))
    }
}

impl<'a> From<Value<'a>> for Expression<'a> {
    fn from(value: Value<'a>) -> Self {
        Expression::Value(Box::new(value))
    }
}

impl<'a> From<Function<'a>> for Expression<'a> {
    fn from(function: Function<'a>) -> Self {
        Expression::Function(Box::new(function))
    }
}

impl<'a> From<Row<'a>> for Expression<'a> {
    fn from(row: Row<'a>) -> Self {
        Expression::Row(row)
    }
}

impl<'a> From<Select<'a>> for Expression<'a> {
    fn from(select: Select<'a>) -> Self {
        Expression::Select(Box::new(select))
    }
}

impl<'a> From<&'a str> for Expression<'a> {
    fn from(text: &'a str) -> Self {
        Expression::Value(Box::new(Value::text(text)))
    }
}

impl<'a> From<Cow<'a, str>> for Expression<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Expression::Value(Box::new(Value::Text(text)))
    }
}

impl From<String> for Expression<'_> {
    fn from(text: String) -> Self {
        Expression::Value(Box::new(Value::Text(text.into())))
    }
}

impl From<i32> for Expression<'_> {
    fn from(value: i32) -> Self {
        Expression::Value(Box::new(value.into()))
    }
}

impl From<i64> for Expression<'_> {
    fn from(value: i64) -> Self {
        Expression::Value(Box::new(value.into()))
    }
}

impl From<f64> for Expression<'_> {
    fn from(value: f64) -> Self {
        Expression::Value(Box::new(value.into()))
    }
}

impl From<bool> for Expression<'_> {
    fn from(value: bool) -> Self {
        Expression::Value(Box::new(value.into()))
    }
}

impl<'a, T> From<Vec<T>> for Expression<'a>
where
    T: Into<Expression<'a>>,
{
    fn from(values: Vec<T>) -> Self {
        Expression::Row(Row::from(values))
    }
}

impl From<chrono::NaiveDate> for Expression<'_> {
    fn from(value: chrono::NaiveDate) -> Self {
        Expression::Value(Box::new(value.into()))
    }
}

impl From<chrono::NaiveTime> for Expression<'_> {
    fn from(value: chrono::NaiveTime) -> Self {
        Expression::Value(Box::new(value.into()))
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Expression<'_> {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Expression::Value(Box::new(value.into()))
    }
}
