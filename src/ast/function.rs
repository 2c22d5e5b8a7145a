use crate::ast::Expression;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The aggregates the reporting engine can project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Aggregate {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl Aggregate {
    pub(crate) fn sql_name(self) -> &'static str {
        match self {
            Aggregate::Count => "COUNT",
            Aggregate::Sum => "SUM",
            Aggregate::Avg => "AVG",
            Aggregate::Min => "MIN",
            Aggregate::Max => "MAX",
        }
    }
}

/// An aggregate function call in the projection list or in a `HAVING`
/// condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function<'a> {
    pub(crate) aggregate: Aggregate,
    pub(crate) distinct: bool,
    pub(crate) expr: Box<Expression<'a>>,
    pub(crate) alias: Option<Cow<'a, str>>,
}

impl<'a> Function<'a> {
    fn new(aggregate: Aggregate, expr: impl Into<Expression<'a>>) -> Self {
        Function {
            aggregate,
            distinct: false,
            expr: Box::new(expr.into()),
            alias: None,
        }
    }

    /// Aggregates only distinct values, e.g. `COUNT(DISTINCT state)`.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Aliases the function call for the projection list.
    pub fn alias(mut self, alias: impl Into<Cow<'a, str>>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Counts the rows or non-null values of the given expression.
///
/// ```rust
/// # use squill::{ast::*, dialect, visitor::render_select};
/// # fn main() -> Result<(), squill::error::Error> {
/// let query = Select::from_table("users").value(count(asterisk()).alias("cnt"));
/// let sql = render_select(&query, dialect::for_product("postgresql")?)?;
///
/// assert_eq!("SELECT COUNT(*) AS cnt FROM users", sql);
/// # Ok(())
/// # }
/// ```
pub fn count<'a, E>(expr: E) -> Function<'a>
where
    E: Into<Expression<'a>>,
{
    Function::new(Aggregate::Count, expr)
}

/// Calculates the sum of a numeric column.
pub fn sum<'a, E>(expr: E) -> Function<'a>
where
    E: Into<Expression<'a>>,
{
    Function::new(Aggregate::Sum, expr)
}

/// Calculates the average of a numeric column.
pub fn avg<'a, E>(expr: E) -> Function<'a>
where
    E: Into<Expression<'a>>,
{
    Function::new(Aggregate::Avg, expr)
}

/// Picks the smallest value of the given expression.
pub fn min<'a, E>(expr: E) -> Function<'a>
where
    E: Into<Expression<'a>>,
{
    Function::new(Aggregate::Min, expr)
}

/// Picks the largest value of the given expression.
pub fn max<'a, E>(expr: E) -> Function<'a>
where
    E: Into<Expression<'a>>,
{
    Function::new(Aggregate::Max, expr)
}
