use crate::ast::{
    Column, CompareOp, Expression, Filter, TernaryCondition, TernaryOp, UnaryCondition, UnaryOp,
};
use std::borrow::Cow;

/// An item that can be on the left side of a comparison. Implemented for
/// everything that converts into a [`Column`], so conditions read naturally
/// off column names:
///
/// ```rust
/// # use squill::{ast::*, dialect, visitor::render_select};
/// # fn main() -> Result<(), squill::error::Error> {
/// let query = Select::from_table("users").so_that("name".equals("Bob"));
/// let sql = render_select(&query, dialect::for_product("mysql")?)?;
///
/// assert_eq!("SELECT * FROM users WHERE name = 'Bob'", sql);
/// # Ok(())
/// # }
/// ```
pub trait Comparable<'a> {
    /// Tests if both sides are the same value.
    fn equals<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>;

    /// Tests if both sides are not the same value.
    fn not_equals<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>;

    /// Tests if the left side is smaller than the right side.
    fn less_than<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>;

    /// Tests if the left side is smaller than the right side or the same.
    fn less_than_or_equals<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>;

    /// Tests if the left side is bigger than the right side.
    fn greater_than<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>;

    /// Tests if the left side is bigger than the right side or the same.
    fn greater_than_or_equals<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>;

    /// Matches the given `LIKE` pattern as-is.
    fn like<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Rejects the given `LIKE` pattern.
    fn not_like<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Matches values starting with the given string.
    fn begins_with<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Rejects values starting with the given string.
    fn not_begins_with<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Matches values ending with the given string.
    fn ends_with<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Rejects values ending with the given string.
    fn not_ends_with<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Matches values containing the given string.
    fn contains<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Rejects values containing the given string.
    fn not_contains<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>;

    /// Tests if the left side is included in the right side collection,
    /// either a list of values or a subquery.
    ///
    /// ```rust
    /// # use squill::{ast::*, dialect, visitor::render_select};
    /// # fn main() -> Result<(), squill::error::Error> {
    /// let query = Select::from_table("users").so_that("id".in_selection(vec![1, 2]));
    /// let sql = render_select(&query, dialect::for_product("mysql")?)?;
    ///
    /// assert_eq!("SELECT * FROM users WHERE id IN (1, 2)", sql);
    /// # Ok(())
    /// # }
    /// ```
    fn in_selection<T>(self, selection: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>;

    /// Tests if the left side is not included in the right side collection.
    fn not_in_selection<T>(self, selection: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>;

    /// Tests if the value lies between the two bounds, inclusive.
    fn between<L, H>(self, low: L, high: H) -> Filter<'a>
    where
        L: Into<Expression<'a>>,
        H: Into<Expression<'a>>;

    /// Tests if the value lies outside of the two bounds.
    fn not_between<L, H>(self, low: L, high: H) -> Filter<'a>
    where
        L: Into<Expression<'a>>,
        H: Into<Expression<'a>>;

    /// Tests if the value is the SQL `NULL`.
    fn is_null(self) -> Filter<'a>;

    /// Tests if the value is not the SQL `NULL`.
    fn is_not_null(self) -> Filter<'a>;
}

impl<'a, U> Comparable<'a> for U
where
    U: Into<Column<'a>>,
{
    fn equals<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::Equals, comparison)
    }

    fn not_equals<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::NotEquals, comparison)
    }

    fn less_than<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::LessThan, comparison)
    }

    fn less_than_or_equals<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::LessThanOrEquals, comparison)
    }

    fn greater_than<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::GreaterThan, comparison)
    }

    fn greater_than_or_equals<T>(self, comparison: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::GreaterThanOrEquals, comparison)
    }

    fn like<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::Like, Expression::from(pattern.into()))
    }

    fn not_like<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::NotLike, Expression::from(pattern.into()))
    }

    fn begins_with<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::BeginsWith, Expression::from(pattern.into()))
    }

    fn not_begins_with<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::NotBeginsWith, Expression::from(pattern.into()))
    }

    fn ends_with<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::EndsWith, Expression::from(pattern.into()))
    }

    fn not_ends_with<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::NotEndsWith, Expression::from(pattern.into()))
    }

    fn contains<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::Contains, Expression::from(pattern.into()))
    }

    fn not_contains<T>(self, pattern: T) -> Filter<'a>
    where
        T: Into<Cow<'a, str>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::NotContains, Expression::from(pattern.into()))
    }

    fn in_selection<T>(self, selection: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::In, selection)
    }

    fn not_in_selection<T>(self, selection: T) -> Filter<'a>
    where
        T: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();
        Filter::binary(column, CompareOp::NotIn, selection)
    }

    fn between<L, H>(self, low: L, high: H) -> Filter<'a>
    where
        L: Into<Expression<'a>>,
        H: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();

        Filter::Ternary(TernaryCondition {
            op: TernaryOp::Between,
            expr: column.into(),
            low: low.into(),
            high: high.into(),
        })
    }

    fn not_between<L, H>(self, low: L, high: H) -> Filter<'a>
    where
        L: Into<Expression<'a>>,
        H: Into<Expression<'a>>,
    {
        let column: Column<'a> = self.into();

        Filter::Ternary(TernaryCondition {
            op: TernaryOp::NotBetween,
            expr: column.into(),
            low: low.into(),
            high: high.into(),
        })
    }

    fn is_null(self) -> Filter<'a> {
        let column: Column<'a> = self.into();

        Filter::Unary(UnaryCondition {
            op: UnaryOp::IsNull,
            expr: column.into(),
        })
    }

    fn is_not_null(self) -> Filter<'a> {
        let column: Column<'a> = self.into();

        Filter::Unary(UnaryCondition {
            op: UnaryOp::IsNotNull,
            expr: column.into(),
        })
    }
}

/// Tests that the subquery returns at least one row.
pub fn exists<'a>(select: impl Into<Expression<'a>>) -> Filter<'a> {
    Filter::Unary(UnaryCondition {
        op: UnaryOp::Exists,
        expr: select.into(),
    })
}

/// Tests that the subquery returns no rows.
pub fn not_exists<'a>(select: impl Into<Expression<'a>>) -> Filter<'a> {
    Filter::Unary(UnaryCondition {
        op: UnaryOp::NotExists,
        expr: select.into(),
    })
}
