use crate::ast::{
    Column, CompareOp, Conjunctive, Expression, Filter, Grouping, IntoGroupByDefinition,
    IntoOrderDefinition, Join, JoinCondition, JoinData, Ordering, OuterMarker, Table,
};
use serde::{Deserialize, Serialize};

/// A builder for a `SELECT` statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Select<'a> {
    pub(crate) tables: Vec<Table<'a>>,
    pub(crate) columns: Vec<Expression<'a>>,
    pub(crate) joins: Vec<Join<'a>>,
    pub(crate) conditions: Filter<'a>,
    pub(crate) group_by: Grouping<'a>,
    pub(crate) having: Filter<'a>,
    pub(crate) ordering: Ordering<'a>,
    pub(crate) distinct: bool,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl<'a> Select<'a> {
    /// Creates a new `SELECT` statement from the given table.
    ///
    /// ```rust
    /// # use squill::{ast::*, dialect, visitor::render_select};
    /// # fn main() -> Result<(), squill::error::Error> {
    /// let query = Select::from_table(("crm", "users"));
    /// let sql = render_select(&query, dialect::for_product("postgresql")?)?;
    ///
    /// assert_eq!("SELECT * FROM crm.users", sql);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_table<T>(table: T) -> Self
    where
        T: Into<Table<'a>>,
    {
        Select {
            tables: vec![table.into()],
            ..Default::default()
        }
    }

    /// Adds another table to the `FROM` list, the old-style comma join.
    /// Combined with [`Filter::Join`] conditions in the `WHERE` tree and
    /// [`promote_joins`], this is how legacy reports describe their joins.
    ///
    /// [`promote_joins`]: Select::promote_joins
    pub fn and_from<T>(mut self, table: T) -> Self
    where
        T: Into<Table<'a>>,
    {
        self.tables.push(table.into());
        self
    }

    /// Adds a column to be selected.
    pub fn column<T>(mut self, column: T) -> Self
    where
        T: Into<Column<'a>>,
    {
        self.columns.push(column.into().into());
        self
    }

    /// A bulk method to select multiple columns.
    pub fn columns<T>(mut self, columns: Vec<T>) -> Self
    where
        T: Into<Column<'a>>,
    {
        self.columns
            .extend(columns.into_iter().map(|c| c.into().into()));
        self
    }

    /// Adds an arbitrary projection item: a value, a function call or a raw
    /// fragment.
    pub fn value<T>(mut self, value: T) -> Self
    where
        T: Into<Expression<'a>>,
    {
        self.columns.push(value.into());
        self
    }

    /// Adds `WHERE` conditions to the query. See
    /// [Comparable](trait.Comparable.html#required-methods) for more examples.
    pub fn so_that<T>(mut self, conditions: T) -> Self
    where
        T: Into<Filter<'a>>,
    {
        self.conditions = conditions.into();
        self
    }

    /// Combines the new conditions with the existing `WHERE` via `AND`.
    pub fn and_where<T>(mut self, conditions: T) -> Self
    where
        T: Into<Filter<'a>>,
    {
        self.conditions = match std::mem::take(&mut self.conditions) {
            Filter::NoCondition => conditions.into(),
            existing => existing.and(conditions.into()),
        };

        self
    }

    /// Adds an `INNER JOIN` to the query.
    pub fn inner_join<J>(mut self, join: J) -> Self
    where
        J: Into<JoinData<'a>>,
    {
        self.joins.push(Join::Inner(join.into()));
        self
    }

    /// Adds a `LEFT OUTER JOIN` to the query.
    pub fn left_outer_join<J>(mut self, join: J) -> Self
    where
        J: Into<JoinData<'a>>,
    {
        self.joins.push(Join::LeftOuter(join.into()));
        self
    }

    /// Adds a `RIGHT OUTER JOIN` to the query.
    pub fn right_outer_join<J>(mut self, join: J) -> Self
    where
        J: Into<JoinData<'a>>,
    {
        self.joins.push(Join::RightOuter(join.into()));
        self
    }

    /// Adds a `FULL OUTER JOIN` to the query.
    pub fn full_outer_join<J>(mut self, join: J) -> Self
    where
        J: Into<JoinData<'a>>,
    {
        self.joins.push(Join::FullOuter(join.into()));
        self
    }

    /// Adds a `CROSS JOIN` to the query.
    pub fn cross_join<J>(mut self, join: J) -> Self
    where
        J: Into<JoinData<'a>>,
    {
        self.joins.push(Join::Cross(join.into()));
        self
    }

    /// Adds a grouping to the `GROUP BY` section.
    pub fn group_by<T>(mut self, group: T) -> Self
    where
        T: IntoGroupByDefinition<'a>,
    {
        self.group_by = self.group_by.append(group.into_group_by_definition());
        self
    }

    /// Adds `HAVING` conditions filtering the grouped rows.
    pub fn having<T>(mut self, conditions: T) -> Self
    where
        T: Into<Filter<'a>>,
    {
        self.having = conditions.into();
        self
    }

    /// Adds an ordering to the `ORDER BY` section.
    pub fn order_by<T>(mut self, value: T) -> Self
    where
        T: IntoOrderDefinition<'a>,
    {
        self.ordering = self.ordering.append(value.into_order_definition());
        self
    }

    /// Returns only distinct rows.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Limits the result set to the given number of rows.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips the given number of rows before returning results.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Rewrites join predicates buried in the `WHERE` tree into explicit
    /// `JOIN` clauses.
    ///
    /// Join predicates are collapsed out of the condition tree with
    /// [`Filter::extract_joins`]; each one becomes (or merges into) a `JOIN`
    /// on its right-side table, legacy outer markers selecting the join
    /// kind. Tables pulled into a join clause leave the comma-separated
    /// `FROM` list. Predicates whose columns are not table-qualified, or
    /// that sit under an `OR` or negated junction, stay in `WHERE`.
    ///
    /// ```rust
    /// # use squill::{ast::*, dialect, visitor::render_select};
    /// # fn main() -> Result<(), squill::error::Error> {
    /// let join = Filter::Join(JoinCondition::new(
    ///     ("users", "id"),
    ///     CompareOp::Equals,
    ///     ("posts", "user_id"),
    /// ));
    ///
    /// let query = Select::from_table("users")
    ///     .and_from("posts")
    ///     .so_that(join.and(("posts", "published").equals(true)))
    ///     .promote_joins();
    ///
    /// let sql = render_select(&query, dialect::for_product("postgresql")?)?;
    ///
    /// assert_eq!(
    ///     "SELECT * FROM users INNER JOIN posts ON users.id = posts.user_id WHERE posts.published = TRUE",
    ///     sql
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn promote_joins(mut self) -> Self {
        let conditions = std::mem::take(&mut self.conditions);
        let (mut remaining, join_conditions) = conditions.extract_joins();

        for condition in join_conditions {
            let condition = self.orient_towards_anchor(condition);

            let table = match (&condition.left.table, &condition.right.table) {
                (Some(_), Some(right)) => right.clone(),
                // An unqualified side cannot name the joined table.
                _ => {
                    remaining = remaining.and(Filter::Join(condition));
                    continue;
                }
            };

            let marker = condition.outer;
            let on = Filter::Join(JoinCondition {
                outer: OuterMarker::None,
                ..condition
            });

            if let Some(join) = self
                .joins
                .iter_mut()
                .find(|join| join.data().table.reference() == table.reference())
            {
                let data = join.data_mut();
                let existing = std::mem::take(&mut data.conditions);
                data.conditions = match existing {
                    Filter::NoCondition => on,
                    existing => existing.and(on),
                };
                continue;
            }

            let position = self
                .tables
                .iter()
                .position(|t| t.reference() == table.reference());

            let table = match position {
                Some(pos) if pos > 0 => self.tables.remove(pos),
                _ => table,
            };

            let data = JoinData {
                table,
                conditions: on,
            };

            let join = match marker {
                OuterMarker::None => Join::Inner(data),
                OuterMarker::Left => Join::LeftOuter(data),
                OuterMarker::Right => Join::RightOuter(data),
            };

            self.joins.push(join);
        }

        self.conditions = remaining.flatten();
        self
    }

    /// If the join's right side refers to the first `FROM` table, flip the
    /// predicate so the anchor table stays in place and the other table is
    /// the one joined in.
    fn orient_towards_anchor(&self, condition: JoinCondition<'a>) -> JoinCondition<'a> {
        let anchor = match self.tables.first() {
            Some(anchor) => anchor.reference().to_string(),
            None => return condition,
        };

        let right_is_anchor = condition
            .right
            .table
            .as_ref()
            .map(|t| t.reference() == anchor)
            .unwrap_or(false);

        let left_is_anchor = condition
            .left
            .table
            .as_ref()
            .map(|t| t.reference() == anchor)
            .unwrap_or(false);

        if right_is_anchor && !left_is_anchor {
            JoinCondition {
                left: condition.right,
                op: condition.op.reversed(),
                right: condition.left,
                outer: condition.outer.reversed(),
            }
        } else {
            condition
        }
    }
}

impl CompareOp {
    /// The operator with its operands swapped.
    pub(crate) fn reversed(self) -> Self {
        match self {
            CompareOp::LessThan => CompareOp::GreaterThan,
            CompareOp::LessThanOrEquals => CompareOp::GreaterThanOrEquals,
            CompareOp::GreaterThan => CompareOp::LessThan,
            CompareOp::GreaterThanOrEquals => CompareOp::LessThanOrEquals,
            op => op,
        }
    }
}

impl OuterMarker {
    pub(crate) fn reversed(self) -> Self {
        match self {
            OuterMarker::Left => OuterMarker::Right,
            OuterMarker::Right => OuterMarker::Left,
            OuterMarker::None => OuterMarker::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Comparable;

    fn users_posts_join() -> Filter<'static> {
        Filter::Join(JoinCondition::new(
            ("users", "id"),
            CompareOp::Equals,
            ("posts", "user_id"),
        ))
    }

    #[test]
    fn promotes_a_join_and_removes_the_table_from_the_from_list() {
        let query = Select::from_table("users")
            .and_from("posts")
            .so_that(users_posts_join())
            .promote_joins();

        assert_eq!(1, query.tables.len());
        assert_eq!(1, query.joins.len());
        assert_eq!(Filter::NoCondition, query.conditions);
        assert!(matches!(query.joins[0], Join::Inner(_)));
    }

    #[test]
    fn a_left_marker_becomes_a_left_outer_join() {
        let join = Filter::Join(
            JoinCondition::new(("users", "id"), CompareOp::Equals, ("posts", "user_id"))
                .outer(OuterMarker::Left),
        );

        let query = Select::from_table("users")
            .and_from("posts")
            .so_that(join)
            .promote_joins();

        assert!(matches!(query.joins[0], Join::LeftOuter(_)));
    }

    #[test]
    fn joins_on_the_same_table_merge() {
        let second = Filter::Join(JoinCondition::new(
            ("users", "org"),
            CompareOp::Equals,
            ("posts", "org"),
        ));

        let query = Select::from_table("users")
            .and_from("posts")
            .so_that(users_posts_join().and(second))
            .promote_joins();

        assert_eq!(1, query.joins.len());

        match &query.joins[0].data().conditions {
            Filter::Junction(junction) => assert_eq!(2, junction.children.len()),
            other => panic!("expected merged join conditions, got {:?}", other),
        }
    }

    #[test]
    fn a_join_pointing_at_the_anchor_is_flipped() {
        let backwards = Filter::Join(JoinCondition::new(
            ("posts", "user_id"),
            CompareOp::Equals,
            ("users", "id"),
        ));

        let query = Select::from_table("users")
            .and_from("posts")
            .so_that(backwards)
            .promote_joins();

        assert_eq!(1, query.joins.len());
        assert_eq!("posts", query.joins[0].data().table.name.as_ref());
    }

    #[test]
    fn unqualified_join_predicates_stay_in_where() {
        let unqualified = Filter::Join(JoinCondition::new(
            "id",
            CompareOp::Equals,
            ("posts", "user_id"),
        ));

        let query = Select::from_table("users")
            .and_from("posts")
            .so_that(unqualified)
            .promote_joins();

        assert!(query.joins.is_empty());
        assert!(matches!(query.conditions, Filter::Join(_)));
    }
}
