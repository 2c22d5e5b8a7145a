//! Turning the abstract query into SQL text.
//!
//! The renderer walks a [`Select`](crate::ast::Select) with a selected
//! [`Dialect`](crate::dialect::Dialect) and produces the product's SQL.
//! Literals are inlined with the dialect's escaping; the finished text is
//! handed to whatever driver executes it.
//!
//! Where a dialect cannot express an operation, rendering fails with
//! [`UnsupportedByDialect`](crate::error::ErrorKind::UnsupportedByDialect)
//! instead of producing SQL that means something else.
use crate::ast::{
    BinaryCondition, Column, CompareOp, Expression, Filter, Function, Join, JoinCondition,
    JoinData, Order, OuterMarker, Select, Table, TernaryCondition, TernaryOp, UnaryCondition,
    UnaryOp, Value,
};
use crate::dialect::{Capability, Dialect, LimitStyle, OuterStyle};
use crate::error::{Error, ErrorKind};

/// Renders a `SELECT` for the given dialect.
///
/// ```rust
/// # use squill::{ast::*, dialect, visitor::render_select};
/// # fn main() -> Result<(), squill::error::Error> {
/// let query = Select::from_table("users")
///     .column("name")
///     .so_that("city".equals("Helsinki"))
///     .order_by("name".ascend())
///     .limit(10);
///
/// let sql = render_select(&query, dialect::for_product("mysql")?)?;
///
/// assert_eq!(
///     "SELECT name FROM users WHERE city = 'Helsinki' ORDER BY name ASC LIMIT 10",
///     sql
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_select(select: &Select<'_>, dialect: &dyn Dialect) -> crate::Result<String> {
    let sql = SqlRenderer::new(dialect).render(select)?;

    tracing::debug!(dialect = dialect.name(), sql = %sql, "rendered query");

    Ok(sql)
}

/// A single-use object rendering one query for one dialect.
pub struct SqlRenderer<'d> {
    dialect: &'d dyn Dialect,
    out: String,
}

impl<'d> SqlRenderer<'d> {
    pub fn new(dialect: &'d dyn Dialect) -> Self {
        SqlRenderer {
            dialect,
            out: String::new(),
        }
    }

    /// Consumes the renderer, producing the SQL text.
    pub fn render(mut self, select: &Select<'_>) -> crate::Result<String> {
        self.visit_select(select)?;
        Ok(self.out)
    }

    fn write(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn unsupported(&self, operation: &'static str) -> Error {
        Error::builder(ErrorKind::unsupported(operation, self.dialect.name())).build()
    }

    fn visit_select(&mut self, select: &Select<'_>) -> crate::Result<()> {
        let limits_rownum = self.dialect.limit_style() == LimitStyle::RowNum
            && (select.limit.is_some() || select.offset.is_some());

        if limits_rownum {
            return self.visit_rownum_wrapped(select);
        }

        self.write("SELECT ");

        if select.distinct {
            self.write("DISTINCT ");
        }

        self.visit_limit_prefix(select)?;
        self.visit_projection(&select.columns)?;
        self.visit_from(select)?;

        for join in &select.joins {
            self.visit_join(join)?;
        }

        if !select.conditions.is_empty() {
            self.write(" WHERE ");
            self.visit_filter(&select.conditions, true)?;
        }

        if !select.group_by.is_empty() {
            self.write(" GROUP BY ");

            for (i, group) in select.group_by.0.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }

                self.visit_expression(group)?;
            }
        }

        if !select.having.is_empty() {
            self.write(" HAVING ");
            self.visit_filter(&select.having, true)?;
        }

        if !select.ordering.is_empty() {
            self.write(" ORDER BY ");

            for (i, (expr, order)) in select.ordering.0.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }

                self.visit_expression(expr)?;

                match order {
                    Some(Order::Asc) => self.write(" ASC"),
                    Some(Order::Desc) => self.write(" DESC"),
                    None => (),
                }
            }
        }

        self.visit_limit_suffix(select)?;

        Ok(())
    }

    /// Oracle-style row limiting: the query is rendered bare and wrapped
    /// into derived tables filtered on `ROWNUM`.
    fn visit_rownum_wrapped(&mut self, select: &Select<'_>) -> crate::Result<()> {
        let mut inner = select.clone();
        inner.limit = None;
        inner.offset = None;

        let inner_sql = SqlRenderer::new(self.dialect).render(&inner)?;

        match (select.limit, select.offset) {
            (Some(limit), None) => {
                self.write(&format!(
                    "SELECT * FROM ({}) WHERE ROWNUM <= {}",
                    inner_sql, limit
                ));
            }
            (limit, Some(offset)) => {
                let rownum_filter = match limit {
                    Some(limit) => format!(" WHERE ROWNUM <= {}", limit + offset),
                    None => String::new(),
                };

                self.write(&format!(
                    "SELECT * FROM (SELECT inner_.*, ROWNUM rnum FROM ({}) inner_{}) WHERE rnum > {}",
                    inner_sql, rownum_filter, offset
                ));
            }
            (None, None) => unreachable!("checked by the caller"),
        }

        Ok(())
    }

    /// The row-limiting tokens living between `SELECT` and the projection.
    fn visit_limit_prefix(&mut self, select: &Select<'_>) -> crate::Result<()> {
        match self.dialect.limit_style() {
            LimitStyle::Top => {
                // With an offset the query switches to `OFFSET … FETCH`,
                // rendered after `ORDER BY`.
                if select.offset.is_some() {
                    if !self.dialect.supports(Capability::Offset) {
                        return Err(self.unsupported("OFFSET"));
                    }
                } else if let Some(limit) = select.limit {
                    self.write(&format!("TOP {} ", limit));
                }
            }
            LimitStyle::FirstRows => {
                if let Some(offset) = select.offset {
                    if !self.dialect.supports(Capability::Offset) {
                        return Err(self.unsupported("OFFSET"));
                    }

                    self.write(&format!("SKIP {} ", offset));
                }

                if let Some(limit) = select.limit {
                    self.write(&format!("FIRST {} ", limit));
                }
            }
            LimitStyle::Unsupported if select.limit.is_some() || select.offset.is_some() => {
                return Err(self.unsupported("row limiting"));
            }
            _ => (),
        }

        Ok(())
    }

    /// The row-limiting clause appended to the end of the query.
    fn visit_limit_suffix(&mut self, select: &Select<'_>) -> crate::Result<()> {
        match self.dialect.limit_style() {
            LimitStyle::LimitOffset => {
                if select.offset.is_some() && !self.dialect.supports(Capability::Offset) {
                    return Err(self.unsupported("OFFSET"));
                }

                match (select.limit, select.offset) {
                    (Some(limit), Some(offset)) => {
                        self.write(&format!(" LIMIT {} OFFSET {}", limit, offset))
                    }
                    (Some(limit), None) => self.write(&format!(" LIMIT {}", limit)),
                    (None, Some(offset)) => match self.dialect.offset_requires_limit() {
                        Some(filler) => {
                            self.write(&format!(" LIMIT {} OFFSET {}", filler, offset))
                        }
                        None => self.write(&format!(" OFFSET {}", offset)),
                    },
                    (None, None) => (),
                }
            }
            LimitStyle::FetchFirst => {
                if let Some(offset) = select.offset {
                    if !self.dialect.supports(Capability::Offset) {
                        return Err(self.unsupported("OFFSET"));
                    }

                    self.write(&format!(" OFFSET {} ROWS", offset));
                }

                if let Some(limit) = select.limit {
                    self.write(&format!(" FETCH FIRST {} ROWS ONLY", limit));
                }
            }
            LimitStyle::Top => {
                if let Some(offset) = select.offset {
                    // Capability was checked while rendering the prefix.
                    if select.ordering.is_empty() {
                        self.write(" ORDER BY (SELECT NULL)");
                    }

                    self.write(&format!(" OFFSET {} ROWS", offset));

                    if let Some(limit) = select.limit {
                        self.write(&format!(" FETCH NEXT {} ROWS ONLY", limit));
                    }
                }
            }
            _ => (),
        }

        Ok(())
    }

    fn visit_projection(&mut self, columns: &[Expression<'_>]) -> crate::Result<()> {
        if columns.is_empty() {
            self.write("*");
            return Ok(());
        }

        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }

            match column {
                Expression::Column(column) => {
                    self.visit_column(column)?;
                    self.visit_alias(column.alias.as_deref())?;
                }
                Expression::Function(function) => {
                    self.visit_function(function)?;
                    self.visit_alias(function.alias.as_deref())?;
                }
                other => self.visit_expression(other)?,
            }
        }

        Ok(())
    }

    fn visit_alias(&mut self, alias: Option<&str>) -> crate::Result<()> {
        if let Some(alias) = alias {
            if !self.dialect.valid_alias(alias) {
                return Err(
                    Error::builder(ErrorKind::invalid_alias(alias, self.dialect.name())).build(),
                );
            }

            self.write(" AS ");

            let quoted = self.dialect.quote_identifier(alias);
            self.write(&quoted);
        }

        Ok(())
    }

    fn visit_from(&mut self, select: &Select<'_>) -> crate::Result<()> {
        if select.tables.is_empty() {
            if let Some(dual) = self.dialect.dual_table() {
                self.write(" FROM ");
                self.write(dual);
            }

            return Ok(());
        }

        self.write(" FROM ");

        for (i, table) in select.tables.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }

            self.visit_table(table)?;
        }

        Ok(())
    }

    fn visit_table(&mut self, table: &Table<'_>) -> crate::Result<()> {
        if let Some(schema) = &table.schema {
            let quoted = self.dialect.quote_identifier(schema);
            self.write(&quoted);
            self.write(".");
        }

        let quoted = self.dialect.quote_identifier(&table.name);
        self.write(&quoted);

        if let Some(alias) = &table.alias {
            self.write(" ");

            let quoted = self.dialect.quote_identifier(alias);
            self.write(&quoted);
        }

        Ok(())
    }

    fn visit_join(&mut self, join: &Join<'_>) -> crate::Result<()> {
        let (keyword, data, capability) = match join {
            Join::Inner(data) => ("INNER JOIN", data, None),
            Join::LeftOuter(data) => ("LEFT OUTER JOIN", data, None),
            Join::RightOuter(data) => {
                ("RIGHT OUTER JOIN", data, Some(Capability::RightOuterJoin))
            }
            Join::FullOuter(data) => ("FULL OUTER JOIN", data, Some(Capability::FullOuterJoin)),
            Join::Cross(data) => ("CROSS JOIN", data, Some(Capability::CrossJoin)),
        };

        if let Some(capability) = capability {
            if !self.dialect.supports(capability) {
                let name = match capability {
                    Capability::RightOuterJoin => "RIGHT OUTER JOIN",
                    Capability::FullOuterJoin => "FULL OUTER JOIN",
                    _ => "CROSS JOIN",
                };

                return Err(self.unsupported(name));
            }
        }

        self.write(" ");
        self.write(keyword);
        self.write(" ");
        self.visit_join_data(join, data)?;

        Ok(())
    }

    fn visit_join_data(&mut self, join: &Join<'_>, data: &JoinData<'_>) -> crate::Result<()> {
        self.visit_table(&data.table)?;

        if matches!(join, Join::Cross(_)) {
            return Ok(());
        }

        self.write(" ON ");

        if data.conditions.is_empty() {
            self.write(self.dialect.true_predicate());
        } else {
            self.visit_filter(&data.conditions, true)?;
        }

        Ok(())
    }

    fn visit_filter(&mut self, filter: &Filter<'_>, top_level: bool) -> crate::Result<()> {
        match filter {
            Filter::Junction(junction) => {
                let parens = junction.negated || !top_level;

                if junction.negated {
                    self.write("NOT ");
                }

                if parens {
                    self.write("(");
                }

                if junction.children.is_empty() {
                    self.write(self.dialect.true_predicate());
                }

                let separator = match junction.op {
                    crate::ast::JunctionOp::And => " AND ",
                    crate::ast::JunctionOp::Or => " OR ",
                };

                for (i, child) in junction.children.iter().enumerate() {
                    if i > 0 {
                        self.write(separator);
                    }

                    self.visit_filter(child, false)?;
                }

                if parens {
                    self.write(")");
                }

                Ok(())
            }
            Filter::Join(join) => self.visit_join_condition(join),
            Filter::Binary(condition) => self.visit_binary(condition),
            Filter::Unary(condition) => self.visit_unary(condition),
            Filter::Ternary(condition) => self.visit_ternary(condition),
            Filter::Raw(fragment) => {
                self.write(fragment);
                Ok(())
            }
            Filter::NoCondition => {
                self.write(self.dialect.true_predicate());
                Ok(())
            }
            Filter::NegativeCondition => {
                self.write(self.dialect.false_predicate());
                Ok(())
            }
        }
    }

    /// A join predicate rendered inside `WHERE`, including the legacy outer
    /// markers for the dialects that still speak them.
    fn visit_join_condition(&mut self, join: &JoinCondition<'_>) -> crate::Result<()> {
        if join.outer == OuterMarker::None {
            self.visit_column(&join.left)?;
            self.write(&format!(" {} ", compare_symbol(join.op)?));
            self.visit_column(&join.right)?;

            return Ok(());
        }

        if !self.dialect.supports(Capability::LegacyOuterMarkers) {
            return Err(self.unsupported("outer join markers in WHERE"));
        }

        match self.dialect.legacy_outer_marker() {
            Some(OuterStyle::OraclePlus) => {
                self.visit_column(&join.left)?;

                if join.outer == OuterMarker::Right {
                    self.write("(+)");
                }

                self.write(&format!(" {} ", compare_symbol(join.op)?));
                self.visit_column(&join.right)?;

                if join.outer == OuterMarker::Left {
                    self.write("(+)");
                }

                Ok(())
            }
            Some(OuterStyle::StarOperator) => {
                if join.op != CompareOp::Equals {
                    return Err(self.unsupported("non-equality outer join markers"));
                }

                self.visit_column(&join.left)?;

                match join.outer {
                    OuterMarker::Left => self.write(" *= "),
                    OuterMarker::Right => self.write(" =* "),
                    OuterMarker::None => unreachable!("handled above"),
                }

                self.visit_column(&join.right)?;

                Ok(())
            }
            None => Err(self.unsupported("outer join markers in WHERE")),
        }
    }

    fn visit_binary(&mut self, condition: &BinaryCondition<'_>) -> crate::Result<()> {
        match condition.op {
            CompareOp::In | CompareOp::NotIn => self.visit_in(condition),
            CompareOp::Like
            | CompareOp::NotLike
            | CompareOp::BeginsWith
            | CompareOp::NotBeginsWith
            | CompareOp::EndsWith
            | CompareOp::NotEndsWith
            | CompareOp::Contains
            | CompareOp::NotContains => self.visit_like(condition),
            op => {
                self.visit_expression(&condition.left)?;
                self.write(&format!(" {} ", compare_symbol(op)?));
                self.visit_expression(&condition.right)?;

                Ok(())
            }
        }
    }

    fn visit_in(&mut self, condition: &BinaryCondition<'_>) -> crate::Result<()> {
        let negated = condition.op == CompareOp::NotIn;

        match &condition.right {
            Expression::Row(row) if row.is_empty() => {
                // An empty list matches nothing; rejecting nothing matches
                // everything.
                let predicate = if negated {
                    self.dialect.true_predicate()
                } else {
                    self.dialect.false_predicate()
                };

                self.write(predicate);

                Ok(())
            }
            Expression::Row(row) => {
                self.visit_expression(&condition.left)?;
                self.write(if negated { " NOT IN (" } else { " IN (" });

                for (i, value) in row.values.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }

                    self.visit_expression(value)?;
                }

                self.write(")");

                Ok(())
            }
            Expression::Select(select) => {
                self.visit_expression(&condition.left)?;
                self.write(if negated { " NOT IN " } else { " IN " });
                self.visit_subquery(select)?;

                Ok(())
            }
            _ => Err(Error::builder(ErrorKind::ConversionError(
                "IN expects a value list or a subquery on the right side",
            ))
            .build()),
        }
    }

    fn visit_like(&mut self, condition: &BinaryCondition<'_>) -> crate::Result<()> {
        let pattern = match &condition.right {
            Expression::Value(value) => match value.as_str() {
                Some(pattern) => pattern,
                None => {
                    return Err(Error::builder(ErrorKind::ConversionError(
                        "pattern matching expects a string on the right side",
                    ))
                    .build())
                }
            },
            _ => {
                return Err(Error::builder(ErrorKind::ConversionError(
                    "pattern matching expects a string on the right side",
                ))
                .build())
            }
        };

        let (negated, pattern) = match condition.op {
            CompareOp::Like => (false, pattern.to_string()),
            CompareOp::NotLike => (true, pattern.to_string()),
            CompareOp::BeginsWith => (false, format!("{}%", pattern)),
            CompareOp::NotBeginsWith => (true, format!("{}%", pattern)),
            CompareOp::EndsWith => (false, format!("%{}", pattern)),
            CompareOp::NotEndsWith => (true, format!("%{}", pattern)),
            CompareOp::Contains => (false, format!("%{}%", pattern)),
            CompareOp::NotContains => (true, format!("%{}%", pattern)),
            _ => unreachable!("checked by the caller"),
        };

        self.visit_expression(&condition.left)?;
        self.write(if negated { " NOT LIKE " } else { " LIKE " });

        let literal = self.dialect.string_literal(&pattern);
        self.write(&literal);

        Ok(())
    }

    fn visit_unary(&mut self, condition: &UnaryCondition<'_>) -> crate::Result<()> {
        match condition.op {
            UnaryOp::IsNull => {
                self.visit_expression(&condition.expr)?;
                self.write(" IS NULL");
            }
            UnaryOp::IsNotNull => {
                self.visit_expression(&condition.expr)?;
                self.write(" IS NOT NULL");
            }
            UnaryOp::Exists => {
                self.write("EXISTS ");
                self.visit_expression(&condition.expr)?;
            }
            UnaryOp::NotExists => {
                self.write("NOT EXISTS ");
                self.visit_expression(&condition.expr)?;
            }
            UnaryOp::Not => {
                self.write("NOT ");
                self.visit_expression(&condition.expr)?;
            }
        }

        Ok(())
    }

    fn visit_ternary(&mut self, condition: &TernaryCondition<'_>) -> crate::Result<()> {
        self.visit_expression(&condition.expr)?;

        match condition.op {
            TernaryOp::Between => self.write(" BETWEEN "),
            TernaryOp::NotBetween => self.write(" NOT BETWEEN "),
        }

        self.visit_expression(&condition.low)?;
        self.write(" AND ");
        self.visit_expression(&condition.high)?;

        Ok(())
    }

    fn visit_expression(&mut self, expression: &Expression<'_>) -> crate::Result<()> {
        match expression {
            Expression::Column(column) => self.visit_column(column),
            Expression::Value(value) => self.visit_value(value),
            Expression::Function(function) => self.visit_function(function),
            Expression::Raw(fragment) => {
                self.write(fragment);
                Ok(())
            }
            Expression::Row(row) => {
                self.write("(");

                for (i, value) in row.values.iter().enumerate() {
                    if i > 0 {
                        self.write(", ");
                    }

                    self.visit_expression(value)?;
                }

                self.write(")");

                Ok(())
            }
            Expression::Select(select) => self.visit_subquery(select),
        }
    }

    fn visit_subquery(&mut self, select: &Select<'_>) -> crate::Result<()> {
        let sql = SqlRenderer::new(self.dialect).render(select)?;

        self.write("(");
        self.write(&sql);
        self.write(")");

        Ok(())
    }

    fn visit_column(&mut self, column: &Column<'_>) -> crate::Result<()> {
        if let Some(table) = &column.table {
            match (&table.alias, &table.schema) {
                (Some(alias), _) => {
                    let quoted = self.dialect.quote_identifier(alias);
                    self.write(&quoted);
                }
                (None, Some(schema)) => {
                    let quoted = self.dialect.quote_identifier(schema);
                    self.write(&quoted);
                    self.write(".");

                    let quoted = self.dialect.quote_identifier(&table.name);
                    self.write(&quoted);
                }
                (None, None) => {
                    let quoted = self.dialect.quote_identifier(&table.name);
                    self.write(&quoted);
                }
            }

            self.write(".");
        }

        let quoted = self.dialect.quote_identifier(&column.name);
        self.write(&quoted);

        Ok(())
    }

    fn visit_function(&mut self, function: &Function<'_>) -> crate::Result<()> {
        self.write(function.aggregate.sql_name());
        self.write("(");

        if function.distinct {
            self.write("DISTINCT ");
        }

        self.visit_expression(&function.expr)?;
        self.write(")");

        Ok(())
    }

    fn visit_value(&mut self, value: &Value<'_>) -> crate::Result<()> {
        let rendered = match value {
            Value::Null => "NULL".to_string(),
            Value::Boolean(b) => self.dialect.boolean_literal(*b).to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Double(d) => d.to_string(),
            Value::Text(text) => self.dialect.string_literal(text),
            Value::Date(date) => self.dialect.date_literal(date),
            Value::Time(time) => self.dialect.time_literal(time),
            Value::DateTime(datetime) => self.dialect.datetime_literal(datetime),
        };

        self.write(&rendered);

        Ok(())
    }
}

fn compare_symbol(op: CompareOp) -> crate::Result<&'static str> {
    let symbol = match op {
        CompareOp::Equals => "=",
        CompareOp::NotEquals => "<>",
        CompareOp::LessThan => "<",
        CompareOp::LessThanOrEquals => "<=",
        CompareOp::GreaterThan => ">",
        CompareOp::GreaterThanOrEquals => ">=",
        _ => {
            return Err(Error::builder(ErrorKind::ConversionError(
                "operator has no plain symbol form",
            ))
            .build())
        }
    };

    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect;
    use crate::error::ErrorKind;
    use crate::visitor::render_select;

    fn generic() -> &'static dyn crate::dialect::Dialect {
        dialect::for_product("generic").unwrap()
    }

    #[test]
    fn a_bare_select_projects_everything() {
        let query = Select::from_table("users");

        assert_eq!("SELECT * FROM users", render_select(&query, generic()).unwrap());
    }

    #[test]
    fn distinct_group_by_and_having_render_in_order() {
        let query = Select::from_table("orders")
            .distinct()
            .column("customer")
            .value(sum(Column::from("total")).alias("sum_total"))
            .group_by("customer")
            .having(Expression::from(sum(Column::from("total"))).compare(
                CompareOp::GreaterThan,
                500,
            ))
            .order_by("customer".ascend());

        assert_eq!(
            "SELECT DISTINCT customer, SUM(total) AS sum_total FROM orders GROUP BY customer HAVING SUM(total) > 500 ORDER BY customer ASC",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn junctions_parenthesize_their_nested_sets() {
        let filter = "state".equals("open").and(
            "weight".greater_than(10).or("priority".equals("high")),
        );

        let query = Select::from_table("tickets").so_that(filter);

        assert_eq!(
            "SELECT * FROM tickets WHERE state = 'open' AND (weight > 10 OR priority = 'high')",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn negated_junctions_render_not_around_the_set() {
        let filter = "a".equals(1).and("b".equals(2)).not();
        let query = Select::from_table("t").so_that(filter);

        assert_eq!(
            "SELECT * FROM t WHERE NOT (a = 1 AND b = 2)",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn an_empty_in_list_cancels_the_condition() {
        let values: Vec<i64> = Vec::new();
        let query = Select::from_table("users").so_that("id".in_selection(values));

        assert_eq!(
            "SELECT * FROM users WHERE 1=0",
            render_select(&query, generic()).unwrap()
        );

        let values: Vec<i64> = Vec::new();
        let query = Select::from_table("users").so_that("id".not_in_selection(values));

        assert_eq!(
            "SELECT * FROM users WHERE 1=1",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn in_renders_subqueries_in_parens() {
        let sub = Select::from_table("banned").column("user_id");
        let query = Select::from_table("users").so_that("id".in_selection(sub));

        assert_eq!(
            "SELECT * FROM users WHERE id IN (SELECT user_id FROM banned)",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn exists_renders_the_subquery() {
        let sub = Select::from_table("posts").so_that(("posts", "author").equals(Column::from(("users", "id"))));
        let query = Select::from_table("users").so_that(exists(sub));

        assert_eq!(
            "SELECT * FROM users WHERE EXISTS (SELECT * FROM posts WHERE posts.author = users.id)",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn begins_with_appends_the_wildcard() {
        let query = Select::from_table("users").so_that("name".begins_with("Ann"));

        assert_eq!(
            "SELECT * FROM users WHERE name LIKE 'Ann%'",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn between_renders_both_bounds() {
        let query = Select::from_table("orders").so_that("total".between(10, 20));

        assert_eq!(
            "SELECT * FROM orders WHERE total BETWEEN 10 AND 20",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn table_aliases_qualify_their_columns() {
        let query = Select::from_table(Table::new("users").alias("u"))
            .column(Column::new("id").table(Table::new("users").alias("u")));

        assert_eq!(
            "SELECT u.id FROM users u",
            render_select(&query, generic()).unwrap()
        );
    }

    #[test]
    fn cross_joins_check_the_capability() {
        let query = Select::from_table("a").cross_join("b");

        assert_eq!(
            "SELECT * FROM a CROSS JOIN b",
            render_select(&query, generic()).unwrap()
        );

        let query = Select::from_table("a").cross_join("b");
        let err = render_select(&query, dialect::for_product("access").unwrap()).unwrap_err();

        assert!(matches!(
            err.kind(),
            ErrorKind::UnsupportedByDialect {
                dialect: "access",
                ..
            }
        ));
    }

    #[test]
    fn raw_fragments_render_untouched() {
        let query = Select::from_table("events").so_that(Filter::raw("span_ms > p99"));

        assert_eq!(
            "SELECT * FROM events WHERE span_ms > p99",
            render_select(&query, generic()).unwrap()
        );
    }
}
