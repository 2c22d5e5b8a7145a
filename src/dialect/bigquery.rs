use crate::dialect::{keywords, Dialect, Hive};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ASSERT_ROWS_MODIFIED", "ARRAY", "CUBE", "DEFINE", "ENUM", "EXCLUDE", "GROUPING",
        "GROUPS", "HASH", "IF", "IGNORE", "LATERAL", "LIMIT", "LOOKUP", "MERGE", "NEW",
        "NULLS", "OFFSET", "OVER", "PARTITION", "PRECEDING", "PROTO", "QUALIFY", "RANGE",
        "RECURSIVE", "RESPECT", "ROLLUP", "ROW", "STRUCT", "TABLESAMPLE", "TREAT",
        "UNBOUNDED", "UNNEST", "WINDOW", "WITHIN",
    ])
});

/// BigQuery quirks: backtick quoting, backslash escapes and strict alias
/// rules.
#[derive(Debug, Clone, Copy)]
pub struct BigQuery;

impl Dialect for BigQuery {
    fn name(&self) -> &'static str {
        "bigquery"
    }

    fn quote_open(&self) -> char {
        '`'
    }

    fn quote_close(&self) -> char {
        '`'
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }

    fn string_literal(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);

        out.push('\'');

        for c in value.chars() {
            match c {
                '\'' => out.push_str("\\'"),
                '\\' => out.push_str("\\\\"),
                c => out.push(c),
            }
        }

        out.push('\'');
        out
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("DATE '{}'", date.format("%Y-%m-%d"))
    }

    fn time_literal(&self, time: &NaiveTime) -> String {
        format!("TIME '{}'", time.format("%H:%M:%S"))
    }

    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        format!("TIMESTAMP '{}'", datetime.format("%Y-%m-%d %H:%M:%S"))
    }

    fn valid_alias(&self, alias: &str) -> bool {
        Hive.valid_alias(alias)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect;
    use crate::error::ErrorKind;
    use crate::visitor::render_select;

    #[test]
    fn aliases_with_spaces_are_refused() {
        let query = Select::from_table("events").column(Column::new("id").alias("event id"));
        let err = render_select(&query, dialect::for_product("bigquery").unwrap()).unwrap_err();

        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidAlias {
                dialect: "bigquery",
                ..
            }
        ));
    }

    #[test]
    fn string_literals_use_backslash_escapes() {
        let query = Select::from_table("users").so_that("name".equals("O'Brien"));
        let sql = render_select(&query, dialect::for_product("bigquery").unwrap()).unwrap();

        assert_eq!("SELECT * FROM users WHERE name = 'O\\'Brien'", sql);
    }
}
