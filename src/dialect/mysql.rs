use crate::dialect::{keywords, Capability, Dialect};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ACCESSIBLE", "ANALYZE", "BEFORE", "BIGINT", "BINARY", "BLOB", "CALL", "CHANGE",
        "CONDITION", "DATABASE", "DATABASES", "DAY_HOUR", "DAY_MICROSECOND", "DAY_MINUTE",
        "DAY_SECOND", "DELAYED", "DETERMINISTIC", "DISTINCTROW", "DIV", "DUAL", "EACH",
        "ELSEIF", "ENCLOSED", "ESCAPED", "EXIT", "EXPLAIN", "FLOAT4", "FLOAT8", "FORCE",
        "FULLTEXT", "GENERATED", "HIGH_PRIORITY", "HOUR_MICROSECOND", "HOUR_MINUTE",
        "HOUR_SECOND", "IF", "IGNORE", "INDEX", "INFILE", "INOUT", "INT1", "INT2", "INT3",
        "INT4", "INT8", "IO_AFTER_GTIDS", "IO_BEFORE_GTIDS", "ITERATE", "KEYS", "KILL",
        "LEAVE", "LIMIT", "LINEAR", "LINES", "LOAD", "LOCALTIME", "LOCALTIMESTAMP", "LOCK",
        "LONG", "LONGBLOB", "LONGTEXT", "LOOP", "LOW_PRIORITY", "MASTER_BIND",
        "MASTER_SSL_VERIFY_SERVER_CERT", "MAXVALUE", "MEDIUMBLOB", "MEDIUMINT", "MEDIUMTEXT",
        "MIDDLEINT", "MINUTE_MICROSECOND", "MINUTE_SECOND", "MOD", "MODIFIES", "NO_WRITE_TO_BINLOG",
        "OPTIMIZE", "OPTIMIZER_COSTS", "OPTIONALLY", "OUT", "OUTFILE", "PURGE", "RANGE",
        "READS", "READ_WRITE", "REGEXP", "RELEASE", "RENAME", "REPEAT", "REPLACE", "REQUIRE",
        "RESIGNAL", "RETURN", "RLIKE", "SCHEMAS", "SECOND_MICROSECOND", "SENSITIVE",
        "SEPARATOR", "SHOW", "SIGNAL", "SPATIAL", "SPECIFIC", "SQLEXCEPTION", "SQLWARNING",
        "SQL_BIG_RESULT", "SQL_CALC_FOUND_ROWS", "SQL_SMALL_RESULT", "SSL", "STARTING",
        "STORED", "STRAIGHT_JOIN", "TERMINATED", "TINYBLOB", "TINYINT", "TINYTEXT", "UNDO",
        "UNLOCK", "UNSIGNED", "USE", "UTC_DATE", "UTC_TIME", "UTC_TIMESTAMP", "VARBINARY",
        "VARCHARACTER", "VIRTUAL", "WHILE", "XOR", "YEAR_MONTH", "ZEROFILL",
    ])
});

/// MySQL quirks: backtick quoting, backslash escapes in string literals,
/// plain quoted temporal literals and no `FULL OUTER JOIN`.
#[derive(Debug, Clone, Copy)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "mysql"
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

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::RightOuterJoin | Capability::CrossJoin | Capability::Offset
    }

    fn offset_requires_limit(&self) -> Option<&'static str> {
        Some("18446744073709551615")
    }

    fn string_literal(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);

        out.push('\'');

        for c in value.chars() {
            match c {
                '\'' => out.push_str("''"),
                '\\' => out.push_str("\\\\"),
                c => out.push(c),
            }
        }

        out.push('\'');
        out
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("'{}'", date.format("%Y-%m-%d"))
    }

    fn time_literal(&self, time: &NaiveTime) -> String {
        format!("'{}'", time.format("%H:%M:%S"))
    }

    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        format!("'{}'", datetime.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect;
    use crate::error::ErrorKind;
    use crate::visitor::render_select;

    #[test]
    fn reserved_words_are_backtick_quoted() {
        let query = Select::from_table("events").column("limit");
        let sql = render_select(&query, dialect::for_product("mysql").unwrap()).unwrap();

        assert_eq!("SELECT `limit` FROM events", sql);
    }

    #[test]
    fn string_literals_escape_backslashes() {
        let query = Select::from_table("files").so_that("path".equals("C:\\temp"));
        let sql = render_select(&query, dialect::for_product("mysql").unwrap()).unwrap();

        assert_eq!("SELECT * FROM files WHERE path = 'C:\\\\temp'", sql);
    }

    #[test]
    fn limit_and_offset_render_inline() {
        let query = Select::from_table("events").limit(10).offset(20);
        let sql = render_select(&query, dialect::for_product("mysql").unwrap()).unwrap();

        assert_eq!("SELECT * FROM events LIMIT 10 OFFSET 20", sql);
    }

    #[test]
    fn full_outer_joins_are_refused() {
        let query = Select::from_table("a")
            .full_outer_join("b".on(("b", "id").equals(Column::from(("a", "id")))));

        let err = render_select(&query, dialect::for_product("mysql").unwrap()).unwrap_err();

        assert!(matches!(
            err.kind(),
            ErrorKind::UnsupportedByDialect {
                dialect: "mysql",
                ..
            }
        ));
    }
}
