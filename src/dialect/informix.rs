use crate::dialect::{keywords, Capability, Dialect, LimitStyle};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ACCESS_METHOD", "ACTIVE", "AGGREGATE", "ALIGNMENT", "ANSI", "APPEND", "ATTACH",
        "AUDIT", "BEFORE", "BUFFERED", "BYTE", "CACHE", "CLUSTER", "COMMITTED", "CONCURRENT",
        "COSTFUNC", "CRCOLS", "DATABASE", "DATASKIP", "DATETIME", "DBA", "DBDATE", "DEBUG",
        "DEFINE", "DELIMITER", "DETACH", "DIRTY", "DISTRIBUTIONS", "DOCUMENT", "EACH", "ELIF",
        "EXCLUSIVE", "EXIT", "EXPLAIN", "EXPRESS", "EXPRESSION", "EXTEND", "EXTENT", "FILE",
        "FILLFACTOR", "FOREACH", "FORMAT", "FRAGMENT", "FUNCTION", "HASH", "HIGH", "HOLD",
        "HYBRID", "IF", "INACTIVE", "INDEX", "INFORMIX", "INIT", "INTERVAL", "ITEM",
        "LABELEQ", "LISTING", "LOCK", "LOCKS", "LOW", "MEDIUM", "MEMORY_RESIDENT", "MIDDLE",
        "MODE", "MODIFY", "MOUNTING", "NEW", "NVARCHAR", "OLD", "OPERATIONAL", "OPTICAL",
        "PAGE", "PARAMETER", "PDQPRIORITY", "RAISE", "RANGE", "RAW", "RECORDEND", "REFERENCING",
        "REGISTER", "REJECTFILE", "RELEASE", "REMAINDER", "RENAME", "RESERVE", "RESOLUTION",
        "RESOURCE", "RESUME", "RETAIN", "RETURN", "RETURNING", "RETURNS", "REUSE", "ROBIN",
        "ROUND", "ROWIDS", "SAMEAS", "SAMPLES", "SERIAL", "SERIAL8", "SHARE", "SKIP", "STEP",
        "SYNC", "SYSTEM", "TEXT", "TRIGGER", "UNITS", "UNLOCK", "WAIT", "WHILE", "XADATASOURCE",
    ])
});

/// Informix quirks: `SELECT SKIP m FIRST n`, `DATETIME` unit-qualified
/// literals and the `sysmaster` dummy table.
#[derive(Debug, Clone, Copy)]
pub struct Informix;

impl Dialect for Informix {
    fn name(&self) -> &'static str {
        "informix"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::FullOuterJoin
            | Capability::RightOuterJoin
            | Capability::CrossJoin
            | Capability::Offset
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::FirstRows
    }

    fn dual_table(&self) -> Option<&'static str> {
        Some("sysmaster:sysdual")
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "'t'"
        } else {
            "'f'"
        }
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("DATETIME({}) YEAR TO DAY", date.format("%Y-%m-%d"))
    }

    fn time_literal(&self, time: &NaiveTime) -> String {
        format!("DATETIME({}) HOUR TO SECOND", time.format("%H:%M:%S"))
    }

    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        format!(
            "DATETIME({}) YEAR TO SECOND",
            datetime.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect;
    use crate::visitor::render_select;

    #[test]
    fn limits_render_as_first() {
        let query = Select::from_table("customers").limit(20);
        let sql = render_select(&query, dialect::for_product("informix").unwrap()).unwrap();

        assert_eq!("SELECT FIRST 20 * FROM customers", sql);
    }

    #[test]
    fn offsets_render_as_skip() {
        let query = Select::from_table("customers").limit(20).offset(40);
        let sql = render_select(&query, dialect::for_product("informix").unwrap()).unwrap();

        assert_eq!("SELECT SKIP 40 FIRST 20 * FROM customers", sql);
    }

    #[test]
    fn dates_render_as_unit_qualified_datetime() {
        let date = chrono::NaiveDate::from_ymd_opt(2019, 12, 1).unwrap();
        let query = Select::from_table("orders").so_that("created".equals(date));
        let sql = render_select(&query, dialect::for_product("informix").unwrap()).unwrap();

        assert_eq!(
            "SELECT * FROM orders WHERE created = DATETIME(2019-12-01) YEAR TO DAY",
            sql
        );
    }
}
