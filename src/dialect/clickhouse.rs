use crate::dialect::{keywords, Dialect};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ARRAY", "ATTACH", "DETACH", "FINAL", "FORMAT", "GLOBAL", "ILIKE", "LIMIT",
        "MATERIALIZED", "OFFSET", "PREWHERE", "SAMPLE", "SETTINGS", "TOTALS",
    ])
});

/// ClickHouse quirks: backtick quoting, function-style temporal literals and
/// numeric booleans.
#[derive(Debug, Clone, Copy)]
pub struct ClickHouse;

impl Dialect for ClickHouse {
    fn name(&self) -> &'static str {
        "clickhouse"
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

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("toDate('{}')", date.format("%Y-%m-%d"))
    }

    fn time_literal(&self, time: &NaiveTime) -> String {
        format!("'{}'", time.format("%H:%M:%S"))
    }

    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        format!("toDateTime('{}')", datetime.format("%Y-%m-%d %H:%M:%S"))
    }
}
