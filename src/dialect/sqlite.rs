use crate::dialect::{keywords, Capability, Dialect};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ABORT", "ANALYZE", "ATTACH", "AUTOINCREMENT", "BEFORE", "CONFLICT", "DATABASE",
        "DETACH", "EXCLUSIVE", "EXPLAIN", "FAIL", "GLOB", "IF", "IGNORE", "INDEX", "INDEXED",
        "INSTEAD", "LIMIT", "NOTHING", "OFFSET", "PLAN", "PRAGMA", "QUERY", "RAISE", "REGEXP",
        "REINDEX", "RENAME", "REPLACE", "ROW", "TEMP", "TRIGGER", "VACUUM", "VIRTUAL",
        "WITHOUT",
    ])
});

/// SQLite quirks: backtick quoting, text temporal literals, numeric
/// booleans and inner/left joins only.
#[derive(Debug, Clone, Copy)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
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
        Capability::CrossJoin | Capability::Offset
    }

    fn offset_requires_limit(&self) -> Option<&'static str> {
        Some("-1")
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
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
