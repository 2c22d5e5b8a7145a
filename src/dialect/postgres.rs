use crate::dialect::{keywords, Dialect};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ANALYSE", "ANALYZE", "ARRAY", "ASYMMETRIC", "BINARY", "CONCURRENTLY", "CURRENT_CATALOG",
        "CURRENT_ROLE", "CURRENT_SCHEMA", "DO", "FREEZE", "ILIKE", "ISNULL", "LATERAL", "LIMIT",
        "LOCALTIME", "LOCALTIMESTAMP", "NOTNULL", "OFFSET", "PLACING", "RETURNING", "SIMILAR",
        "SYMMETRIC", "TABLESAMPLE", "VARIADIC", "VERBOSE", "WINDOW",
    ])
});

/// PostgreSQL needs almost nothing on top of the ANSI defaults.
#[derive(Debug, Clone, Copy)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }
}
