use crate::dialect::{keywords, Dialect};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ADMIN", "AGGREGATE", "ATOMIC", "AUTO_INCREMENT", "BEST", "BIGINT", "BIGSERIAL",
        "BLOB", "CLOB", "EFFORT", "EPOCH", "FUNCTION", "HUGEINT", "IF", "ILIKE", "LIMIT",
        "MERGE", "NOW", "OFFSET", "RANK", "REMOTE", "REPLICA", "SAMPLE", "SERIAL", "STREAM",
        "TINYINT", "WINDOW",
    ])
});

/// MonetDB takes the ANSI defaults.
#[derive(Debug, Clone, Copy)]
pub struct MonetDb;

impl Dialect for MonetDb {
    fn name(&self) -> &'static str {
        "monetdb"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }
}
