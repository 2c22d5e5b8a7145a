use crate::dialect::{keywords, Dialect};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ANALYSE", "ANALYZE", "ARRAY", "BINARY", "DO", "ENCODED", "FLEX", "FLEXIBLE", "FREEZE",
        "ILIKE", "ILIKEB", "INTERVALYM", "ISNULL", "KSAFE", "LIKEB", "LIMIT", "LOCALTIME",
        "LOCALTIMESTAMP", "NOTNULL", "NULLSEQUAL", "OFFSET", "PINNED", "PLACING", "PROJECTION",
        "SEGMENTED", "TIMESERIES", "UNSEGMENTED", "VERBOSE", "WITHIN",
    ])
});

/// Vertica stays close to PostgreSQL behavior.
#[derive(Debug, Clone, Copy)]
pub struct Vertica;

impl Dialect for Vertica {
    fn name(&self) -> &'static str {
        "vertica"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }
}
