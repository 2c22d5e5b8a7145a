use crate::dialect::{keywords, Dialect};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ABORT", "ANALYSE", "ANALYZE", "BINARY", "DISTRIBUTE", "DO", "EXPRESS", "EXPLAIN",
        "ILIKE", "LIMIT", "LOCK", "MINUS", "NEW", "NOTNULL", "OFF", "OFFSET", "OLD", "RESET",
        "REUSE", "SHOW", "VACUUM", "VERBOSE",
    ])
});

/// Netezza, another PostgreSQL descendant.
#[derive(Debug, Clone, Copy)]
pub struct Netezza;

impl Dialect for Netezza {
    fn name(&self) -> &'static str {
        "netezza"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }
}
