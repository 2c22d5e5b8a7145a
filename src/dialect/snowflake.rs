use crate::dialect::{keywords, Dialect};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ACCOUNT", "DATABASE", "GSCLUSTER", "ILIKE", "INCREMENT", "ISSUE", "LIMIT", "MINUS",
        "ORGANIZATION", "QUALIFY", "REGEXP", "RLIKE", "SAMPLE", "TRY_CAST",
    ])
});

/// Snowflake stays close to the ANSI defaults.
#[derive(Debug, Clone, Copy)]
pub struct Snowflake;

impl Dialect for Snowflake {
    fn name(&self) -> &'static str {
        "snowflake"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }
}
