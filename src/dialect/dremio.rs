use crate::dialect::{keywords, Dialect};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ABS", "ARRAY", "CEIL", "CEILING", "DENSE_RANK", "EXP", "FLOOR", "LIMIT", "LN",
        "MOD", "OFFSET", "OVER", "PARTITION", "POWER", "RANK", "ROW_NUMBER", "SQRT",
        "TABLESAMPLE", "WINDOW",
    ])
});

/// Dremio speaks ANSI SQL over its sources.
#[derive(Debug, Clone, Copy)]
pub struct Dremio;

impl Dialect for Dremio {
    fn name(&self) -> &'static str {
        "dremio"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }
}
