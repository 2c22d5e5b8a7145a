use crate::dialect::{keywords, Dialect};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "GROUPS", "IF", "ILIKE", "INTERSECTS", "LIMIT", "MINUS", "OFFSET", "OVER", "QUALIFY",
        "RANGE", "REGEXP", "ROW", "ROWNUM", "SYSDATE", "SYSTIME", "SYSTIMESTAMP", "TODAY",
        "TOP", "WINDOW",
    ])
});

/// H2 takes the ANSI defaults with a handful of extra reserved words.
#[derive(Debug, Clone, Copy)]
pub struct H2;

impl Dialect for H2 {
    fn name(&self) -> &'static str {
        "h2"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }
}
