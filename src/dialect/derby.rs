use crate::dialect::{keywords, Dialect, LimitStyle};
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "BOOLEAN", "CALL", "EXPLAIN", "FUNCTION", "INDEX", "LOCKSIZE", "LOGGED", "NONE",
        "NULLS", "OFFSET", "OVER", "RENAME", "ROW_NUMBER", "RUNTIMESTATISTICS", "XML",
        "XMLEXISTS", "XMLPARSE", "XMLQUERY", "XMLSERIALIZE",
    ])
});

/// Apache Derby: `OFFSET … FETCH` row limiting and the `SYSIBM` dummy table.
#[derive(Debug, Clone, Copy)]
pub struct Derby;

impl Dialect for Derby {
    fn name(&self) -> &'static str {
        "derby"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::FetchFirst
    }

    fn dual_table(&self) -> Option<&'static str> {
        Some("SYSIBM.SYSDUMMY1")
    }
}
