use crate::dialect::{keywords, Capability, Dialect};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

pub(crate) static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ARRAY", "BIGINT", "BINARY", "BOOLEAN", "CONF", "CUBE", "CURRENT_DATE",
        "CURRENT_TIMESTAMP", "DATABASE", "DBPROPERTIES", "EXCHANGE", "EXPLAIN", "EXTENDED",
        "FLOOR", "FOLLOWING", "FUNCTION", "GROUPING", "IF", "IMPORT", "LATERAL", "LESS",
        "LIMIT", "MACRO", "MAP", "MORE", "NONE", "OVER", "PARTIALSCAN", "PARTITION",
        "PERCENT", "PRECEDING", "RANGE", "READS", "REDUCE", "REGEXP", "RLIKE", "ROLLUP",
        "ROW", "SEMI", "STRUCT", "TABLESAMPLE", "TINYINT", "TRIGGER", "TRUNCATE",
        "UNBOUNDED", "UNIQUEJOIN", "UTC_TIMESTAMP", "WINDOW",
    ])
});

/// Hive quirks: backtick quoting, backslash escapes, `LIMIT` without an
/// offset clause and no spaces in aliases.
#[derive(Debug, Clone, Copy)]
pub struct Hive;

pub(crate) fn backslash_escaped_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);

    out.push('\'');

    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }

    out.push('\'');
    out
}

impl Dialect for Hive {
    fn name(&self) -> &'static str {
        "hive"
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
        Capability::FullOuterJoin | Capability::RightOuterJoin | Capability::CrossJoin
    }

    fn string_literal(&self, value: &str) -> String {
        backslash_escaped_literal(value)
    }

    fn valid_alias(&self, alias: &str) -> bool {
        let mut chars = alias.chars();

        let first_ok = match chars.next() {
            None => return false,
            Some(first) => first.is_ascii_alphabetic() || first == '_',
        };

        first_ok
            && alias.len() <= self.max_alias_length()
            && alias.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}
