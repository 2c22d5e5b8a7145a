use crate::dialect::{hive, Capability, Dialect, Hive};
use enumflags2::BitFlags;
use std::collections::HashSet;

/// Spark SQL follows Hive's quoting and escaping, with its own name for
/// dialect lookup and no offset clause.
#[derive(Debug, Clone, Copy)]
pub struct Spark;

impl Dialect for Spark {
    fn name(&self) -> &'static str {
        "spark"
    }

    fn quote_open(&self) -> char {
        Hive.quote_open()
    }

    fn quote_close(&self) -> char {
        Hive.quote_close()
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        Hive.reserved_words()
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::FullOuterJoin | Capability::RightOuterJoin | Capability::CrossJoin
    }

    fn string_literal(&self, value: &str) -> String {
        hive::backslash_escaped_literal(value)
    }

    fn valid_alias(&self, alias: &str) -> bool {
        Hive.valid_alias(alias)
    }
}
