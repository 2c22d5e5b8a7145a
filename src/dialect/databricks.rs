use crate::dialect::{hive, Capability, Dialect, Hive, Spark};
use enumflags2::BitFlags;
use std::collections::HashSet;

/// Databricks SQL is Spark with `OFFSET` support.
#[derive(Debug, Clone, Copy)]
pub struct Databricks;

impl Dialect for Databricks {
    fn name(&self) -> &'static str {
        "databricks"
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
        Spark.capabilities() | Capability::Offset
    }

    fn string_literal(&self, value: &str) -> String {
        hive::backslash_escaped_literal(value)
    }

    fn valid_alias(&self, alias: &str) -> bool {
        Hive.valid_alias(alias)
    }
}
