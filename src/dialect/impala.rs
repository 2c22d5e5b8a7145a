use crate::dialect::{hive, Capability, Dialect, Hive};
use enumflags2::BitFlags;
use std::collections::HashSet;

/// Impala follows Hive, but understands `OFFSET`.
#[derive(Debug, Clone, Copy)]
pub struct Impala;

impl Dialect for Impala {
    fn name(&self) -> &'static str {
        "impala"
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
        Hive.capabilities() | Capability::Offset
    }

    fn string_literal(&self, value: &str) -> String {
        hive::backslash_escaped_literal(value)
    }

    fn valid_alias(&self, alias: &str) -> bool {
        Hive.valid_alias(alias)
    }
}
