use crate::dialect::{keywords, Capability, Dialect, LimitStyle};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "AFTER", "ALIAS", "ALLOW", "ASUTIME", "AUX", "AUXILIARY", "BEFORE", "BINARY", "BUFFERPOOL",
        "CAPTURE", "CCSID", "CLONE", "CONCAT", "CONDITION", "DATABASE", "DAYS", "DBINFO",
        "DISALLOW", "DOCUMENT", "DSSIZE", "EDITPROC", "ENCODING", "ENDING", "ERASE", "EVERY",
        "FENCED", "FIELDPROC", "FINAL", "FREE", "GENERATED", "HANDLER", "HOLD", "HOURS",
        "INCLUSIVE", "ITERATE", "JAR", "KEEP", "LABEL", "LC_CTYPE", "LOCALE", "LOCATOR",
        "LOCATORS", "LOCKMAX", "LOCKSIZE", "LONG", "MAINTAINED", "MATERIALIZED", "MICROSECOND",
        "MICROSECONDS", "MINUTES", "MONTHS", "NULTERM", "NUMPARTS", "OBID", "OPTIMIZATION",
        "OPTIMIZE", "ORGANIZATION", "PACKAGE", "PARAMETER", "PART", "PADDED", "PARTITION",
        "PARTITIONED", "PARTITIONING", "PATH", "PIECESIZE", "PERIOD", "PLAN", "PRIQTY",
        "PROGRAM", "PSID", "QUERY", "QUERYNO", "RELEASE", "RENAME", "RESIGNAL", "RESULT",
        "ROUND_CEILING", "ROW", "ROWSET", "SECONDS", "SECQTY", "SECURITY", "SIGNAL", "STANDARD",
        "STAY", "STOGROUP", "STORES", "STYLE", "SUMMARY", "SYNONYM", "SYSDATE", "SYSTIMESTAMP",
        "VALIDPROC", "VARIABLE", "VARIANT", "VCAT", "VOLATILE", "VOLUMES", "XMLEXISTS",
        "YEARS",
    ])
});

/// DB2 quirks: `FETCH FIRST n ROWS ONLY` without an offset clause, the
/// `SYSIBM.SYSDUMMY1` dummy table and no boolean literals.
#[derive(Debug, Clone, Copy)]
pub struct Db2;

impl Dialect for Db2 {
    fn name(&self) -> &'static str {
        "db2"
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::FullOuterJoin | Capability::RightOuterJoin | Capability::CrossJoin
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::FetchFirst
    }

    fn dual_table(&self) -> Option<&'static str> {
        Some("SYSIBM.SYSDUMMY1")
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect;
    use crate::error::ErrorKind;
    use crate::visitor::render_select;

    #[test]
    fn limits_render_as_fetch_first() {
        let query = Select::from_table("projects").limit(5);
        let sql = render_select(&query, dialect::for_product("db2").unwrap()).unwrap();

        assert_eq!("SELECT * FROM projects FETCH FIRST 5 ROWS ONLY", sql);
    }

    #[test]
    fn offsets_are_refused() {
        let query = Select::from_table("projects").limit(5).offset(10);
        let err = render_select(&query, dialect::for_product("db2").unwrap()).unwrap_err();

        assert!(matches!(
            err.kind(),
            ErrorKind::UnsupportedByDialect { dialect: "db2", .. }
        ));
    }

    #[test]
    fn selecting_a_value_goes_through_sysdummy1() {
        let query = Select::default().value(1);
        let sql = render_select(&query, dialect::for_product("db2").unwrap()).unwrap();

        assert_eq!("SELECT 1 FROM SYSIBM.SYSDUMMY1", sql);
    }
}
