use crate::dialect::{keywords, Capability, Dialect, LimitStyle, OuterStyle};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "BACKUP", "BREAK", "BROWSE", "BULK", "CHECKPOINT", "CLUSTERED", "COMPUTE", "CONTAINS",
        "CONTAINSTABLE", "DATABASE", "DBCC", "DENY", "DISK", "DISTRIBUTED", "DUMP", "ERRLVL",
        "FILE", "FILLFACTOR", "FREETEXT", "FREETEXTTABLE", "HOLDLOCK", "IDENTITYCOL",
        "IDENTITY_INSERT", "IF", "INDEX", "KILL", "LINENO", "LOAD", "MERGE", "NOCHECK",
        "NONCLUSTERED", "OFF", "OFFSETS", "OPENDATASOURCE", "OPENQUERY", "OPENROWSET",
        "OPENXML", "OVER", "PERCENT", "PIVOT", "PLAN", "PRINT", "PROC", "RAISERROR",
        "READTEXT", "RECONFIGURE", "REPLICATION", "RESTORE", "RETURN", "REVERT", "ROWCOUNT",
        "ROWGUIDCOL", "RULE", "SAVE", "SECURITYAUDIT", "SEMANTICKEYPHRASETABLE",
        "SEMANTICSIMILARITYDETAILSTABLE", "SEMANTICSIMILARITYTABLE", "SETUSER", "SHUTDOWN",
        "STATISTICS", "TABLESAMPLE", "TEXTSIZE", "TOP", "TRAN", "TRIGGER", "TRUNCATE",
        "TSEQUAL", "UNPIVOT", "UPDATETEXT", "USE", "WAITFOR", "WHILE", "WRITETEXT",
    ])
});

/// SQL Server quirks: bracket quoting, `TOP n` row limiting with
/// `OFFSET … FETCH` when an offset is requested, `CAST` date literals and
/// the legacy `*=` outer markers of old compatibility modes.
#[derive(Debug, Clone, Copy)]
pub struct Mssql;

impl Dialect for Mssql {
    fn name(&self) -> &'static str {
        "sqlserver"
    }

    fn quote_open(&self) -> char {
        '['
    }

    fn quote_close(&self) -> char {
        ']'
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &RESERVED
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::FullOuterJoin
            | Capability::RightOuterJoin
            | Capability::CrossJoin
            | Capability::Offset
            | Capability::LegacyOuterMarkers
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Top
    }

    fn legacy_outer_marker(&self) -> Option<OuterStyle> {
        Some(OuterStyle::StarOperator)
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("CAST('{}' AS DATE)", date.format("%Y-%m-%d"))
    }

    fn time_literal(&self, time: &NaiveTime) -> String {
        format!("CAST('{}' AS TIME)", time.format("%H:%M:%S"))
    }

    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        format!(
            "CAST('{}' AS DATETIME2)",
            datetime.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect;
    use crate::visitor::render_select;

    #[test]
    fn limits_render_as_top() {
        let query = Select::from_table("accounts").column("name").limit(25);
        let sql = render_select(&query, dialect::for_product("sqlserver").unwrap()).unwrap();

        assert_eq!("SELECT TOP 25 name FROM accounts", sql);
    }

    #[test]
    fn an_offset_switches_to_offset_fetch() {
        let query = Select::from_table("accounts")
            .column("name")
            .order_by("name".ascend())
            .limit(25)
            .offset(50);

        let sql = render_select(&query, dialect::for_product("sqlserver").unwrap()).unwrap();

        assert_eq!(
            "SELECT name FROM accounts ORDER BY name ASC OFFSET 50 ROWS FETCH NEXT 25 ROWS ONLY",
            sql
        );
    }

    #[test]
    fn offset_fetch_without_an_ordering_orders_by_nothing() {
        let query = Select::from_table("accounts").limit(10).offset(10);
        let sql = render_select(&query, dialect::for_product("sqlserver").unwrap()).unwrap();

        assert_eq!(
            "SELECT * FROM accounts ORDER BY (SELECT NULL) OFFSET 10 ROWS FETCH NEXT 10 ROWS ONLY",
            sql
        );
    }

    #[test]
    fn reserved_words_are_bracket_quoted() {
        let query = Select::from_table("jobs").column("plan");
        let sql = render_select(&query, dialect::for_product("sqlserver").unwrap()).unwrap();

        assert_eq!("SELECT [plan] FROM jobs", sql);
    }

    #[test]
    fn legacy_outer_markers_use_the_star_operator() {
        let join = Filter::Join(
            JoinCondition::new(("a", "id"), CompareOp::Equals, ("b", "a_id"))
                .outer(OuterMarker::Left),
        );

        let query = Select::from_table("a").and_from("b").so_that(join);
        let sql = render_select(&query, dialect::for_product("sqlserver").unwrap()).unwrap();

        assert_eq!("SELECT * FROM a, b WHERE a.id *= b.a_id", sql);
    }
}
