use crate::dialect::{keywords, Capability, Dialect, LimitStyle, OuterStyle};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ACCESS", "AUDIT", "CLUSTER", "COMMENT", "COMPRESS", "EXCLUSIVE", "FILE", "IDENTIFIED",
        "INCREMENT", "INDEX", "INITIAL", "LOCK", "LONG", "MAXEXTENTS", "MINUS", "MLSLABEL",
        "MODE", "MODIFY", "NOAUDIT", "NOCOMPRESS", "NOWAIT", "NUMBER", "OFFLINE", "ONLINE",
        "PCTFREE", "RAW", "RENAME", "RESOURCE", "ROW", "ROWID", "ROWNUM", "SHARE", "START",
        "SUCCESSFUL", "SYNONYM", "SYSDATE", "UID", "VALIDATE", "VARCHAR2",
    ])
});

/// Oracle quirks: `ROWNUM` row limiting with derived-table wrapping, the
/// `DUAL` table, `TO_DATE` literals, `(+)` outer-join markers and the
/// 30-byte identifier limit.
#[derive(Debug, Clone, Copy)]
pub struct Oracle;

impl Dialect for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
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
        LimitStyle::RowNum
    }

    fn dual_table(&self) -> Option<&'static str> {
        Some("DUAL")
    }

    fn legacy_outer_marker(&self) -> Option<OuterStyle> {
        Some(OuterStyle::OraclePlus)
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("TO_DATE('{}', 'YYYY-MM-DD')", date.format("%Y-%m-%d"))
    }

    fn time_literal(&self, time: &NaiveTime) -> String {
        format!("TO_DATE('{}', 'HH24:MI:SS')", time.format("%H:%M:%S"))
    }

    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        format!(
            "TO_DATE('{}', 'YYYY-MM-DD HH24:MI:SS')",
            datetime.format("%Y-%m-%d %H:%M:%S")
        )
    }

    fn max_alias_length(&self) -> usize {
        30
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect;
    use crate::visitor::render_select;

    #[test]
    fn a_limit_wraps_the_query_into_a_rownum_filter() {
        let query = Select::from_table("emp").column("ename").limit(10);
        let sql = render_select(&query, dialect::for_product("oracle").unwrap()).unwrap();

        assert_eq!(
            "SELECT * FROM (SELECT ename FROM emp) WHERE ROWNUM <= 10",
            sql
        );
    }

    #[test]
    fn an_offset_needs_the_two_level_rownum_wrap() {
        let query = Select::from_table("emp").column("ename").limit(10).offset(20);
        let sql = render_select(&query, dialect::for_product("oracle").unwrap()).unwrap();

        assert_eq!(
            "SELECT * FROM (SELECT inner_.*, ROWNUM rnum FROM (SELECT ename FROM emp) inner_ WHERE ROWNUM <= 30) WHERE rnum > 20",
            sql
        );
    }

    #[test]
    fn selecting_a_value_goes_through_dual() {
        let query = Select::default().value(1);
        let sql = render_select(&query, dialect::for_product("oracle").unwrap()).unwrap();

        assert_eq!("SELECT 1 FROM DUAL", sql);
    }

    #[test]
    fn dates_render_as_to_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2020, 3, 9).unwrap();
        let query = Select::from_table("emp").so_that("hired".greater_than(date));
        let sql = render_select(&query, dialect::for_product("oracle").unwrap()).unwrap();

        assert_eq!(
            "SELECT * FROM emp WHERE hired > TO_DATE('2020-03-09', 'YYYY-MM-DD')",
            sql
        );
    }

    #[test]
    fn legacy_outer_markers_render_with_the_plus_sign() {
        let join = Filter::Join(
            JoinCondition::new(("emp", "deptno"), CompareOp::Equals, ("dept", "deptno"))
                .outer(OuterMarker::Left),
        );

        let query = Select::from_table("emp").and_from("dept").so_that(join);
        let sql = render_select(&query, dialect::for_product("oracle").unwrap()).unwrap();

        assert_eq!(
            "SELECT * FROM emp, dept WHERE emp.deptno = dept.deptno(+)",
            sql
        );
    }
}
