use crate::dialect::{keywords, Capability, Dialect, LimitStyle};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use std::collections::HashSet;

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    keywords::with_ansi(&[
        "ALPHANUMERIC", "AUTOINCREMENT", "BINARY", "BOOLEAN", "BYTE", "COMP", "COMPRESSION",
        "CONTAINER", "COUNTER", "CURRENCY", "DATABASE", "DISALLOW", "DISTINCTROW", "DOCUMENT",
        "FIELD", "FIELDS", "GENERAL", "GUID", "IEEEDOUBLE", "IEEESINGLE", "IGNORE", "IMAGE",
        "INDEX", "LOGICAL", "LOGICAL1", "LONG", "LONGBINARY", "LONGTEXT", "MEMO", "MONEY",
        "NOTE", "OLEOBJECT", "OWNERACCESS", "PARAMETERS", "PERCENT", "PIVOT", "SHORT",
        "SINGLE", "STDEV", "STDEVP", "STRING", "TABLEID", "TEXT", "TOP", "TRANSFORM", "VAR",
        "VARP", "YESNO",
    ])
});

/// MS Access quirks: bracket quoting, `TOP n` without offsets, `#…#` date
/// literals and no full outer or cross joins.
#[derive(Debug, Clone, Copy)]
pub struct Access;

impl Dialect for Access {
    fn name(&self) -> &'static str {
        "access"
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
        Capability::RightOuterJoin.into()
    }

    fn limit_style(&self) -> LimitStyle {
        LimitStyle::Top
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("#{}#", date.format("%Y-%m-%d"))
    }

    fn time_literal(&self, time: &NaiveTime) -> String {
        format!("#{}#", time.format("%H:%M:%S"))
    }

    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        format!("#{}#", datetime.format("%Y-%m-%d %H:%M:%S"))
    }

    fn max_alias_length(&self) -> usize {
        64
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::dialect;
    use crate::error::ErrorKind;
    use crate::visitor::render_select;

    #[test]
    fn dates_render_between_hashes() {
        let date = chrono::NaiveDate::from_ymd_opt(2021, 7, 4).unwrap();
        let query = Select::from_table("bookings").so_that("booked_on".equals(date));
        let sql = render_select(&query, dialect::for_product("access").unwrap()).unwrap();

        assert_eq!("SELECT * FROM bookings WHERE booked_on = #2021-07-04#", sql);
    }

    #[test]
    fn limits_render_as_top_and_offsets_are_refused() {
        let query = Select::from_table("bookings").limit(5);
        let sql = render_select(&query, dialect::for_product("access").unwrap()).unwrap();

        assert_eq!("SELECT TOP 5 * FROM bookings", sql);

        let query = Select::from_table("bookings").limit(5).offset(5);
        let err = render_select(&query, dialect::for_product("access").unwrap()).unwrap_err();

        assert!(matches!(
            err.kind(),
            ErrorKind::UnsupportedByDialect {
                dialect: "access",
                ..
            }
        ));
    }
}
