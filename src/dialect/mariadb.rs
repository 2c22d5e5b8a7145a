use crate::dialect::{Capability, Dialect, MySql};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use enumflags2::BitFlags;
use std::collections::HashSet;

/// MariaDB follows MySQL for everything the renderer cares about.
#[derive(Debug, Clone, Copy)]
pub struct MariaDb;

impl Dialect for MariaDb {
    fn name(&self) -> &'static str {
        "mariadb"
    }

    fn quote_open(&self) -> char {
        MySql.quote_open()
    }

    fn quote_close(&self) -> char {
        MySql.quote_close()
    }

    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        MySql.reserved_words()
    }

    fn capabilities(&self) -> BitFlags<Capability> {
        MySql.capabilities()
    }

    fn offset_requires_limit(&self) -> Option<&'static str> {
        MySql.offset_requires_limit()
    }

    fn string_literal(&self, value: &str) -> String {
        MySql.string_literal(value)
    }

    fn date_literal(&self, date: &NaiveDate) -> String {
        MySql.date_literal(date)
    }

    fn time_literal(&self, time: &NaiveTime) -> String {
        MySql.time_literal(time)
    }

    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        MySql.datetime_literal(datetime)
    }
}
