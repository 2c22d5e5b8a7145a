//! Per-product SQL dialect strategies.
//!
//! A [`Dialect`] bundles everything that differs between database products
//! when rendering the same query: identifier quoting, reserved words, row
//! limiting, date and string literals, alias rules and the set of supported
//! operations. The trait's default methods implement ANSI behavior; each
//! product overrides only its quirks.
//!
//! Selecting a dialect is a pure lookup over the product identifier:
//!
//! ```rust
//! # use squill::dialect;
//! # fn main() -> Result<(), squill::error::Error> {
//! let dialect = dialect::for_product("SQL Server")?;
//! assert_eq!("sqlserver", dialect.name());
//! # Ok(())
//! # }
//! ```
mod keywords;

mod access;
mod bigquery;
mod clickhouse;
mod databricks;
mod db2;
mod derby;
mod dremio;
mod generic;
mod h2;
mod hive;
mod impala;
mod informix;
mod mariadb;
mod monetdb;
mod mssql;
mod mysql;
mod netezza;
mod oracle;
mod postgres;
mod redshift;
mod snowflake;
mod spark;
mod sqlite;
mod sybase;
mod teradata;
mod vertica;

pub use access::Access;
pub use bigquery::BigQuery;
pub use clickhouse::ClickHouse;
pub use databricks::Databricks;
pub use db2::Db2;
pub use derby::Derby;
pub use dremio::Dremio;
pub use generic::Generic;
pub use h2::H2;
pub use hive::Hive;
pub use impala::Impala;
pub use informix::Informix;
pub use mariadb::MariaDb;
pub use monetdb::MonetDb;
pub use mssql::Mssql;
pub use mysql::MySql;
pub use netezza::Netezza;
pub use oracle::Oracle;
pub use postgres::Postgres;
pub use redshift::Redshift;
pub use snowflake::Snowflake;
pub use spark::Spark;
pub use sqlite::Sqlite;
pub use sybase::Sybase;
pub use teradata::Teradata;
pub use vertica::Vertica;

use crate::error::{Error, ErrorKind};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use enumflags2::{bitflags, BitFlags};
use std::collections::HashSet;

/// Operations a product may or may not support. The renderer refuses to
/// produce SQL for an unsupported operation instead of producing wrong SQL.
#[bitflags]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    FullOuterJoin = 1 << 0,
    RightOuterJoin = 1 << 1,
    CrossJoin = 1 << 2,
    Offset = 1 << 3,
    LegacyOuterMarkers = 1 << 4,
}

/// How a product spells its row-limiting clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStyle {
    /// `LIMIT n [OFFSET m]` appended to the query.
    LimitOffset,
    /// `SELECT TOP n`, with `OFFSET m ROWS FETCH NEXT n ROWS ONLY` when an
    /// offset is requested and the product supports one.
    Top,
    /// `[OFFSET m ROWS] FETCH FIRST n ROWS ONLY` appended to the query.
    FetchFirst,
    /// The query is wrapped into a derived table filtered on `ROWNUM`.
    RowNum,
    /// `SELECT [SKIP m] FIRST n`.
    FirstRows,
    /// The product has no row-limiting clause.
    Unsupported,
}

/// The spelling of legacy outer-join markers in the `WHERE` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OuterStyle {
    /// `t1.a = t2.b(+)`
    OraclePlus,
    /// `t1.a *= t2.b`
    StarOperator,
}

/// A strategy object describing one database product.
///
/// All methods have ANSI defaults; a dialect overrides the handful of
/// behaviors where its product deviates.
pub trait Dialect: Send + Sync {
    /// The canonical product identifier.
    fn name(&self) -> &'static str;

    /// The opening identifier quote.
    fn quote_open(&self) -> char {
        '"'
    }

    /// The closing identifier quote.
    fn quote_close(&self) -> char {
        '"'
    }

    /// The words that cannot be used as bare identifiers.
    fn reserved_words(&self) -> &'static HashSet<&'static str> {
        &keywords::ANSI
    }

    /// The operations this product supports.
    fn capabilities(&self) -> BitFlags<Capability> {
        Capability::FullOuterJoin
            | Capability::RightOuterJoin
            | Capability::CrossJoin
            | Capability::Offset
    }

    /// `true` if the product supports the given operation.
    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(capability)
    }

    /// The row-limiting clause this product understands.
    fn limit_style(&self) -> LimitStyle {
        LimitStyle::LimitOffset
    }

    /// The table to select from when the query has no tables, for products
    /// that cannot `SELECT` without a `FROM` clause.
    fn dual_table(&self) -> Option<&'static str> {
        None
    }

    /// For products whose `OFFSET` clause cannot stand without a `LIMIT`,
    /// the limit literal to fill in when the query only sets an offset.
    fn offset_requires_limit(&self) -> Option<&'static str> {
        None
    }

    /// The spelling of legacy outer-join markers, for products that still
    /// accept outer joins in the `WHERE` clause.
    fn legacy_outer_marker(&self) -> Option<OuterStyle> {
        None
    }

    /// `true` if the word is reserved in this product.
    fn is_reserved(&self, word: &str) -> bool {
        self.reserved_words()
            .contains(word.to_ascii_uppercase().as_str())
    }

    /// `true` if the identifier cannot be rendered bare.
    fn needs_quoting(&self, identifier: &str) -> bool {
        let mut chars = identifier.chars();

        match chars.next() {
            None => true,
            Some(first) if !first.is_ascii_alphabetic() && first != '_' => true,
            Some(_) => {
                identifier
                    .chars()
                    .any(|c| !c.is_ascii_alphanumeric() && c != '_')
                    || self.is_reserved(identifier)
            }
        }
    }

    /// Quotes the identifier if needed, doubling embedded closing quotes.
    fn quote_identifier(&self, identifier: &str) -> String {
        if !self.needs_quoting(identifier) {
            return identifier.to_string();
        }

        let close = self.quote_close();
        let mut quoted = String::with_capacity(identifier.len() + 2);

        quoted.push(self.quote_open());

        for c in identifier.chars() {
            quoted.push(c);

            if c == close {
                quoted.push(close);
            }
        }

        quoted.push(close);
        quoted
    }

    /// Renders a string literal, escaping embedded quotes.
    fn string_literal(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);

        out.push('\'');

        for c in value.chars() {
            if c == '\'' {
                out.push('\'');
            }

            out.push(c);
        }

        out.push('\'');
        out
    }

    /// Renders a boolean literal.
    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    /// Renders a date literal.
    fn date_literal(&self, date: &NaiveDate) -> String {
        format!("DATE '{}'", date.format("%Y-%m-%d"))
    }

    /// Renders a time literal.
    fn time_literal(&self, time: &NaiveTime) -> String {
        format!("TIME '{}'", time.format("%H:%M:%S"))
    }

    /// Renders a timestamp literal.
    fn datetime_literal(&self, datetime: &DateTime<Utc>) -> String {
        format!("TIMESTAMP '{}'", datetime.format("%Y-%m-%d %H:%M:%S"))
    }

    /// A predicate that is always true, standing in for an empty condition.
    fn true_predicate(&self) -> &'static str {
        "1=1"
    }

    /// A predicate that is always false, e.g. for an empty `IN` list.
    fn false_predicate(&self) -> &'static str {
        "1=0"
    }

    /// The longest column alias the product accepts.
    fn max_alias_length(&self) -> usize {
        128
    }

    /// `true` if the string can be used as a column alias. Aliases with
    /// spaces are accepted by default and rendered quoted.
    fn valid_alias(&self, alias: &str) -> bool {
        let mut chars = alias.chars();

        let first_ok = match chars.next() {
            None => return false,
            Some(first) => first.is_ascii_alphabetic() || first == '_',
        };

        first_ok
            && alias.len() <= self.max_alias_length()
            && alias
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ' ')
    }
}

/// Looks up the dialect for a product identifier.
///
/// The identifier is matched case-insensitively and ignoring spaces,
/// dashes and dots, so `"SQL Server"`, `"sqlserver"` and `"MS-SQL"` name
/// the same dialect.
pub fn for_product(product: &str) -> crate::Result<&'static dyn Dialect> {
    let key: String = product
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let dialect: &'static dyn Dialect = match key.as_str() {
        "generic" | "ansi" | "default" => &Generic,
        "oracle" => &Oracle,
        "db2" | "udb" | "db2luw" | "db2zos" => &Db2,
        "sqlserver" | "mssql" | "microsoftsqlserver" => &Mssql,
        "sybase" | "ase" | "sybasease" => &Sybase,
        "mysql" => &MySql,
        "mariadb" => &MariaDb,
        "postgresql" | "postgres" | "pgsql" | "enterprisedb" => &Postgres,
        "redshift" | "amazonredshift" => &Redshift,
        "informix" => &Informix,
        "hive" | "apachehive" => &Hive,
        "impala" => &Impala,
        "spark" | "sparksql" => &Spark,
        "databricks" => &Databricks,
        "bigquery" | "googlebigquery" => &BigQuery,
        "snowflake" => &Snowflake,
        "clickhouse" => &ClickHouse,
        "derby" | "apachederby" => &Derby,
        "h2" => &H2,
        "access" | "msaccess" | "microsoftaccess" => &Access,
        "teradata" => &Teradata,
        "vertica" => &Vertica,
        "netezza" => &Netezza,
        "sqlite" | "sqlite3" => &Sqlite,
        "monetdb" => &MonetDb,
        "dremio" => &Dremio,
        _ => return Err(Error::builder(ErrorKind::unknown_product(product)).build()),
    };

    Ok(dialect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_lookup_normalizes_identifiers() {
        assert_eq!("sqlserver", for_product("SQL Server").unwrap().name());
        assert_eq!("postgresql", for_product("Postgres").unwrap().name());
        assert_eq!("db2", for_product("DB2").unwrap().name());
        assert_eq!("access", for_product("MS Access").unwrap().name());
    }

    #[test]
    fn unknown_products_are_rejected() {
        let err = for_product("dbase").err().unwrap();

        assert!(matches!(
            err.kind(),
            crate::error::ErrorKind::UnknownProduct { .. }
        ));
    }

    #[test]
    fn reserved_words_force_quoting() {
        let generic = for_product("generic").unwrap();

        assert_eq!("\"select\"", generic.quote_identifier("select"));
        assert_eq!("customer", generic.quote_identifier("customer"));
        assert_eq!("\"total price\"", generic.quote_identifier("total price"));
    }

    #[test]
    fn string_literals_double_embedded_quotes() {
        let generic = for_product("generic").unwrap();

        assert_eq!("'O''Brien'", generic.string_literal("O'Brien"));
    }
}
