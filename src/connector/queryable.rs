use super::{ResultSet, SourceInfo};
use crate::ast::Select;
use crate::dialect::Dialect;
use crate::visitor::render_select;
use async_trait::async_trait;

/// Represents a connection that can be queried.
///
/// Implementations live with the drivers, outside this crate.
#[async_trait]
pub trait Queryable: Send + Sync {
    /// Execute a query given as SQL, returning the rows.
    async fn query_raw(&self, sql: &str) -> crate::Result<ResultSet>;

    /// Execute a statement given as SQL, returning the number of affected
    /// rows.
    async fn execute_raw(&self, sql: &str) -> crate::Result<u64>;

    /// Run a command in the database that returns nothing.
    async fn raw_cmd(&self, cmd: &str) -> crate::Result<()>;

    /// Return the version of the underlying database, queried directly from
    /// the source. The version string is returned directly without any form
    /// of parsing or normalization.
    async fn version(&self) -> crate::Result<Option<String>>;

    /// Returns false, if connection is considered to not be in a working
    /// state.
    fn is_healthy(&self) -> bool {
        true
    }

    /// Render a `SELECT` for the given dialect and execute it.
    async fn select(&self, q: &Select<'_>, dialect: &dyn Dialect) -> crate::Result<ResultSet> {
        let sql = render_select(q, dialect)?;
        self.query_raw(&sql).await
    }
}

/// A factory for connections to one kind of datasource. The application
/// provides one per driver it bundles; the pool uses it to open and reopen
/// connections.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Open a new connection to the datasource the `SourceInfo` describes.
    async fn connect(&self, source: &SourceInfo) -> crate::Result<Box<dyn Queryable>>;
}
