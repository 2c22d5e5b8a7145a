use crate::connector::{Connector, Queryable, ResultSet, SourceInfo};
use crate::error::Error;
use async_trait::async_trait;
use mobc::{Connection as MobcPooled, Manager};
use std::sync::Arc;

/// A connection from the pool. Implements
/// [Queryable](../connector/trait.Queryable.html) by delegation.
pub struct PooledConnection {
    pub(crate) inner: MobcPooled<SourceManager>,
}

#[async_trait]
impl Queryable for PooledConnection {
    async fn query_raw(&self, sql: &str) -> crate::Result<ResultSet> {
        self.inner.query_raw(sql).await
    }

    async fn execute_raw(&self, sql: &str) -> crate::Result<u64> {
        self.inner.execute_raw(sql).await
    }

    async fn raw_cmd(&self, cmd: &str) -> crate::Result<()> {
        self.inner.raw_cmd(cmd).await
    }

    async fn version(&self) -> crate::Result<Option<String>> {
        self.inner.version().await
    }

    fn is_healthy(&self) -> bool {
        self.inner.is_healthy()
    }
}

/// Opens connections for one datasource through the application's
/// [`Connector`], applying the datasource's isolation level to each fresh
/// connection.
pub struct SourceManager {
    source: SourceInfo,
    connector: Arc<dyn Connector>,
}

impl SourceManager {
    pub(crate) fn new(source: SourceInfo, connector: Arc<dyn Connector>) -> Self {
        Self { source, connector }
    }
}

#[async_trait]
impl Manager for SourceManager {
    type Connection = Box<dyn Queryable>;
    type Error = Error;

    async fn connect(&self) -> crate::Result<Self::Connection> {
        let conn = self.connector.connect(&self.source).await?;

        if let Some(level) = self.source.isolation_level() {
            conn.raw_cmd(&format!("SET TRANSACTION ISOLATION LEVEL {}", level))
                .await?;
        }

        tracing::debug!(
            product = self.source.product(),
            host = ?self.source.host(),
            "opened a new connection"
        );

        Ok(conn)
    }

    async fn check(&self, conn: Self::Connection) -> crate::Result<Self::Connection> {
        conn.raw_cmd("SELECT 1").await?;
        Ok(conn)
    }
}
