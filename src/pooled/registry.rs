use crate::connector::{Connector, IsolationLevel, SourceInfo};
use crate::pooled::Squill;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The immutable identity of a pool: two datasources share a pool exactly
/// when their keys are equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PoolKey {
    url: String,
    username: Option<String>,
    product: String,
    isolation_level: Option<IsolationLevel>,
    source_name: Option<String>,
}

impl PoolKey {
    pub fn from_source(source: &SourceInfo) -> Self {
        PoolKey {
            url: source.url().to_string(),
            username: source.username().map(|u| u.to_string()),
            product: source.product().to_string(),
            isolation_level: source.isolation_level(),
            source_name: source.name().map(|n| n.to_string()),
        }
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn isolation_level(&self) -> Option<IsolationLevel> {
        self.isolation_level
    }
}

impl fmt::Debug for PoolKey {
    // The url component can embed credentials, so it stays out of the
    // output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolKey")
            .field("product", &self.product)
            .field("username", &self.username)
            .field("isolation_level", &self.isolation_level)
            .field("source_name", &self.source_name)
            .finish()
    }
}

/// A cache of one pool per datasource key.
///
/// `get` creates pools on miss and hands out clones; all access goes
/// through one coarse lock. Closing removes the registry's handle, and the
/// pool itself dies when the last outstanding clone drops, so connections
/// checked out at close time keep working until returned.
pub struct PoolRegistry {
    connector: Arc<dyn Connector>,
    pools: Mutex<HashMap<PoolKey, Squill>>,
}

impl PoolRegistry {
    /// A registry opening every pool through the given connector.
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        PoolRegistry {
            connector,
            pools: Mutex::new(HashMap::new()),
        }
    }

    /// The pool for the datasource, created on first use.
    pub fn get(&self, source: &SourceInfo) -> Squill {
        let key = PoolKey::from_source(source);
        let mut pools = self.pools.lock();

        if let Some(pool) = pools.get(&key) {
            return pool.clone();
        }

        let pool = Squill::builder_from_source(source.clone(), self.connector.clone()).build();

        tracing::info!(
            product = source.product(),
            name = ?source.name(),
            pools = pools.len() + 1,
            "registered a new pool"
        );

        pools.insert(key, pool.clone());
        pool
    }

    /// Parses the datasource string and returns its pool.
    pub fn get_by_url(&self, url: &str) -> crate::Result<Squill> {
        let source = SourceInfo::from_url(url)?;
        Ok(self.get(&source))
    }

    /// Drops every pool whose key matches the predicate. Returns how many
    /// were closed.
    pub fn close_matching(&self, predicate: impl Fn(&PoolKey) -> bool) -> usize {
        let mut pools = self.pools.lock();
        let before = pools.len();

        pools.retain(|key, _| !predicate(key));

        let closed = before - pools.len();

        if closed > 0 {
            tracing::info!(closed, "closed pools");
        }

        closed
    }

    /// Drops every pool in the registry. Returns how many were closed.
    pub fn close_all(&self) -> usize {
        self.close_matching(|_| true)
    }

    /// The number of live pools.
    pub fn len(&self) -> usize {
        self.pools.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::{Queryable, ResultSet};
    use async_trait::async_trait;

    struct StubConnection;

    #[async_trait]
    impl Queryable for StubConnection {
        async fn query_raw(&self, _sql: &str) -> crate::Result<ResultSet> {
            Ok(ResultSet::new(vec!["value".to_string()], vec![]))
        }

        async fn execute_raw(&self, _sql: &str) -> crate::Result<u64> {
            Ok(0)
        }

        async fn raw_cmd(&self, _cmd: &str) -> crate::Result<()> {
            Ok(())
        }

        async fn version(&self) -> crate::Result<Option<String>> {
            Ok(None)
        }
    }

    struct StubConnector;

    #[async_trait]
    impl Connector for StubConnector {
        async fn connect(&self, _source: &SourceInfo) -> crate::Result<Box<dyn Queryable>> {
            Ok(Box::new(StubConnection))
        }
    }

    fn registry() -> PoolRegistry {
        PoolRegistry::new(Arc::new(StubConnector))
    }

    fn source(url: &str) -> SourceInfo {
        SourceInfo::from_url(url).unwrap()
    }

    #[tokio::test]
    async fn the_same_source_reuses_the_pool() {
        let registry = registry();

        let first = source("postgresql://user:pw@localhost/reports");
        let second = source("postgresql://user:pw@localhost/reports");

        registry.get(&first);
        registry.get(&second);

        assert_eq!(1, registry.len());
    }

    #[tokio::test]
    async fn a_different_isolation_level_gets_its_own_pool() {
        let registry = registry();

        registry.get(&source("postgresql://user:pw@localhost/reports"));
        registry.get(&source(
            "postgresql://user:pw@localhost/reports?isolation_level=SERIALIZABLE",
        ));

        assert_eq!(2, registry.len());
    }

    #[tokio::test]
    async fn close_matching_filters_on_the_key() {
        let registry = registry();

        registry.get(&source("mysql://a@db1/x?datasource=sales"));
        registry.get(&source("mysql://a@db2/y?datasource=finance"));

        let closed = registry.close_matching(|key| key.source_name() == Some("sales"));

        assert_eq!(1, closed);
        assert_eq!(1, registry.len());
    }

    #[tokio::test]
    async fn close_all_empties_the_registry() {
        let registry = registry();

        registry.get(&source("mysql://a@db1/x"));
        registry.get(&source("mysql://a@db2/y"));

        assert_eq!(2, registry.close_all());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn a_checked_out_pool_survives_its_registry_entry() {
        let registry = registry();

        let pool = registry.get(&source("mysql://a@db1/x?connection_limit=2"));
        let conn = pool.check_out().await.unwrap();

        registry.close_all();

        conn.raw_cmd("SELECT 1").await.unwrap();
        assert_eq!(2, pool.capacity().await);
    }

    #[tokio::test]
    async fn pool_tuning_comes_from_the_source() {
        let registry = registry();
        let pool = registry.get(&source("mysql://a@db1/x?connection_limit=7"));

        assert_eq!(7, pool.capacity().await);
    }
}
