//! A "prelude" for users of the crate.
pub use crate::ast::*;
pub use crate::connector::{
    Connector, IsolationLevel, Queryable, ResultRow, ResultSet, SourceInfo,
};
pub use crate::dialect::{self, Capability, Dialect, LimitStyle, OuterStyle};
pub use crate::error::{Error, ErrorKind};
#[cfg(feature = "pooled")]
pub use crate::pooled::{PoolKey, PoolRegistry, PooledConnection, Squill};
pub use crate::visitor::{render_select, SqlRenderer};
