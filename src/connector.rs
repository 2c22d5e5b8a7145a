//! The seam between this crate and the drivers that execute its SQL.
//!
//! Drivers live outside this crate: an application registers a
//! [`Connector`] that knows how to open connections for a datasource, and
//! gets back handles implementing [`Queryable`].
mod isolation;
mod queryable;
mod result_set;
mod source_info;

pub use isolation::IsolationLevel;
pub use queryable::{Connector, Queryable};
pub use result_set::{ResultRow, ResultSet};
pub use source_info::SourceInfo;
