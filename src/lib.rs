//! # squill
//!
//! An abstraction layer for the SQL a reporting engine generates. Queries
//! are built as vendor-neutral structures and rendered into syntactically
//! correct SQL text for around twenty-five database products, each with its
//! own quoting rules, reserved words, row-limiting syntax, literal formats
//! and join support.
//!
//! ### Goals
//!
//! - Querying with a structural, composable API: tables, joins, condition
//!   trees, selections, grouping and ordering.
//! - Correct per-product SQL, or a clear error when a product cannot
//!   express an operation.
//! - Pooled connection handling for many datasources at once, behind the
//!   `pooled` feature flag.
//!
//! ### Non-goals
//!
//! - Implementing database drivers. Drivers plug in through the
//!   [`Connector`](connector::Connector) trait.
//! - Parsing SQL text. The input is always the structural form.
//!
//! ### Rendering a query
//!
//! ```rust
//! use squill::{ast::*, dialect, visitor::render_select};
//!
//! fn main() -> Result<(), squill::error::Error> {
//!     let query = Select::from_table("orders")
//!         .column("id")
//!         .column(("orders", "total"))
//!         .so_that("status".equals("shipped").and("total".greater_than(100)))
//!         .order_by("id".descend())
//!         .limit(10);
//!
//!     let postgres = render_select(&query, dialect::for_product("postgresql")?)?;
//!
//!     assert_eq!(
//!         "SELECT id, orders.total FROM orders WHERE status = 'shipped' AND total > 100 ORDER BY id DESC LIMIT 10",
//!         postgres
//!     );
//!
//!     let mssql = render_select(&query, dialect::for_product("sqlserver")?)?;
//!
//!     assert_eq!(
//!         "SELECT TOP 10 id, orders.total FROM orders WHERE status = 'shipped' AND total > 100 ORDER BY id DESC",
//!         mssql
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Legacy joins
//!
//! Old report definitions carry their joins inside the `WHERE` tree. The
//! condition tree models them as [`Filter::Join`](ast::Filter::Join) nodes,
//! and [`Select::promote_joins`](ast::Select::promote_joins) collapses them
//! into explicit `JOIN` clauses where that is safe.
pub mod ast;
pub mod connector;
pub mod dialect;
pub mod error;
#[cfg(feature = "pooled")]
pub mod pooled;
pub mod prelude;
pub mod visitor;

pub use error::Error;

/// The result type used through the crate.
pub type Result<T> = std::result::Result<T, Error>;
