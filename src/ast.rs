//! An abstract representation of reporting queries.
//!
//! The ast module handles everything related to building vendor-neutral
//! queries without going into database-level specifics. Everything related
//! to producing SQL text for a concrete product is in the
//! [dialect](../dialect/index.html) and [visitor](../visitor/index.html)
//! modules.
mod column;
mod compare;
mod conjunctive;
mod expression;
mod filter;
mod function;
mod grouping;
mod join;
mod ordering;
mod row;
mod select;
mod table;
mod values;

pub use column::Column;
pub use compare::{exists, not_exists, Comparable};
pub use conjunctive::Conjunctive;
pub use expression::{asterisk, Expression};
pub use filter::{
    BinaryCondition, CompareOp, Filter, JoinCondition, Junction, JunctionOp, OuterMarker,
    TernaryCondition, TernaryOp, UnaryCondition, UnaryOp,
};
pub use function::{avg, count, max, min, sum, Aggregate, Function};
pub use grouping::{Grouping, IntoGroupByDefinition};
pub use join::{Join, JoinData, Joinable};
pub use ordering::{IntoOrderDefinition, Order, OrderDefinition, Orderable, Ordering};
pub use row::Row;
pub use select::Select;
pub use table::Table;
pub use values::Value;
