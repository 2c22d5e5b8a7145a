use crate::ast::{Column, Expression};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How the children of a [`Junction`] combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JunctionOp {
    And,
    Or,
}

/// An n-ary and/or set of conditions, optionally negated as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction<'a> {
    pub op: JunctionOp,
    pub negated: bool,
    pub children: Vec<Filter<'a>>,
}

/// Comparison operators for binary conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEquals,
    GreaterThan,
    GreaterThanOrEquals,
    Like,
    NotLike,
    BeginsWith,
    NotBeginsWith,
    EndsWith,
    NotEndsWith,
    Contains,
    NotContains,
    In,
    NotIn,
}

/// `left op right` over two expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryCondition<'a> {
    pub left: Expression<'a>,
    pub op: CompareOp,
    pub right: Expression<'a>,
}

/// Operators taking a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    IsNull,
    IsNotNull,
    Exists,
    NotExists,
    Not,
}

/// A single-operand condition, e.g. `state IS NULL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryCondition<'a> {
    pub op: UnaryOp,
    pub expr: Expression<'a>,
}

/// Operators taking three operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TernaryOp {
    Between,
    NotBetween,
}

/// A three-operand condition, e.g. `total BETWEEN 10 AND 20`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TernaryCondition<'a> {
    pub op: TernaryOp,
    pub expr: Expression<'a>,
    pub low: Expression<'a>,
    pub high: Expression<'a>,
}

/// Legacy outer-join markers carried on a join predicate. `Left` preserves
/// the rows of the left table, `Right` the rows of the right table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OuterMarker {
    None,
    Left,
    Right,
}

/// A column-to-column join predicate living inside a `WHERE` tree until
/// [`Filter::extract_joins`] promotes it into the `FROM` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinCondition<'a> {
    pub left: Column<'a>,
    pub op: CompareOp,
    pub right: Column<'a>,
    pub outer: OuterMarker,
}

impl<'a> JoinCondition<'a> {
    pub fn new(left: impl Into<Column<'a>>, op: CompareOp, right: impl Into<Column<'a>>) -> Self {
        JoinCondition {
            left: left.into(),
            op,
            right: right.into(),
            outer: OuterMarker::None,
        }
    }

    /// Marks the join as a legacy outer join.
    pub fn outer(mut self, marker: OuterMarker) -> Self {
        self.outer = marker;
        self
    }
}

/// Tree structures and leaves for condition building.
///
/// A filter tree represents a `WHERE` or `HAVING` predicate. Every node is
/// owned by exactly one parent; the tree is cloneable and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter<'a> {
    /// An and/or set of child conditions.
    Junction(Junction<'a>),
    /// A column-to-column join predicate.
    Join(JoinCondition<'a>),
    /// A two-operand comparison.
    Binary(BinaryCondition<'a>),
    /// A single-operand condition.
    Unary(UnaryCondition<'a>),
    /// A three-operand condition.
    Ternary(TernaryCondition<'a>),
    /// An opaque SQL fragment.
    Raw(Cow<'a, str>),
    /// A leaf that does nothing to the condition, `1=1`.
    NoCondition,
    /// A leaf that cancels the condition, `1=0`.
    NegativeCondition,
}

impl<'a> Filter<'a> {
    /// An `AND` junction of the two conditions.
    pub fn and<L, R>(left: L, right: R) -> Filter<'a>
    where
        L: Into<Filter<'a>>,
        R: Into<Filter<'a>>,
    {
        Filter::all(vec![left.into(), right.into()])
    }

    /// An `OR` junction of the two conditions.
    pub fn or<L, R>(left: L, right: R) -> Filter<'a>
    where
        L: Into<Filter<'a>>,
        R: Into<Filter<'a>>,
    {
        Filter::any(vec![left.into(), right.into()])
    }

    /// An `AND` junction over all given conditions.
    pub fn all(children: Vec<Filter<'a>>) -> Filter<'a> {
        Filter::Junction(Junction {
            op: JunctionOp::And,
            negated: false,
            children,
        })
    }

    /// An `OR` junction over all given conditions.
    pub fn any(children: Vec<Filter<'a>>) -> Filter<'a> {
        Filter::Junction(Junction {
            op: JunctionOp::Or,
            negated: false,
            children,
        })
    }

    /// A comparison between two expressions.
    pub fn binary<L, R>(left: L, op: CompareOp, right: R) -> Filter<'a>
    where
        L: Into<Expression<'a>>,
        R: Into<Expression<'a>>,
    {
        Filter::Binary(BinaryCondition {
            left: left.into(),
            op,
            right: right.into(),
        })
    }

    /// An opaque SQL fragment used as a condition.
    pub fn raw(fragment: impl Into<Cow<'a, str>>) -> Filter<'a> {
        Filter::Raw(fragment.into())
    }

    /// Negates the condition. Junctions toggle their negation flag, the
    /// neutral leaves swap, everything else is wrapped into a negated
    /// junction.
    pub fn not(self) -> Filter<'a> {
        match self {
            Filter::Junction(mut junction) => {
                junction.negated = !junction.negated;
                Filter::Junction(junction)
            }
            Filter::NoCondition => Filter::NegativeCondition,
            Filter::NegativeCondition => Filter::NoCondition,
            other => Filter::Junction(Junction {
                op: JunctionOp::And,
                negated: true,
                children: vec![other],
            }),
        }
    }

    /// Inverts the entire condition tree if `invert` is set.
    pub fn invert_if(self, invert: bool) -> Filter<'a> {
        if invert {
            self.not()
        } else {
            self
        }
    }

    /// `true` if the filter renders no predicate at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Filter::NoCondition)
    }

    /// Normalizes the tree while preserving logical equivalence:
    ///
    /// * nested non-negated junctions with the parent's operator are spliced
    ///   into the parent,
    /// * neutral leaves short-circuit (`1=1` in an `OR` makes the junction
    ///   vacuous, `1=0` in an `AND` cancels it) or disappear,
    /// * junctions left with a single child unwrap,
    /// * junctions constructed empty count as no condition.
    ///
    /// A negated junction is a collapse barrier: its children are normalized
    /// in place but never merged into the parent.
    pub fn flatten(self) -> Filter<'a> {
        match self {
            Filter::Junction(junction) => {
                let Junction {
                    op,
                    negated,
                    children,
                } = junction;

                if children.is_empty() {
                    return Filter::NoCondition.invert_if(negated);
                }

                let mut flat = Vec::with_capacity(children.len());

                for child in children {
                    match child.flatten() {
                        Filter::Junction(inner) if inner.op == op && !inner.negated => {
                            flat.extend(inner.children);
                        }
                        Filter::NoCondition => {
                            if op == JunctionOp::Or {
                                return Filter::NoCondition.invert_if(negated);
                            }
                        }
                        Filter::NegativeCondition => {
                            if op == JunctionOp::And {
                                return Filter::NegativeCondition.invert_if(negated);
                            }
                        }
                        other => flat.push(other),
                    }
                }

                if flat.len() == 1 {
                    let only = flat.remove(0);
                    return only.invert_if(negated);
                }

                if flat.is_empty() {
                    // Every child reduced to its junction's neutral leaf.
                    let collapsed = match op {
                        JunctionOp::And => Filter::NoCondition,
                        JunctionOp::Or => Filter::NegativeCondition,
                    };

                    return collapsed.invert_if(negated);
                }

                Filter::Junction(Junction {
                    op,
                    negated,
                    children: flat,
                })
            }
            other => other,
        }
    }

    /// Removes join predicates from the tree so they can be promoted into
    /// the `FROM` clause, then normalizes what remains with [`flatten`].
    ///
    /// Joins are only extracted from beneath non-negated `AND` junctions.
    /// The rewrite never reaches through an `OR` junction or a negated
    /// junction: pulling a join out of either would change what the
    /// predicate means.
    ///
    /// [`flatten`]: Filter::flatten
    pub fn extract_joins(self) -> (Filter<'a>, Vec<JoinCondition<'a>>) {
        let mut joins = Vec::new();
        let filter = self.extract_into(&mut joins).flatten();

        (filter, joins)
    }

    fn extract_into(self, joins: &mut Vec<JoinCondition<'a>>) -> Filter<'a> {
        match self {
            Filter::Join(join) => {
                joins.push(join);
                Filter::NoCondition
            }
            Filter::Junction(junction)
                if junction.op == JunctionOp::And && !junction.negated =>
            {
                let children = junction
                    .children
                    .into_iter()
                    .map(|child| child.extract_into(joins))
                    .collect();

                Filter::Junction(Junction {
                    op: junction.op,
                    negated: junction.negated,
                    children,
                })
            }
            other => other,
        }
    }
}

impl<'a> Default for Filter<'a> {
    fn default() -> Self {
        Filter::NoCondition
    }
}

impl<'a> From<Junction<'a>> for Filter<'a> {
    fn from(junction: Junction<'a>) -> Self {
        Filter::Junction(junction)
    }
}

impl<'a> From<JoinCondition<'a>> for Filter<'a> {
    fn from(join: JoinCondition<'a>) -> Self {
        Filter::Join(join)
    }
}

impl<'a> From<BinaryCondition<'a>> for Filter<'a> {
    fn from(condition: BinaryCondition<'a>) -> Self {
        Filter::Binary(condition)
    }
}

impl<'a> From<UnaryCondition<'a>> for Filter<'a> {
    fn from(condition: UnaryCondition<'a>) -> Self {
        Filter::Unary(condition)
    }
}

impl<'a> From<TernaryCondition<'a>> for Filter<'a> {
    fn from(condition: TernaryCondition<'a>) -> Self {
        Filter::Ternary(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Comparable;

    fn join(left: &'static str, right: &'static str) -> Filter<'static> {
        Filter::Join(JoinCondition::new(
            ("t1", left),
            CompareOp::Equals,
            ("t2", right),
        ))
    }

    #[test]
    fn flatten_splices_nested_same_op_junctions() {
        let tree = Filter::and("a".equals(1), Filter::and("b".equals(2), "c".equals(3)));

        match tree.flatten() {
            Filter::Junction(junction) => {
                assert_eq!(JunctionOp::And, junction.op);
                assert!(!junction.negated);
                assert_eq!(3, junction.children.len());
            }
            other => panic!("expected a flat junction, got {:?}", other),
        }
    }

    #[test]
    fn flatten_keeps_mixed_op_junctions_nested() {
        let tree = Filter::and("a".equals(1), Filter::or("b".equals(2), "c".equals(3)));

        match tree.flatten() {
            Filter::Junction(junction) => {
                assert_eq!(2, junction.children.len());
                assert!(matches!(junction.children[1], Filter::Junction(_)));
            }
            other => panic!("expected a junction, got {:?}", other),
        }
    }

    #[test]
    fn flatten_does_not_splice_through_a_negated_junction() {
        let inner = Filter::and("b".equals(2), "c".equals(3)).not();
        let tree = Filter::and("a".equals(1), inner);

        match tree.flatten() {
            Filter::Junction(junction) => {
                assert_eq!(2, junction.children.len());

                match &junction.children[1] {
                    Filter::Junction(inner) => assert!(inner.negated),
                    other => panic!("expected the negated junction, got {:?}", other),
                }
            }
            other => panic!("expected a junction, got {:?}", other),
        }
    }

    #[test]
    fn flatten_unwraps_a_single_child() {
        let tree = Filter::all(vec!["a".equals(1)]);
        assert_eq!("a".equals(1), tree.flatten());
    }

    #[test]
    fn empty_junctions_are_vacuous() {
        assert_eq!(Filter::NoCondition, Filter::all(vec![]).flatten());
        assert_eq!(Filter::NoCondition, Filter::any(vec![]).flatten());
    }

    #[test]
    fn neutral_leaves_short_circuit() {
        let tree = Filter::or("a".equals(1), Filter::NoCondition);
        assert_eq!(Filter::NoCondition, tree.flatten());

        let tree = Filter::and("a".equals(1), Filter::NegativeCondition);
        assert_eq!(Filter::NegativeCondition, tree.flatten());

        let tree = Filter::and("a".equals(1), Filter::NoCondition);
        assert_eq!("a".equals(1), tree.flatten());

        let tree = Filter::or("a".equals(1), Filter::NegativeCondition);
        assert_eq!("a".equals(1), tree.flatten());
    }

    #[test]
    fn double_negation_cancels() {
        let tree = Filter::and("a".equals(1), "b".equals(2)).not().not();

        match tree {
            Filter::Junction(junction) => assert!(!junction.negated),
            other => panic!("expected a junction, got {:?}", other),
        }
    }

    #[test]
    fn extract_joins_from_nested_and_junctions() {
        let tree = Filter::all(vec![
            join("id", "user_id"),
            Filter::and(join("org", "org_id"), "state".equals("active")),
        ]);

        let (filter, joins) = tree.extract_joins();

        assert_eq!(2, joins.len());
        assert_eq!("state".equals("active"), filter);
    }

    #[test]
    fn joins_stay_under_an_or_junction() {
        let tree = Filter::or(join("id", "user_id"), "state".equals("active"));

        let (filter, joins) = tree.extract_joins();

        assert!(joins.is_empty());
        assert!(matches!(filter, Filter::Junction(_)));
    }

    #[test]
    fn joins_stay_under_a_negated_junction() {
        let tree = Filter::and(join("id", "user_id"), "state".equals("active")).not();

        let (filter, joins) = tree.extract_joins();

        assert!(joins.is_empty());

        match filter {
            Filter::Junction(junction) => assert!(junction.negated),
            other => panic!("expected the negated junction, got {:?}", other),
        }
    }

    #[test]
    fn extracting_every_child_leaves_no_condition() {
        let tree = Filter::and(join("id", "user_id"), join("org", "org_id"));

        let (filter, joins) = tree.extract_joins();

        assert_eq!(2, joins.len());
        assert_eq!(Filter::NoCondition, filter);
    }

    #[test]
    fn serializes_and_deserializes() {
        let tree = Filter::and("a".equals(1), "b".is_null());
        let json = serde_json::to_string(&tree).unwrap();
        let back: Filter<'static> = serde_json::from_str(&json).unwrap();

        assert_eq!(tree, back);
    }
}
