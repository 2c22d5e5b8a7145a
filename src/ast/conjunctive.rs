use crate::ast::{Filter, Junction, JunctionOp};

/// `AND`, `OR` and `NOT` combinators for every condition.
///
/// Combining into a junction that already has the same operator appends to
/// it instead of nesting, so chained calls build flat sets:
///
/// ```rust
/// # use squill::ast::*;
/// let filter = "a".equals(1).and("b".equals(2)).and("c".equals(3));
///
/// match filter {
///     Filter::Junction(junction) => assert_eq!(3, junction.children.len()),
///     other => panic!("expected a junction, got {:?}", other),
/// }
/// ```
pub trait Conjunctive<'a> {
    /// Builds an `AND` junction with the other condition.
    fn and<E>(self, other: E) -> Filter<'a>
    where
        E: Into<Filter<'a>>;

    /// Builds an `OR` junction with the other condition.
    fn or<E>(self, other: E) -> Filter<'a>
    where
        E: Into<Filter<'a>>;

    /// Negates the condition.
    fn not(self) -> Filter<'a>;
}

impl<'a, T> Conjunctive<'a> for T
where
    T: Into<Filter<'a>>,
{
    fn and<E>(self, other: E) -> Filter<'a>
    where
        E: Into<Filter<'a>>,
    {
        append(self.into(), JunctionOp::And, other.into())
    }

    fn or<E>(self, other: E) -> Filter<'a>
    where
        E: Into<Filter<'a>>,
    {
        append(self.into(), JunctionOp::Or, other.into())
    }

    fn not(self) -> Filter<'a> {
        self.into().not()
    }
}

fn append<'a>(left: Filter<'a>, op: JunctionOp, right: Filter<'a>) -> Filter<'a> {
    match left {
        Filter::Junction(mut junction) if junction.op == op && !junction.negated => {
            junction.children.push(right);
            Filter::Junction(junction)
        }
        left => Filter::Junction(Junction {
            op,
            negated: false,
            children: vec![left, right],
        }),
    }
}
