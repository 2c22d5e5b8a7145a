use crate::ast::{Column, Expression, Function};
use serde::{Deserialize, Serialize};

/// A list of expressions for the `GROUP BY` statement.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Grouping<'a>(pub Vec<Expression<'a>>);

impl<'a> Grouping<'a> {
    pub fn new(values: Vec<Expression<'a>>) -> Self {
        Self(values)
    }

    pub fn append(mut self, value: Expression<'a>) -> Self {
        self.0.push(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Convert the value into a group by definition.
pub trait IntoGroupByDefinition<'a> {
    fn into_group_by_definition(self) -> Expression<'a>;
}

impl<'a> IntoGroupByDefinition<'a> for &'a str {
    fn into_group_by_definition(self) -> Expression<'a> {
        let column: Column<'a> = self.into();
        column.into()
    }
}

impl<'a> IntoGroupByDefinition<'a> for (&'a str, &'a str) {
    fn into_group_by_definition(self) -> Expression<'a> {
        let column: Column<'a> = self.into();
        column.into()
    }
}

impl<'a> IntoGroupByDefinition<'a> for Column<'a> {
    fn into_group_by_definition(self) -> Expression<'a> {
        self.into()
    }
}

impl<'a> IntoGroupByDefinition<'a> for Function<'a> {
    fn into_group_by_definition(self) -> Expression<'a> {
        self.into()
    }
}

impl<'a> IntoGroupByDefinition<'a> for Expression<'a> {
    fn into_group_by_definition(self) -> Expression<'a> {
        self
    }
}
