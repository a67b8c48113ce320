//! Thin construction layer (C11).
//!
//! The fluent builder DSL described in §6 is an external collaborator and
//! out of scope here; this module is just enough plain function/struct
//! surface to build every shape in §3 from test and benchmark code. It
//! validates only the two cases §7 names explicitly (an empty select list,
//! an empty `IN` right-hand side) — everything else either can't be
//! constructed wrong (the type system already guarantees it, e.g. a
//! non-empty `Vec` built through [`SelectBuilder`]) or is left to the
//! individual AST constructors' own `assert!`s.

use smol_str::SmolStr;

use crate::ast::{
    AndCondition, BindMarker, Condition, ConditionGroup, ConstantCondition, ConstantExpression,
    EqualsCondition, Expression, From, InCondition, IsNullCondition, Join, OrCondition,
    OrderByField, Select, SelectList, Where,
};
use crate::error::RenderError;

pub fn is_null(expression: Expression, negated: bool) -> Condition {
    Condition::IsNull(IsNullCondition::new(expression, negated))
}

pub fn equals(left: Expression, right: Expression) -> Condition {
    Condition::Equals(EqualsCondition::new(left, right))
}

/// Fails with [`RenderError::InvalidArgument`] if `rights` is empty (§7.1).
pub fn in_list(left: Expression, rights: Vec<Expression>) -> Result<Condition, RenderError> {
    if rights.is_empty() {
        return Err(RenderError::InvalidArgument {
            expected: "at least one IN right-hand expression".into(),
            path: Vec::new(),
        });
    }
    Ok(Condition::In(InCondition::new(left, rights)))
}

pub fn and(left: Condition, right: Condition) -> Condition {
    Condition::And(AndCondition::new(left, right))
}

pub fn or(left: Condition, right: Condition) -> Condition {
    Condition::Or(OrCondition::new(left, right))
}

pub fn group(nested: Condition) -> Condition {
    Condition::Group(ConditionGroup::new(nested))
}

pub fn just(text: impl Into<SmolStr>) -> Expression {
    Expression::Constant(ConstantExpression::new(text))
}

pub fn bind() -> Expression {
    Expression::BindMarker(BindMarker::anonymous())
}

pub fn named_bind(name: impl Into<SmolStr>) -> Expression {
    Expression::BindMarker(BindMarker::named(name))
}

/// Fails with [`RenderError::InvalidArgument`] if `expressions` is empty (§7.1).
pub fn select_list(expressions: Vec<Expression>) -> Result<SelectList, RenderError> {
    if expressions.is_empty() {
        return Err(RenderError::InvalidArgument {
            expected: "at least one projected expression".into(),
            path: Vec::new(),
        });
    }
    Ok(SelectList::new(expressions))
}

/// A mutable staging struct for [`Select`]'s optional fields, consumed by
/// [`SelectBuilder::build`].
pub struct SelectBuilder {
    select_list: SelectList,
    from: Option<From>,
    joins: Vec<Join>,
    r#where: Option<Where>,
    order_by: Vec<OrderByField>,
    distinct: bool,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectBuilder {
    pub fn new(select_list: SelectList) -> Self {
        SelectBuilder {
            select_list,
            from: None,
            joins: Vec::new(),
            r#where: None,
            order_by: Vec::new(),
            distinct: false,
            limit: None,
            offset: None,
        }
    }

    pub fn from(mut self, from: From) -> Self {
        self.from = Some(from);
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn r#where(mut self, condition: Condition) -> Self {
        self.r#where = Some(Where::new(condition));
        self
    }

    pub fn order_by(mut self, field: OrderByField) -> Self {
        self.order_by.push(field);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    pub fn build(self) -> Select {
        Select::from_parts(
            self.select_list,
            self.from,
            self.joins,
            self.r#where,
            self.order_by,
            self.distinct,
            self.limit,
            self.offset,
        )
    }
}

impl Select {
    /// Starts a staging builder over a (non-empty) projection.
    pub fn builder(select_list: SelectList) -> SelectBuilder {
        SelectBuilder::new(select_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Column, Table};

    #[test]
    fn select_list_rejects_empty_projection() {
        assert!(matches!(
            select_list(Vec::new()),
            Err(RenderError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn in_list_rejects_empty_rights() {
        let t = Table::new("employee");
        let left = Expression::Column(Column::new("id", t));
        assert!(matches!(
            in_list(left, Vec::new()),
            Err(RenderError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn builder_assembles_optional_fields() {
        let t = Table::new("employee");
        let list = select_list(vec![Expression::Column(Column::new("id", t.clone()))]).unwrap();
        let select = Select::builder(list)
            .from(From::new(vec![t]))
            .distinct()
            .limit(10)
            .offset(5)
            .build();
        assert!(select.distinct());
        assert_eq!(select.limit(), Some(10));
        assert_eq!(select.offset(), Some(5));
    }
}
