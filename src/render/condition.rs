//! `WHERE`/`JOIN ... ON` conditions. Every variant but
//! [`ConstantCondition`](crate::ast::ConstantCondition) delegates its
//! operands to a pushed sub-renderer; since every operand is a genuine
//! subtree (none handled inline), every push happens eagerly at the
//! condition's own `enter_matched`, in reverse child order, so the first
//! child to actually be walked ends up on top of the stack — the same
//! shape as [`crate::render::statement::StatementHooks`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Condition, MultipleCondition, SegmentRef};
use crate::error::RenderError;
use crate::render::expression::{ExpressionHooks, ExpressionRenderer};
use crate::render::expression_list::{ExpressionListHooks, ExpressionListRenderer};
use crate::render::support::is_condition;
use crate::visit::{Dispatcher, Filtered, Hooks};

pub type ConditionRenderer = Filtered<ConditionHooks>;

enum Kind {
    None,
    IsNull { negated: bool },
    Equals,
    In,
    And,
    Or,
    Group,
}

pub struct ConditionHooks {
    fragment: String,
    kind: Kind,
    left_cond: Option<Rc<RefCell<ConditionRenderer>>>,
    right_cond: Option<Rc<RefCell<ConditionRenderer>>>,
    nested_cond: Option<Rc<RefCell<ConditionRenderer>>>,
    left_expr: Option<Rc<RefCell<ExpressionRenderer>>>,
    right_expr: Option<Rc<RefCell<ExpressionRenderer>>>,
    in_rights: Option<Rc<RefCell<ExpressionListRenderer>>>,
}

impl ConditionHooks {
    pub fn new() -> Self {
        ConditionHooks {
            fragment: String::new(),
            kind: Kind::None,
            left_cond: None,
            right_cond: None,
            nested_cond: None,
            left_expr: None,
            right_expr: None,
            in_rights: None,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

fn push_expression(dispatcher: &mut Dispatcher) -> Rc<RefCell<ExpressionRenderer>> {
    let renderer = Rc::new(RefCell::new(ExpressionRenderer::new(ExpressionHooks::new())));
    dispatcher.push(renderer.clone());
    renderer
}

fn push_condition(dispatcher: &mut Dispatcher) -> Rc<RefCell<ConditionRenderer>> {
    let renderer = Rc::new(RefCell::new(ConditionRenderer::new(ConditionHooks::new())));
    dispatcher.push(renderer.clone());
    renderer
}

impl Hooks for ConditionHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        is_condition(segment)
    }

    fn enter_matched(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        let SegmentRef::Condition(condition) = segment else {
            return;
        };
        match condition {
            Condition::Constant(c) => {
                self.kind = Kind::None;
                self.fragment.push_str(c.text());
            }
            Condition::IsNull(n) => {
                self.kind = Kind::IsNull {
                    negated: n.is_negated(),
                };
                self.left_expr = Some(push_expression(dispatcher));
            }
            Condition::Equals(_) => {
                self.kind = Kind::Equals;
                self.right_expr = Some(push_expression(dispatcher));
                self.left_expr = Some(push_expression(dispatcher));
            }
            Condition::In(_) => {
                self.kind = Kind::In;
                let rights = Rc::new(RefCell::new(ExpressionListRenderer::new(
                    ExpressionListHooks::new(false),
                )));
                dispatcher.push(rights.clone());
                self.in_rights = Some(rights);
                self.left_expr = Some(push_expression(dispatcher));
            }
            Condition::And(_) => {
                self.kind = Kind::And;
                self.right_cond = Some(push_condition(dispatcher));
                self.left_cond = Some(push_condition(dispatcher));
            }
            Condition::Or(_) => {
                self.kind = Kind::Or;
                self.right_cond = Some(push_condition(dispatcher));
                self.left_cond = Some(push_condition(dispatcher));
            }
            Condition::Group(_) => {
                self.kind = Kind::Group;
                self.nested_cond = Some(push_condition(dispatcher));
            }
        }
    }

    fn leave_matched(&mut self, _segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        match &self.kind {
            Kind::None => {}
            Kind::IsNull { negated } => {
                let Some(left) = self.left_expr.take() else {
                    return dispatcher.fail(missing_operand("IsNull", "its operand"));
                };
                self.fragment.push_str(left.borrow().hooks().fragment());
                self.fragment
                    .push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Kind::Equals => {
                let (Some(left), Some(right)) = (self.left_expr.take(), self.right_expr.take())
                else {
                    return dispatcher.fail(missing_operand("Equals", "its left/right operand"));
                };
                self.fragment.push_str(left.borrow().hooks().fragment());
                self.fragment.push_str(" = ");
                self.fragment.push_str(right.borrow().hooks().fragment());
            }
            Kind::In => {
                let (Some(left), Some(rights)) = (self.left_expr.take(), self.in_rights.take())
                else {
                    return dispatcher.fail(missing_operand("In", "its left operand/right-hand list"));
                };
                self.fragment.push_str(left.borrow().hooks().fragment());
                self.fragment.push_str(" IN (");
                self.fragment.push_str(rights.borrow().hooks().fragment());
                self.fragment.push(')');
            }
            Kind::And => {
                let (Some(left), Some(right)) = (self.left_cond.take(), self.right_cond.take())
                else {
                    return dispatcher.fail(missing_operand("And", "its left/right operand"));
                };
                self.fragment.push_str(left.borrow().hooks().fragment());
                self.fragment.push_str(" AND ");
                self.fragment.push_str(right.borrow().hooks().fragment());
            }
            Kind::Or => {
                let (Some(left), Some(right)) = (self.left_cond.take(), self.right_cond.take())
                else {
                    return dispatcher.fail(missing_operand("Or", "its left/right operand"));
                };
                self.fragment.push('(');
                self.fragment.push_str(left.borrow().hooks().fragment());
                self.fragment.push_str(" OR ");
                self.fragment.push_str(right.borrow().hooks().fragment());
                self.fragment.push(')');
            }
            Kind::Group => {
                let Some(nested) = self.nested_cond.take() else {
                    return dispatcher.fail(missing_operand("Group", "its nested condition"));
                };
                self.fragment.push('(');
                self.fragment.push_str(nested.borrow().hooks().fragment());
                self.fragment.push(')');
            }
        }
    }
}

/// An [`RenderError::InvariantViolation`] for a condition whose pushed
/// operand renderer never reported back — the stack-discipline failure
/// §4.5/§7 calls for rather than a panic on a type-valid AST.
fn missing_operand(kind: &str, what: &str) -> RenderError {
    RenderError::InvariantViolation {
        detail: format!("{kind} condition never received {what} back from its pushed renderer"),
        path: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        BindMarker, Column, EqualsCondition, Expression, IsNullCondition, Table, walk,
    };

    #[test]
    fn equals_renders_both_operands_in_order() {
        let t = Table::new("employee");
        let condition = Condition::Equals(EqualsCondition::new(
            Expression::Column(Column::new("id", t)),
            Expression::BindMarker(BindMarker::anonymous()),
        ));
        let renderer = Rc::new(RefCell::new(ConditionRenderer::new(ConditionHooks::new())));
        let mut dispatcher = Dispatcher::new(renderer.clone());
        walk(SegmentRef::Condition(&condition), &mut dispatcher);
        assert!(dispatcher.into_error().is_none());
        assert_eq!(renderer.borrow().hooks().fragment(), "employee.id = ?");
    }

    #[test]
    fn is_null_negated_renders_is_not_null() {
        let t = Table::new("employee");
        let condition = Condition::IsNull(IsNullCondition::new(
            Expression::Column(Column::new("manager_id", t)),
            true,
        ));
        let renderer = Rc::new(RefCell::new(ConditionRenderer::new(ConditionHooks::new())));
        let mut dispatcher = Dispatcher::new(renderer.clone());
        walk(SegmentRef::Condition(&condition), &mut dispatcher);
        assert!(dispatcher.into_error().is_none());
        assert_eq!(
            renderer.borrow().hooks().fragment(),
            "employee.manager_id IS NOT NULL"
        );
    }
}
