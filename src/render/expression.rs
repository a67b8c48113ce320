//! A single expression occurring outside a list context (a condition
//! operand, a function argument slot, the rights of an `IN`). See
//! [`crate::render::expression_list`] for the comma-separated-run shape.

use std::cell::RefCell;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::ast::{Aliased, Expression, SegmentRef, Table};
use crate::render::expression_list::{ExpressionListHooks, ExpressionListRenderer};
use crate::render::statement::{StatementHooks, StatementRenderer};
use crate::render::support::{bind_marker_text, is_expression};
use crate::visit::{Dispatcher, Filtered, Hooks};

pub type ExpressionRenderer = Filtered<ExpressionHooks>;

pub struct ExpressionHooks {
    fragment: String,
    pending_column: Option<(SmolStr, Option<SmolStr>)>,
    pending_function_args: Option<Rc<RefCell<ExpressionListRenderer>>>,
    pending_subselect: Option<Rc<RefCell<StatementRenderer>>>,
}

impl ExpressionHooks {
    pub fn new() -> Self {
        ExpressionHooks {
            fragment: String::new(),
            pending_column: None,
            pending_function_args: None,
            pending_subselect: None,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for ExpressionHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        is_expression(segment)
    }

    fn enter_matched(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        let SegmentRef::Expression(expr) = segment else {
            return;
        };
        match expr {
            Expression::Column(c) => {
                self.pending_column = Some((c.name().clone(), c.alias().cloned()));
            }
            Expression::BindMarker(b) => {
                self.fragment.push_str(&bind_marker_text(b));
            }
            Expression::Constant(c) => {
                self.fragment.push_str(c.text());
            }
            Expression::SimpleFunction(f) => {
                self.fragment.push_str(f.name());
                self.fragment.push('(');
                let args = Rc::new(RefCell::new(ExpressionListRenderer::new(
                    ExpressionListHooks::new(false),
                )));
                dispatcher.push(args.clone());
                self.pending_function_args = Some(args);
            }
            Expression::Subselect(_) => {
                let nested = Rc::new(RefCell::new(StatementRenderer::new(StatementHooks::new())));
                dispatcher.push(nested.clone());
                self.pending_subselect = Some(nested);
            }
        }
    }

    fn leave_nested(&mut self, segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        if let SegmentRef::Table(t) = segment {
            if self.pending_column.is_some() {
                push_qualifier(&mut self.fragment, t);
            }
        }
    }

    fn leave_matched(&mut self, segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        let SegmentRef::Expression(expr) = segment else {
            return;
        };
        match expr {
            Expression::Column(_) => {
                if let Some((name, alias)) = self.pending_column.take() {
                    self.fragment.push_str(alias.as_deref().unwrap_or(&name));
                }
            }
            Expression::SimpleFunction(_) => {
                if let Some(args) = self.pending_function_args.take() {
                    self.fragment.push_str(args.borrow().hooks().fragment());
                }
                self.fragment.push(')');
            }
            Expression::Subselect(_) => {
                if let Some(nested) = self.pending_subselect.take() {
                    self.fragment.push_str(nested.borrow().hooks().fragment());
                }
            }
            Expression::BindMarker(_) | Expression::Constant(_) => {}
        }
    }
}

fn push_qualifier(fragment: &mut String, table: &Table) {
    fragment.push_str(table.reference_name());
    fragment.push('.');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Column, Table, walk};

    #[test]
    fn column_renders_reference_name_with_qualifier() {
        let t = Table::aliased("employee", "e");
        let expr = Expression::Column(Column::new("id", t));
        let renderer = Rc::new(RefCell::new(ExpressionRenderer::new(ExpressionHooks::new())));
        let mut dispatcher = Dispatcher::new(renderer.clone());
        walk(SegmentRef::Expression(&expr), &mut dispatcher);
        assert!(dispatcher.into_error().is_none());
        assert_eq!(renderer.borrow().hooks().fragment(), "e.id");
    }
}
