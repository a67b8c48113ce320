//! Renders a contiguous, comma-separated run of [`Expression`] siblings:
//! both the projection list and a function's argument list are this same
//! shape, differing only in how a bare [`Column`] is rendered (`name [AS
//! alias]` in the projection, reference name everywhere else — §3
//! invariant 3).

use std::cell::RefCell;
use std::rc::Rc;

use smol_str::SmolStr;

use crate::ast::{Aliased, Expression, SegmentRef, Table};
use crate::render::statement::{StatementHooks, StatementRenderer};
use crate::render::support::{bind_marker_text, is_expression};
use crate::visit::{Dispatcher, Forwarding, Hooks};

pub type ExpressionListRenderer = Forwarding<ExpressionListHooks>;

pub struct ExpressionListHooks {
    fragment: String,
    projection_mode: bool,
    count: usize,
    pending_column: Option<(SmolStr, Option<SmolStr>)>,
    pending_function_args: Option<Rc<RefCell<ExpressionListRenderer>>>,
    pending_subselect: Option<Rc<RefCell<StatementRenderer>>>,
}

impl ExpressionListHooks {
    /// `projection_mode` selects the §3 invariant-3 column rendering: `true`
    /// for the select list itself, `false` for every other expression list
    /// (function arguments, the right-hand side of `IN`).
    pub fn new(projection_mode: bool) -> Self {
        ExpressionListHooks {
            fragment: String::new(),
            projection_mode,
            count: 0,
            pending_column: None,
            pending_function_args: None,
            pending_subselect: None,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for ExpressionListHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        is_expression(segment)
    }

    fn enter_matched(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        if self.count > 0 {
            self.fragment.push_str(", ");
        }
        self.count += 1;

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
        // A Column's owning Table is the only child we handle inline
        // rather than delegating to a pushed sub-renderer.
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
                    if self.projection_mode {
                        self.fragment.push_str(&name);
                        if let Some(alias) = alias {
                            self.fragment.push_str(" AS ");
                            self.fragment.push_str(&alias);
                        }
                    } else {
                        self.fragment.push_str(alias.as_deref().unwrap_or(&name));
                    }
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
