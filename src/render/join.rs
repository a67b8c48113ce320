//! `JOIN` clauses. A contiguous run of [`Join`](crate::ast::Join) siblings.
//! Both of a join's children — its table and its `ON` condition — are
//! pushed eagerly at the join's own match, in reverse child order, so the
//! table renderer (the first real child the walk visits) ends up on top of
//! the stack; the same eager reverse-order push shape used by
//! [`crate::render::statement::StatementHooks`] and by
//! [`crate::render::condition::ConditionHooks`]'s binary operands. This
//! matters because it lets each pushed renderer consume its child's entire
//! `enter`/`leave` pair itself: this `Forwarding`'s own depth counter is
//! never incremented for either child, so it cleanly receives `Join`'s
//! `leave` once both children have popped.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Aliased, JoinType, SegmentRef};
use crate::render::condition::{ConditionHooks, ConditionRenderer};
use crate::visit::{Dispatcher, Filtered, Forwarding, Hooks};

pub type JoinRenderer = Forwarding<JoinHooks>;

pub struct JoinHooks {
    fragment: String,
    table: Option<Rc<RefCell<JoinTableRenderer>>>,
    condition: Option<Rc<RefCell<ConditionRenderer>>>,
}

impl JoinHooks {
    pub fn new() -> Self {
        JoinHooks {
            fragment: String::new(),
            table: None,
            condition: None,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for JoinHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        matches!(segment, SegmentRef::Join(_))
    }

    fn enter_matched(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        let SegmentRef::Join(join) = segment else {
            return;
        };
        self.fragment.push(' ');
        // Scenario 6 (§8) renders a plain "JOIN" for the default inner join,
        // reserving the keyword prefix for the outer-join variants.
        if join.join_type() != JoinType::Inner {
            self.fragment.push_str(join.join_type().keyword());
            self.fragment.push(' ');
        }
        self.fragment.push_str("JOIN ");

        let condition = Rc::new(RefCell::new(ConditionRenderer::new(ConditionHooks::new())));
        dispatcher.push(condition.clone());
        self.condition = Some(condition);

        let table = Rc::new(RefCell::new(JoinTableRenderer::new(JoinTableHooks::new())));
        dispatcher.push(table.clone());
        self.table = Some(table);
    }

    fn leave_matched(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        if let Some(table) = self.table.take() {
            self.fragment.push_str(table.borrow().hooks().fragment());
        }
        self.fragment.push_str(" ON ");
        if let Some(condition) = self.condition.take() {
            self.fragment.push_str(condition.borrow().hooks().fragment());
        }
    }
}

type JoinTableRenderer = Filtered<JoinTableHooks>;

/// Renders a join's table, `name[ AS alias]`, with no trailing delimiter —
/// the space before ` ON ` is [`JoinHooks::leave_matched`]'s job.
struct JoinTableHooks {
    fragment: String,
}

impl JoinTableHooks {
    fn new() -> Self {
        JoinTableHooks {
            fragment: String::new(),
        }
    }

    fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for JoinTableHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        matches!(segment, SegmentRef::Table(_))
    }

    fn enter_matched(&mut self, segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        let SegmentRef::Table(t) = segment else {
            return;
        };
        self.fragment.push_str(t.name());
        if let Some(alias) = t.alias() {
            self.fragment.push_str(" AS ");
            self.fragment.push_str(alias);
        }
    }

    fn leave_matched(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Column, EqualsCondition, Expression, Table, walk};

    #[test]
    fn join_renders_table_and_condition_and_pops_cleanly() {
        let employee = Table::new("employee");
        let dept = Table::aliased("dept", "d");
        let condition = crate::ast::Condition::Equals(EqualsCondition::new(
            Expression::Column(Column::new("id", employee.clone())),
            Expression::Column(Column::new("tid", dept.clone())),
        ));
        let join = crate::ast::Join::new(JoinType::Inner, dept, condition);

        let renderer = Rc::new(RefCell::new(JoinRenderer::new(JoinHooks::new())));
        let mut dispatcher = Dispatcher::new(renderer.clone());
        walk(SegmentRef::Join(&join), &mut dispatcher);

        assert!(dispatcher.into_error().is_none());
        assert_eq!(
            renderer.borrow().hooks().fragment(),
            " JOIN dept AS d ON employee.id = d.tid"
        );
    }
}
