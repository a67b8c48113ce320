//! The segment contract (C1) and the base depth-first visitor protocol (C6).
//!
//! Every node in the statement tree is reachable as a [`SegmentRef`]. A
//! segment's only obligation is to expose its children in a fixed order and
//! accept a walk: `enter(self)`, then each child walked in declared order,
//! then `leave(self)`. This is the *only* ordering contract the tree makes;
//! renderers must not assume anything beyond it.

use crate::ast::clause::{From, Join, OrderByField, SelectList, Where};
use crate::ast::condition::Condition;
use crate::ast::expression::Expression;
use crate::ast::statement::Select;
use crate::ast::table::Table;

/// A stable tag identifying a segment's concrete shape, independent of any
/// borrow. Used by error paths to describe a node without holding a
/// reference to it, and by sub-visitor predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Table,
    Column,
    BindMarker,
    SimpleFunction,
    SubselectExpression,
    ConstantExpression,
    IsNull,
    Equals,
    In,
    And,
    Or,
    ConditionGroup,
    ConstantCondition,
    SelectList,
    From,
    Join,
    Where,
    OrderByField,
    Select,
}

/// A borrowed reference to one node in the tree, tagged by shape.
#[derive(Debug, Clone, Copy)]
pub enum SegmentRef<'a> {
    Table(&'a Table),
    /// A bare column reference outside an [`Expression`] context, e.g. the
    /// column of an [`OrderByField`]. Shares [`SegmentKind::Column`] with
    /// `Expression::Column` so renderer predicates can match on kind alone.
    Column(&'a crate::ast::expression::Column),
    Expression(&'a Expression),
    Condition(&'a Condition),
    SelectList(&'a SelectList),
    From(&'a From),
    Join(&'a Join),
    Where(&'a Where),
    OrderByField(&'a OrderByField),
    Select(&'a Select),
}

impl<'a> SegmentRef<'a> {
    /// This reference's shape tag.
    pub fn kind(self) -> SegmentKind {
        match self {
            SegmentRef::Table(_) => SegmentKind::Table,
            SegmentRef::Column(_) => SegmentKind::Column,
            SegmentRef::Expression(e) => match e {
                Expression::Column(_) => SegmentKind::Column,
                Expression::BindMarker(_) => SegmentKind::BindMarker,
                Expression::SimpleFunction(_) => SegmentKind::SimpleFunction,
                Expression::Subselect(_) => SegmentKind::SubselectExpression,
                Expression::Constant(_) => SegmentKind::ConstantExpression,
            },
            SegmentRef::Condition(c) => match c {
                Condition::IsNull(_) => SegmentKind::IsNull,
                Condition::Equals(_) => SegmentKind::Equals,
                Condition::In(_) => SegmentKind::In,
                Condition::And(_) => SegmentKind::And,
                Condition::Or(_) => SegmentKind::Or,
                Condition::Group(_) => SegmentKind::ConditionGroup,
                Condition::Constant(_) => SegmentKind::ConstantCondition,
            },
            SegmentRef::SelectList(_) => SegmentKind::SelectList,
            SegmentRef::From(_) => SegmentKind::From,
            SegmentRef::Join(_) => SegmentKind::Join,
            SegmentRef::Where(_) => SegmentKind::Where,
            SegmentRef::OrderByField(_) => SegmentKind::OrderByField,
            SegmentRef::Select(_) => SegmentKind::Select,
        }
    }

    /// This reference's direct children, in traversal order.
    pub fn children(self) -> Vec<SegmentRef<'a>> {
        match self {
            SegmentRef::Table(_) => Vec::new(),
            SegmentRef::Column(c) => vec![SegmentRef::Table(c.table())],
            SegmentRef::Expression(e) => match e {
                Expression::Column(c) => vec![SegmentRef::Table(c.table())],
                Expression::BindMarker(_) => Vec::new(),
                Expression::SimpleFunction(f) => {
                    f.arguments().iter().map(SegmentRef::Expression).collect()
                }
                Expression::Subselect(s) => vec![SegmentRef::Select(s.select())],
                Expression::Constant(_) => Vec::new(),
            },
            SegmentRef::Condition(c) => match c {
                Condition::IsNull(n) => vec![SegmentRef::Expression(n.expression())],
                Condition::Equals(eq) => {
                    vec![
                        SegmentRef::Expression(eq.left()),
                        SegmentRef::Expression(eq.right()),
                    ]
                }
                Condition::In(i) => {
                    let mut children = vec![SegmentRef::Expression(i.left())];
                    children.extend(i.rights().iter().map(SegmentRef::Expression));
                    children
                }
                Condition::And(a) => {
                    use crate::ast::condition::MultipleCondition;
                    vec![
                        SegmentRef::Condition(a.left()),
                        SegmentRef::Condition(a.right()),
                    ]
                }
                Condition::Or(o) => {
                    use crate::ast::condition::MultipleCondition;
                    vec![
                        SegmentRef::Condition(o.left()),
                        SegmentRef::Condition(o.right()),
                    ]
                }
                Condition::Group(g) => vec![SegmentRef::Condition(g.nested())],
                Condition::Constant(_) => Vec::new(),
            },
            SegmentRef::SelectList(list) => {
                list.expressions().iter().map(SegmentRef::Expression).collect()
            }
            SegmentRef::From(from) => from.tables().iter().map(SegmentRef::Table).collect(),
            SegmentRef::Join(join) => vec![
                SegmentRef::Table(join.table()),
                SegmentRef::Condition(join.condition()),
            ],
            SegmentRef::Where(w) => vec![SegmentRef::Condition(w.condition())],
            SegmentRef::OrderByField(f) => vec![SegmentRef::Column(f.column())],
            SegmentRef::Select(select) => {
                let mut children = vec![SegmentRef::SelectList(select.select_list())];
                if let Some(from) = select.from() {
                    children.push(SegmentRef::From(from));
                }
                children.extend(select.joins().iter().map(SegmentRef::Join));
                if let Some(w) = select.r#where() {
                    children.push(SegmentRef::Where(w));
                }
                children.extend(select.order_by().iter().map(SegmentRef::OrderByField));
                children
            }
        }
    }
}

/// A depth-first walk observer. Both callbacks are infallible in the base
/// protocol; a sub-visitor that wants to abort the walk early does so by
/// popping itself from the [dispatch stack](crate::visit::Dispatcher) rather
/// than by returning a control-flow value.
pub trait Visitor {
    fn enter(&mut self, segment: SegmentRef<'_>);
    fn leave(&mut self, segment: SegmentRef<'_>);
}

/// Walks `root` and every descendant, depth-first, invoking `visitor` at
/// each `enter`/`leave` boundary. This is the tree's single public
/// traversal operation (C1's `walk(visitor)`).
pub fn walk(root: SegmentRef<'_>, visitor: &mut dyn Visitor) {
    visitor.enter(root);
    for child in root.children() {
        walk(child, visitor);
    }
    visitor.leave(root);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::clause::{Direction, From, JoinType, OrderByField, SelectList, Where};
    use crate::ast::condition::{Condition, EqualsCondition};
    use crate::ast::expression::{BindMarker, Column, Expression};
    use crate::ast::table::Table;

    struct RecordingVisitor {
        events: Vec<(&'static str, SegmentKind)>,
    }

    impl Visitor for RecordingVisitor {
        fn enter(&mut self, segment: SegmentRef<'_>) {
            self.events.push(("enter", segment.kind()));
        }

        fn leave(&mut self, segment: SegmentRef<'_>) {
            self.events.push(("leave", segment.kind()));
        }
    }

    #[test]
    fn column_walk_visits_owning_table_as_a_child() {
        let t = Table::new("employee");
        let column = Column::new("id", t);
        let expr = Expression::Column(column);
        let mut visitor = RecordingVisitor { events: Vec::new() };
        walk(SegmentRef::Expression(&expr), &mut visitor);
        assert_eq!(
            visitor.events,
            vec![
                ("enter", SegmentKind::Column),
                ("enter", SegmentKind::Table),
                ("leave", SegmentKind::Table),
                ("leave", SegmentKind::Column),
            ]
        );
    }

    #[test]
    fn select_children_visit_in_declared_order() {
        let t = Table::new("employee");
        let select_list = SelectList::new(vec![Expression::Column(Column::new("id", t.clone()))]);
        let from = From::new(vec![t.clone()]);
        let condition = Condition::Equals(EqualsCondition::new(
            Expression::Column(Column::new("id", t.clone())),
            Expression::BindMarker(BindMarker::anonymous()),
        ));
        let select = Select::from_parts(
            select_list,
            Some(from),
            Vec::new(),
            Some(Where::new(condition)),
            vec![OrderByField::new(Column::new("id", t), Direction::Unspecified)],
            false,
            None,
            None,
        );
        let mut visitor = RecordingVisitor { events: Vec::new() };
        walk(SegmentRef::Select(&select), &mut visitor);
        let kinds: Vec<_> = visitor
            .events
            .iter()
            .filter(|(event, _)| *event == "enter")
            .map(|(_, kind)| *kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Select,
                SegmentKind::SelectList,
                SegmentKind::Column,
                SegmentKind::Table,
                SegmentKind::From,
                SegmentKind::Table,
                SegmentKind::Where,
                SegmentKind::Equals,
                SegmentKind::Column,
                SegmentKind::Table,
                SegmentKind::BindMarker,
                SegmentKind::OrderByField,
                SegmentKind::Column,
                SegmentKind::Table,
            ]
        );
    }

    #[test]
    #[allow(unused)]
    fn join_type_is_unused_warning_silencer() {
        let _ = JoinType::Inner;
    }
}
