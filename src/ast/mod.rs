//! The statement AST: tables, expressions, conditions, clauses, and the
//! top-level `Select` statement, plus the segment/visitor protocol (C1, C6)
//! they all share.

pub mod capability;
pub mod clause;
pub mod condition;
pub mod expression;
pub mod segment;
pub mod statement;
pub mod table;

pub use capability::{Aliased, Named};
pub use clause::{Direction, From, Join, JoinType, OrderByField, SelectList, Where};
pub use condition::{
    AndCondition, Condition, ConditionGroup, ConstantCondition, EqualsCondition, InCondition,
    IsNullCondition, MultipleCondition, OrCondition,
};
pub use expression::{
    BindMarker, Column, ConstantExpression, Expression, SimpleFunction, SubselectExpression,
};
pub use segment::{SegmentKind, SegmentRef, Visitor, walk};
pub use statement::Select;
pub use table::Table;
