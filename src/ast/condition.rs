//! Condition segments: boolean-valued nodes used in `WHERE` and `JOIN ... ON`.

use smol_str::SmolStr;

use crate::ast::expression::Expression;

/// Any boolean-valued segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    IsNull(IsNullCondition),
    Equals(EqualsCondition),
    In(InCondition),
    And(AndCondition),
    Or(OrCondition),
    Group(ConditionGroup),
    Constant(ConstantCondition),
}

/// A trait shared by the two binary boolean combinators, `AND` and `OR`.
///
/// Modeled as a capability over two otherwise-unrelated structs rather than
/// a shared base type, matching how [`crate::ast::capability`] treats
/// `Aliased`/`Named`.
pub trait MultipleCondition {
    fn left(&self) -> &Condition;
    fn right(&self) -> &Condition;
}

/// `expr IS NULL` / `expr IS NOT NULL`.
#[derive(Debug, Clone, PartialEq)]
pub struct IsNullCondition {
    expression: Box<Expression>,
    negated: bool,
}

impl IsNullCondition {
    pub fn new(expression: Expression, negated: bool) -> Self {
        IsNullCondition {
            expression: Box::new(expression),
            negated,
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// `left = right`.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualsCondition {
    left: Box<Expression>,
    right: Box<Expression>,
}

impl EqualsCondition {
    pub fn new(left: Expression, right: Expression) -> Self {
        EqualsCondition {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn right(&self) -> &Expression {
        &self.right
    }
}

/// `left IN (rights...)`. `rights` is a non-empty ordered sequence; typically
/// a single subselect expression but may be a literal list.
#[derive(Debug, Clone, PartialEq)]
pub struct InCondition {
    left: Box<Expression>,
    rights: Vec<Expression>,
}

impl InCondition {
    /// Panics if `rights` is empty; callers should prefer
    /// [`crate::build::in_list`], which validates instead.
    pub fn new(left: Expression, rights: Vec<Expression>) -> Self {
        assert!(!rights.is_empty(), "IN requires at least one right-hand expression");
        InCondition {
            left: Box::new(left),
            rights,
        }
    }

    pub fn left(&self) -> &Expression {
        &self.left
    }

    pub fn rights(&self) -> &[Expression] {
        &self.rights
    }
}

/// `left AND right`.
#[derive(Debug, Clone, PartialEq)]
pub struct AndCondition {
    left: Box<Condition>,
    right: Box<Condition>,
}

impl AndCondition {
    pub fn new(left: Condition, right: Condition) -> Self {
        AndCondition {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl MultipleCondition for AndCondition {
    fn left(&self) -> &Condition {
        &self.left
    }

    fn right(&self) -> &Condition {
        &self.right
    }
}

/// `left OR right`, rendered parenthesized by the condition renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct OrCondition {
    left: Box<Condition>,
    right: Box<Condition>,
}

impl OrCondition {
    pub fn new(left: Condition, right: Condition) -> Self {
        OrCondition {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl MultipleCondition for OrCondition {
    fn left(&self) -> &Condition {
        &self.left
    }

    fn right(&self) -> &Condition {
        &self.right
    }
}

/// `(nested)` — an explicit parenthesization marker, distinct from the
/// implicit parentheses `OrCondition` renders around itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionGroup {
    nested: Box<Condition>,
}

impl ConditionGroup {
    pub fn new(nested: Condition) -> Self {
        ConditionGroup {
            nested: Box::new(nested),
        }
    }

    pub fn nested(&self) -> &Condition {
        &self.nested
    }
}

/// A raw textual condition, emitted verbatim by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantCondition {
    text: SmolStr,
}

impl ConstantCondition {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        ConstantCondition { text: text.into() }
    }

    pub fn text(&self) -> &SmolStr {
        &self.text
    }
}
