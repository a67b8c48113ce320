//! Expression segments: anything that can appear where a value is expected.
//!
//! An [`Expression`] is a tagged sum type over the small closed set of value
//! forms the renderer needs to know about (columns, bind markers, function
//! calls, subselects, raw constants). New forms are added as new variants,
//! not a deeper type hierarchy.

use smol_str::SmolStr;

use crate::ast::capability::{Aliased, Named};
use crate::ast::statement::Select;
use crate::ast::table::Table;

/// Any value-producing segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A column reference, qualified by its owning table.
    Column(Column),
    /// A positional or named bind marker (`?` or `:name`).
    BindMarker(BindMarker),
    /// A named function call over nested argument expressions.
    SimpleFunction(SimpleFunction),
    /// A nested `SELECT` used where a value is expected (e.g. inside `IN`).
    Subselect(SubselectExpression),
    /// A raw, renderer-opaque textual expression.
    Constant(ConstantExpression),
}

/// A column reference: a name, an owning table, and an optional alias.
///
/// The owning [`Table`] is a genuine field walked as a traversal child (see
/// [`crate::ast::segment`]), not merely read out-of-band — this is what lets
/// the select-list renderer recover a qualifier from a nested `enter(Table)`
/// event rather than from a side-channel lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: SmolStr,
    alias: Option<SmolStr>,
    table: Table,
}

impl Column {
    /// Builds an unaliased column owned by `table`.
    pub fn new(name: impl Into<SmolStr>, table: Table) -> Self {
        Column {
            name: name.into(),
            alias: None,
            table,
        }
    }

    /// Builds an aliased column owned by `table`.
    pub fn aliased(name: impl Into<SmolStr>, table: Table, alias: impl Into<SmolStr>) -> Self {
        Column {
            name: name.into(),
            alias: Some(alias.into()),
            table,
        }
    }

    /// The column's own declared name (used by the projection renderer,
    /// never the alias, per the qualifier-relative rendering rule).
    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    /// The name every non-projection renderer uses: the alias if present,
    /// otherwise the column's own name.
    pub fn reference_name(&self) -> &SmolStr {
        self.alias.as_ref().unwrap_or(&self.name)
    }

    /// The table this column belongs to.
    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl Aliased for Column {
    fn alias(&self) -> Option<&SmolStr> {
        self.alias.as_ref()
    }
}

/// A bind marker: anonymous (`?`) or named (`:name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindMarker {
    name: Option<SmolStr>,
}

impl BindMarker {
    /// An anonymous bind marker.
    pub fn anonymous() -> Self {
        BindMarker { name: None }
    }

    /// A named bind marker.
    pub fn named(name: impl Into<SmolStr>) -> Self {
        BindMarker {
            name: Some(name.into()),
        }
    }
}

impl Named for BindMarker {
    fn name(&self) -> Option<&SmolStr> {
        self.name.as_ref()
    }
}

/// A named function call over ordered argument expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleFunction {
    name: SmolStr,
    arguments: Vec<Expression>,
}

impl SimpleFunction {
    /// Builds a function call. `arguments` is evaluated left to right.
    pub fn new(name: impl Into<SmolStr>, arguments: Vec<Expression>) -> Self {
        SimpleFunction {
            name: name.into(),
            arguments,
        }
    }

    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    pub fn arguments(&self) -> &[Expression] {
        &self.arguments
    }
}

/// A nested `SELECT` used as an expression (e.g. the right-hand side of
/// `IN`). The surrounding context supplies any wrapping parentheses; this
/// segment renders only the bare statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SubselectExpression {
    select: Box<Select>,
}

impl SubselectExpression {
    pub fn new(select: Select) -> Self {
        SubselectExpression {
            select: Box::new(select),
        }
    }

    pub fn select(&self) -> &Select {
        &self.select
    }
}

/// A raw textual expression, emitted verbatim by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantExpression {
    text: SmolStr,
}

impl ConstantExpression {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        ConstantExpression { text: text.into() }
    }

    pub fn text(&self) -> &SmolStr {
        &self.text
    }
}
