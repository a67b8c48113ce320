//! Part renderers (C9): one module per syntactic region, each a
//! [`Filtered`](crate::visit::Filtered) or [`Forwarding`](crate::visit::Forwarding)
//! sub-visitor parameterized by a small [`Hooks`](crate::visit::Hooks) impl.
//! [`render`] is the crate's single public entry point, stitching a
//! [`Select`] back into SQL text by driving a [`StatementRenderer`] over it.

mod condition;
mod expression;
mod expression_list;
mod from;
mod join;
mod order_by;
mod select_list;
mod statement;
mod support;
mod where_clause;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Select, SegmentRef, walk};
use crate::error::RenderError;
use crate::visit::Dispatcher;
use statement::{StatementHooks, StatementRenderer};

/// Renders `select` into its canonical SQL text (§6).
///
/// Returns the first structural error recorded during the walk, if any —
/// rendering never panics on a type-valid `Select` (§10.1).
pub fn render(select: &Select) -> Result<String, RenderError> {
    let renderer = Rc::new(RefCell::new(StatementRenderer::new(StatementHooks::new())));
    let mut dispatcher = Dispatcher::new(renderer.clone());
    walk(SegmentRef::Select(select), &mut dispatcher);
    match dispatcher.into_error() {
        Some(err) => Err(err),
        None => Ok(renderer.borrow().hooks().fragment().to_string()),
    }
}
