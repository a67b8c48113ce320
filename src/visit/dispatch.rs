//! The delegating visitor core (C7): a stack of sub-visitors, each
//! responsible for one syntactic region, with the dispatcher forwarding
//! every `enter`/`leave` event to whichever sub-visitor currently sits on
//! top.
//!
//! The dispatcher itself owns no SQL state (per §4.2); all rendered text
//! lives in the sub-visitors. A sub-visitor that wants to assume
//! responsibility for a subtree pushes itself (or a peer); one that is
//! done relinquishes control by popping itself.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ast::{SegmentRef, Visitor};
use crate::error::RenderError;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Assigns a fresh identity to a newly constructed sub-visitor. Identities
/// are never reused within a process and stand in for the object-identity
/// check `pop` requires (§4.2): "the removed delegate must be the one that
/// requested removal."
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A delegate capable of sitting on the dispatcher's stack.
///
/// Unlike the base [`Visitor`] protocol (C6), a sub-visitor's `enter`/
/// `leave` receive the [`Dispatcher`] itself so they can push peers or pop
/// themselves mid-walk.
pub trait SubVisitor {
    /// This instance's identity, assigned once at construction via [`next_id`].
    fn id(&self) -> usize;

    fn enter(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher);
    fn leave(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher);
}

/// The stack-based dispatch loop. Implements the base [`Visitor`] protocol
/// so that [`crate::ast::walk`] can drive it directly; internally every
/// event is forwarded to the sub-visitor on top of [`Dispatcher::stack`].
pub struct Dispatcher {
    stack: Vec<std::rc::Rc<std::cell::RefCell<dyn SubVisitor>>>,
    error: Option<RenderError>,
}

impl Dispatcher {
    /// Starts a dispatcher with `root` as the sole, initial delegate.
    pub fn new(root: std::rc::Rc<std::cell::RefCell<dyn SubVisitor>>) -> Self {
        Dispatcher {
            stack: vec![root],
            error: None,
        }
    }

    /// Makes `v` the active delegate.
    pub fn push(&mut self, v: std::rc::Rc<std::cell::RefCell<dyn SubVisitor>>) {
        self.stack.push(v);
    }

    /// Removes the top delegate, provided `requester_id` matches its
    /// identity. A mismatch (or an empty stack) is an [`RenderError::InvariantViolation`],
    /// recorded on the dispatcher rather than panicking — see §4.5.
    pub fn pop(&mut self, requester_id: usize) {
        match self.stack.last() {
            Some(top) => {
                let top_id = top.borrow().id();
                if top_id == requester_id {
                    self.stack.pop();
                } else {
                    self.fail(RenderError::InvariantViolation {
                        detail: format!(
                            "pop requested by delegate {requester_id} but the top delegate is {top_id}"
                        ),
                        path: Vec::new(),
                    });
                }
            }
            None => self.fail(RenderError::InvariantViolation {
                detail: format!("pop requested by delegate {requester_id} on an empty stack"),
                path: Vec::new(),
            }),
        }
    }

    /// Records the first error seen during this walk. Once set, further
    /// `enter`/`leave` events are ignored (§4.5: errors are not recovered
    /// from, and no error is silently swallowed).
    pub fn fail(&mut self, err: RenderError) {
        if self.error.is_none() {
            log::warn!("render aborted: {err}");
            self.error = Some(err);
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Consumes the dispatcher, returning the first recorded error, if any.
    pub fn into_error(self) -> Option<RenderError> {
        self.error
    }
}

impl Visitor for Dispatcher {
    fn enter(&mut self, segment: SegmentRef<'_>) {
        if self.error.is_some() {
            return;
        }
        let Some(top) = self.stack.last().cloned() else {
            self.fail(RenderError::InvariantViolation {
                detail: "enter event delivered to an empty dispatch stack".into(),
                path: Vec::new(),
            });
            return;
        };
        top.borrow_mut().enter(segment, self);
    }

    fn leave(&mut self, segment: SegmentRef<'_>) {
        if self.error.is_some() {
            return;
        }
        let Some(top) = self.stack.last().cloned() else {
            self.fail(RenderError::InvariantViolation {
                detail: "leave event delivered to an empty dispatch stack".into(),
                path: Vec::new(),
            });
            return;
        };
        top.borrow_mut().leave(segment, self);
    }
}
