//! Reusable sub-visitor templates (C8): *filtered* (handle exactly one
//! matching subtree) and *forwarding* (handle a contiguous run of sibling
//! subtrees of a matching kind). Every part renderer in [`crate::render`]
//! is one of these two shapes parameterized by a small [`Hooks`]
//! implementation that does the actual fragment accumulation.

use crate::ast::{SegmentRef, Visitor};
use crate::visit::dispatch::{Dispatcher, SubVisitor, next_id};

/// The behavior a concrete part renderer plugs into a [`Filtered`] or
/// [`Forwarding`] subtree visitor.
///
/// `enter_matched`/`leave_matched` bracket the matched subtree's root;
/// `enter_nested`/`leave_nested` bracket everything strictly beneath it.
/// Both nested hooks default to no-ops, since many renderers only care
/// about the matched root itself (e.g. [`crate::render::where_clause`]).
pub trait Hooks {
    /// Whether `segment` is this renderer's subtree root.
    fn matches(&self, segment: SegmentRef<'_>) -> bool;

    fn enter_matched(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher);
    fn leave_matched(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher);

    fn enter_nested(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {}
    fn leave_nested(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {}
}

/// Handles exactly one subtree whose root matches [`Hooks::matches`], per
/// §4.2's "filtered subtree visitor (single-match)".
pub struct Filtered<H> {
    id: usize,
    hooks: H,
    /// `None` before the match; `Some(depth)` once matched, `depth` being
    /// how many nested `enter`s deep we currently are (0 = at the root).
    depth: Option<u32>,
}

impl<H: Hooks> Filtered<H> {
    pub fn new(hooks: H) -> Self {
        Filtered {
            id: next_id(),
            hooks,
            depth: None,
        }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}

impl<H: Hooks> SubVisitor for Filtered<H> {
    fn id(&self) -> usize {
        self.id
    }

    fn enter(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        match self.depth {
            None => {
                if self.hooks.matches(segment) {
                    self.depth = Some(0);
                    self.hooks.enter_matched(segment, dispatcher);
                } else {
                    dispatcher.pop(self.id);
                    dispatcher.enter(segment);
                }
            }
            Some(d) => {
                self.depth = Some(d + 1);
                self.hooks.enter_nested(segment, dispatcher);
            }
        }
    }

    fn leave(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        match self.depth {
            Some(0) => {
                self.hooks.leave_matched(segment, dispatcher);
                self.depth = None;
                dispatcher.pop(self.id);
            }
            Some(d) => {
                self.depth = Some(d - 1);
                self.hooks.leave_nested(segment, dispatcher);
            }
            None => {
                // Our subtree never showed up (the clause it guards was
                // absent): this leave belongs to an ancestor. Generalizes
                // the forwarding template's same fallback (§4.2) to the
                // single-match case, which the prose doesn't spell out but
                // which every optional-clause renderer in §4.3 depends on
                // when a later sibling clause is also absent.
                dispatcher.pop(self.id);
                dispatcher.leave(segment);
            }
        }
    }
}

/// Handles a contiguous run of sibling subtrees, each matching
/// [`Hooks::matches`], per §4.2's "forwarding subtree visitor (while-matches)".
pub struct Forwarding<H> {
    id: usize,
    hooks: H,
    /// `None` when not currently inside a matched subtree (either before
    /// the first match or between two matched siblings); `Some(depth)`
    /// while inside one.
    depth: Option<u32>,
}

impl<H: Hooks> Forwarding<H> {
    pub fn new(hooks: H) -> Self {
        Forwarding {
            id: next_id(),
            hooks,
            depth: None,
        }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}

impl<H: Hooks> SubVisitor for Forwarding<H> {
    fn id(&self) -> usize {
        self.id
    }

    fn enter(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        match self.depth {
            None => {
                if self.hooks.matches(segment) {
                    self.depth = Some(0);
                    self.hooks.enter_matched(segment, dispatcher);
                } else {
                    dispatcher.pop(self.id);
                    dispatcher.enter(segment);
                }
            }
            Some(d) => {
                self.depth = Some(d + 1);
                self.hooks.enter_nested(segment, dispatcher);
            }
        }
    }

    fn leave(&mut self, segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        match self.depth {
            Some(0) => {
                self.hooks.leave_matched(segment, dispatcher);
                // Stay on the stack: we may still accept a following sibling.
                self.depth = None;
            }
            Some(d) => {
                self.depth = Some(d - 1);
                self.hooks.leave_nested(segment, dispatcher);
            }
            None => {
                // No current match: this leave belongs to our parent.
                dispatcher.pop(self.id);
                dispatcher.leave(segment);
            }
        }
    }
}
