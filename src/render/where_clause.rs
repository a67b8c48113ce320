//! The `WHERE` clause: a single delegated [`ConditionRenderer`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::SegmentRef;
use crate::render::condition::{ConditionHooks, ConditionRenderer};
use crate::visit::{Dispatcher, Filtered, Hooks};

pub type WhereRenderer = Filtered<WhereHooks>;

pub struct WhereHooks {
    fragment: String,
    condition: Option<Rc<RefCell<ConditionRenderer>>>,
}

impl WhereHooks {
    pub fn new() -> Self {
        WhereHooks {
            fragment: String::new(),
            condition: None,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for WhereHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        matches!(segment, SegmentRef::Where(_))
    }

    fn enter_matched(&mut self, _segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        self.fragment.push_str(" WHERE ");
        let condition = Rc::new(RefCell::new(ConditionRenderer::new(ConditionHooks::new())));
        dispatcher.push(condition.clone());
        self.condition = Some(condition);
    }

    fn leave_matched(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        if let Some(condition) = self.condition.take() {
            self.fragment.push_str(condition.borrow().hooks().fragment());
        }
    }
}
