//! The projection: `SELECT <list>`. A thin wrapper around a pushed
//! [`ExpressionListRenderer`] in projection mode — see §4.3.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::SegmentRef;
use crate::render::expression_list::{ExpressionListHooks, ExpressionListRenderer};
use crate::visit::{Dispatcher, Filtered, Hooks};

pub type SelectListRenderer = Filtered<SelectListHooks>;

pub struct SelectListHooks {
    fragment: String,
    list: Option<Rc<RefCell<ExpressionListRenderer>>>,
}

impl SelectListHooks {
    pub fn new() -> Self {
        SelectListHooks {
            fragment: String::new(),
            list: None,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for SelectListHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        matches!(segment, SegmentRef::SelectList(_))
    }

    fn enter_matched(&mut self, _segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        let list = Rc::new(RefCell::new(ExpressionListRenderer::new(
            ExpressionListHooks::new(true),
        )));
        dispatcher.push(list.clone());
        self.list = Some(list);
    }

    fn leave_matched(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        if let Some(list) = self.list.take() {
            self.fragment.push_str(list.borrow().hooks().fragment());
        }
    }
}
