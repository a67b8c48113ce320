//! The top-level `SELECT` statement renderer: stitches every clause
//! renderer's fragment into the final SQL string.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::SegmentRef;
use crate::render::from::{FromHooks, FromRenderer};
use crate::render::join::{JoinHooks, JoinRenderer};
use crate::render::order_by::{OrderByHooks, OrderByRenderer};
use crate::render::select_list::{SelectListHooks, SelectListRenderer};
use crate::render::where_clause::{WhereHooks, WhereRenderer};
use crate::visit::{Dispatcher, Filtered, Hooks};

pub type StatementRenderer = Filtered<StatementHooks>;

pub struct StatementHooks {
    fragment: String,
    select_list: Option<Rc<RefCell<SelectListRenderer>>>,
    from: Option<Rc<RefCell<FromRenderer>>>,
    join: Option<Rc<RefCell<JoinRenderer>>>,
    wher: Option<Rc<RefCell<WhereRenderer>>>,
    order_by: Option<Rc<RefCell<OrderByRenderer>>>,
}

impl StatementHooks {
    pub fn new() -> Self {
        StatementHooks {
            fragment: String::new(),
            select_list: None,
            from: None,
            join: None,
            wher: None,
            order_by: None,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for StatementHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        matches!(segment, SegmentRef::Select(_))
    }

    fn enter_matched(&mut self, _segment: SegmentRef<'_>, dispatcher: &mut Dispatcher) {
        // Pushed in reverse syntactic order (order-by, where, join, from,
        // select-list) so the stack's top is the select-list renderer,
        // matching the first real child the walk visits.
        let order_by = Rc::new(RefCell::new(OrderByRenderer::new(OrderByHooks::new())));
        dispatcher.push(order_by.clone());
        self.order_by = Some(order_by);

        let wher = Rc::new(RefCell::new(WhereRenderer::new(WhereHooks::new())));
        dispatcher.push(wher.clone());
        self.wher = Some(wher);

        let join = Rc::new(RefCell::new(JoinRenderer::new(JoinHooks::new())));
        dispatcher.push(join.clone());
        self.join = Some(join);

        let from = Rc::new(RefCell::new(FromRenderer::new(FromHooks::new())));
        dispatcher.push(from.clone());
        self.from = Some(from);

        let select_list = Rc::new(RefCell::new(SelectListRenderer::new(SelectListHooks::new())));
        dispatcher.push(select_list.clone());
        self.select_list = Some(select_list);
    }

    fn leave_matched(&mut self, segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        let SegmentRef::Select(select) = segment else {
            return;
        };
        self.fragment.push_str("SELECT ");
        if select.distinct() {
            self.fragment.push_str("DISTINCT ");
        }
        if let Some(r) = self.select_list.take() {
            self.fragment.push_str(r.borrow().hooks().fragment());
        }
        if let Some(r) = self.from.take() {
            self.fragment.push_str(r.borrow().hooks().fragment());
        }
        if let Some(r) = self.join.take() {
            self.fragment.push_str(r.borrow().hooks().fragment());
        }
        if let Some(r) = self.wher.take() {
            self.fragment.push_str(r.borrow().hooks().fragment());
        }
        if let Some(r) = self.order_by.take() {
            self.fragment.push_str(r.borrow().hooks().fragment());
        }
        if let Some(limit) = select.limit() {
            self.fragment.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = select.offset() {
            self.fragment.push_str(&format!(" OFFSET {offset}"));
        }
    }
}
