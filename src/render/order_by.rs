//! The `ORDER BY` clause: a contiguous run of [`OrderByField`](crate::ast::OrderByField) siblings.

use crate::ast::{Direction, SegmentRef};
use crate::visit::{Dispatcher, Forwarding, Hooks};

pub type OrderByRenderer = Forwarding<OrderByHooks>;

pub struct OrderByHooks {
    fragment: String,
    count: usize,
    pending_direction: Option<Direction>,
}

impl OrderByHooks {
    pub fn new() -> Self {
        OrderByHooks {
            fragment: String::new(),
            count: 0,
            pending_direction: None,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for OrderByHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        matches!(segment, SegmentRef::OrderByField(_))
    }

    fn enter_matched(&mut self, segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        if self.count == 0 {
            self.fragment.push_str(" ORDER BY ");
        } else {
            self.fragment.push_str(", ");
        }
        self.count += 1;
        if let SegmentRef::OrderByField(f) = segment {
            self.pending_direction = Some(f.direction());
        }
    }

    fn enter_nested(&mut self, segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        if let SegmentRef::Column(c) = segment {
            self.fragment.push_str(c.reference_name());
        }
    }

    fn leave_matched(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        match self.pending_direction.take() {
            Some(Direction::Ascending) => self.fragment.push_str(" ASC"),
            Some(Direction::Descending) => self.fragment.push_str(" DESC"),
            Some(Direction::Unspecified) | None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Column, Table, walk};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn two_fields_are_comma_separated() {
        let t = Table::new("employee");
        let f1 = crate::ast::OrderByField::new(Column::new("name", t.clone()), Direction::Descending);
        let f2 = crate::ast::OrderByField::new(Column::new("id", t), Direction::Unspecified);
        let renderer = Rc::new(RefCell::new(OrderByRenderer::new(OrderByHooks::new())));
        let mut dispatcher = Dispatcher::new(renderer.clone());
        walk(SegmentRef::OrderByField(&f1), &mut dispatcher);
        walk(SegmentRef::OrderByField(&f2), &mut dispatcher);
        assert!(dispatcher.into_error().is_none());
        assert_eq!(renderer.borrow().hooks().fragment(), " ORDER BY name DESC, id");
    }
}
