//! The `FROM` clause. Every table is handled inline — none are delegated,
//! since a bare [`Table`] has no children of its own.

use crate::ast::{Aliased, SegmentRef};
use crate::visit::{Dispatcher, Filtered, Hooks};

pub type FromRenderer = Filtered<FromHooks>;

pub struct FromHooks {
    fragment: String,
    count: usize,
}

impl FromHooks {
    pub fn new() -> Self {
        FromHooks {
            fragment: String::new(),
            count: 0,
        }
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl Hooks for FromHooks {
    fn matches(&self, segment: SegmentRef<'_>) -> bool {
        matches!(segment, SegmentRef::From(_))
    }

    fn enter_matched(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        self.fragment.push_str(" FROM ");
    }

    fn enter_nested(&mut self, segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {
        if let SegmentRef::Table(t) = segment {
            if self.count > 0 {
                self.fragment.push_str(", ");
            }
            self.count += 1;
            self.fragment.push_str(t.name());
            if let Some(alias) = t.alias() {
                self.fragment.push_str(" AS ");
                self.fragment.push_str(alias);
            }
        }
    }

    fn leave_matched(&mut self, _segment: SegmentRef<'_>, _dispatcher: &mut Dispatcher) {}
}
