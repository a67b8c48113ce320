//! The stack-based dispatch core (C7) and the two reusable sub-visitor
//! templates built on it (C8).

pub mod dispatch;
pub mod subtree;

pub use dispatch::{Dispatcher, SubVisitor, next_id};
pub use subtree::{Filtered, Forwarding, Hooks};
