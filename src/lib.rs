//! A relational-SQL statement AST and a stack-based visitor engine that
//! renders it back into SQL text.
//!
//! The crate has two halves: an immutable [`ast`] of `SELECT`-statement
//! nodes (tables, columns, expressions, conditions, clauses, the
//! statement itself), and a [`render`]-ing engine built on a small
//! delegating [`visit`] core — a stack of sub-visitors that take turns
//! owning the currently active syntactic region of a depth-first walk.
//! [`build`] is a thin, non-fluent construction layer sufficient to
//! assemble every AST shape from test and benchmark code; the fluent
//! builder DSL a caller would normally use is an external collaborator.
//!
//! # Render a statement
//!
//! ```
//! use relsql::ast::{Expression, From, Select, Table};
//! use relsql::build;
//! use relsql::render;
//!
//! let employee = Table::new("employee");
//! let id = Expression::Column(relsql::ast::Column::new("id", employee.clone()));
//! let list = build::select_list(vec![id]).unwrap();
//! let select = Select::builder(list).from(From::new(vec![employee])).build();
//!
//! assert_eq!(render(&select).unwrap(), "SELECT employee.id FROM employee");
//! ```
//!
//! # Walk the AST directly
//!
//! ```
//! use relsql::ast::{Column, Expression, SegmentRef, Table, Visitor, walk};
//!
//! struct CountNodes(usize);
//! impl Visitor for CountNodes {
//!     fn enter(&mut self, _segment: SegmentRef<'_>) {
//!         self.0 += 1;
//!     }
//!     fn leave(&mut self, _segment: SegmentRef<'_>) {}
//! }
//!
//! let t = Table::new("employee");
//! let expr = Expression::Column(Column::new("id", t));
//! let mut counter = CountNodes(0);
//! walk(SegmentRef::Expression(&expr), &mut counter);
//! assert_eq!(counter.0, 2); // the column and its owning table
//! ```

pub mod ast;
pub mod build;
pub mod error;
pub mod render;
pub mod visit;

pub use error::RenderError;
pub use render::render;
