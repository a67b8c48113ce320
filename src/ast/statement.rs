//! The top-level statement segment.

use crate::ast::clause::{From, Join, OrderByField, SelectList, Where};

/// A `SELECT` statement.
///
/// `limit`/`offset` are scalar properties read at `leave(Select)` time by
/// the statement renderer; they are not traversal children (invariant 2).
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    select_list: SelectList,
    from: Option<From>,
    joins: Vec<Join>,
    r#where: Option<Where>,
    order_by: Vec<OrderByField>,
    distinct: bool,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    pub fn select_list(&self) -> &SelectList {
        &self.select_list
    }

    pub fn from(&self) -> Option<&From> {
        self.from.as_ref()
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn r#where(&self) -> Option<&Where> {
        self.r#where.as_ref()
    }

    pub fn order_by(&self) -> &[OrderByField] {
        &self.order_by
    }

    pub fn distinct(&self) -> bool {
        self.distinct
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Starts a staging builder. See [`crate::build::SelectBuilder`].
    pub(crate) fn from_parts(
        select_list: SelectList,
        from: Option<From>,
        joins: Vec<Join>,
        r#where: Option<Where>,
        order_by: Vec<OrderByField>,
        distinct: bool,
        limit: Option<u64>,
        offset: Option<u64>,
    ) -> Self {
        Select {
            select_list,
            from,
            joins,
            r#where,
            order_by,
            distinct,
            limit,
            offset,
        }
    }
}
