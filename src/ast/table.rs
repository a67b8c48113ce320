//! The `Table` segment: a named relation, optionally aliased.

use smol_str::SmolStr;

use crate::ast::capability::Aliased;

/// A table reference, as it appears in a `FROM` clause, a `JOIN`, or as the
/// owning relation of a [`Column`](crate::ast::Column).
///
/// `Table` carries its own optional alias rather than living in a parallel
/// `AliasedTable` type: the [`Aliased`] capability is a narrow trait over the
/// optional field, not a second inheritance axis (see the design notes on
/// polymorphism without deep inheritance).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: SmolStr,
    alias: Option<SmolStr>,
}

impl Table {
    /// Builds an unaliased table reference.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Table {
            name: name.into(),
            alias: None,
        }
    }

    /// Builds an aliased table reference.
    pub fn aliased(name: impl Into<SmolStr>, alias: impl Into<SmolStr>) -> Self {
        Table {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    /// The table's declared name.
    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    /// The name a sibling segment should qualify itself with: the alias if
    /// one was given, otherwise the table's own name.
    pub fn reference_name(&self) -> &SmolStr {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

impl Aliased for Table {
    fn alias(&self) -> Option<&SmolStr> {
        self.alias.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaliased_reference_name_is_the_table_name() {
        let t = Table::new("employee");
        assert_eq!(t.reference_name(), "employee");
        assert_eq!(t.alias(), None);
    }

    #[test]
    fn aliased_reference_name_is_the_alias() {
        let t = Table::aliased("employee", "e");
        assert_eq!(t.reference_name(), "e");
        assert_eq!(t.name(), "employee");
        assert_eq!(t.alias(), Some(&SmolStr::new("e")));
    }
}
