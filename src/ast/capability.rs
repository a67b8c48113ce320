//! Cross-cutting capability traits.
//!
//! `Aliased` and `Named` are predicates over an optional field, not a second
//! type hierarchy: several otherwise unrelated segments (tables, columns,
//! bind markers) can satisfy them without a shared supertype.

use smol_str::SmolStr;

/// A segment that may carry a rendering alias.
pub trait Aliased {
    /// The alias, if one was given at construction.
    fn alias(&self) -> Option<&SmolStr>;

    /// Whether this segment was given an alias.
    fn is_aliased(&self) -> bool {
        self.alias().is_some()
    }
}

/// A segment that may carry a name distinguishing it from an anonymous peer.
pub trait Named {
    /// The name, if this instance is the named variant.
    fn name(&self) -> Option<&SmolStr>;
}
