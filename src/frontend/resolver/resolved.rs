use crate::shared::typed_ids::{TypeId, ScopeId};
use crate::shared::meta::{Entry, Symbol, TypeRef};
use super::scopes::Scopes;
use super::type_table::TypeTable;

/// Result of a successful resolution: the type table and the module's scopes.
pub struct ResolvedModule {
    types           : TypeTable,
    scopes          : Scopes,
    module_scope_id : ScopeId,
}

impl ResolvedModule {

    pub(crate) fn new(types: TypeTable, scopes: Scopes, module_scope_id: ScopeId) -> Self {
        ResolvedModule { types, scopes, module_scope_id }
    }

    /// Number of type table entries.
    pub fn len(self: &Self) -> usize {
        self.types.len()
    }

    /// Number of scopes created during resolution, including root and module scope.
    pub fn num_scopes(self: &Self) -> usize {
        self.scopes.len()
    }

    /// Returns the entry of the given id.
    pub fn entry(self: &Self, id: TypeId) -> Option<&Entry> {
        self.types.entry(id)
    }

    /// Iterates all entries in id order.
    pub fn entries(self: &Self) -> impl Iterator<Item = (TypeId, &Entry)> {
        self.types.iter()
    }

    /// Returns the name the given id was allocated for.
    pub fn type_name(self: &Self, id: TypeId) -> Option<&str> {
        self.types.name(id)
    }

    /// Formats a type reference, e.g. `vec<Point>`.
    pub fn describe(self: &Self, type_ref: &TypeRef) -> String {
        self.types.describe(type_ref)
    }

    /// Looks up a top-level or builtin name.
    pub fn lookup(self: &Self, name: &str) -> Option<&Symbol> {
        self.scopes.lookup(self.module_scope_id, name)
    }
}
