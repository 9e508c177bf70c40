mod repository;

use crate::shared::typed_ids::{ScopeId, SymbolId};
use crate::shared::meta::Symbol;
use repository::Repository;

/// Flat list of named symbols and the scope they belong to.
pub(crate) struct Scopes {
    /// Flat symbol data, lookup via SymbolId or ScopeId and name
    symbols     : Repository<String, SymbolId, Symbol>,
    /// Maps ScopeId => Parent ScopeId (using vector as usize=>usize map)
    parent_map  : Vec<ScopeId>,
}

impl Scopes {

    /// Creates and returns a new Scopes instance containing only the root scope.
    pub fn new() -> Self {
        Scopes {
            symbols     : Repository::new(),
            parent_map  : vec![ ScopeId::ROOT ], // root-scope's parent is itself. used by parent_id() to detect that we hit the root
        }
    }

    /// Returns the parent scope id of the given scope id.
    pub fn parent_id(self: &Self, scope_id: ScopeId) -> Option<ScopeId> {
        let parent_scope_id = self.parent_map[scope_id.into_usize()];
        if parent_scope_id == scope_id { None } else { Some(parent_scope_id) }
    }

    /// Creates a new scope within the parent and returns its id.
    pub fn create_scope(self: &mut Self, parent: ScopeId) -> ScopeId {
        let index = self.parent_map.len();
        self.parent_map.push(parent);
        index.into()
    }

    /// Number of scopes created so far, including the root scope.
    pub fn len(self: &Self) -> usize {
        self.parent_map.len()
    }

    /// Binds a name in the given scope. Rebinding a name in the same scope shadows the previous symbol.
    pub fn insert(self: &mut Self, scope_id: ScopeId, name: &str, symbol: Symbol) -> SymbolId {
        self.symbols.insert(scope_id, name.to_string(), symbol)
    }

    /// Returns the symbol bound to the name in exactly this scope.
    pub fn local_symbol(self: &Self, scope_id: ScopeId, name: &str) -> Option<&Symbol> {
        self.symbols.id_by_name(scope_id, name.to_string()).map(|symbol_id| self.symbols.value_by_id(symbol_id))
    }

    /// Finds the symbol bound to the name within the scope or its parent scopes.
    pub fn lookup(self: &Self, mut scope_id: ScopeId, name: &str) -> Option<&Symbol> {
        loop {
            if let Some(symbol) = self.local_symbol(scope_id, name) {
                return Some(symbol);
            } else if let Some(parent_scope_id) = self.parent_id(scope_id) {
                scope_id = parent_scope_id;
            } else {
                return None;
            }
        }
    }
}
