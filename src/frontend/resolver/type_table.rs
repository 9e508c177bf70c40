use crate::prelude::*;
use crate::shared::typed_ids::TypeId;
use crate::shared::meta::{Entry, TypeRef};

/// Type table. Owns the id counter, so ids are unique per resolver invocation and never reused.
pub(crate) struct TypeTable {
    entries : Map<TypeId, Entry>,
    names   : Map<TypeId, String>,
    next_id : usize,
}

impl TypeTable {

    pub fn new() -> Self {
        TypeTable {
            entries : Map::new(),
            names   : Map::new(),
            next_id : 0,
        }
    }

    /// Allocates a fresh id for the named item. Its entry is provided later via `set`.
    pub fn reserve(self: &mut Self, name: &str) -> TypeId {
        let id = TypeId::new(self.next_id);
        self.next_id += 1;
        self.names.insert(id, name.to_string());
        id
    }

    /// Stores the entry of a previously reserved id.
    pub fn set(self: &mut Self, id: TypeId, entry: Entry) {
        self.entries.insert(id, entry);
    }

    /// Allocates a fresh id for the given entry and returns it.
    pub fn insert(self: &mut Self, name: &str, entry: Entry) -> TypeId {
        let id = self.reserve(name);
        self.set(id, entry);
        id
    }

    pub fn entry(self: &Self, id: TypeId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    pub fn name(self: &Self, id: TypeId) -> Option<&str> {
        self.names.get(&id).map(|name| name.as_str())
    }

    /// Number of entries in the table.
    pub fn len(self: &Self) -> usize {
        self.entries.len()
    }

    /// Iterates the entries in id order.
    pub fn iter(self: &Self) -> impl Iterator<Item = (TypeId, &Entry)> {
        self.entries.iter().map(|(&id, entry)| (id, entry))
    }

    /// Formats a type reference for error messages, e.g. `vec<Point>`.
    pub fn describe(self: &Self, type_ref: &TypeRef) -> String {
        let name = self.name(type_ref.id).unwrap_or("?");
        if type_ref.parameters.is_empty() {
            name.to_string()
        } else {
            let parameters: Vec<_> = type_ref.parameters.iter().map(|p| self.describe(p)).collect();
            format!("{}<{}>", name, parameters.join(", "))
        }
    }
}
