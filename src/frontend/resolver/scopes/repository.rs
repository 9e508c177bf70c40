use crate::prelude::*;
use crate::shared::typed_ids::ScopeId;

/// A datastructure that stores items by name and index.
pub(crate) struct Repository<K, I, V> {
    map     : UnorderedMap<(K, ScopeId), I>,
    data    : Vec<V>,
}

impl<K, I, V> Repository<K, I, V> where I: Copy + Into<usize> + From<usize>, K: Hash + Eq {
    /// Creates a new repository.
    pub fn new() -> Self {
        Repository {
            map: UnorderedMap::new(),
            data: Vec::new(),
        }
    }
    /// Inserts an item into the repository and returns its index. An existing name within the same scope is rebound.
    pub fn insert(self: &mut Self, scope_id: ScopeId, name: K, element: V) -> I {
        let index = I::from(self.data.len());
        self.data.push(element);
        self.map.insert((name, scope_id), index);
        index
    }
    /// Fetches an item by its id.
    pub fn value_by_id(self: &Self, index: I) -> &V {
        &self.data[index.into()]
    }
    /// Returns the id of the named item.
    pub fn id_by_name(self: &Self, scope_id: ScopeId, name: K) -> Option<I> {
        self.map.get(&(name, scope_id)).copied()
    }
}
