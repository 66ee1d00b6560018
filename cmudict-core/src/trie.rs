//! Prefix tree for dictionary indexing
//!
//! Dictionaries hold hundreds of thousands of entries whose keys share long
//! prefixes, so entries are indexed in a trie rather than a `HashMap`.
//! Nodes live in one contiguous vector and refer to their children by index.
//!
//! The trie is case-sensitive. Callers that need case-insensitive lookups
//! normalize keys before using them.

use std::collections::HashMap;
use std::hash::Hash;

/// Trie node using array indices instead of pointers
#[derive(Debug, Clone)]
struct TrieNode<S, V> {
    /// Child nodes: symbol -> node index
    children: HashMap<S, u32>,
    /// Payload of the key ending exactly at this node
    value: Option<V>,
}

impl<S, V> TrieNode<S, V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

/// Map from symbol sequences to payloads
///
/// A key that is only a prefix of stored keys is not itself stored:
/// `contains` and `get` report it as absent.
#[derive(Debug, Clone)]
pub struct Trie<S, V> {
    /// All nodes in contiguous storage, root at index 0
    nodes: Vec<TrieNode<S, V>>,
    /// Number of stored keys
    len: usize,
}

impl<S, V> Default for Trie<S, V> {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            len: 0,
        }
    }
}

impl<S: Eq + Hash, V> Trie<S, V> {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the trie stores no keys
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up the payload stored for `key`
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: IntoIterator<Item = S>,
    {
        let index = self.find(key)?;
        self.nodes[index].value.as_ref()
    }

    /// Mutable access to the payload stored for `key`
    pub fn get_mut<K>(&mut self, key: K) -> Option<&mut V>
    where
        K: IntoIterator<Item = S>,
    {
        let index = self.find(key)?;
        self.nodes[index].value.as_mut()
    }

    /// Whether `key` is stored (prefixes of stored keys are not)
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: IntoIterator<Item = S>,
    {
        self.get(key).is_some()
    }

    /// Store `value` under `key`, returning the payload it replaces
    pub fn insert<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: IntoIterator<Item = S>,
    {
        let mut current = 0usize;

        for symbol in key {
            current = match self.nodes[current].children.get(&symbol) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[current].children.insert(symbol, child as u32);
                    child
                }
            };
        }

        let previous = self.nodes[current].value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Walk `key` from the root, returning the final node index
    fn find<K>(&self, key: K) -> Option<usize>
    where
        K: IntoIterator<Item = S>,
    {
        let mut current = 0usize;
        for symbol in key {
            current = *self.nodes[current].children.get(&symbol)? as usize;
        }
        Some(current)
    }
}
