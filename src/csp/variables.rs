//! Variable management for constraint encoding

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Handle of an integer variable inside a constraint set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VarId(pub usize);

impl VarId {
    /// Position of the variable in dense per-variable tables
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Maps structured puzzle keys to variable handles
///
/// Handles are handed out densely in declaration order, so a manager with
/// `n` variables owns exactly `VarId(0)..VarId(n)`.
#[derive(Debug, Clone)]
pub struct VariableManager<K> {
    /// Map from key to variable handle
    variable_map: HashMap<K, VarId>,
    /// Keys in declaration order, indexed by handle
    keys: Vec<K>,
}

impl<K> Default for VariableManager<K> {
    fn default() -> Self {
        Self {
            variable_map: HashMap::new(),
            keys: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash + Debug> VariableManager<K> {
    /// Create an empty variable manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new variable for `key`
    ///
    /// Declaring a key twice is an error rather than a silent alias.
    pub fn declare(&mut self, key: K) -> Result<VarId> {
        if self.variable_map.contains_key(&key) {
            anyhow::bail!("Variable {:?} declared twice", key);
        }

        let id = VarId(self.keys.len());
        self.variable_map.insert(key.clone(), id);
        self.keys.push(key);
        Ok(id)
    }

    /// Declare every key of an iterator, returning the handles in order
    pub fn declare_all<I>(&mut self, keys: I) -> Result<Vec<VarId>>
    where
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().map(|key| self.declare(key)).collect()
    }

    /// Look up the handle of a declared key
    pub fn get(&self, key: &K) -> Result<VarId> {
        self.variable_map
            .get(key)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown variable {:?}", key))
    }

    /// The key a handle was declared under
    pub fn key(&self, id: VarId) -> Option<&K> {
        self.keys.get(id.index())
    }

    /// Iterate over `(key, handle)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&K, VarId)> + '_ {
        self.keys.iter().enumerate().map(|(i, key)| (key, VarId(i)))
    }

    /// Get the total number of variables declared
    pub fn variable_count(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
