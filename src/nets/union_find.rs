//! Generic disjoint-set (union-find) structure.
//!
//! Used to merge wire-connected terminals into electrical nets. Ids are
//! auto-registered on first use, `find` applies path compression, and
//! `union` merges by rank, so a full merge pass over a snapshot runs in
//! effectively linear time.
//!
//! Iteration ([`roots`](DisjointSet::roots), [`groups`](DisjointSet::groups))
//! follows registration order, which keeps a simulation pass deterministic
//! for identical inputs.

use std::collections::HashMap;
use std::hash::Hash;

/// A disjoint-set over arbitrary hashable ids.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet<T: Eq + Hash + Clone> {
    parent: HashMap<T, T>,
    rank: HashMap<T, usize>,
    /// Ids in registration order, for deterministic iteration
    order: Vec<T>,
}

impl<T: Eq + Hash + Clone> DisjointSet<T> {
    /// Create an empty disjoint-set.
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an id as its own singleton set. No-op if already present.
    pub fn make_set(&mut self, id: T) {
        if !self.parent.contains_key(&id) {
            self.parent.insert(id.clone(), id.clone());
            self.rank.insert(id.clone(), 0);
            self.order.push(id);
        }
    }

    /// Check whether an id has been registered.
    pub fn contains(&self, id: &T) -> bool {
        self.parent.contains_key(id)
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no ids are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Find the root representative of an id's set, registering the id
    /// if it is unseen. Every node visited on the way up is rewritten to
    /// point directly at the root (path compression).
    pub fn find(&mut self, id: &T) -> T {
        self.make_set(id.clone());

        // Walk up to the root
        let mut root = id.clone();
        loop {
            let parent = self.parent[&root].clone();
            if parent == root {
                break;
            }
            root = parent;
        }

        // Compress the visited path
        let mut current = id.clone();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b` using union-by-rank.
    /// The lower-ranked root is attached under the higher-ranked one;
    /// on a tie, `a`'s root wins and its rank increments. No-op if the
    /// two ids already share a set.
    pub fn union(&mut self, a: &T, b: &T) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];

        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a.clone());
            self.rank.insert(root_a, rank_a + 1);
        }
    }

    /// True iff both ids currently resolve to the same root.
    pub fn connected(&mut self, a: &T, b: &T) -> bool {
        self.find(a) == self.find(b)
    }

    /// The distinct roots across all registered ids, in registration
    /// order of the first id that resolves to each root.
    pub fn roots(&mut self) -> Vec<T> {
        let ids = self.order.clone();
        let mut roots = Vec::new();
        for id in &ids {
            let root = self.find(id);
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        roots
    }

    /// Mapping from each root to the ids in its set, member lists in
    /// registration order.
    pub fn groups(&mut self) -> HashMap<T, Vec<T>> {
        let ids = self.order.clone();
        let mut groups: HashMap<T, Vec<T>> = HashMap::new();
        for id in ids {
            let root = self.find(&id);
            groups.entry(root).or_default().push(id);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_auto_registers() {
        let mut ds: DisjointSet<u32> = DisjointSet::new();
        assert_eq!(ds.find(&7), 7);
        assert!(ds.contains(&7));
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut ds: DisjointSet<u32> = DisjointSet::new();
        ds.union(&1, &2);
        ds.union(&2, &3);
        let root = ds.find(&1);
        assert_eq!(ds.find(&root), root);
        assert_eq!(ds.find(&3), root);
    }

    #[test]
    fn test_connected_matches_transitive_closure() {
        let mut ds: DisjointSet<&str> = DisjointSet::new();
        ds.union(&"a", &"b");
        ds.union(&"c", &"d");
        assert!(ds.connected(&"a", &"b"));
        assert!(!ds.connected(&"b", &"c"));

        ds.union(&"b", &"c");
        assert!(ds.connected(&"a", &"d"));
    }

    #[test]
    fn test_union_is_idempotent() {
        let mut ds: DisjointSet<u32> = DisjointSet::new();
        ds.union(&1, &2);
        ds.union(&1, &2);
        ds.union(&2, &1);
        assert_eq!(ds.roots().len(), 1);
        let root = ds.find(&1);
        assert_eq!(ds.groups()[&root].len(), 2);
    }

    #[test]
    fn test_roots_and_groups() {
        let mut ds: DisjointSet<u32> = DisjointSet::new();
        for id in 0..6 {
            ds.make_set(id);
        }
        ds.union(&0, &1);
        ds.union(&2, &3);
        ds.union(&3, &4);

        let roots = ds.roots();
        assert_eq!(roots.len(), 3);

        let groups = ds.groups();
        assert_eq!(groups[&ds.find(&0)], vec![0, 1]);
        assert_eq!(groups[&ds.find(&2)], vec![2, 3, 4]);
        assert_eq!(groups[&ds.find(&5)], vec![5]);
    }

    #[test]
    fn test_union_by_rank_keeps_sets_consistent() {
        // Build two balanced trees and merge; the surviving root must
        // still resolve every member.
        let mut ds: DisjointSet<u32> = DisjointSet::new();
        ds.union(&0, &1); // rank(0) = 1
        ds.union(&2, &3); // rank(2) = 1
        ds.union(&0, &2); // tie: rank 2
        ds.union(&0, &4); // smaller rank attaches under the rank-2 root
        let root = ds.find(&0);
        for id in 0..5 {
            assert_eq!(ds.find(&id), root);
        }
    }
}
