//! Disjoint-set structure with path compression and union by rank.

/** Union-Find over the elements [0, size).

`rank[r]` is an upper bound on the height of the tree rooted at r. It only biases unions.
*/
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// parent[i]: parent of i (i itself if i is a root)
    parent: Vec<usize>,
    /// rank of each root
    rank: Vec<usize>,
    /// number of disjoint sets
    nb_components: usize,
}

impl UnionFind {
    /// every element is its own root, with rank 0
    pub fn new(size:usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0 ; size],
            nb_components: size,
        }
    }

    /// number of elements
    pub fn len(&self) -> usize { self.parent.len() }

    /// true if there is no element
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// number of disjoint sets
    pub fn nb_components(&self) -> usize { self.nb_components }

    /** returns the root of u. Every node visited is re-attached directly to the root.

    Iterative: two passes over the path (find the root, then compress).
    */
    pub fn find(&mut self, u:usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = u;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /** merges the sets of u and v.

    returns false (and does nothing) if they are already in the same set.
    The lower-rank root is attached under the higher-rank one; on a tie, v's root goes
    under u's root and u's root rank increases.
    */
    pub fn union(&mut self, u:usize, v:usize) -> bool {
        let u_root = self.find(u);
        let v_root = self.find(v);
        if u_root == v_root {
            return false;
        }
        if self.rank[u_root] < self.rank[v_root] {
            self.parent[u_root] = v_root;
        } else {
            self.parent[v_root] = u_root;
            if self.rank[u_root] == self.rank[v_root] {
                self.rank[u_root] += 1;
            }
        }
        self.nb_components -= 1;
        true
    }

    /// true if u and v are in the same set
    pub fn connected(&mut self, u:usize, v:usize) -> bool {
        self.find(u) == self.find(v)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        assert_eq!(uf.nb_components(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
        assert!(UnionFind::new(0).is_empty());
    }

    #[test]
    fn test_union() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert_eq!(uf.find(0), uf.find(1));
        assert!(!uf.union(1, 0));
        assert!(!uf.union(0, 1));
        assert_eq!(uf.nb_components(), 4);
        assert!(uf.union(2, 3));
        assert!(uf.union(3, 1));
        assert!(uf.connected(0, 2));
        assert!(!uf.connected(0, 4));
        assert_eq!(uf.nb_components(), 2);
    }

    #[test]
    fn test_rank_tie_keeps_first_root() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        assert_eq!(uf.find(1), 0);
        // lower rank root (2) goes under the higher rank root (0)
        uf.union(2, 1);
        assert_eq!(uf.find(2), 0);
    }

    #[test]
    fn test_long_chain_compression() {
        let n = 200_000;
        let mut uf = UnionFind::new(n);
        // build a parent chain by hand (unions by rank would keep it flat)
        for i in 1..n {
            uf.parent[i] = i-1;
        }
        assert_eq!(uf.find(n-1), 0);
        assert_eq!(uf.parent[n-1], 0);
        assert_eq!(uf.parent[n/2], 0);
    }
}
