//! Minimum spanning tree built by Prim's algorithm.

use crate::graph::Graph;

/// A rooted spanning tree stored as parent links.
///
/// Built once by [`SpanningTree::prim`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    root: usize,
    /// `(parent, edge weight)` for every non-root vertex.
    parent: Vec<Option<(usize, f64)>>,
    /// Children of each vertex in ascending index order.
    children: Vec<Vec<usize>>,
    total_weight: f64,
}

impl SpanningTree {
    /// Builds a minimum spanning tree of `graph` rooted at `root`.
    ///
    /// Uses a flat O(n²) frontier scan. On equal connecting distances the
    /// lowest vertex index is attached first, and a frontier key only
    /// changes on a strictly shorter edge, so the tree is fully
    /// determined by the graph and the root.
    pub fn prim(graph: &Graph, root: usize) -> Self {
        let n = graph.size();
        let mut attached = vec![false; n];
        let mut key = vec![f64::INFINITY; n];
        let mut link = vec![root; n];
        let mut parent = vec![None; n];

        attached[root] = true;
        for v in (0..n).filter(|&v| v != root) {
            key[v] = graph.distance(root, v);
        }

        let mut total_weight = 0.0;
        for _ in 1..n {
            let mut next = None;
            let mut min_key = f64::INFINITY;
            for v in (0..n).filter(|&v| !attached[v]) {
                if next.is_none() || key[v] < min_key {
                    min_key = key[v];
                    next = Some(v);
                }
            }
            let Some(u) = next else { break };

            attached[u] = true;
            parent[u] = Some((link[u], min_key));
            total_weight += min_key;

            for w in (0..n).filter(|&w| !attached[w]) {
                let d = graph.distance(u, w);
                if d < key[w] {
                    key[w] = d;
                    link[w] = u;
                }
            }
        }

        let mut children = vec![Vec::new(); n];
        for (v, link) in parent.iter().enumerate() {
            if let Some((p, _)) = link {
                children[*p].push(v);
            }
        }

        Self {
            root,
            parent,
            children,
            total_weight,
        }
    }

    pub fn root(&self) -> usize {
        self.root
    }

    /// Number of vertices spanned.
    pub fn size(&self) -> usize {
        self.parent.len()
    }

    /// Parent of `v` and the weight of the connecting edge; `None` for
    /// the root.
    pub fn parent(&self, v: usize) -> Option<(usize, f64)> {
        self.parent[v]
    }

    pub fn children(&self, v: usize) -> &[usize] {
        &self.children[v]
    }

    /// Sum of all parent-edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Tree edges as `(parent, child, weight)` in ascending child order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(v, p)| p.map(|(u, w)| (u, v, w)))
    }

    /// Depth-first preorder from the root, children in ascending index
    /// order.
    pub fn preorder(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.size());
        let mut stack = vec![self.root];
        while let Some(v) = stack.pop() {
            order.push(v);
            stack.extend(self.children[v].iter().rev());
        }
        order
    }
}
