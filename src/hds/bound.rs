//! Lower bounds on the length of any cycle extending a partial path.
//!
//! Both bounds are admissible: they never exceed the length of the best
//! completion, so pruning a node whose bound reaches the incumbent
//! length cannot discard the optimum.

use crate::graph::Graph;

/// Signature shared by the bound functions.
pub(crate) type BoundFn = fn(&Graph, &[usize], &[bool], f64) -> f64;

/// Keeps the two smallest values seen.
#[inline]
fn keep_two_smallest(d: f64, m1: &mut f64, m2: &mut f64) {
    if d < *m1 {
        *m2 = *m1;
        *m1 = d;
    } else if d < *m2 {
        *m2 = d;
    }
}

/// Half-sum bound.
///
/// Each unvisited vertex still needs two cycle edges, each to another
/// unvisited vertex or to an end of the path; half the sum of its two
/// cheapest candidates is charged to it. The path's last vertex still
/// needs one outgoing edge and its first vertex one incoming edge; half
/// of each cheapest candidate is added. Every completion edge is thereby
/// charged at most its own length.
pub(crate) fn half_sum(graph: &Graph, path: &[usize], visited: &[bool], cost: f64) -> f64 {
    let n = graph.size();
    let (first, last) = match (path.first(), path.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return cost,
    };
    if path.len() == n {
        return cost + graph.distance(last, first);
    }

    let mut bound = cost;
    let mut min_out = f64::INFINITY;
    let mut min_in = f64::INFINITY;

    for v in (0..n).filter(|&v| !visited[v]) {
        let row = graph.distances().row(v);
        let (mut m1, mut m2) = (f64::INFINITY, f64::INFINITY);
        for u in (0..n).filter(|&u| u != v && !visited[u]) {
            keep_two_smallest(row[u], &mut m1, &mut m2);
        }
        keep_two_smallest(row[last], &mut m1, &mut m2);
        if first != last {
            keep_two_smallest(row[first], &mut m1, &mut m2);
        }

        // Only one candidate: both edges go to the single path vertex.
        bound += if m2.is_finite() { (m1 + m2) / 2.0 } else { m1 };

        min_out = min_out.min(row[last]);
        min_in = min_in.min(row[first]);
    }

    bound + (min_out + min_in) / 2.0
}

/// Simple bound: the cheapest edge leaving the path plus, for the
/// remaining `k − 1` edges between unvisited vertices, the cheapest
/// such edge each. The closing edge is charged nothing.
pub(crate) fn simple(graph: &Graph, path: &[usize], visited: &[bool], cost: f64) -> f64 {
    let n = graph.size();
    let (first, last) = match (path.first(), path.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return cost,
    };
    if path.len() == n {
        return cost + graph.distance(last, first);
    }

    let remaining: Vec<usize> = (0..n).filter(|&v| !visited[v]).collect();
    let min_out = remaining
        .iter()
        .map(|&v| graph.distance(last, v))
        .fold(f64::INFINITY, f64::min);

    let mut bound = cost + min_out;
    if remaining.len() > 1 {
        let mut min_pair = f64::INFINITY;
        for (a, &u) in remaining.iter().enumerate() {
            for &v in &remaining[a + 1..] {
                min_pair = min_pair.min(graph.distance(u, v));
            }
        }
        bound += min_pair * (remaining.len() - 1) as f64;
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Graph {
        Graph::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    fn visited(n: usize, path: &[usize]) -> Vec<bool> {
        let mut v = vec![false; n];
        for &p in path {
            v[p] = true;
        }
        v
    }

    /// Shortest completion of `path` by enumerating every ordering of
    /// the unvisited vertices.
    fn best_completion(graph: &Graph, path: &[usize], cost: f64) -> f64 {
        let n = graph.size();
        let seen = visited(n, path);
        if path.len() == n {
            return cost + graph.distance(path[n - 1], path[0]);
        }
        let last = path[path.len() - 1];
        let mut best = f64::INFINITY;
        for v in (0..n).filter(|&v| !seen[v]) {
            let mut next = path.to_vec();
            next.push(v);
            best = best.min(best_completion(graph, &next, cost + graph.distance(last, v)));
        }
        best
    }

    #[test]
    fn test_half_sum_root_of_square_is_tight() {
        let graph = unit_square();
        let bound = half_sum(&graph, &[0], &visited(4, &[0]), 0.0);
        assert!((bound - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_half_sum_partial_path_of_square() {
        // Path 0-1: both unvisited corners charge 1, both path ends charge 1/2.
        let graph = unit_square();
        let bound = half_sum(&graph, &[0, 1], &visited(4, &[0, 1]), 1.0);
        assert!((bound - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_complete_path_is_exact() {
        let graph = unit_square();
        let path = [0, 1, 2, 3];
        let seen = visited(4, &path);
        let cost = 3.0;
        assert!((half_sum(&graph, &path, &seen, cost) - 4.0).abs() < 1e-12);
        assert!((simple(&graph, &path, &seen, cost) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_points_exact() {
        let graph = Graph::from_coords(&[(0.0, 0.0), (0.0, 3.0)]).unwrap();
        let seen = visited(2, &[0]);
        assert!((half_sum(&graph, &[0], &seen, 0.0) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounds_never_overestimate() {
        for seed in 0..5 {
            let graph = Graph::random(7, seed).unwrap();
            let prefixes: [&[usize]; 4] = [&[0], &[0, 3], &[0, 5, 1], &[0, 2, 6, 4, 1]];
            for path in prefixes {
                let cost: f64 = path.windows(2).map(|w| graph.distance(w[0], w[1])).sum();
                let seen = visited(7, path);
                let exact = best_completion(&graph, path, cost);

                let hs = half_sum(&graph, path, &seen, cost);
                let sb = simple(&graph, path, &seen, cost);
                assert!(hs <= exact + 1e-9, "half-sum {hs} > exact {exact}");
                assert!(sb <= exact + 1e-9, "simple {sb} > exact {exact}");
                assert!(hs >= cost && sb >= cost);
            }
        }
    }

    #[test]
    fn test_keep_two_smallest() {
        let (mut m1, mut m2) = (f64::INFINITY, f64::INFINITY);
        for d in [5.0, 3.0, 4.0, 1.0, 2.0] {
            keep_two_smallest(d, &mut m1, &mut m2);
        }
        assert_eq!((m1, m2), (1.0, 2.0));
    }
}
