//! Weighted traversal algorithms

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Heap entry ordered by accumulated distance, smallest first.
///
/// Ordering is by distance alone: ties fall back to whatever order the heap
/// happens to hold, which is exactly the "first discovered wins" contract of
/// [`dijkstra`].
struct QueueEntry {
    dist: f64,
    id: String,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest distance
        other.dist.total_cmp(&self.dist)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra shortest path from `source` to `target`.
///
/// `outgoing(id)` yields `(target_id, distance)` pairs for the node's
/// outgoing edges; distances must be non-negative. Returns the total distance
/// and the node ids along the path, source and target inclusive, or `None`
/// when the target never becomes reachable. `dijkstra(x, x, ..)` returns
/// `(0.0, [x])`.
///
/// A neighbor's recorded distance is relaxed only on strict improvement, so
/// cycles cannot loop forever and among equal-distance paths the first one
/// discovered wins.
pub fn dijkstra<F, I>(source: &str, target: &str, mut outgoing: F) -> Option<(f64, Vec<String>)>
where
    F: FnMut(&str) -> I,
    I: IntoIterator<Item = (String, f64)>,
{
    let mut queue = BinaryHeap::new();
    let mut best: HashMap<String, f64> = HashMap::new();
    let mut prev: HashMap<String, String> = HashMap::new();

    best.insert(source.to_string(), 0.0);
    queue.push(QueueEntry {
        dist: 0.0,
        id: source.to_string(),
    });

    while let Some(QueueEntry { dist, id }) = queue.pop() {
        if id == target {
            return Some((dist, rebuild_path(&prev, source, target)));
        }

        // Stale entry: a shorter route to this node was already queued
        if best.get(&id).map_or(false, |&d| dist > d) {
            continue;
        }

        for (next_id, edge_dist) in outgoing(&id) {
            let next_dist = dist + edge_dist;
            if best.get(&next_id).map_or(true, |&d| next_dist < d) {
                best.insert(next_id.clone(), next_dist);
                prev.insert(next_id.clone(), id.clone());
                queue.push(QueueEntry {
                    dist: next_dist,
                    id: next_id,
                });
            }
        }
    }

    None
}

fn rebuild_path(prev: &HashMap<String, String>, source: &str, target: &str) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current = target;
    while current != source {
        // Every non-source node on the path was inserted into prev when
        // its distance was relaxed
        let parent = &prev[current];
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(
        edges: &'a HashMap<&str, Vec<(&str, f64)>>,
    ) -> impl FnMut(&str) -> Vec<(String, f64)> + 'a {
        move |id| {
            edges
                .get(id)
                .map(|out| out.iter().map(|(t, d)| (t.to_string(), *d)).collect())
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_dijkstra_chain() {
        // Graph: a -1-> b -1-> c
        let edges: HashMap<&str, Vec<(&str, f64)>> =
            [("a", vec![("b", 1.0)]), ("b", vec![("c", 1.0)])].into_iter().collect();

        let (dist, path) = dijkstra("a", "c", lookup(&edges)).unwrap();
        assert_eq!(dist, 2.0);
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dijkstra_prefers_cheaper_detour() {
        // Graph: a -10-> c, a -1-> b -2-> c
        let edges: HashMap<&str, Vec<(&str, f64)>> = [
            ("a", vec![("c", 10.0), ("b", 1.0)]),
            ("b", vec![("c", 2.0)]),
        ]
        .into_iter()
        .collect();

        let (dist, path) = dijkstra("a", "c", lookup(&edges)).unwrap();
        assert_eq!(dist, 3.0);
        assert_eq!(path, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dijkstra_source_equals_target() {
        let edges: HashMap<&str, Vec<(&str, f64)>> = [("a", vec![("b", 1.0)])].into_iter().collect();

        let (dist, path) = dijkstra("a", "a", lookup(&edges)).unwrap();
        assert_eq!(dist, 0.0);
        assert_eq!(path, vec!["a"]);
    }

    #[test]
    fn test_dijkstra_unreachable() {
        // b has no outgoing edges back toward d
        let edges: HashMap<&str, Vec<(&str, f64)>> = [("a", vec![("b", 1.0)])].into_iter().collect();

        assert!(dijkstra("a", "d", lookup(&edges)).is_none());
    }

    #[test]
    fn test_dijkstra_terminates_on_cycle() {
        // Graph: a -> b -> c -> a, plus c -> d
        let edges: HashMap<&str, Vec<(&str, f64)>> = [
            ("a", vec![("b", 1.0)]),
            ("b", vec![("c", 1.0)]),
            ("c", vec![("a", 1.0), ("d", 1.0)]),
        ]
        .into_iter()
        .collect();

        let (dist, path) = dijkstra("a", "d", lookup(&edges)).unwrap();
        assert_eq!(dist, 3.0);
        assert_eq!(path, vec!["a", "b", "c", "d"]);
        assert!(dijkstra("a", "missing", lookup(&edges)).is_none());
    }

    #[test]
    fn test_dijkstra_equal_cost_paths() {
        // Two routes a -> d of total cost 2; whichever is relaxed first is
        // kept, the equal-cost rival must not displace it
        let edges: HashMap<&str, Vec<(&str, f64)>> = [
            ("a", vec![("b", 1.0), ("c", 1.0)]),
            ("b", vec![("d", 1.0)]),
            ("c", vec![("d", 1.0)]),
        ]
        .into_iter()
        .collect();

        let (dist, path) = dijkstra("a", "d", lookup(&edges)).unwrap();
        assert_eq!(dist, 2.0);
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], "a");
        assert_eq!(path[2], "d");
        assert!(path[1] == "b" || path[1] == "c");
    }
}
