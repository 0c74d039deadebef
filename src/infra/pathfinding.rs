use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

#[derive(Clone, Eq, PartialEq)]
struct Node<N> {
    pos: N,
    f_score: u32,
    seq: u64, // Insertion order, breaks ties first-in first-out
}

impl<N: Eq> Ord for Node<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f_score
            .cmp(&self.f_score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N: Eq> PartialOrd for Node<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first (A*) search that knows nothing about grids.
///
/// The graph is described entirely by the three functions handed to
/// [`AStar::find_path`]: adjacency, step cost and heuristic.
pub struct AStar;

impl AStar {
    /// Find the cheapest path from `start` to `goal`, both ends included.
    ///
    /// `cost(from, to)` returns the cost to step onto `to`, or None when `to`
    /// cannot be entered. `heuristic(pos, goal)` must never overestimate the
    /// remaining cost. Among nodes with equal priority the one queued first is
    /// expanded first, so results are reproducible.
    pub fn find_path<N, A, I, C, H>(
        start: N,
        goal: N,
        adjacency: A,
        cost: C,
        heuristic: H,
    ) -> Option<Vec<N>>
    where
        N: Copy + Eq + Hash,
        A: Fn(N) -> I,
        I: IntoIterator<Item = N>,
        C: Fn(N, N) -> Option<u32>,
        H: Fn(N, N) -> u32,
    {
        if start == goal {
            return Some(vec![start]);
        }

        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<N, N> = HashMap::new();
        let mut g_score: HashMap<N, u32> = HashMap::new();
        let mut closed_set: HashSet<N> = HashSet::new();
        let mut seq: u64 = 0;

        g_score.insert(start, 0);
        open_set.push(Node {
            pos: start,
            f_score: heuristic(start, goal),
            seq,
        });

        while let Some(Node { pos: current, .. }) = open_set.pop() {
            if current == goal {
                return Some(reconstruct_path(&came_from, current));
            }

            if !closed_set.insert(current) {
                continue;
            }

            let current_g_score = g_score.get(&current).copied().unwrap_or(0);

            for neighbor in adjacency(current) {
                if closed_set.contains(&neighbor) {
                    continue;
                }

                let Some(step_cost) = cost(current, neighbor) else {
                    continue;
                };
                let tentative_g = current_g_score.saturating_add(step_cost);

                if tentative_g < g_score.get(&neighbor).copied().unwrap_or(u32::MAX) {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative_g);
                    seq += 1;
                    open_set.push(Node {
                        pos: neighbor,
                        f_score: tentative_g.saturating_add(heuristic(neighbor, goal)),
                        seq,
                    });
                }
            }
        }

        None
    }
}

/// Total cost of walking `path`, or None if any step is impassable.
pub fn path_cost<N, C>(path: &[N], cost: C) -> Option<u32>
where
    N: Copy,
    C: Fn(N, N) -> Option<u32>,
{
    path.windows(2)
        .try_fold(0u32, |total, step| Some(total + cost(step[0], step[1])?))
}

fn reconstruct_path<N: Copy + Eq + Hash>(came_from: &HashMap<N, N>, mut current: N) -> Vec<N> {
    let mut path = vec![current];
    while let Some(&prev) = came_from.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
