//! TSP warm-start capability.
//!
//! The BRKGA engine needs one feasible Hamiltonian cycle over `{0..=n}` to
//! seed a warm-start chromosome. Which algorithm produces that cycle is
//! deliberately not the engine's concern — any [`TourOracle`] impl works,
//! exact or heuristic.

/// Produces one Hamiltonian cycle over `{0..=n}` on a combined distance
/// matrix, starting and ending at node 0.
pub trait TourOracle {
    /// Returns `(cost, cycle)` where `dist` is `n x n` (node 0 is the
    /// depot, nodes `1..n` are items), `cycle.len() == n + 1`, and
    /// `cycle[0] == cycle[n] == 0`, visiting every node in `1..n` exactly
    /// once in between.
    fn solve(&self, n: usize, dist: &[Vec<i64>]) -> (i64, Vec<usize>);
}

/// Greedy nearest-neighbor construction followed by 2-opt local search.
///
/// Not exact, but deterministic and dependency-free — a practical stand-in
/// for an external MIP solver when only a feasible, low-cost warm-start is
/// required.
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighborOracle;

impl TourOracle for NearestNeighborOracle {
    fn solve(&self, n: usize, dist: &[Vec<i64>]) -> (i64, Vec<usize>) {
        let mut cycle = nearest_neighbor_cycle(n, dist);
        two_opt(&mut cycle, dist);
        let cost = cycle_cost(&cycle, dist);
        (cost, cycle)
    }
}

fn nearest_neighbor_cycle(n: usize, dist: &[Vec<i64>]) -> Vec<usize> {
    let mut visited = vec![false; n];
    let mut cycle = Vec::with_capacity(n + 1);
    let mut current = 0usize;
    visited[0] = true;
    cycle.push(0);

    for _ in 1..n {
        let next = (1..n)
            .filter(|&node| !visited[node])
            .min_by_key(|&node| dist[current][node])
            .expect("at least one unvisited node remains");
        visited[next] = true;
        cycle.push(next);
        current = next;
    }
    cycle.push(0);
    cycle
}

fn cycle_cost(cycle: &[usize], dist: &[Vec<i64>]) -> i64 {
    cycle.windows(2).map(|w| dist[w[0]][w[1]]).sum()
}

/// Repeatedly applies the best-improving 2-opt edge swap until none remains.
///
/// `cycle[0]` and `cycle[cycle.len() - 1]` (both node 0) are never disturbed.
fn two_opt(cycle: &mut [usize], dist: &[Vec<i64>]) {
    let n = cycle.len();
    if n < 4 {
        return;
    }
    loop {
        let mut improved = false;
        for i in 1..n - 2 {
            for j in (i + 1)..n - 1 {
                let a = cycle[i - 1];
                let b = cycle[i];
                let c = cycle[j];
                let d = cycle[j + 1];
                let delta = (dist[a][c] + dist[b][d]) - (dist[a][b] + dist[c][d]);
                if delta < 0 {
                    cycle[i..=j].reverse();
                    improved = true;
                }
            }
        }
        if !improved {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(vals: &[&[i64]]) -> Vec<Vec<i64>> {
        vals.iter().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn cycle_visits_every_node_once() {
        let dist = square(&[
            &[0, 10, 15, 20],
            &[10, 0, 35, 25],
            &[15, 35, 0, 30],
            &[20, 25, 30, 0],
        ]);
        let (cost, cycle) = NearestNeighborOracle.solve(4, &dist);
        assert_eq!(cycle.first(), Some(&0));
        assert_eq!(cycle.last(), Some(&0));
        assert_eq!(cycle.len(), 5);
        let mut sorted = cycle.clone();
        sorted.pop();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
        assert_eq!(cost, cycle_cost(&cycle, &dist));
    }

    #[test]
    fn two_opt_never_worsens_nearest_neighbor() {
        let dist = square(&[
            &[0, 2, 9, 10],
            &[1, 0, 6, 4],
            &[15, 7, 0, 8],
            &[6, 3, 12, 0],
        ]);
        let greedy = nearest_neighbor_cycle(4, &dist);
        let greedy_cost = cycle_cost(&greedy, &dist);
        let (improved_cost, _) = NearestNeighborOracle.solve(4, &dist);
        assert!(improved_cost <= greedy_cost);
    }

    #[test]
    fn two_nodes_is_trivial_cycle() {
        let dist = square(&[&[0, 5], &[5, 0]]);
        let (cost, cycle) = NearestNeighborOracle.solve(2, &dist);
        assert_eq!(cycle, vec![0, 1, 0]);
        assert_eq!(cost, 10);
    }
}
