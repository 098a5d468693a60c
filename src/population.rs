//! A collection of chromosomes with an indirect, fitness-sorted view.

/// `p` chromosomes of `n_keys` keys each, plus a fitness table that is
/// sorted independently of chromosome storage.
///
/// Sorting permutes `(cost, backing_index)` pairs only — chromosome key
/// vectors are never moved, avoiding `O(p * n_keys)` data motion per sort.
#[derive(Debug, Clone)]
pub struct Population {
    n_keys: usize,
    chromosomes: Vec<Vec<f64>>,
    /// `fitness[rank] = (cost, backing_index)`, sorted ascending by cost
    /// after [`Population::sort_by_fitness`].
    fitness: Vec<(f64, usize)>,
}

impl Population {
    /// Allocates `p` chromosomes of `n_keys` keys each (contents
    /// unspecified — zero-filled until the caller populates them).
    pub fn new(n_keys: usize, p: usize) -> Self {
        Self {
            n_keys,
            chromosomes: vec![vec![0.0; n_keys]; p],
            fitness: (0..p).map(|i| (f64::INFINITY, i)).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn n_keys(&self) -> usize {
        self.n_keys
    }

    /// The chromosome at backing slot `index` (not rank-ordered).
    pub fn chromosome(&self, index: usize) -> &[f64] {
        &self.chromosomes[index]
    }

    pub fn chromosome_mut(&mut self, index: usize) -> &mut Vec<f64> {
        &mut self.chromosomes[index]
    }

    /// Sets the cost of the chromosome at backing slot `index`.
    ///
    /// Mirrors the backing index into the fitness table's own slot
    /// (`fitness[index] = (cost, index)`) — the table only reflects a
    /// rank-sorted order after [`Population::sort_by_fitness`] is called.
    pub fn set_fitness(&mut self, index: usize, cost: f64) {
        self.fitness[index] = (cost, index);
    }

    /// Sorts the fitness table ascending by cost, ties broken by ascending
    /// backing index — deterministic regardless of the sort algorithm's
    /// stability or of how many threads computed the costs.
    pub fn sort_by_fitness(&mut self) {
        self.fitness
            .sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));
    }

    /// Requires the table to be sorted (see [`Population::sort_by_fitness`]).
    pub fn best_fitness(&self) -> f64 {
        self.fitness[0].0
    }

    /// Requires the table to be sorted.
    pub fn best_chromosome(&self) -> &[f64] {
        &self.chromosomes[self.fitness[0].1]
    }

    /// The cost at rank `i` (0-indexed). Requires the table to be sorted.
    pub fn fitness_at_rank(&self, i: usize) -> f64 {
        self.fitness[i].0
    }

    /// The chromosome at rank `i` (0-indexed, 0 = best). Requires the table
    /// to be sorted.
    pub fn chromosome_at_rank(&self, i: usize) -> &[f64] {
        &self.chromosomes[self.fitness[i].1]
    }

    /// The backing index holding rank `i`'s chromosome.
    pub fn backing_index_at_rank(&self, i: usize) -> usize {
        self.fitness[i].1
    }
}
