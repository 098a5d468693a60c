//! The decoder: chromosome keys to feasible tours, stack schedule, and cost.

use std::sync::Arc;

use super::layout::{chromosome_length, decode_permutation, ChromosomeLayout};
use crate::instance::Instance;

/// Maps a random-key chromosome to a cost. The only trait a caller must
/// implement to drive [`crate::brkga::BrkgaEngine`].
pub trait Decoder: Send + Sync {
    /// Decodes `chromosome` (length [`Decoder::chromosome_length`]) and
    /// returns its cost. Lower is better.
    fn decode(&self, chromosome: &[f64]) -> f64;

    /// Expected chromosome length for this decoder's instance.
    fn chromosome_length(&self) -> usize;
}

/// A fully decoded solution: both tours, their combined distance, the
/// relocation count, and the weighted cost.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSolution {
    /// `[0, item, item, ..., 0]`, length `n + 2`.
    pub pickup_tour: Vec<usize>,
    /// `[0, item, item, ..., 0]`, length `n + 2`.
    pub delivery_tour: Vec<usize>,
    /// Sum of both tours' edge distances.
    pub distance: i64,
    /// Total relocation count across all `2N` stack-op steps.
    pub relocations: i64,
    /// `alpha * distance + beta * h * relocations`.
    pub cost: f64,
}

/// The pickup-and-delivery decoder: wraps an [`Instance`] and the cost
/// weights `alpha` (distance) and `beta` (relocation).
#[derive(Clone)]
pub struct PdpDecoder {
    instance: Arc<Instance>,
    alpha: f64,
    beta: f64,
}

impl PdpDecoder {
    /// Builds a decoder with the default unit weights (`alpha = beta = 1`).
    pub fn new(instance: Arc<Instance>) -> Self {
        Self {
            instance,
            alpha: 1.0,
            beta: 1.0,
        }
    }

    /// Builds a decoder with caller-supplied cost weights.
    pub fn with_weights(instance: Arc<Instance>, alpha: f64, beta: f64) -> Self {
        Self {
            instance,
            alpha,
            beta,
        }
    }

    pub fn instance(&self) -> &Arc<Instance> {
        &self.instance
    }

    /// Decodes `chromosome` into its tours, distance, relocations, and cost.
    ///
    /// # Panics
    ///
    /// Panics if `chromosome.len()` does not equal
    /// `chromosome_length(instance.n(), instance.l())` — an out-of-shape
    /// chromosome is a programmer error, not a recoverable one.
    pub fn decode_detailed(&self, chromosome: &[f64]) -> DecodedSolution {
        let n = self.instance.n();
        let l = self.instance.l();
        let layout = ChromosomeLayout::new(n, l);
        assert_eq!(
            chromosome.len(),
            layout.len(),
            "chromosome has {} keys, expected {} for n={n}, l={l}",
            chromosome.len(),
            layout.len(),
        );

        let item_labels: Vec<usize> = (1..=n).collect();
        let pi = decode_permutation(layout.p_block(chromosome), &item_labels);

        let mut pickup_tour = Vec::with_capacity(n + 2);
        pickup_tour.push(0);
        pickup_tour.extend_from_slice(&pi);
        pickup_tour.push(0);

        let mut stack: Vec<usize> = Vec::with_capacity(l + 1);
        let mut relocations: i64 = 0;

        for k in 1..=n {
            let w = layout.s_width(k);
            let rank_labels: Vec<usize> = (0..w).collect();
            let sigma = decode_permutation(layout.s_block(chromosome, k), &rank_labels);

            let mut v: Vec<(usize, usize)> = Vec::with_capacity(w);
            v.push((sigma[0], pi[k - 1]));
            for &rank in sigma.iter().skip(1) {
                let item = stack.pop().expect("stack has an item to relocate");
                v.push((rank, item));
            }

            relocations += relocation_count(&v);
            restack(&mut v, &mut stack);
        }

        let mut delivery_tour = Vec::with_capacity(n + 2);
        delivery_tour.push(0);

        for k in 1..=n {
            let w = layout.t_width(k);
            let rank_labels: Vec<usize> = (0..w).collect();
            let tau = decode_permutation(layout.t_block(chromosome, k), &rank_labels);

            let mut v: Vec<(usize, usize)> = Vec::with_capacity(w);
            for &rank in &tau {
                let item = stack.pop().expect("stack has an item to deliver");
                v.push((rank, item));
            }

            relocations += relocation_count(&v);
            restack(&mut v, &mut stack);

            delivery_tour.push(stack.pop().expect("stack holds the item just restacked"));
        }
        delivery_tour.push(0);
        debug_assert!(stack.is_empty());

        let distance = tour_distance(&pickup_tour, self.instance.dp())
            + tour_distance(&delivery_tour, self.instance.dd());
        let cost = self.alpha * distance as f64 + self.beta * (self.instance.h() * relocations) as f64;

        DecodedSolution {
            pickup_tour,
            delivery_tour,
            distance,
            relocations,
            cost,
        }
    }
}

impl Decoder for PdpDecoder {
    fn decode(&self, chromosome: &[f64]) -> f64 {
        self.decode_detailed(chromosome).cost
    }

    fn chromosome_length(&self) -> usize {
        chromosome_length(self.instance.n(), self.instance.l())
    }
}

/// Phase B/C step 2: the number of items lifted off the stack to place the
/// focal item, or 0 if the working list was already rank-ordered.
fn relocation_count(v: &[(usize, usize)]) -> i64 {
    for (i, &(rank, _)) in v.iter().enumerate() {
        if rank != i {
            return (v.len() - i - 1) as i64;
        }
    }
    0
}

/// Sorts `v` descending by rank and pushes each item back onto `stack` in
/// that order, leaving the smallest-rank item on top.
fn restack(v: &mut [(usize, usize)], stack: &mut Vec<usize>) {
    v.sort_unstable_by(|a, b| b.0.cmp(&a.0));
    stack.extend(v.iter().map(|&(_, item)| item));
}

fn tour_distance(tour: &[usize], dist: &[Vec<i64>]) -> i64 {
    tour.windows(2).map(|w| dist[w[0]][w[1]]).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(vals: &[&[i64]]) -> Vec<Vec<i64>> {
        vals.iter().map(|row| row.to_vec()).collect()
    }

    #[test]
    fn trivial_instance_zero_relocations() {
        let dp = square(&[&[0, 5], &[5, 0]]);
        let dd = square(&[&[0, 5], &[5, 0]]);
        let instance = Arc::new(Instance::new(1, 0, 10, dp, dd).unwrap());
        let decoder = PdpDecoder::new(instance);

        for chromosome in [[0.0, 0.0, 0.0], [0.9, 0.1, 0.5]] {
            let solution = decoder.decode_detailed(&chromosome);
            assert_eq!(solution.pickup_tour, vec![0, 1, 0]);
            assert_eq!(solution.delivery_tour, vec![0, 1, 0]);
            assert_eq!(solution.relocations, 0);
            assert_eq!(solution.distance, 20);
            assert_eq!(solution.cost, 20.0);
        }
    }

    #[test]
    fn pinned_cost_n2_l1() {
        let dp = square(&[&[0, 10, 20], &[10, 0, 15], &[20, 15, 0]]);
        let dd = dp.clone();
        let instance = Arc::new(Instance::new(2, 1, 100, dp, dd).unwrap());
        let decoder = PdpDecoder::new(instance);

        let chromosome = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8];
        assert_eq!(chromosome.len(), decoder.chromosome_length());

        let solution = decoder.decode_detailed(&chromosome);
        assert_eq!(solution.pickup_tour, vec![0, 1, 2, 0]);
        assert_eq!(solution.delivery_tour, vec![0, 2, 1, 0]);
        assert_eq!(solution.relocations, 0);
        assert_eq!(solution.distance, 90);
        assert_eq!(solution.cost, 90.0);
    }

    #[test]
    fn feasibility_holds_on_random_chromosomes() {
        let dp = square(&[
            &[0, 10, 20, 15, 25],
            &[10, 0, 15, 20, 18],
            &[20, 15, 0, 12, 22],
            &[15, 20, 12, 0, 9],
            &[25, 18, 22, 9, 0],
        ]);
        let dd = square(&[
            &[0, 8, 14, 19, 11],
            &[8, 0, 6, 13, 17],
            &[14, 6, 0, 21, 5],
            &[19, 13, 21, 0, 16],
            &[11, 17, 5, 16, 0],
        ]);
        let instance = Arc::new(Instance::new(4, 2, 7, dp, dd).unwrap());
        let decoder = PdpDecoder::new(instance.clone());
        let n = instance.n();

        let mut rng = crate::random::RandomStream::new(12345);
        for _ in 0..50 {
            let chromosome: Vec<f64> = (0..decoder.chromosome_length())
                .map(|_| rng.next_f64())
                .collect();
            let solution = decoder.decode_detailed(&chromosome);

            assert_eq!(solution.pickup_tour.first(), Some(&0));
            assert_eq!(solution.pickup_tour.last(), Some(&0));
            assert_eq!(solution.delivery_tour.first(), Some(&0));
            assert_eq!(solution.delivery_tour.last(), Some(&0));

            let mut pickup_items: Vec<usize> = solution.pickup_tour[1..=n].to_vec();
            pickup_items.sort_unstable();
            assert_eq!(pickup_items, (1..=n).collect::<Vec<_>>());

            let mut delivery_items: Vec<usize> = solution.delivery_tour[1..=n].to_vec();
            delivery_items.sort_unstable();
            assert_eq!(delivery_items, (1..=n).collect::<Vec<_>>());

            let expected_cost =
                solution.distance as f64 + (instance.h() * solution.relocations) as f64;
            assert_eq!(solution.cost, expected_cost);
        }
    }

    #[test]
    fn stack_depth_never_exceeds_reloading_depth() {
        for n in 1..8usize {
            for l in 0..n {
                let layout = ChromosomeLayout::new(n, l);
                for k in 1..=n {
                    assert!(layout.s_width(k) - 1 <= l);
                    assert!(layout.t_width(k) - 1 <= l);
                }
            }
        }
    }

    #[test]
    fn rejects_wrong_length_chromosome() {
        let dp = square(&[&[0, 5], &[5, 0]]);
        let dd = dp.clone();
        let instance = Arc::new(Instance::new(1, 0, 10, dp, dd).unwrap());
        let decoder = PdpDecoder::new(instance);
        let result = std::panic::catch_unwind(|| decoder.decode_detailed(&[0.1, 0.2]));
        assert!(result.is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Builds a symmetric `(n+1)x(n+1)` matrix with zero diagonal from a
        /// pool of raw values, cycling through the pool for each upper-
        /// triangle entry.
        fn symmetric_matrix(size: usize, raw: &[i64]) -> Vec<Vec<i64>> {
            let mut m = vec![vec![0i64; size]; size];
            let mut idx = 0;
            for i in 0..size {
                for j in (i + 1)..size {
                    let v = raw[idx % raw.len()];
                    m[i][j] = v;
                    m[j][i] = v;
                    idx += 1;
                }
            }
            m
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            /// Any chromosome of the right length decodes to tours that
            /// visit every item exactly once and return to the depot, the
            /// stack ends empty (checked by `decode_detailed`'s internal
            /// `debug_assert`), no step ever moves more than `L` non-focal
            /// items, and the reported cost is exactly
            /// `distance + h * relocations`.
            #[test]
            fn decoded_tours_are_feasible_for_any_chromosome(
                n in 1usize..6,
                l in 0usize..5,
                h in 0i64..20,
                raw_dp in proptest::collection::vec(1i64..50, 1..30),
                raw_dd in proptest::collection::vec(1i64..50, 1..30),
                chromosome_seed in any::<u32>(),
            ) {
                let size = n + 1;
                let dp = symmetric_matrix(size, &raw_dp);
                let dd = symmetric_matrix(size, &raw_dd);
                let instance = Arc::new(Instance::new(n, l, h, dp, dd).unwrap());
                let decoder = PdpDecoder::new(instance);

                let mut rng = crate::random::RandomStream::new(chromosome_seed);
                let chromosome: Vec<f64> = (0..decoder.chromosome_length())
                    .map(|_| rng.next_f64())
                    .collect();
                let solution = decoder.decode_detailed(&chromosome);

                prop_assert_eq!(solution.pickup_tour.first(), Some(&0));
                prop_assert_eq!(solution.pickup_tour.last(), Some(&0));
                prop_assert_eq!(solution.delivery_tour.first(), Some(&0));
                prop_assert_eq!(solution.delivery_tour.last(), Some(&0));

                let mut pickup_items: Vec<usize> = solution.pickup_tour[1..=n].to_vec();
                pickup_items.sort_unstable();
                prop_assert_eq!(pickup_items, (1..=n).collect::<Vec<_>>());

                let mut delivery_items: Vec<usize> = solution.delivery_tour[1..=n].to_vec();
                delivery_items.sort_unstable();
                prop_assert_eq!(delivery_items, (1..=n).collect::<Vec<_>>());

                let expected_cost = solution.distance as f64 + (h * solution.relocations) as f64;
                prop_assert_eq!(solution.cost, expected_cost);
            }

            /// Property 1: chromosome_length/layout agreement over a wide
            /// (N, L) range, plus the stack-depth bound `w_k - 1 <= L`.
            #[test]
            fn chromosome_length_matches_layout_for_any_n_l(n in 1usize..25, l in 0usize..25) {
                let layout = ChromosomeLayout::new(n, l);
                prop_assert_eq!(layout.len(), chromosome_length(n, l));
                for k in 1..=n {
                    prop_assert!(layout.s_width(k) - 1 <= l);
                    prop_assert!(layout.t_width(k) - 1 <= l);
                }
            }
        }
    }
}
