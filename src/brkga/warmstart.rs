//! Warm-start chromosome construction from a TSP cycle.

use crate::decoder::chromosome_length;
use crate::instance::Instance;

/// Builds a warm-start chromosome from a Hamiltonian cycle
/// `cycle = [0, rho_1, .., rho_n, 0]` (as returned by a
/// [`crate::tour_oracle::TourOracle`] over `instance.combined_distance()`)
/// is encoded so that Phase A decodes the pickup permutation in exactly
/// `rho_1, .., rho_n` order, with every stack-op reorder block trivial
/// (`0, 0.001, 0.002, ...`) — so the seed decodes to zero relocations.
pub fn warm_start_chromosome(instance: &Instance, cycle: &[usize]) -> Vec<f64> {
    let n = instance.n();
    let l = instance.l();
    assert_eq!(
        cycle.len(),
        n + 2,
        "warm-start cycle must have n+2 = {} entries, got {}",
        n + 2,
        cycle.len()
    );

    let mut chromosome = vec![0.0; chromosome_length(n, l)];

    let mut allele = 0.0;
    for &item in &cycle[1..=n] {
        chromosome[item - 1] = allele;
        allele += 0.001;
    }

    let mut pos = n;
    for k in 1..=n {
        let w = k.min(l + 1);
        let mut allele = 0.0;
        for _ in 0..w {
            chromosome[pos] = allele;
            allele += 0.001;
            pos += 1;
        }
    }
    for k in 1..=n {
        let w = (n - k + 1).min(l + 1);
        let mut allele = 0.0;
        for _ in 0..w {
            chromosome[pos] = allele;
            allele += 0.001;
            pos += 1;
        }
    }

    chromosome
}
