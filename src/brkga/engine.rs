//! The BRKGA evolutionary loop.

use rayon::prelude::*;

use super::config::BrkgaConfig;
use crate::decoder::Decoder;
use crate::error::{ArgumentError, ConfigError};
use crate::population::Population;
use crate::random::RandomStream;

/// `K` independent BRKGA populations, evolved generation by generation.
///
/// `current` and `previous` are allocated once at construction and swapped
/// by reference every generation — chromosome storage is never reallocated.
pub struct BrkgaEngine<D: Decoder> {
    config: BrkgaConfig,
    decoder: D,
    rng: RandomStream,
    current: Vec<Population>,
    previous: Vec<Population>,
    pool: rayon::ThreadPool,
}

impl<D: Decoder> BrkgaEngine<D> {
    /// Builds and evaluates `config.k` initial populations, seeded from
    /// `seed`.
    ///
    /// `warm_start` optionally supplies a chromosome (built by
    /// [`super::warm_start_chromosome`]) to place at backing slot
    /// 0 of population 0, overwriting its random keys — the rest of every
    /// population is left as fresh uniform keys.
    pub fn new(
        config: BrkgaConfig,
        decoder: D,
        seed: u32,
        warm_start: Option<Vec<f64>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.max_threads)
            .build()
            .expect("failed to build the fitness-evaluation thread pool");

        let mut rng = RandomStream::new(seed);
        let mut current: Vec<Population> = (0..config.k)
            .map(|_| Population::new(config.chromosome_length, config.population_size))
            .collect();

        for (island, pop) in current.iter_mut().enumerate() {
            for i in 0..pop.size() {
                let chromosome = pop.chromosome_mut(i);
                for key in chromosome.iter_mut() {
                    *key = rng.next_f64();
                }
            }
            if island == 0 {
                if let Some(ref warm) = warm_start {
                    pop.chromosome_mut(0).copy_from_slice(warm);
                }
            }
            let size = pop.size();
            Self::evaluate_range(&decoder, &pool, pop, 0, size);
            pop.sort_by_fitness();
        }

        let previous = current.clone();

        Ok(Self {
            config,
            decoder,
            rng,
            current,
            previous,
            pool,
        })
    }

    pub fn config(&self) -> &BrkgaConfig {
        &self.config
    }

    /// The current population of island `k`.
    pub fn population(&self, k: usize) -> &Population {
        &self.current[k]
    }

    /// Runs `generations` generation steps across every island.
    pub fn evolve(&mut self, generations: usize) -> Result<(), ArgumentError> {
        if generations == 0 {
            return Err(ArgumentError::ZeroGenerations);
        }
        for _ in 0..generations {
            for island in 0..self.config.k {
                self.evolve_one(island);
                std::mem::swap(&mut self.current[island], &mut self.previous[island]);
            }
        }
        Ok(())
    }

    /// One generation for a single island: elite copy, biased crossover,
    /// mutation, parallel re-evaluation, sort. Reads `self.current[island]`,
    /// writes `self.previous[island]` (the scratch "next" population).
    fn evolve_one(&mut self, island: usize) {
        let pe = self.config.pe();
        let pm = self.config.pm();
        let p = self.config.population_size;
        let n_keys = self.config.chromosome_length;
        let rho_e = self.config.rho_e;

        for rank in 0..pe {
            let backing = self.current[island].backing_index_at_rank(rank);
            let fitness = self.current[island].fitness_at_rank(rank);
            let source = self.current[island].chromosome(backing).to_vec();
            self.previous[island].chromosome_mut(rank).copy_from_slice(&source);
            self.previous[island].set_fitness(rank, fitness);
        }

        for rank in pe..(p - pm) {
            let elite_rank = self.rng.next_bounded((pe - 1) as u32) as usize;
            let nonelite_rank = pe + self.rng.next_bounded((p - pe - 1) as u32) as usize;
            let curr = &self.current[island];
            let elite_backing = curr.backing_index_at_rank(elite_rank);
            let nonelite_backing = curr.backing_index_at_rank(nonelite_rank);

            let mut child = vec![0.0; n_keys];
            for (j, allele) in child.iter_mut().enumerate() {
                let source_backing = if inherits_from_elite(&mut self.rng, rho_e) {
                    elite_backing
                } else {
                    nonelite_backing
                };
                *allele = self.current[island].chromosome(source_backing)[j];
            }
            self.previous[island].chromosome_mut(rank).copy_from_slice(&child);
        }

        for rank in (p - pm)..p {
            let chromosome = self.previous[island].chromosome_mut(rank);
            for key in chromosome.iter_mut() {
                *key = self.rng.next_f64();
            }
        }

        Self::evaluate_range(&self.decoder, &self.pool, &mut self.previous[island], pe, p);
        self.previous[island].sort_by_fitness();
    }

    /// Decodes backing slots `[start, end)` of `pop`, bounded to
    /// `pool`'s worker count. Runs after every sequential RNG draw for the
    /// generation so the random stream's order never depends on thread
    /// count.
    fn evaluate_range(decoder: &D, pool: &rayon::ThreadPool, pop: &mut Population, start: usize, end: usize) {
        let costs: Vec<(usize, f64)> = pool.install(|| {
            (start..end)
                .into_par_iter()
                .map(|i| (i, decoder.decode(pop.chromosome(i))))
                .collect()
        });
        for (i, cost) in costs {
            pop.set_fitness(i, cost);
        }
    }

    /// Copies the top `m` chromosomes (and fitness) of every island into the
    /// bottom ranks of every other island, filling rightmost ranks first,
    /// then re-sorts every island.
    pub fn exchange_elite(&mut self, m: usize) -> Result<(), ArgumentError> {
        let p = self.config.population_size;
        let k = self.config.k;
        if m == 0 || m >= p {
            return Err(ArgumentError::InvalidExchangeCount { m, p });
        }
        if k > 1 {
            let product = m * (k - 1);
            if product >= p {
                return Err(ArgumentError::ExchangeOverflowsPopulation { m, k, p, product });
            }
        }

        let snapshots: Vec<Vec<(Vec<f64>, f64)>> = (0..k)
            .map(|island| {
                (0..m)
                    .map(|rank| {
                        (
                            self.current[island].chromosome_at_rank(rank).to_vec(),
                            self.current[island].fitness_at_rank(rank),
                        )
                    })
                    .collect()
            })
            .collect();

        for i in 0..k {
            let mut dest = p - 1;
            for j in 0..k {
                if j == i {
                    continue;
                }
                for (chromosome, fitness) in &snapshots[j][..m] {
                    self.current[i].chromosome_mut(dest).copy_from_slice(chromosome);
                    self.current[i].set_fitness(dest, *fitness);
                    dest -= 1;
                }
            }
        }

        for pop in self.current.iter_mut() {
            pop.sort_by_fitness();
        }
        Ok(())
    }

    /// Minimum best-fitness across all islands.
    pub fn best_fitness(&self) -> f64 {
        self.current
            .iter()
            .map(|pop| pop.best_fitness())
            .fold(f64::INFINITY, f64::min)
    }

    /// The chromosome achieving [`BrkgaEngine::best_fitness`], ties broken
    /// by lowest island index.
    pub fn best_chromosome(&self) -> &[f64] {
        let mut best_island = 0;
        let mut best = self.current[0].best_fitness();
        for (island, pop) in self.current.iter().enumerate().skip(1) {
            if pop.best_fitness() < best {
                best = pop.best_fitness();
                best_island = island;
            }
        }
        self.current[best_island].best_chromosome()
    }
}

/// The per-allele parent choice of biased crossover: `true` (inherit from
/// the elite parent) with probability `rho_e`, `false` (inherit from the
/// non-elite parent) otherwise.
fn inherits_from_elite(rng: &mut RandomStream, rho_e: f64) -> bool {
    rng.next_f64() < rho_e
}
