//! BRKGA configuration.

use crate::error::ConfigError;

/// Configuration for [`super::BrkgaEngine`].
///
/// # Parameters
///
/// `elite_fraction` and `mutant_fraction` are fractions of `population_size`;
/// the remaining fraction is filled by biased-crossover offspring. `rho_e`
/// must lie strictly between 0.5 and 1 for the crossover bias toward the
/// elite parent to be meaningful.
///
/// # Examples
///
/// ```
/// use dtsppl_brkga::brkga::BrkgaConfig;
///
/// let config = BrkgaConfig::new(120, 100) // 120 keys, population of 100
///     .with_elite_fraction(0.10)
///     .with_mutant_fraction(0.25)
///     .with_rho_e(0.70);
/// ```
#[derive(Debug, Clone)]
pub struct BrkgaConfig {
    /// Number of random keys per chromosome (`G(N, L)`).
    pub chromosome_length: usize,

    /// Total population size per island.
    pub population_size: usize,

    /// Fraction of `population_size` preserved as elite (typical 0.10).
    pub elite_fraction: f64,

    /// Fraction of `population_size` replaced by fresh mutants (typical 0.25).
    pub mutant_fraction: f64,

    /// Probability an offspring inherits an allele from its elite parent
    /// during biased crossover (typical 0.70). Must lie in `(0.5, 1)`.
    pub rho_e: f64,

    /// Number of independent populations (islands).
    pub k: usize,

    /// Upper bound on the worker pool used to parallelize fitness
    /// evaluation within a single generation.
    pub max_threads: usize,
}

impl BrkgaConfig {
    /// Creates a configuration for chromosomes of `chromosome_length` keys
    /// and a population of `population_size`, with `K = 1` and `max_threads
    /// = 1`.
    pub fn new(chromosome_length: usize, population_size: usize) -> Self {
        Self {
            chromosome_length,
            population_size,
            elite_fraction: 0.10,
            mutant_fraction: 0.25,
            rho_e: 0.70,
            k: 1,
            max_threads: 1,
        }
    }

    pub fn with_elite_fraction(mut self, f: f64) -> Self {
        self.elite_fraction = f;
        self
    }

    pub fn with_mutant_fraction(mut self, f: f64) -> Self {
        self.mutant_fraction = f;
        self
    }

    pub fn with_rho_e(mut self, rho_e: f64) -> Self {
        self.rho_e = rho_e;
        self
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_max_threads(mut self, max_threads: usize) -> Self {
        self.max_threads = max_threads;
        self
    }

    /// Number of elite chromosomes per population: `floor(elite_fraction *
    /// population_size)`.
    pub fn pe(&self) -> usize {
        (self.elite_fraction * self.population_size as f64) as usize
    }

    /// Number of mutant chromosomes per generation: `floor(mutant_fraction *
    /// population_size)`.
    pub fn pm(&self) -> usize {
        (self.mutant_fraction * self.population_size as f64) as usize
    }

    /// Validates the configuration, matching the reference constructor's
    /// check order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chromosome_length == 0 {
            return Err(ConfigError::ZeroChromosomeLength);
        }
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        let pe = self.pe();
        let pm = self.pm();
        if pe == 0 {
            return Err(ConfigError::ZeroEliteCount);
        }
        if pe > self.population_size {
            return Err(ConfigError::EliteExceedsPopulation {
                pe,
                p: self.population_size,
            });
        }
        if pm > self.population_size {
            return Err(ConfigError::MutantExceedsPopulation {
                pm,
                p: self.population_size,
            });
        }
        if pe + pm > self.population_size {
            return Err(ConfigError::EliteAndMutantExceedPopulation {
                pe,
                pm,
                p: self.population_size,
            });
        }
        if self.k == 0 {
            return Err(ConfigError::ZeroPopulationCount);
        }
        if self.max_threads == 0 {
            return Err(ConfigError::ZeroMaxThreads);
        }
        if !(self.rho_e > 0.5 && self.rho_e < 1.0) {
            return Err(ConfigError::InvalidRhoE(self.rho_e));
        }
        Ok(())
    }
}
