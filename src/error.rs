//! Error taxonomy.
//!
//! Four categories, matching the operations that can fail: engine
//! construction ([`ConfigError`]), instance construction
//! ([`InstanceError`]), fallible engine operations ([`ArgumentError`]), and
//! solution-file emission ([`IoError`]).

use thiserror::Error;

/// Invalid hyperparameters at [`crate::brkga::BrkgaEngine`] construction.
///
/// A misconfigured engine aborts before any generation executes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chromosome_length (n_keys) must be nonzero")]
    ZeroChromosomeLength,
    #[error("population_size must be nonzero")]
    ZeroPopulation,
    #[error("number of populations (K) must be nonzero")]
    ZeroPopulationCount,
    #[error("elite-set size (pe) must be nonzero")]
    ZeroEliteCount,
    #[error("elite-set size (pe={pe}) exceeds population size (p={p})")]
    EliteExceedsPopulation { pe: usize, p: usize },
    #[error("mutant-set size (pm={pm}) exceeds population size (p={p})")]
    MutantExceedsPopulation { pm: usize, p: usize },
    #[error("elite + mutant sets (pe={pe} + pm={pm}) exceed population size (p={p})")]
    EliteAndMutantExceedPopulation { pe: usize, pm: usize, p: usize },
    #[error("max_threads must be nonzero")]
    ZeroMaxThreads,
    #[error("elite inheritance probability rho_e must lie in (0.5, 1), got {0}")]
    InvalidRhoE(f64),
}

/// Malformed [`crate::instance::Instance`] data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstanceError {
    #[error("number of items N must be at least 1")]
    ZeroItems,
    #[error("distance matrix must be ({expected}x{expected}), pickup matrix has {actual} rows")]
    PickupMatrixWrongSize { expected: usize, actual: usize },
    #[error("distance matrix must be ({expected}x{expected}), delivery matrix has {actual} rows")]
    DeliveryMatrixWrongSize { expected: usize, actual: usize },
    #[error("pickup distance row {row} has {actual} columns, expected {expected}")]
    PickupRowWrongLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("delivery distance row {row} has {actual} columns, expected {expected}")]
    DeliveryRowWrongLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("pickup distance matrix is not symmetric at ({i}, {j}): {a} != {b}")]
    PickupMatrixAsymmetric { i: usize, j: usize, a: i64, b: i64 },
    #[error("delivery distance matrix is not symmetric at ({i}, {j}): {a} != {b}")]
    DeliveryMatrixAsymmetric { i: usize, j: usize, a: i64, b: i64 },
    #[error("pickup distance diagonal must be zero, Dp[{i}][{i}] = {value}")]
    PickupDiagonalNonZero { i: usize, value: i64 },
    #[error("delivery distance diagonal must be zero, Dd[{i}][{i}] = {value}")]
    DeliveryDiagonalNonZero { i: usize, value: i64 },
}

/// Invalid arguments to an otherwise well-formed engine operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("evolve() requires at least 1 generation, got 0")]
    ZeroGenerations,
    #[error("exchange_elite requires 1 <= M < p, got M={m}, p={p}")]
    InvalidExchangeCount { m: usize, p: usize },
    #[error("exchange_elite M={m} with K={k} populations would overflow a population's ranks (M*(K-1)={product} >= p={p})")]
    ExchangeOverflowsPopulation {
        m: usize,
        k: usize,
        p: usize,
        product: usize,
    },
}

/// Failure writing the solution file side channel.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to write solution file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
