//! Biased Random-Key Genetic Algorithm engine.
//!
//! `K` independent populations evolve in lockstep: each generation preserves
//! the elite set, breeds the middle ranks by biased crossover, injects fresh
//! mutants, and re-evaluates through the caller's [`crate::decoder::Decoder`].
//! Populations are double-buffered (swapped by reference, never
//! reallocated) and periodically cross-pollinate via
//! [`BrkgaEngine::exchange_elite`].
//!
//! # References
//!
//! Goncalves & Resende (2011), "Biased random-key genetic algorithms for
//! combinatorial optimization", *J. Heuristics* 17(5), 487–525.

mod config;
mod engine;
mod warmstart;

pub use config::BrkgaConfig;
pub use engine::BrkgaEngine;
pub use warmstart::warm_start_chromosome;
