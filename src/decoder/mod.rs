//! Chromosome layout and the problem-specific decoder.
//!
//! This is the heart of the crate: the random-key chromosome is partitioned
//! into blocks, Phase A turns each block into a permutation by sorting
//! `(key, label)` pairs, Phases B/C simulate the LIFO cargo stack across the
//! pickup and delivery tours counting relocations, and Phase D aggregates
//! the weighted cost.

mod layout;
mod pdp;
mod solution;

pub use layout::{chromosome_length, ChromosomeLayout};
pub use pdp::{DecodedSolution, Decoder, PdpDecoder};
pub use solution::write_solution_file;
