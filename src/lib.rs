//! A BRKGA solver for the double-tour pickup-and-delivery problem with a
//! bounded-depth LIFO cargo stack.
//!
//! A vehicle visits every item's pickup node on a first tour, loading each
//! item onto a stack that may be reordered only within the most recent `L`
//! items (a "reloading depth"), then visits every delivery node on a second
//! tour, unloading the stack under the same constraint. The chromosome
//! encodes both the pickup/delivery visiting order and every stack
//! reordering choice as random keys; [`decoder::PdpDecoder`] turns a
//! chromosome into tours, a relocation count, and a scalar cost.
//!
//! # Architecture
//!
//! - [`random`] — the Mersenne Twister stream driving every probabilistic
//!   choice the engine makes.
//! - [`instance`] — the validated problem instance (pickup/delivery distance
//!   matrices, reloading depth, relocation penalty).
//! - [`tour_oracle`] — a pluggable `TourOracle` trait for seeding a BRKGA run
//!   with a warm-start chromosome built from a Hamiltonian cycle.
//! - [`decoder`] — chromosome layout, the decode algorithm, and solution-file
//!   rendering.
//! - [`population`] — indirectly-ranked chromosome storage.
//! - [`brkga`] — the evolutionary loop: [`brkga::BrkgaEngine`].
//! - [`nds`] — an incremental Pareto frontier over `(distance, relocations)`
//!   pairs, for hosts that want the trade-off curve across many decodes.
//! - [`error`] — the error taxonomy returned by fallible constructors and
//!   operations.
//!
//! # Usage
//!
//! ```
//! use dtsppl_brkga::brkga::{BrkgaConfig, BrkgaEngine};
//! use dtsppl_brkga::decoder::{Decoder, PdpDecoder};
//! use dtsppl_brkga::instance::Instance;
//! use std::sync::Arc;
//!
//! let dp = vec![vec![0, 10], vec![10, 0]];
//! let dd = vec![vec![0, 10], vec![10, 0]];
//! let instance = Arc::new(Instance::new(1, 1, 100, dp, dd).unwrap());
//! let decoder = PdpDecoder::new(instance);
//!
//! let config = BrkgaConfig::new(decoder.chromosome_length(), 20);
//! let mut engine = BrkgaEngine::new(config, decoder, 42, None).unwrap();
//! engine.evolve(10).unwrap();
//! println!("best cost: {}", engine.best_fitness());
//! ```

pub mod brkga;
pub mod decoder;
pub mod error;
pub mod instance;
pub mod nds;
pub mod population;
pub mod random;
pub mod tour_oracle;
