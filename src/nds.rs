//! Non-dominated (f1, f2) pair set.
//!
//! A standalone utility for a host that runs many decodes and wants the
//! distance/relocation trade-off frontier. Not invoked by the BRKGA engine.

use std::io::{self, Write};

/// Incrementally maintained Pareto frontier over integer pairs, both
/// objectives minimized.
#[derive(Debug, Default, Clone)]
pub struct NonDominatedSet {
    points: Vec<(i64, i64)>,
}

/// `a`'s domination relation to `b`: `1` if `a` dominates `b`, `-1` if `b`
/// dominates `a`, `0` if neither (incomparable or equal).
fn relation(a: (i64, i64), b: (i64, i64)) -> i32 {
    let mut val = 0;

    if a.0 < b.0 {
        if val == -1 {
            return 0;
        }
        val = 1;
    } else if a.0 > b.0 {
        if val == 1 {
            return 0;
        }
        val = -1;
    }

    if a.1 < b.1 {
        if val == -1 {
            return 0;
        }
        val = 1;
    } else if a.1 > b.1 {
        if val == 1 {
            return 0;
        }
        val = -1;
    }

    val
}

impl NonDominatedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `point`, discarding it if some member already dominates it (or
    /// is equal), and evicting any existing member it dominates.
    pub fn add(&mut self, point: (i64, i64)) {
        let mut dominated = false;
        self.points.retain(|&other| {
            if dominated {
                return true;
            }
            match relation(point, other) {
                -1 => {
                    dominated = true;
                    true
                }
                0 if point == other => {
                    dominated = true;
                    true
                }
                1 => false,
                _ => true,
            }
        });
        if !dominated {
            self.points.push(point);
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(i64, i64)] {
        &self.points
    }

    /// Writes the frontier sorted lexicographically, with the "F1 F2"
    /// header and right-aligned width-10 integer cells.
    pub fn save_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let mut sorted = self.points.clone();
        sorted.sort_unstable();
        writeln!(writer, "{:>10} {:>10}", "F1", "F2")?;
        for (f1, f2) in sorted {
            writeln!(writer, "{:>10} {:>10}", f1, f2)?;
        }
        Ok(())
    }
}
