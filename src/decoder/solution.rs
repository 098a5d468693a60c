//! Solution-file emission: the decoder's human-readable side channel.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::layout::{decode_permutation, ChromosomeLayout};
use super::pdp::PdpDecoder;
use crate::error::IoError;

/// Writes the solution-file format to `path`: total cost, distance,
/// relocation count, a stack-contents timeline grid, and both tours.
///
/// Replays Phases B and C independently of [`PdpDecoder::decode_detailed`]
/// to also capture a snapshot of the stack after every step — mirroring the
/// reference decoder's own separate pass for the same reason (the hot
/// fitness-evaluation path never pays for snapshot bookkeeping it doesn't
/// need).
pub fn write_solution_file(
    decoder: &PdpDecoder,
    chromosome: &[f64],
    path: impl AsRef<Path>,
) -> Result<(), IoError> {
    let path = path.as_ref();
    let text = render_solution(decoder, chromosome);
    fs::write(path, text).map_err(|source| IoError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn render_solution(decoder: &PdpDecoder, chromosome: &[f64]) -> String {
    let summary = decoder.decode_detailed(chromosome);
    let instance = decoder.instance();
    let n = instance.n();
    let l = instance.l();
    let layout = ChromosomeLayout::new(n, l);

    let mut stack: Vec<usize> = Vec::with_capacity(l + 1);
    let mut container: Vec<Vec<usize>> = Vec::with_capacity(2 * n + 1);

    let item_labels: Vec<usize> = (1..=n).collect();
    let pi = decode_permutation(layout.p_block(chromosome), &item_labels);

    for k in 1..=n {
        let w = layout.s_width(k);
        let rank_labels: Vec<usize> = (0..w).collect();
        let sigma = decode_permutation(layout.s_block(chromosome, k), &rank_labels);

        let mut v: Vec<(usize, usize)> = Vec::with_capacity(w);
        v.push((sigma[0], pi[k - 1]));
        for &rank in sigma.iter().skip(1) {
            v.push((rank, stack.pop().expect("stack has an item to relocate")));
        }
        v.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        stack.extend(v.iter().map(|&(_, item)| item));
        container.push(stack.clone());
    }
    container.push(stack.clone()); // boundary column between pickup and delivery halves

    for k in 1..=n {
        let w = layout.t_width(k);
        let rank_labels: Vec<usize> = (0..w).collect();
        let tau = decode_permutation(layout.t_block(chromosome, k), &rank_labels);

        let mut v: Vec<(usize, usize)> = Vec::with_capacity(w);
        for &rank in &tau {
            v.push((rank, stack.pop().expect("stack has an item to deliver")));
        }
        v.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        stack.extend(v.iter().map(|&(_, item)| item));
        stack.pop().expect("stack holds the item just restacked");
        container.push(stack.clone());
    }
    container.pop(); // always-empty trailing column

    let mut out = String::new();
    let _ = writeln!(out, "Total cost: {}", summary.cost as i64);
    let _ = writeln!(out, "Distance traveled: {}", summary.distance);
    let _ = writeln!(out, "Number of relocations: {}", summary.relocations);
    out.push('\n');
    out.push_str("Loading/unloading plan timeline:\n\n");

    for row in (0..n).rev() {
        for column in &container {
            match column.get(row) {
                Some(item) => {
                    let _ = write!(out, "{:02} ", item);
                }
                None => out.push_str("   "),
            }
        }
        out.push('\n');
    }
    out.push('\n');

    let _ = write!(out, "Pickup tour  : 00");
    for &item in &summary.pickup_tour[1..] {
        let _ = write!(out, " --> {:02}", item);
    }
    out.push('\n');

    let _ = write!(out, "Delivery tour: 00");
    for &item in &summary.delivery_tour[1..] {
        let _ = write!(out, " --> {:02}", item);
    }
    out.push('\n');

    out
}
