//! Chromosome length and block layout.

/// Width of pickup stack-op block `S_k`, for `k` in `1..=n`.
fn pickup_block_width(k: usize, l: usize) -> usize {
    k.min(l + 1)
}

/// Width of delivery stack-op block `T_k`, for `k` in `1..=n`.
fn delivery_block_width(k: usize, n: usize, l: usize) -> usize {
    (n - k + 1).min(l + 1)
}

/// Total chromosome length `G(N, L)`.
///
/// `G = N + sum_{k=1..N} min(k, L+1) + sum_{k=1..N} min(N-k+1, L+1)`.
pub fn chromosome_length(n: usize, l: usize) -> usize {
    let mut g = n;
    for k in 1..=n {
        g += pickup_block_width(k, l);
    }
    for k in 1..=n {
        g += delivery_block_width(k, n, l);
    }
    g
}

/// Offsets of every block within a chromosome of `chromosome_length(n, l)`
/// keys: the pickup-permutation block `P`, the `N` pickup stack-op blocks
/// `S_1..S_N`, and the `N` delivery stack-op blocks `T_1..T_N`.
#[derive(Debug, Clone)]
pub struct ChromosomeLayout {
    n: usize,
    l: usize,
    g: usize,
    s_offsets: Vec<usize>,
    s_widths: Vec<usize>,
    t_offsets: Vec<usize>,
    t_widths: Vec<usize>,
}

impl ChromosomeLayout {
    /// Builds the layout for an instance with `n` items and reloading depth
    /// `l`. `n` must be at least 1 (enforced by [`crate::instance::Instance`]
    /// upstream of every call site).
    pub fn new(n: usize, l: usize) -> Self {
        let mut s_offsets = Vec::with_capacity(n);
        let mut s_widths = Vec::with_capacity(n);
        let mut t_offsets = Vec::with_capacity(n);
        let mut t_widths = Vec::with_capacity(n);

        let mut cursor = n; // P block occupies [0, n)
        for k in 1..=n {
            let w = pickup_block_width(k, l);
            s_offsets.push(cursor);
            s_widths.push(w);
            cursor += w;
        }
        for k in 1..=n {
            let w = delivery_block_width(k, n, l);
            t_offsets.push(cursor);
            t_widths.push(w);
            cursor += w;
        }

        Self {
            n,
            l,
            g: cursor,
            s_offsets,
            s_widths,
            t_offsets,
            t_widths,
        }
    }

    /// Total number of keys this layout expects.
    pub fn len(&self) -> usize {
        self.g
    }

    pub fn is_empty(&self) -> bool {
        self.g == 0
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn l(&self) -> usize {
        self.l
    }

    /// Width `w_k` of pickup stack-op block `S_k` (`k` is 1-indexed, `1..=n`).
    pub fn s_width(&self, k: usize) -> usize {
        self.s_widths[k - 1]
    }

    /// Width `w'_k` of delivery stack-op block `T_k` (1-indexed).
    pub fn t_width(&self, k: usize) -> usize {
        self.t_widths[k - 1]
    }

    /// Keys belonging to block `S_k`.
    pub fn s_block<'a>(&self, chromosome: &'a [f64], k: usize) -> &'a [f64] {
        let start = self.s_offsets[k - 1];
        &chromosome[start..start + self.s_widths[k - 1]]
    }

    /// Keys belonging to block `T_k`.
    pub fn t_block<'a>(&self, chromosome: &'a [f64], k: usize) -> &'a [f64] {
        let start = self.t_offsets[k - 1];
        &chromosome[start..start + self.t_widths[k - 1]]
    }

    /// Keys belonging to the pickup-permutation block `P`.
    pub fn p_block<'a>(&self, chromosome: &'a [f64]) -> &'a [f64] {
        &chromosome[0..self.n]
    }

    pub fn s_offset(&self, k: usize) -> usize {
        self.s_offsets[k - 1]
    }

    pub fn t_offset(&self, k: usize) -> usize {
        self.t_offsets[k - 1]
    }
}

/// Sorts `(key, label)` pairs ascending by key, ties broken by ascending
/// label, and returns the labels in that order — Phase A's key-to-
/// permutation step, applied uniformly to the `P`, `S_k`, and `T_k` blocks.
pub fn decode_permutation(keys: &[f64], labels: &[usize]) -> Vec<usize> {
    let mut pairs: Vec<(f64, usize)> = keys.iter().copied().zip(labels.iter().copied()).collect();
    pairs.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .expect("chromosome keys must not be NaN")
            .then(a.1.cmp(&b.1))
    });
    pairs.into_iter().map(|(_, label)| label).collect()
}
