//! Differencing and its inverse.
//!
//! [`Differenced`] keeps the first and last value of every intermediate
//! level so the operation can be undone in both directions: rebuilding the
//! original series from its start ([`Differenced::reconstruct`]) and
//! extending it past its end ([`Differenced::extend`]), which is how
//! forecasts on the differenced scale are mapped back to levels.

/// Applies first differencing `d` times.
///
/// Returns an empty vector when `d >= series.len()`.
pub fn difference(series: &[f64], d: usize) -> Vec<f64> {
    let mut out = series.to_vec();
    for _ in 0..d {
        if out.len() <= 1 {
            return Vec::new();
        }
        out = out.windows(2).map(|w| w[1] - w[0]).collect();
    }
    out
}

/// A series differenced `d` times plus the boundary values needed to invert it.
#[derive(Clone, Debug, PartialEq)]
pub struct Differenced {
    values: Vec<f64>,
    heads: Vec<f64>,
    tails: Vec<f64>,
}

impl Differenced {
    /// Differences `series` `d` times, recording the first and last value of
    /// each level `0..d` (level 0 is the original series).
    ///
    /// If `d >= series.len()` the differenced values are empty and only the
    /// levels that still had observations are recorded.
    pub fn new(series: &[f64], d: usize) -> Self {
        let mut heads = Vec::with_capacity(d);
        let mut tails = Vec::with_capacity(d);
        let mut level = series.to_vec();
        for _ in 0..d {
            match (level.first(), level.last()) {
                (Some(&first), Some(&last)) => {
                    heads.push(first);
                    tails.push(last);
                }
                _ => break,
            }
            level = difference(&level, 1);
        }
        Self {
            values: level,
            heads,
            tails,
        }
    }

    /// The differenced series (length `n - d`).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Differencing order.
    pub fn order(&self) -> usize {
        self.tails.len()
    }

    /// First value of each level, level 0 first.
    pub fn heads(&self) -> &[f64] {
        &self.heads
    }

    /// Last value of each level, level 0 first.
    pub fn tails(&self) -> &[f64] {
        &self.tails
    }

    /// Rebuilds the original series from the differenced values and heads.
    pub fn reconstruct(&self) -> Vec<f64> {
        reconstruct(&self.values, &self.heads)
    }

    /// Maps values continuing the differenced series back to the original
    /// scale, continuing from the stored tails.
    pub fn extend(&self, future: &[f64]) -> Vec<f64> {
        extend(future, &self.tails)
    }
}

/// Inverts differencing from the start: each level is rebuilt as its head
/// followed by the running sum of the level below.
pub fn reconstruct(values: &[f64], heads: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    for &head in heads.iter().rev() {
        let mut level = Vec::with_capacity(out.len() + 1);
        let mut acc = head;
        level.push(acc);
        for &v in &out {
            acc += v;
            level.push(acc);
        }
        out = level;
    }
    out
}

/// Inverts differencing forward: cumulative sums of `future` seeded with
/// the last value of each level, innermost level first.
pub fn extend(future: &[f64], tails: &[f64]) -> Vec<f64> {
    let mut out = future.to_vec();
    for &tail in tails.iter().rev() {
        let mut acc = tail;
        for v in out.iter_mut() {
            acc += *v;
            *v = acc;
        }
    }
    out
}
