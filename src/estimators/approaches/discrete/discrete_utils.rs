// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, Array3, Axis};

/// Map a bin code to a histogram index, `None` outside `[0, bin_count)`.
pub fn bin_index(code: i32, bin_count: usize) -> Option<usize> {
    usize::try_from(code).ok().filter(|&idx| idx < bin_count)
}

/// Joint count table of one-step TE triplets.
///
/// Indexed `(i, j, k)` = (next destination bin, current destination bin,
/// current source bin). Triplets with any code outside `[0, bin_count)` are
/// dropped and counted in `discarded`; they do not contribute to `n`.
#[derive(Debug, Clone)]
pub struct JointHistogram {
    counts: Array3<usize>,
    /// Retained triplets, in observation order.
    observations: Vec<[usize; 3]>,
    discarded: usize,
    bin_count: usize,
}

impl JointHistogram {
    /// Build the histogram from aligned observation columns (see `te_triplets`).
    ///
    /// Allocates `bin_count^3` cells; [`WindowConfig::validate`] bounds
    /// `bin_count` for the sliding path.
    ///
    /// [`WindowConfig::validate`]: crate::estimators::config::WindowConfig::validate
    pub fn from_observations(
        dest_future: &Array1<i32>,
        dest_history: &Array1<i32>,
        src_history: &Array1<i32>,
        bin_count: usize,
    ) -> Self {
        let mut counts = Array3::zeros((bin_count, bin_count, bin_count));
        let mut observations = Vec::with_capacity(dest_future.len());
        let mut discarded = 0;

        for ((&yf, &yp), &xp) in dest_future
            .iter()
            .zip(dest_history.iter())
            .zip(src_history.iter())
        {
            match (
                bin_index(yf, bin_count),
                bin_index(yp, bin_count),
                bin_index(xp, bin_count),
            ) {
                (Some(i), Some(j), Some(k)) => {
                    counts[[i, j, k]] += 1;
                    observations.push([i, j, k]);
                }
                _ => discarded += 1,
            }
        }

        Self {
            counts,
            observations,
            discarded,
            bin_count,
        }
    }

    pub fn counts(&self) -> &Array3<usize> {
        &self.counts
    }

    pub fn count(&self, i: usize, j: usize, k: usize) -> usize {
        self.counts.get([i, j, k]).copied().unwrap_or(0)
    }

    /// Total number of retained triplets, N.
    pub fn n(&self) -> usize {
        self.observations.len()
    }

    pub fn discarded(&self) -> usize {
        self.discarded
    }

    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    pub fn observations(&self) -> &[[usize; 3]] {
        &self.observations
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Normalised tables, `None` when no triplet was retained.
    pub fn probabilities(&self) -> Option<ProbabilityTables> {
        ProbabilityTables::from_histogram(self)
    }
}

/// Joint and marginal probabilities derived from a [`JointHistogram`].
#[derive(Debug, Clone)]
pub struct ProbabilityTables {
    /// p(i, j, k), normalised by N.
    pub p_xyz: Array3<f64>,
    /// p(j, k) = Σ_i p(i, j, k).
    pub p_jk: Array2<f64>,
    /// p(j) = Σ_k p(j, k).
    pub p_j: Array1<f64>,
    /// p(i, j) = Σ_k p(i, j, k).
    pub p_ij: Array2<f64>,
}

impl ProbabilityTables {
    pub fn from_histogram(histogram: &JointHistogram) -> Option<Self> {
        if histogram.is_empty() {
            return None;
        }
        let n_f = histogram.n() as f64;
        let p_xyz = histogram.counts().mapv(|c| c as f64 / n_f);
        let p_jk = p_xyz.sum_axis(Axis(0));
        let p_j = p_jk.sum_axis(Axis(1));
        let p_ij = p_xyz.sum_axis(Axis(2));
        Some(Self {
            p_xyz,
            p_jk,
            p_j,
            p_ij,
        })
    }

    /// log_base of p(i|j,k) / p(i|j) for one cell, `None` when the cell fails
    /// the inclusion guard `p(i,j,k) > 0, p(j,k) > 0, p(j) > 0`.
    pub fn log_ratio(&self, i: usize, j: usize, k: usize, base: f64) -> Option<f64> {
        let p = self.p_xyz[[i, j, k]];
        let p_jk = self.p_jk[[j, k]];
        let p_j = self.p_j[j];
        if p > 0.0 && p_jk > 0.0 && p_j > 0.0 {
            let p1 = p / p_jk;
            let p2 = self.p_ij[[i, j]] / p_j;
            Some(log_in_base(p1 / p2, base))
        } else {
            None
        }
    }
}

/// Logarithm in `base`, exact `log2` for bits.
pub(crate) fn log_in_base(x: f64, base: f64) -> f64 {
    if base == 2.0 {
        x.log2()
    } else {
        x.ln() / base.ln()
    }
}
