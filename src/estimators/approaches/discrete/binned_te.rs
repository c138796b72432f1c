// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::estimators::approaches::discrete::binning::digitize;
use crate::estimators::approaches::discrete::discrete_utils::{
    JointHistogram, ProbabilityTables,
};
use crate::estimators::config::BoundaryPolicy;
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};
use crate::estimators::utils::te_slicing::te_triplets;

/// Plug-in transfer entropy from binned source to binned destination codes.
///
/// Uses one step of history on both sides:
///
/// TE = Σ p(i,j,k) log( p(i|j,k) / p(i|j) )
///
/// with i the next destination bin, j the current destination bin and k the
/// current source bin. Cells with p(i,j,k), p(j,k) or p(j) equal to zero are
/// skipped. No bias correction is applied, so finite samples can give small
/// positive values for independent series.
///
/// A window without any in-range triplet is unestimable and reports 0.0 with
/// no local values.
pub struct BinnedTransferEntropy {
    histogram: JointHistogram,
    tables: Option<ProbabilityTables>,
    base: f64,
}

impl BinnedTransferEntropy {
    /// Build from integer bin codes. Codes outside `[0, bin_count)` are dropped.
    pub fn new(
        source: &Array1<i32>,
        destination: &Array1<i32>,
        bin_count: usize,
        base: f64,
    ) -> Self {
        let (dest_future, dest_history, src_history) = te_triplets(source.view(), destination.view());
        let histogram =
            JointHistogram::from_observations(&dest_future, &dest_history, &src_history, bin_count);
        let tables = histogram.probabilities();
        Self {
            histogram,
            tables,
            base,
        }
    }

    /// Digitise both windows on their own range, then build the estimator.
    pub fn from_window(
        source: ArrayView1<f64>,
        destination: ArrayView1<f64>,
        bin_count: usize,
        boundary: BoundaryPolicy,
        base: f64,
    ) -> Self {
        let source_codes = digitize(source, bin_count, boundary);
        let destination_codes = digitize(destination, bin_count, boundary);
        Self::new(&source_codes, &destination_codes, bin_count, base)
    }

    pub fn histogram(&self) -> &JointHistogram {
        &self.histogram
    }

    pub fn tables(&self) -> Option<&ProbabilityTables> {
        self.tables.as_ref()
    }

    /// Retained triplet count, N.
    pub fn n_triplets(&self) -> usize {
        self.histogram.n()
    }

    pub fn is_estimable(&self) -> bool {
        self.tables.is_some()
    }
}

impl GlobalValue for BinnedTransferEntropy {
    fn global_value(&self) -> f64 {
        let Some(tables) = &self.tables else {
            return 0.0;
        };
        let mut te = 0.0_f64;
        for ((i, j, k), &p) in tables.p_xyz.indexed_iter() {
            if let Some(log_ratio) = tables.log_ratio(i, j, k, self.base) {
                te += p * log_ratio;
            }
        }
        te
    }
}

impl LocalValues for BinnedTransferEntropy {
    /// One value per retained triplet, in time order.
    fn local_values(&self) -> Array1<f64> {
        let Some(tables) = &self.tables else {
            return Array1::zeros(0);
        };
        // Retained cells always pass the inclusion guard.
        self.histogram
            .observations()
            .iter()
            .map(|&[i, j, k]| tables.log_ratio(i, j, k, self.base).unwrap_or(0.0))
            .collect()
    }
}

impl OptionalLocalValues for BinnedTransferEntropy {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
