// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

pub trait LocalValues: GlobalValue {
    /// Compute and return the local values of the measure.
    fn local_values(&self) -> Array1<f64>;

    /// Derive global_value as the mean of local values.
    /// An estimator without any local values reports 0.0.
    fn global_from_local(&self) -> f64 {
        self.local_values().mean().unwrap_or(0.0)
    }
}

/// Optional interface for estimators that may not support local values.
///
/// Estimators that do support local values should return supports_local() = true
/// and provide local values via `Ok(Array1<f64>)`. Estimators that do not support
/// local values should return supports_local() = false and an Err with a brief reason.
pub trait OptionalLocalValues {
    fn supports_local(&self) -> bool;
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str>;
}
