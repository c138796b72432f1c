// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

/// Slice source and destination codes into the one-step TE observations.
///
/// Returns (dest_future, dest_history, src_history), each of length `n - 1`:
/// - dest_future: Y_{t+1}
/// - dest_history: Y_{t}
/// - src_history: X_{t}
///
/// Series shorter than two samples produce empty columns. The shorter of the
/// two inputs bounds the number of observations.
pub fn te_triplets<T: Clone>(
    source: ArrayView1<T>,
    destination: ArrayView1<T>,
) -> (Array1<T>, Array1<T>, Array1<T>) {
    let n = source.len().min(destination.len());
    if n < 2 {
        return (Array1::from(vec![]), Array1::from(vec![]), Array1::from(vec![]));
    }

    let n_samples = n - 1;
    let mut dest_future = Vec::with_capacity(n_samples);
    let mut dest_history = Vec::with_capacity(n_samples);
    let mut src_history = Vec::with_capacity(n_samples);

    for t in 0..n_samples {
        dest_future.push(destination[t + 1].clone());
        dest_history.push(destination[t].clone());
        src_history.push(source[t].clone());
    }

    (
        Array1::from(dest_future),
        Array1::from(dest_history),
        Array1::from(src_history),
    )
}
