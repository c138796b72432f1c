// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::estimators::config::BoundaryPolicy;

/// Equal-width bin edges spanning `[min_val, max_val]`.
///
/// Returns `bin_count + 1` edges, the first equal to `min_val` and the last to
/// `max_val`. Edges are interpolated without forming `max_val - min_val`, which
/// overflows for finite ranges wider than `f64::MAX`.
pub fn bin_edges(min_val: f64, max_val: f64, bin_count: usize) -> Array1<f64> {
    let n_f = bin_count as f64;
    (0..=bin_count)
        .map(|b| {
            let t = b as f64 / n_f;
            min_val * (1.0 - t) + max_val * t
        })
        .collect()
}

/// Minimum and maximum of a window, `None` when it is empty.
pub fn window_range(window: ArrayView1<f64>) -> Option<(f64, f64)> {
    let first = *window.first()?;
    Some(window.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}

/// Map a window to bin codes on equal-width bins over its own range.
///
/// Bins are closed on the left, so a sample on the lower edge of bin `b` is
/// coded `b` and the minimum is always coded 0. The maximum sits on the last
/// edge and is coded `bin_count - 1` under [`BoundaryPolicy::Clamp`] or
/// `bin_count` under [`BoundaryPolicy::Discard`]. A constant window is coded
/// entirely as bin 0.
///
/// Samples are expected to be finite.
pub fn digitize(window: ArrayView1<f64>, bin_count: usize, policy: BoundaryPolicy) -> Array1<i32> {
    let Some((min_val, max_val)) = window_range(window) else {
        return Array1::from(vec![]);
    };
    if min_val == max_val {
        return Array1::zeros(window.len());
    }

    let edges = bin_edges(min_val, max_val, bin_count);
    let last_bin = i32::try_from(bin_count).unwrap_or(i32::MAX) - 1;
    window.mapv(|v| {
        // Number of edges at or below v, minus one, is the left-closed bin.
        let below = edges.iter().filter(|&&e| e <= v).count();
        let code = i32::try_from(below).unwrap_or(i32::MAX) - 1;
        match policy {
            BoundaryPolicy::Clamp => code.min(last_bin),
            BoundaryPolicy::Discard => code,
        }
    })
}
