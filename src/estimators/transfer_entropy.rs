// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::iter::FusedIterator;

use ndarray::{Array1, ArrayView1, s};
use tracing::{debug, trace};

use crate::error::{Result, TransferEntropyError};
use crate::estimators::approaches::discrete::binned_te::BinnedTransferEntropy;
use crate::estimators::config::{BoundaryPolicy, WindowConfig};
use crate::estimators::traits::GlobalValue;
use crate::estimators::utils::windows::WindowStarts;

pub struct TransferEntropy;

impl TransferEntropy {
    /// Create a binned transfer entropy estimator over the whole of both series.
    ///
    /// Each series is digitised on its own range with the clamp policy and the
    /// result is reported in bits.
    pub fn new_binned(
        source: &Array1<f64>,
        destination: &Array1<f64>,
        bin_count: usize,
    ) -> BinnedTransferEntropy {
        BinnedTransferEntropy::from_window(
            source.view(),
            destination.view(),
            bin_count,
            BoundaryPolicy::Clamp,
            2.0,
        )
    }

    /// Create a sliding-window transfer entropy estimator from source to destination.
    pub fn new_sliding<'a>(
        source: impl Into<ArrayView1<'a, f64>>,
        destination: impl Into<ArrayView1<'a, f64>>,
        config: WindowConfig,
    ) -> Result<SlidingTransferEntropy<'a>> {
        SlidingTransferEntropy::new(source, destination, config)
    }
}

/// Transfer entropy of one window, aligned to the window end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEstimate {
    /// First sample of the window.
    pub start: usize,
    /// One past the last sample of the window, `start + window_size`.
    pub end: usize,
    pub value: f64,
    /// Retained triplets N. Zero marks an unestimable window reported as 0.0.
    pub triplets: usize,
}

/// Windowed transfer entropy over two borrowed, equal-length series.
///
/// Construction validates the configuration and the inputs; afterwards every
/// window is a pure function of its own slices, so results are deterministic
/// and windows can be evaluated in any order.
#[derive(Debug, Clone)]
pub struct SlidingTransferEntropy<'a> {
    source: ArrayView1<'a, f64>,
    destination: ArrayView1<'a, f64>,
    config: WindowConfig,
}

impl<'a> SlidingTransferEntropy<'a> {
    pub fn new(
        source: impl Into<ArrayView1<'a, f64>>,
        destination: impl Into<ArrayView1<'a, f64>>,
        config: WindowConfig,
    ) -> Result<Self> {
        let source = source.into();
        let destination = destination.into();

        config.validate()?;
        if source.len() != destination.len() {
            return Err(TransferEntropyError::LengthMismatch {
                source_len: source.len(),
                destination_len: destination.len(),
            });
        }
        check_finite(source, "source")?;
        check_finite(destination, "destination")?;

        debug!(
            len = source.len(),
            window_size = config.window_size,
            stride = config.stride,
            bin_count = config.bin_count,
            windows = config.window_count(source.len()),
            "Configured sliding transfer entropy"
        );

        Ok(Self {
            source,
            destination,
            config,
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Length of each input series.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn window_count(&self) -> usize {
        self.config.window_count(self.len())
    }

    /// Estimate the window starting at `start`, `None` if it does not fit.
    pub fn estimate_window(&self, start: usize) -> Option<WindowEstimate> {
        let end = start.checked_add(self.config.window_size)?;
        if end > self.len() {
            return None;
        }
        Some(self.estimate_unchecked(start, end))
    }

    fn estimate_unchecked(&self, start: usize, end: usize) -> WindowEstimate {
        let estimator = BinnedTransferEntropy::from_window(
            self.source.slice(s![start..end]),
            self.destination.slice(s![start..end]),
            self.config.bin_count,
            self.config.boundary,
            self.config.base,
        );
        let triplets = estimator.n_triplets();
        let value = estimator.global_value();

        if triplets == 0 {
            debug!(start, end, "Window has no in-range triplets, reporting 0.0");
        }
        trace!(
            start,
            end,
            triplets,
            discarded = estimator.histogram().discarded(),
            value,
            "Window estimated"
        );

        WindowEstimate {
            start,
            end,
            value,
            triplets,
        }
    }

    /// Lazy estimates in window order; windows are computed only when pulled.
    pub fn iter(&self) -> WindowEstimates<'_, 'a> {
        WindowEstimates {
            estimator: self,
            starts: self.starts(),
        }
    }

    /// All estimates in window order.
    pub fn series(&self) -> Vec<WindowEstimate> {
        self.iter().collect()
    }

    /// (window end index, TE) columns for renderers and exporters.
    pub fn to_arrays(&self) -> (Array1<usize>, Array1<f64>) {
        let (ends, values): (Vec<usize>, Vec<f64>) =
            self.iter().map(|e| (e.end, e.value)).unzip();
        (Array1::from(ends), Array1::from(values))
    }

    /// All estimates, computed on the rayon thread pool.
    ///
    /// Identical to [`series`](Self::series), including order.
    #[cfg(feature = "parallel_support")]
    pub fn par_series(&self) -> Vec<WindowEstimate> {
        use rayon::prelude::*;

        let starts: Vec<usize> = self.starts().collect();
        starts
            .par_iter()
            .map(|&start| self.estimate_unchecked(start, start + self.config.window_size))
            .collect()
    }

    fn starts(&self) -> WindowStarts {
        WindowStarts::new(self.len(), self.config.window_size, self.config.stride)
    }
}

impl<'s, 'a> IntoIterator for &'s SlidingTransferEntropy<'a> {
    type Item = WindowEstimate;
    type IntoIter = WindowEstimates<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`SlidingTransferEntropy::iter`].
#[derive(Debug, Clone)]
pub struct WindowEstimates<'s, 'a> {
    estimator: &'s SlidingTransferEntropy<'a>,
    starts: WindowStarts,
}

impl Iterator for WindowEstimates<'_, '_> {
    type Item = WindowEstimate;

    fn next(&mut self) -> Option<WindowEstimate> {
        let start = self.starts.next()?;
        Some(
            self.estimator
                .estimate_unchecked(start, start + self.estimator.config.window_size),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.starts.size_hint()
    }
}

impl ExactSizeIterator for WindowEstimates<'_, '_> {}

impl FusedIterator for WindowEstimates<'_, '_> {}

fn check_finite(series: ArrayView1<f64>, name: &'static str) -> Result<()> {
    match series.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TransferEntropyError::NonFiniteSample {
            series: name,
            index,
        }),
        None => Ok(()),
    }
}
