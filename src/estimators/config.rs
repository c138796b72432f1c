// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransferEntropyError};
use crate::estimators::utils::windows::WindowStarts;

/// Largest accepted bin count. The joint histogram holds `bin_count^3` cells
/// per window, 2^24 at this cap.
pub const MAX_BIN_COUNT: usize = 256;

/// How the window maximum is binned.
///
/// Equal-width edges put the maximum exactly on the last edge. A half-open
/// digitisation rule then assigns it the out-of-range index `bin_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Fold the maximum into the last bin, `bin_count - 1`.
    #[default]
    Clamp,
    /// Leave the maximum at `bin_count`; every triplet touching it is dropped
    /// by the histogram range guard.
    Discard,
}

/// Parameters of a sliding-window transfer entropy run.
///
/// Missing fields in a serialised configuration fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Number of samples per window, at least 2.
    pub window_size: usize,
    /// Offset between consecutive window starts.
    pub stride: usize,
    /// Number of equal-width bins per window, between 2 and [`MAX_BIN_COUNT`].
    pub bin_count: usize,
    pub boundary: BoundaryPolicy,
    /// Logarithm base of the result; 2.0 gives bits.
    pub base: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_size: 20,
            stride: 2,
            bin_count: 4,
            boundary: BoundaryPolicy::Clamp,
            base: 2.0,
        }
    }
}

impl WindowConfig {
    pub fn new(window_size: usize, stride: usize, bin_count: usize) -> Self {
        Self {
            window_size,
            stride,
            bin_count,
            ..Self::default()
        }
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    /// Check the parameters, returning the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.window_size < 2 {
            return Err(TransferEntropyError::InvalidWindowSize {
                window_size: self.window_size,
            });
        }
        if self.stride == 0 {
            return Err(TransferEntropyError::InvalidStride {
                stride: self.stride,
            });
        }
        if !(2..=MAX_BIN_COUNT).contains(&self.bin_count) {
            return Err(TransferEntropyError::InvalidBinCount {
                bin_count: self.bin_count,
            });
        }
        if !self.base.is_finite() || self.base <= 0.0 || self.base == 1.0 {
            return Err(TransferEntropyError::InvalidBase { base: self.base });
        }
        Ok(())
    }

    /// Number of windows that fit into a series of `len` samples.
    pub fn window_count(&self, len: usize) -> usize {
        WindowStarts::count_for(len, self.window_size, self.stride)
    }
}
