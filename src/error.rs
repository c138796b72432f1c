// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for sliding-window transfer entropy.

use thiserror::Error;

/// Configuration errors, raised before any window is processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferEntropyError {
    /// Source and destination series differ in length.
    #[error("Length mismatch: source has {source_len} samples, destination has {destination_len}")]
    LengthMismatch {
        source_len: usize,
        destination_len: usize,
    },

    /// A window must hold at least two consecutive destination samples.
    #[error("Invalid window size: {window_size} (must be at least 2)")]
    InvalidWindowSize { window_size: usize },

    #[error("Invalid stride: {stride} (must be positive)")]
    InvalidStride { stride: usize },

    /// Bin count outside `2..=MAX_BIN_COUNT`.
    #[error("Invalid bin count: {bin_count} (must be between 2 and 256)")]
    InvalidBinCount { bin_count: usize },

    /// Logarithm base must be finite, positive and different from 1.
    #[error("Invalid logarithm base: {base}")]
    InvalidBase { base: f64 },

    /// NaN or infinite sample in one of the input series.
    #[error("Non-finite sample in {series} series at index {index}")]
    NonFiniteSample { series: &'static str, index: usize },
}

pub type Result<T> = std::result::Result<T, TransferEntropyError>;
