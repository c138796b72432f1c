// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # windowed-te
//!
//! Sliding-window transfer entropy between two real-valued time series.
//!
//! Each window is discretised on its own observed range into equal-width bins,
//! the one-step triplets `(Y[t+1], Y[t], X[t])` are counted in a joint histogram,
//! and the plug-in transfer entropy from `X` (source) to `Y` (destination) is
//! reported against the window's end index.
//!
//! ## Quick Start
//!
//! ```rust
//! use windowed_te::estimators::config::WindowConfig;
//! use windowed_te::estimators::transfer_entropy::TransferEntropy;
//!
//! let source: Vec<f64> = (0..20).map(|t| t as f64).collect();
//! let destination: Vec<f64> = std::iter::once(0.0)
//!     .chain(source[..19].iter().copied())
//!     .collect();
//!
//! let te = TransferEntropy::new_sliding(&source, &destination, WindowConfig::new(20, 2, 4))
//!     .expect("valid configuration");
//! for estimate in te.iter() {
//!     println!("{} {}", estimate.end, estimate.value);
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: `TransferEntropy` factory and `SlidingTransferEntropy`
//! 2. **Discrete Approach**: binning, joint histogram, probability tables and the
//!    per-window `BinnedTransferEntropy` estimator
//! 3. **Core Infrastructure**: shared traits, window iteration and triplet slicing
//!
//! ## Feature Flags
//!
//! - `parallel_support`: evaluate windows on the rayon thread pool via
//!   `SlidingTransferEntropy::par_series`

pub mod error;
pub mod estimators;

pub use error::{Result, TransferEntropyError};
