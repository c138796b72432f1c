// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::iter::FusedIterator;

/// Start offsets `0, stride, 2 * stride, ...` of every window of `window_size`
/// samples that fits into a series of `len` samples.
///
/// The iterator is lazy and finite. Cloning it before consumption gives an
/// independent restart. A zero `window_size` or `stride` yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowStarts {
    next: usize,
    remaining: usize,
    stride: usize,
}

impl WindowStarts {
    pub fn new(len: usize, window_size: usize, stride: usize) -> Self {
        Self {
            next: 0,
            remaining: Self::count_for(len, window_size, stride),
            stride,
        }
    }

    /// `floor((len - window_size) / stride) + 1` when the window fits, else 0.
    pub fn count_for(len: usize, window_size: usize, stride: usize) -> usize {
        if window_size == 0 || stride == 0 || window_size > len {
            return 0;
        }
        (len - window_size) / stride + 1
    }
}

impl Iterator for WindowStarts {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let start = self.next;
        self.remaining -= 1;
        // The last start is bounded by len, so this cannot wrap before exhaustion.
        self.next = self.next.saturating_add(self.stride);
        Some(start)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for WindowStarts {}

impl FusedIterator for WindowStarts {}
