// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: binning of continuous windows, the joint
// triplet histogram and the plug-in transfer entropy built on top of them.

pub mod binned_te;
pub mod binning;
pub mod discrete_utils;
