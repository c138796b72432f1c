// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{Array1, array};
use rstest::rstest;
use windowed_te::estimators::approaches::BinnedTransferEntropy;
use windowed_te::estimators::config::BoundaryPolicy;
use windowed_te::estimators::transfer_entropy::TransferEntropy;
use windowed_te::estimators::{GlobalValue, LocalValues, OptionalLocalValues};

use crate::test_helpers::{binary_entropy_bits, generate_uniform_noise, lagged_copy};

#[test]
fn binned_te_known_example() {
    // Destination copies the source one step later, so (Y_t, X_t) fixes Y_{t+1}
    // and TE equals H(Y_{t+1} | Y_t).
    let source = array![0, 1, 1, 0, 1, 0, 0, 1, 0];
    let destination = array![0, 0, 1, 1, 0, 1, 0, 0, 1];

    let est = BinnedTransferEntropy::new(&source, &destination, 2, 2.0);

    // Y_t = 0 in 5 of 8 triplets (next = 1 in 3), Y_t = 1 in 3 (next = 1 in 1)
    let expected = 5.0 / 8.0 * binary_entropy_bits(2.0 / 5.0)
        + 3.0 / 8.0 * binary_entropy_bits(1.0 / 3.0);
    assert_eq!(est.n_triplets(), 8);
    assert!(est.is_estimable());
    assert_abs_diff_eq!(est.global_value(), expected, epsilon = 1e-12);

    // Local values: log2(1 / p(next | current))
    let locals = est.local_values();
    let l = |p: f64| -p.log2();
    let expected_locals = [
        l(2.0 / 5.0),
        l(3.0 / 5.0),
        l(1.0 / 3.0),
        l(2.0 / 3.0),
        l(3.0 / 5.0),
        l(2.0 / 3.0),
        l(2.0 / 5.0),
        l(3.0 / 5.0),
    ];
    assert_eq!(locals.len(), expected_locals.len());
    for (&val, &exp) in locals.iter().zip(expected_locals.iter()) {
        assert_abs_diff_eq!(val, exp, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(est.global_from_local(), est.global_value(), epsilon = 1e-12);

    assert!(est.supports_local());
    assert_eq!(est.local_values_opt().unwrap().len(), 8);
}

#[test]
fn binned_te_in_nats() {
    let source = array![0, 1, 1, 0, 1, 0, 0, 1, 0];
    let destination = array![0, 0, 1, 1, 0, 1, 0, 0, 1];

    let bits = BinnedTransferEntropy::new(&source, &destination, 2, 2.0).global_value();
    let nats =
        BinnedTransferEntropy::new(&source, &destination, 2, std::f64::consts::E).global_value();
    assert_abs_diff_eq!(nats, bits * std::f64::consts::LN_2, epsilon = 1e-12);
}

#[test]
fn constant_source_carries_no_information() {
    let source = Array1::<i32>::zeros(12);
    let destination = array![0, 1, 2, 1, 0, 2, 2, 1, 0, 0, 1, 2];
    let est = BinnedTransferEntropy::new(&source, &destination, 3, 2.0);
    assert_abs_diff_eq!(est.global_value(), 0.0, epsilon = 1e-15);
}

#[test]
fn constant_destination_is_zero_not_nan() {
    let source = array![0.3, 0.1, 0.9, 0.4, 0.7];
    let destination = array![5.0, 5.0, 5.0, 5.0, 5.0];
    let est = BinnedTransferEntropy::from_window(
        source.view(),
        destination.view(),
        4,
        BoundaryPolicy::Clamp,
        2.0,
    );
    assert_eq!(est.n_triplets(), 4);
    let te = est.global_value();
    assert!(te.is_finite());
    assert_abs_diff_eq!(te, 0.0, epsilon = 1e-15);
}

#[test]
fn unestimable_window_reports_zero() {
    // Under Discard, the rising destination puts its maximum in Y_{t+1}, so the
    // only triplet is dropped.
    let source = array![0.0, 1.0];
    let destination = array![0.0, 1.0];
    let est = BinnedTransferEntropy::from_window(
        source.view(),
        destination.view(),
        2,
        BoundaryPolicy::Discard,
        2.0,
    );
    assert_eq!(est.n_triplets(), 0);
    assert_eq!(est.histogram().discarded(), 1);
    assert!(!est.is_estimable());
    assert!(est.tables().is_none());
    assert_eq!(est.global_value(), 0.0);
    assert!(est.local_values().is_empty());
    assert_eq!(est.global_from_local(), 0.0);
}

#[rstest]
#[case(BoundaryPolicy::Clamp)]
#[case(BoundaryPolicy::Discard)]
fn triplet_count_bound(#[case] policy: BoundaryPolicy) {
    let source = Array1::from(generate_uniform_noise(50, 7));
    let destination = Array1::from(generate_uniform_noise(50, 8));
    let est = BinnedTransferEntropy::from_window(source.view(), destination.view(), 4, policy, 2.0);
    let hist = est.histogram();
    assert!(est.n_triplets() <= 49);
    assert_eq!(hist.n() + hist.discarded(), 49);
    if policy == BoundaryPolicy::Clamp {
        assert_eq!(hist.discarded(), 0);
    }
}

#[rstest]
#[case(200, 4, 1)]
#[case(500, 3, 2)]
#[case(64, 5, 3)]
fn local_values_average_to_global(#[case] size: usize, #[case] bins: usize, #[case] seed: u64) {
    let source = Array1::from(generate_uniform_noise(size, seed));
    let destination = Array1::from(generate_uniform_noise(size, seed + 100));
    let est = TransferEntropy::new_binned(&source, &destination, bins);

    let locals = est.local_values();
    assert_eq!(locals.len(), est.n_triplets());
    assert_abs_diff_eq!(locals.mean().unwrap(), est.global_value(), epsilon = 1e-10);
}

#[test]
fn coupled_direction_dominates() {
    let source = generate_uniform_noise(3000, 21);
    let destination = lagged_copy(&source, 0.5);
    let source = Array1::from(source);
    let destination = Array1::from(destination);

    let forward = TransferEntropy::new_binned(&source, &destination, 4).global_value();
    let backward = TransferEntropy::new_binned(&destination, &source, 4).global_value();

    assert!(forward > 1.5, "forward TE {forward}");
    assert!(backward < 0.05, "backward TE {backward}");
}
