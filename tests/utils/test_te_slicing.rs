// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use windowed_te::estimators::utils::te_slicing::te_triplets;

#[test]
fn te_triplets_known_example() {
    let source = array![10, 11, 12, 13, 14];
    let destination = array![0, 1, 2, 3, 4];

    let (future, history, src) = te_triplets(source.view(), destination.view());

    assert_eq!(future, array![1, 2, 3, 4]);
    assert_eq!(history, array![0, 1, 2, 3]);
    assert_eq!(src, array![10, 11, 12, 13]);
}

#[rstest]
#[case(0)]
#[case(1)]
fn te_triplets_too_short(#[case] len: usize) {
    let series: Array1<i32> = Array1::zeros(len);
    let (future, history, src) = te_triplets(series.view(), series.view());
    assert!(future.is_empty());
    assert!(history.is_empty());
    assert!(src.is_empty());
}

#[rstest]
#[case(2)]
#[case(20)]
#[case(101)]
fn te_triplets_count_is_window_minus_one(#[case] len: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let source: Array1<i32> = (0..len).map(|_| rng.gen_range(0..4)).collect();
    let destination: Array1<i32> = (0..len).map(|_| rng.gen_range(0..4)).collect();

    let (future, history, src) = te_triplets(source.view(), destination.view());

    assert_eq!(future.len(), len - 1);
    assert_eq!(history.len(), len - 1);
    assert_eq!(src.len(), len - 1);
    for t in 0..len - 1 {
        assert_eq!(future[t], destination[t + 1]);
        assert_eq!(history[t], destination[t]);
        assert_eq!(src[t], source[t]);
    }
}
