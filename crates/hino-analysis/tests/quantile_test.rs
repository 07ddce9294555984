//! Thresholds, buckets, and bucket distributions of the reference dataset
//! with 10 quantiles.

use hino_analysis::distribution::{bucket_distribution, LabelCounts};
use hino_analysis::quantile::{assign_points, compute_thresholds};

const A0: [f64; 15] = [1.4, 1.3, 1.5, 1.7, 1.4, 4.5, 6.3, 5.8, 6.1, 5.1, 4.1, 4.5, 3.9, 4.8, 4.0];
const A1: [f64; 15] = [0.2, 0.2, 0.2, 0.4, 0.3, 1.7, 1.8, 1.8, 2.5, 2.0, 1.0, 1.5, 1.1, 1.8, 1.3];
const A2: [f64; 15] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 5.2, 4.8, 5.0, 5.1, 4.9];
const A3: [f64; 15] = [2.0, 2.3, 1.9, 2.1, 1.9, 3.0, 3.2, 2.9, 2.9, 3.1, 4.0, 4.0, 4.0, 4.0, 4.0];
const CLASS: [i64; 15] = [0, 0, 0, 0, 0, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1];

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}

fn counts(pairs: &[(i64, usize)]) -> LabelCounts<i64> {
    pairs.iter().copied().collect()
}

#[test]
fn test_thresholds() {
    let cases: [(&[f64], &[f64]); 4] = [
        (&A0, &[1.3, 1.4, 1.48, 2.14, 3.96, 4.1, 4.5, 4.74, 5.24, 6.3]),
        (&A1, &[0.2, 0.28, 0.52, 1.06, 1.3, 1.58, 1.78, 1.8, 2.5]),
        (&A2, &[0.0, 3.84, 4.92, 5.2]),
        (&A3, &[1.9, 1.94, 2.08, 2.42, 2.9, 3.0, 3.14, 3.84, 4.0]),
    ];
    for (values, expected) in cases {
        let t = compute_thresholds(values, 10).unwrap();
        assert_close(t.values(), expected);
        assert!(t.values().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_bucket_assignment() {
    let cases: [(&[f64], Vec<Vec<usize>>); 4] = [
        (
            &A0,
            vec![vec![1], vec![0, 4], vec![2, 3], vec![12], vec![14], vec![10], vec![5, 11], vec![9, 13], vec![6, 7, 8]],
        ),
        (
            &A1,
            vec![vec![0, 1, 2], vec![3, 4], vec![10], vec![12], vec![11, 14], vec![5], vec![], vec![6, 7, 8, 9, 13]],
        ),
        (&A2, vec![(0..10).collect(), vec![11, 14], vec![10, 12, 13]]),
        (
            &A3,
            vec![vec![2, 4], vec![0], vec![1, 3], vec![], vec![7, 8], vec![5, 9], vec![6], vec![10, 11, 12, 13, 14]],
        ),
    ];
    for (values, expected) in cases {
        let t = compute_thresholds(values, 10).unwrap();
        assert_eq!(assign_points(values, &t).into_inner(), expected);
    }
}

#[test]
fn test_distributions() {
    let a0 = vec![
        counts(&[(0, 1)]),
        counts(&[(0, 2)]),
        counts(&[(0, 2)]),
        counts(&[(1, 1)]),
        counts(&[(1, 1)]),
        counts(&[(1, 1)]),
        counts(&[(2, 1), (1, 1)]),
        counts(&[(2, 1), (1, 1)]),
        counts(&[(2, 3)]),
    ];
    let a1 = vec![
        counts(&[(0, 3)]),
        counts(&[(0, 2)]),
        counts(&[(1, 1)]),
        counts(&[(1, 1)]),
        counts(&[(1, 2)]),
        counts(&[(2, 1)]),
        counts(&[]),
        counts(&[(2, 4), (1, 1)]),
    ];
    let a2 = vec![counts(&[(0, 5), (2, 5)]), counts(&[(1, 2)]), counts(&[(1, 3)])];
    let a3 = vec![
        counts(&[(0, 2)]),
        counts(&[(0, 1)]),
        counts(&[(0, 2)]),
        counts(&[]),
        counts(&[(2, 2)]),
        counts(&[(2, 2)]),
        counts(&[(2, 1)]),
        counts(&[(1, 5)]),
    ];

    for (values, expected) in [(&A0, a0), (&A1, a1), (&A2, a2), (&A3, a3)] {
        let t = compute_thresholds(values, 10).unwrap();
        let assignment = assign_points(values, &t);
        assert_eq!(bucket_distribution(&CLASS, &assignment).unwrap(), expected);
    }
}

#[test]
fn test_default_quantiles_cover_every_point() {
    for values in [&A0, &A1, &A2, &A3] {
        let t = compute_thresholds(values, 4).unwrap();
        let assignment = assign_points(values, &t);
        let covered: usize = assignment.buckets().iter().map(Vec::len).sum();
        assert_eq!(covered, 15);
    }
}
