use hino_analysis::distribution::{bucket_distribution, count_labels};
use hino_analysis::isolation::IsolationScorer;
use hino_analysis::outliers::{classify, revise_limit};
use hino_analysis::quantile::{assign_points, compute_thresholds};
use hino_analysis::{Dataset, HinoModel};
use proptest::prelude::*;

fn arb_values(n: usize) -> impl Strategy<Value = Vec<f64>> {
    // A small value grid produces plenty of ties.
    prop::collection::vec(prop_oneof![(-50i32..50).prop_map(|v| v as f64 / 4.0), -1e3f64..1e3], n)
}

fn arb_dataset() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<u8>)> {
    (1usize..40, 1usize..5).prop_flat_map(|(n_points, n_attributes)| {
        (
            prop::collection::vec(arb_values(n_points), n_attributes),
            prop::collection::vec(0u8..4, n_points),
        )
    })
}

// ── Thresholds ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn thresholds_strictly_increase_and_end_at_max(
        values in (1usize..60).prop_flat_map(arb_values),
        n_quantiles in 2usize..20,
    ) {
        let t = compute_thresholds(&values, n_quantiles).unwrap();
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);

        prop_assert!(t.values().len() >= 2);
        prop_assert!(t.n_buckets() <= n_quantiles);
        prop_assert_eq!(t.max(), max);
        prop_assert_eq!(t.min(), min);
        if min < max {
            prop_assert!(t.values().windows(2).all(|w| w[0] < w[1]));
        }
    }
}

// ── Bucket coverage ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_point_lands_in_exactly_one_bucket(
        values in (1usize..60).prop_flat_map(arb_values),
        n_quantiles in 2usize..20,
    ) {
        let t = compute_thresholds(&values, n_quantiles).unwrap();
        let assignment = assign_points(&values, &t);

        let mut seen = vec![0usize; values.len()];
        for bucket in assignment.buckets() {
            for &row in bucket {
                seen[row] += 1;
            }
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
    }
}

// ── Exemption ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn label_confined_to_one_bucket_is_never_penalized(
        (contextual, behavior) in arb_dataset(),
        n_quantiles in 2usize..10,
    ) {
        let global = count_labels(&behavior);
        let scorer = IsolationScorer::new(&behavior, &global);

        for values in &contextual {
            let t = compute_thresholds(values, n_quantiles).unwrap();
            let assignment = assign_points(values, &t);
            let distribution = bucket_distribution(&behavior, &assignment).unwrap();
            let isolation = scorer.score(&assignment, &distribution).unwrap();

            for (bucket, counts) in assignment.buckets().iter().zip(&distribution) {
                for &row in bucket {
                    let label = &behavior[row];
                    if counts.get(label) == global.get(label) {
                        prop_assert_eq!(isolation[row], 0);
                    }
                }
            }
        }
    }
}

// ── Classification ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn raising_the_limit_never_adds_outliers(
        isolation in prop::collection::vec(0usize..8, 0..50),
        low in 0usize..8,
        step in 0usize..8,
    ) {
        let strict = classify(&isolation, low);
        let lenient = classify(&isolation, low + step);
        for (s, l) in strict.iter().zip(&lenient) {
            prop_assert!(l <= s);
        }
    }

    #[test]
    fn revised_limit_respects_the_fraction(
        isolation in prop::collection::vec(0usize..8, 1..50),
        max_fraction in 0.01f64..0.99,
    ) {
        let limit = revise_limit(&isolation, Some(max_fraction)).unwrap();
        let outliers = classify(&isolation, limit);
        let flagged = outliers.iter().filter(|&&o| o == 1).count();
        prop_assert!(flagged as f64 / isolation.len() as f64 <= max_fraction);
    }
}

// ── End to end ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fit_returns_one_flag_per_point(
        (contextual, behavior) in arb_dataset(),
        n_quantiles in 2i64..12,
        max_fraction in prop::option::of(0.05f64..0.95),
    ) {
        let n_points = behavior.len();
        let mut model = HinoModel::new(Dataset::new(contextual, behavior).unwrap());
        model.set_n_quantiles(n_quantiles).unwrap();
        if let Some(fraction) = max_fraction {
            model.set_max_outlier_fraction(fraction).unwrap();
        }

        let outliers = model.fit().unwrap();
        prop_assert_eq!(outliers.len(), n_points);
        prop_assert!(outliers.iter().all(|&o| o <= 1));
    }

    #[test]
    fn sequential_and_parallel_runs_agree(
        (contextual, behavior) in arb_dataset(),
        n_quantiles in 2i64..12,
    ) {
        let mut model = HinoModel::new(Dataset::new(contextual, behavior).unwrap());
        model.set_n_quantiles(n_quantiles).unwrap();
        let parallel = model.isolation_scores().unwrap();
        model.set_parallel(false);
        prop_assert_eq!(model.isolation_scores().unwrap(), parallel);
    }
}
