use deviate_analysis::critical::{CriticalValueProvider, GrubbsCritical, JackknifeCritical};
use deviate_analysis::rejection::reject_outliers;
use deviate_analysis::scoring::{run_no_outlier, score_with_rejection};
use proptest::prelude::*;

fn sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3f64..1.0e3, 0..40)
}

fn sample_with_spikes() -> impl Strategy<Value = Vec<f64>> {
    (
        prop::collection::vec(-5.0f64..5.0, 4..30),
        prop::collection::vec(1.0e2f64..1.0e4, 0..3),
    )
        .prop_map(|(mut base, spikes)| {
            base.extend(spikes);
            base
        })
}

/// Shared invariants of any successful rejection run.
fn check_rejection<P: CriticalValueProvider>(
    values: &[f64],
    provider: &P,
) -> Result<(), TestCaseError> {
    match reject_outliers(values, provider) {
        Ok(rejection) => {
            prop_assert!(!rejection.survivors.is_empty());
            prop_assert_eq!(rejection.survivors.len() + rejection.removed.len(), values.len());
            prop_assert!(rejection.removed.len() <= rejection.iterations);
            prop_assert!(rejection.iterations <= rejection.removed.len() + 1);

            let mut seen = rejection.removed.clone();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), rejection.removed.len());
        }
        Err(e) => {
            prop_assert!(
                values.is_empty() || e.is_computation_failure(),
                "unexpected error: {}",
                e
            );
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn jackknife_rejection_invariants(values in sample()) {
        let provider = JackknifeCritical::new(0.95, 3.0).unwrap();
        check_rejection(&values, &provider)?;
    }

    #[test]
    fn grubbs_rejection_invariants(values in sample_with_spikes()) {
        let provider = GrubbsCritical::new(0.05).unwrap();
        check_rejection(&values, &provider)?;
    }

    #[test]
    fn output_length_matches_input(values in sample_with_spikes()) {
        let provider = JackknifeCritical::new(0.95, 3.0).unwrap();
        if let Ok((zscores, _)) = score_with_rejection(&values, &provider) {
            prop_assert_eq!(zscores.len(), values.len());
        }
        if let Ok(zscores) = run_no_outlier(&values) {
            prop_assert_eq!(zscores.len(), values.len());
        }
    }

    #[test]
    fn survivors_converge_immediately(values in sample_with_spikes()) {
        let grubbs = GrubbsCritical::new(0.05).unwrap();
        if let Ok(first) = reject_outliers(&values, &grubbs) {
            let second = reject_outliers(&first.survivors, &grubbs).unwrap();
            prop_assert!(second.is_clean());
        }

        let jackknife = JackknifeCritical::new(0.95, 3.0).unwrap();
        if let Ok(first) = reject_outliers(&values, &jackknife) {
            let second = reject_outliers(&first.survivors, &jackknife).unwrap();
            prop_assert!(second.is_clean());
        }
    }

    #[test]
    fn clean_rejection_agrees_with_baseline(values in sample()) {
        let provider = JackknifeCritical::new(0.95, 3.0).unwrap();
        if let Ok(rejection) = reject_outliers(&values, &provider) {
            if rejection.is_clean() {
                let rejecting = score_with_rejection(&values, &provider).map(|(z, _)| z);
                prop_assert_eq!(rejecting, run_no_outlier(&values));
            }
        }
    }

    #[test]
    fn identical_values_never_score(value in -1.0e6f64..1.0e6, n in 1usize..20) {
        let values = vec![value; n];
        let err = run_no_outlier(&values).unwrap_err();
        prop_assert!(err.is_computation_failure());
    }
}
