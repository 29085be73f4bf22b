//! Residuals and standardized deviates.

/// Absolute distance of `value` from `mean`.
#[inline]
pub fn abs_residual(value: f64, mean: f64) -> f64 {
    (value - mean).abs()
}

/// Standardized deviate `(value - mean) / std_dev`.
///
/// Does not guard against `std_dev == 0`; callers check spread first.
#[inline]
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    (value - mean) / std_dev
}

/// Largest absolute residual from `mean` and its position.
///
/// Scans left to right with a strict comparison, so among equal residuals
/// the first occurrence wins. Returns `None` for an empty slice.
pub fn max_abs_residual(values: &[f64], mean: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        let r = abs_residual(v, mean);
        match best {
            Some((_, max)) if r <= max => {}
            _ => best = Some((i, r)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_residual_symmetric() {
        assert_eq!(abs_residual(3.0, 5.0), 2.0);
        assert_eq!(abs_residual(7.0, 5.0), 2.0);
    }

    #[test]
    fn test_z_score_sign() {
        assert_eq!(z_score(12.0, 10.0, 2.0), 1.0);
        assert_eq!(z_score(8.0, 10.0, 2.0), -1.0);
    }

    #[test]
    fn test_max_residual_first_occurrence_wins() {
        // 0 and 10 are equally far from 5; the earlier one is reported.
        let values = [5.0, 0.0, 10.0, 5.0];
        assert_eq!(max_abs_residual(&values, 5.0), Some((1, 5.0)));

        let mirrored = [5.0, 10.0, 0.0, 5.0];
        assert_eq!(max_abs_residual(&mirrored, 5.0), Some((1, 5.0)));
    }

    #[test]
    fn test_max_residual_empty() {
        assert_eq!(max_abs_residual(&[], 0.0), None);
    }

    #[test]
    fn test_max_residual_all_equal_picks_index_zero() {
        assert_eq!(max_abs_residual(&[2.0, 2.0, 2.0], 2.0), Some((0, 0.0)));
    }
}
