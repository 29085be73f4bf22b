//! Fallible allocation for working buffers.

use deviate_core::errors::ScoringError;

/// Allocate an empty vector with room for `capacity` elements, reporting
/// allocator failure as an error instead of aborting the process.
pub(crate) fn try_with_capacity<T>(capacity: usize) -> Result<Vec<T>, ScoringError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| ScoringError::AllocationFailed {
            requested: capacity,
        })?;
    Ok(buf)
}

/// Copy `values` into a freshly allocated buffer.
pub(crate) fn try_copy(values: &[f64]) -> Result<Vec<f64>, ScoringError> {
    let mut buf = try_with_capacity(values.len())?;
    buf.extend_from_slice(values);
    Ok(buf)
}
