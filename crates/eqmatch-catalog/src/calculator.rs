//! Resolve two headphone names and compute their EQ difference.

use eqmatch_core::{Alignment, AlignmentError, EqDifference, EqProfile, difference_with};
use std::fmt;
use thiserror::Error;

use crate::resolver::{ProfileResolver, ResolveError};

/// Which of the two names failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The headphones being corrected.
    Input,
    /// The headphones to imitate.
    Output,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Input => "input",
            Side::Output => "output",
        })
    }
}

/// Why no difference could be produced.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// One of the names has no usable profile.
    #[error("could not resolve {side} headphones '{name}': {source}")]
    Resolution {
        /// Which name failed.
        side: Side,
        /// The name as given.
        name: String,
        /// Resolver failure.
        #[source]
        source: ResolveError,
    },

    /// The output profile has fewer bands than the input.
    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

fn resolve_side<R: ProfileResolver + ?Sized>(
    resolver: &R,
    side: Side,
    name: &str,
) -> Result<EqProfile, CalculationError> {
    resolver.resolve(name).map_err(|source| {
        tracing::warn!(%side, name, error = %source, "failed to resolve EQ profile");
        CalculationError::Resolution {
            side,
            name: name.to_string(),
            source,
        }
    })
}

/// Resolve `input` and `output` and compute `output.gain - input.gain` per band.
///
/// Both names are always resolved, so a failure on each side is logged. The
/// input side's failure is reported first. No partial result is returned.
///
/// # Example
///
/// ```rust
/// use eqmatch_catalog::{MemoryCatalog, calculate_eq_difference};
/// use eqmatch_core::{Alignment, EqBand, EqProfile};
///
/// let catalog = MemoryCatalog::new()
///     .with_profile("Mine", EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 3.0)]))
///     .with_profile("Target", EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 5.5)]));
///
/// let diff = calculate_eq_difference(&catalog, "Mine", "Target", Alignment::Strict).unwrap();
/// assert_eq!(diff[0].gain, 2.5);
/// ```
pub fn calculate_eq_difference<R: ProfileResolver + ?Sized>(
    resolver: &R,
    input: &str,
    output: &str,
    alignment: Alignment,
) -> Result<EqDifference, CalculationError> {
    let input_profile = resolve_side(resolver, Side::Input, input);
    let output_profile = resolve_side(resolver, Side::Output, output);
    let (input_profile, output_profile) = (input_profile?, output_profile?);

    let diff = difference_with(&input_profile, &output_profile, alignment).inspect_err(|e| {
        tracing::warn!(input, output, error = %e, "profiles are not band-aligned");
    })?;

    tracing::debug!(bands = diff.len(), "computed EQ difference");
    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCatalog;
    use eqmatch_core::{BandDelta, EqBand};

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_profile(
                "Mine",
                EqProfile::from_bands(vec![
                    EqBand::peaking(1000.0, 1.0, -2.0),
                    EqBand::peaking(5000.0, 0.5, 1.0),
                ]),
            )
            .with_profile(
                "Short",
                EqProfile::from_bands(vec![EqBand::peaking(1000.0, 1.0, 4.0)]),
            )
    }

    #[test]
    fn test_same_name_is_zero() {
        let diff = calculate_eq_difference(&catalog(), "Mine", "Mine", Alignment::Strict).unwrap();
        assert_eq!(
            diff.to_vec(),
            vec![
                BandDelta { freq: 1000.0, q: 1.0, gain: 0.0 },
                BandDelta { freq: 5000.0, q: 0.5, gain: 0.0 },
            ]
        );
    }

    #[test]
    fn test_missing_output_is_absent() {
        let err = calculate_eq_difference(&catalog(), "Mine", "Nope", Alignment::Strict).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::Resolution { side: Side::Output, ref name, .. } if name == "Nope"
        ));
    }

    #[test]
    fn test_missing_input_with_valid_output_is_absent() {
        let err = calculate_eq_difference(&catalog(), "Nope", "Mine", Alignment::Strict).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::Resolution { side: Side::Input, ref name, .. } if name == "Nope"
        ));
    }

    #[test]
    fn test_missing_input_reported_first() {
        let err = calculate_eq_difference(&catalog(), "Nope", "Gone", Alignment::Strict).unwrap_err();
        assert!(matches!(err, CalculationError::Resolution { side: Side::Input, .. }));
        assert!(err.to_string().starts_with("could not resolve input headphones 'Nope'"));
    }

    #[test]
    fn test_short_output_strict_and_truncate() {
        let err = calculate_eq_difference(&catalog(), "Mine", "Short", Alignment::Strict).unwrap_err();
        assert!(matches!(err, CalculationError::Alignment(_)));

        let diff = calculate_eq_difference(&catalog(), "Mine", "Short", Alignment::Truncate).unwrap();
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].gain, 6.0);
    }
}
