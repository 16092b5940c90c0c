//! Band-by-band gain difference between two profiles.
//!
//! The difference maps an "input" headphone onto a "target" headphone: for
//! every input band `i` the result carries the input band's frequency and Q
//! and the gain `target[i].gain - input[i].gain`.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use thiserror::Error;

use crate::profile::EqProfile;

/// How to pair bands when the two profiles have different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// One entry per input band; a target shorter than the input is an error.
    /// Extra trailing target bands are ignored.
    #[default]
    Strict,
    /// Pair bands up to the shorter of the two profiles.
    Truncate,
}

/// The target profile has no band for an input index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignmentError {
    /// Target band `index` is missing.
    #[error(
        "target profile has no band {index} (input has {input_len} bands, target has {output_len})"
    )]
    MissingBand {
        /// First input index without a target band.
        index: usize,
        /// Number of input bands.
        input_len: usize,
        /// Number of target bands.
        output_len: usize,
    },
}

/// One entry of an [`EqDifference`].
///
/// Serializes as `{"freq": .., "q": .., "gain": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandDelta {
    /// Frequency of the input band, in Hz.
    pub freq: f64,
    /// Q of the input band.
    pub q: f64,
    /// Target gain minus input gain, in dB.
    pub gain: f64,
}

/// Ordered per-band gain deltas, one per paired input band.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EqDifference(Vec<BandDelta>);

impl Deref for EqDifference {
    type Target = [BandDelta];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<BandDelta>> for EqDifference {
    fn from(entries: Vec<BandDelta>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a EqDifference {
    type Item = &'a BandDelta;
    type IntoIter = std::slice::Iter<'a, BandDelta>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Compute the difference with [`Alignment::Strict`].
pub fn difference(input: &EqProfile, output: &EqProfile) -> Result<EqDifference, AlignmentError> {
    difference_with(input, output, Alignment::Strict)
}

/// Compute `output.gain - input.gain` for each paired band.
///
/// Frequency and Q pass through from the input side. Order follows the input
/// profile; nothing is sorted or filtered. Preamps are not part of the result.
pub fn difference_with(
    input: &EqProfile,
    output: &EqProfile,
    alignment: Alignment,
) -> Result<EqDifference, AlignmentError> {
    if alignment == Alignment::Strict && output.len() < input.len() {
        return Err(AlignmentError::MissingBand {
            index: output.len(),
            input_len: input.len(),
            output_len: output.len(),
        });
    }

    let entries = input
        .bands
        .iter()
        .zip(&output.bands)
        .map(|(i, o)| BandDelta {
            freq: i.freq,
            q: i.q,
            gain: o.gain - i.gain,
        })
        .collect();

    Ok(EqDifference(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::EqBand;

    #[test]
    fn test_single_band_difference() {
        let input = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 3.0)]);
        let output = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 5.5)]);

        let diff = difference(&input, &output).unwrap();
        assert_eq!(
            diff.to_vec(),
            vec![BandDelta {
                freq: 100.0,
                q: 0.7,
                gain: 2.5
            }]
        );
    }

    #[test]
    fn test_freq_and_q_come_from_input() {
        let input = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 0.0)]);
        let output = EqProfile::from_bands(vec![EqBand::peaking(120.0, 1.4, -1.0)]);

        let diff = difference(&input, &output).unwrap();
        assert_eq!(diff[0].freq, 100.0);
        assert_eq!(diff[0].q, 0.7);
        assert_eq!(diff[0].gain, -1.0);
    }

    #[test]
    fn test_shorter_target_is_rejected_when_strict() {
        let input = EqProfile::from_bands(vec![
            EqBand::peaking(100.0, 0.7, 1.0),
            EqBand::peaking(1000.0, 1.0, 2.0),
            EqBand::peaking(5000.0, 2.0, 3.0),
        ]);
        let output = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 1.0)]);

        let err = difference(&input, &output).unwrap_err();
        assert_eq!(
            err,
            AlignmentError::MissingBand {
                index: 1,
                input_len: 3,
                output_len: 1
            }
        );
        assert!(err.to_string().contains("no band 1"), "got: {err}");
    }

    #[test]
    fn test_shorter_target_is_truncated_on_request() {
        let input = EqProfile::from_bands(vec![
            EqBand::peaking(100.0, 0.7, 1.0),
            EqBand::peaking(1000.0, 1.0, 2.0),
        ]);
        let output = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 4.0)]);

        let diff = difference_with(&input, &output, Alignment::Truncate).unwrap();
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].gain, 3.0);
    }

    #[test]
    fn test_longer_target_extra_bands_ignored() {
        let input = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 1.0)]);
        let output = EqProfile::from_bands(vec![
            EqBand::peaking(100.0, 0.7, 2.0),
            EqBand::peaking(8000.0, 3.0, -9.0),
        ]);

        let diff = difference(&input, &output).unwrap();
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].gain, 1.0);
    }

    #[test]
    fn test_empty_input_yields_empty_difference() {
        let output = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 2.0)]);
        let diff = difference(&EqProfile::new(), &output).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn test_preamp_is_ignored() {
        let input = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 1.0)]).with_preamp(-5.0);
        let output = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 1.0)]).with_preamp(-1.0);
        let diff = difference(&input, &output).unwrap();
        assert_eq!(diff[0].gain, 0.0);
    }

    #[test]
    fn test_difference_json_shape() {
        let diff = EqDifference::from(vec![BandDelta {
            freq: 100.0,
            q: 0.7,
            gain: 2.5,
        }]);
        let json = serde_json::to_string(&diff).unwrap();
        assert_eq!(json, r#"[{"freq":100.0,"q":0.7,"gain":2.5}]"#);
    }

    #[test]
    fn test_alignment_serde_names() {
        assert_eq!(serde_json::to_string(&Alignment::Strict).unwrap(), "\"strict\"");
        let a: Alignment = serde_json::from_str("\"truncate\"").unwrap();
        assert_eq!(a, Alignment::Truncate);
    }
}
