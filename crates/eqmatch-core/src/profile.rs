//! Equalizer profile: ordered bands plus a preamp.

use serde::{Deserialize, Serialize};

use crate::band::EqBand;

/// A headphone's corrective parametric EQ.
///
/// Band order is significant: band `i` of one profile is assumed to describe
/// the same filter slot as band `i` of another profile produced by the same
/// optimizer settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EqProfile {
    /// Global gain applied before the filters, in dB.
    #[serde(default)]
    pub preamp: f64,

    /// Filter bands in application order.
    #[serde(default)]
    pub bands: Vec<EqBand>,
}

impl EqProfile {
    /// Create an empty profile with 0 dB preamp.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile from a band list with 0 dB preamp.
    pub fn from_bands(bands: Vec<EqBand>) -> Self {
        Self { preamp: 0.0, bands }
    }

    /// Set the preamp.
    pub fn with_preamp(mut self, preamp: f64) -> Self {
        self.preamp = preamp;
        self
    }

    /// Append a band.
    pub fn with_band(mut self, band: EqBand) -> Self {
        self.bands.push(band);
        self
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// True when the profile has no bands.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Get a band by index.
    pub fn get(&self, index: usize) -> Option<&EqBand> {
        self.bands.get(index)
    }

    /// Iterate over bands.
    pub fn iter(&self) -> impl Iterator<Item = &EqBand> {
        self.bands.iter()
    }

    /// Negate every band gain.
    ///
    /// Frequency, Q, filter type and preamp are unchanged.
    pub fn inverted(&self) -> Self {
        Self {
            preamp: self.preamp,
            bands: self.bands.iter().map(|b| b.with_gain(-b.gain)).collect(),
        }
    }

    /// Stack two profiles slot by slot.
    ///
    /// Pairs bands up to the shorter length. Frequency and filter type come from
    /// `self`, gains add, Q is the mean of both sides and preamps add.
    pub fn combine(&self, other: &EqProfile) -> Self {
        let bands = self
            .bands
            .iter()
            .zip(&other.bands)
            .map(|(a, b)| EqBand {
                freq: a.freq,
                q: (a.q + b.q) / 2.0,
                gain: a.gain + b.gain,
                filter_type: a.filter_type,
            })
            .collect();

        Self {
            preamp: self.preamp + other.preamp,
            bands,
        }
    }

    /// Correction that makes `self` sound like `target`: `self + (-target)`.
    pub fn simulate(&self, target: &EqProfile) -> Self {
        self.combine(&target.inverted())
    }
}

impl FromIterator<EqBand> for EqProfile {
    fn from_iter<I: IntoIterator<Item = EqBand>>(iter: I) -> Self {
        Self::from_bands(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EqProfile {
    type Item = &'a EqBand;
    type IntoIter = std::slice::Iter<'a, EqBand>;

    fn into_iter(self) -> Self::IntoIter {
        self.bands.iter()
    }
}
