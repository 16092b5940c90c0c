//! Single parametric EQ band.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Filter shape of a parametric band.
///
/// The codes match the ones used in AutoEq result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Peaking (bell) filter, `PK`.
    #[default]
    #[serde(rename = "PK")]
    Peaking,
    /// Low shelf, `LSC`.
    #[serde(rename = "LSC")]
    LowShelf,
    /// High shelf, `HSC`.
    #[serde(rename = "HSC")]
    HighShelf,
}

impl FilterType {
    /// Short code written to `ParametricEQ.txt` files.
    pub fn code(self) -> &'static str {
        match self {
            FilterType::Peaking => "PK",
            FilterType::LowShelf => "LSC",
            FilterType::HighShelf => "HSC",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a filter code is not one of `PK`, `LSC`, `HSC` (or the
/// `LS`/`HS` aliases).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter type '{0}'")]
pub struct UnknownFilterType(pub String);

impl FromStr for FilterType {
    type Err = UnknownFilterType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PK" | "PEQ" => Ok(FilterType::Peaking),
            "LSC" | "LS" => Ok(FilterType::LowShelf),
            "HSC" | "HS" => Ok(FilterType::HighShelf),
            _ => Err(UnknownFilterType(s.to_string())),
        }
    }
}

/// One parametric-equalizer band.
///
/// `freq` is the center (or corner, for shelves) frequency in Hz, `q` the
/// quality factor and `gain` the boost or cut in dB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EqBand {
    /// Frequency in Hz.
    pub freq: f64,
    /// Quality factor (bandwidth).
    pub q: f64,
    /// Gain in dB.
    pub gain: f64,
    /// Filter shape.
    #[serde(default, rename = "type")]
    pub filter_type: FilterType,
}

impl EqBand {
    /// Create a band with an explicit filter shape.
    pub fn new(filter_type: FilterType, freq: f64, q: f64, gain: f64) -> Self {
        Self {
            freq,
            q,
            gain,
            filter_type,
        }
    }

    /// Create a peaking band.
    pub fn peaking(freq: f64, q: f64, gain: f64) -> Self {
        Self::new(FilterType::Peaking, freq, q, gain)
    }

    /// Return a copy with the gain replaced.
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }
}
