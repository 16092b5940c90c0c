//! eqmatch Core - parametric EQ profiles and the band-by-band difference
//!
//! This crate holds the data model shared by the catalog and the CLI. It does
//! no I/O: profiles come in as values (or as AutoEq `ParametricEQ.txt` text) and
//! differences go out as values.
//!
//! # Core Types
//!
//! - [`EqBand`] - One parametric filter slot (frequency, Q, gain, filter type)
//! - [`EqProfile`] - An ordered band list plus a preamp, as published by AutoEq
//! - [`BandDelta`] / [`EqDifference`] - Per-band gain delta between two profiles
//!
//! # Operations
//!
//! - [`difference`] / [`difference_with`] - Target gain minus input gain, band by band
//! - [`EqProfile::inverted`], [`EqProfile::combine`], [`EqProfile::simulate`] - Profile transforms
//! - [`parse_parametric_eq`] / [`format_parametric_eq`] - AutoEq text codec
//!
//! # Example
//!
//! ```rust
//! use eqmatch_core::{EqBand, EqProfile, difference};
//!
//! let input = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 3.0)]);
//! let target = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 5.5)]);
//!
//! let diff = difference(&input, &target).unwrap();
//! assert_eq!(diff[0].gain, 2.5);
//! assert_eq!(diff[0].freq, 100.0);
//! ```

mod band;
mod difference;
mod profile;

/// AutoEq `ParametricEQ.txt` parsing and formatting.
pub mod parametric;

pub use band::{EqBand, FilterType, UnknownFilterType};
pub use difference::{Alignment, AlignmentError, BandDelta, EqDifference, difference, difference_with};
pub use parametric::{ParseError, ParseErrorKind, format_parametric_eq, parse_parametric_eq};
pub use profile::EqProfile;
