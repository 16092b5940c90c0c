//! AutoEq `ParametricEQ.txt` format.
//!
//! ```text
//! Preamp: -6.4 dB
//! Filter 1: ON LSC Fc 105 Hz Gain 6.5 dB Q 0.70
//! Filter 2: ON PK Fc 143 Hz Gain -3.1 dB Q 0.42
//! ```
//!
//! Blank lines and `#` comments are skipped, as are filters switched `OFF`.

use std::fmt;
use thiserror::Error;

use crate::band::{EqBand, FilterType};
use crate::profile::EqProfile;

/// What went wrong on a line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// Line is neither a preamp, a filter, a comment nor blank.
    #[error("unrecognized line '{0}'")]
    UnexpectedLine(String),

    /// A numeric field did not parse.
    #[error("invalid {field} value '{value}'")]
    InvalidNumber {
        /// Field name (`Preamp`, `Fc`, `Gain` or `Q`).
        field: &'static str,
        /// Offending token.
        value: String,
    },

    /// A required filter field is absent.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// Frequency or Q is zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Field name.
        field: &'static str,
        /// Parsed value.
        value: f64,
    },

    /// Filter code not supported.
    #[error(transparent)]
    UnknownFilterType(#[from] crate::band::UnknownFilterType),
}

/// Parse failure with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    /// Failure detail.
    pub kind: ParseErrorKind,
}

/// Parse the contents of a `ParametricEQ.txt` file.
///
/// The last `Preamp:` line wins. A file without a preamp line gets 0 dB.
pub fn parse_parametric_eq(text: &str) -> Result<EqProfile, ParseError> {
    let mut profile = EqProfile::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let at = |kind: ParseErrorKind| ParseError { line: idx + 1, kind };

        if let Some(rest) = line.strip_prefix("Preamp:") {
            profile.preamp = parse_preamp(rest).map_err(at)?;
        } else if line.starts_with("Filter") {
            if let Some(band) = parse_filter(line).map_err(at)? {
                profile.bands.push(band);
            }
        } else {
            return Err(at(ParseErrorKind::UnexpectedLine(line.to_string())));
        }
    }

    Ok(profile)
}

fn parse_preamp(rest: &str) -> Result<f64, ParseErrorKind> {
    let value = rest.trim().trim_end_matches("dB").trim();
    parse_number("Preamp", value)
}

/// Returns `Ok(None)` for a filter that is switched off.
fn parse_filter(line: &str) -> Result<Option<EqBand>, ParseErrorKind> {
    let Some((_, body)) = line.split_once(':') else {
        return Err(ParseErrorKind::UnexpectedLine(line.to_string()));
    };

    let mut tokens = body.split_whitespace();
    match tokens.next() {
        Some("ON") => {}
        Some("OFF") => return Ok(None),
        _ => return Err(ParseErrorKind::UnexpectedLine(line.to_string())),
    }

    let filter_type: FilterType = tokens
        .next()
        .ok_or(ParseErrorKind::MissingField("type"))?
        .parse()?;

    let mut freq = None;
    let mut gain = None;
    let mut q = None;

    while let Some(token) = tokens.next() {
        let (field, slot) = match token {
            "Fc" => ("Fc", &mut freq),
            "Gain" => ("Gain", &mut gain),
            "Q" => ("Q", &mut q),
            // units
            _ => continue,
        };
        let value = tokens.next().ok_or(ParseErrorKind::MissingField(field))?;
        *slot = Some(parse_number(field, value)?);
    }

    let freq = freq.ok_or(ParseErrorKind::MissingField("Fc"))?;
    let gain = gain.ok_or(ParseErrorKind::MissingField("Gain"))?;
    let q = q.ok_or(ParseErrorKind::MissingField("Q"))?;

    if freq <= 0.0 {
        return Err(ParseErrorKind::NonPositive { field: "Fc", value: freq });
    }
    if q <= 0.0 {
        return Err(ParseErrorKind::NonPositive { field: "Q", value: q });
    }

    Ok(Some(EqBand::new(filter_type, freq, q, gain)))
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, ParseErrorKind> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseErrorKind::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Render a profile in `ParametricEQ.txt` format.
///
/// Gains print with one decimal and Q with two, as AutoEq writes them.
pub fn format_parametric_eq(profile: &EqProfile) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_parametric_eq(&mut out, profile);
    out
}

fn write_parametric_eq(out: &mut impl fmt::Write, profile: &EqProfile) -> fmt::Result {
    writeln!(out, "Preamp: {:.1} dB", profile.preamp)?;
    for (i, band) in profile.iter().enumerate() {
        let freq = if band.freq.fract() == 0.0 {
            format!("{:.0}", band.freq)
        } else {
            format!("{}", band.freq)
        };
        writeln!(
            out,
            "Filter {}: ON {} Fc {} Hz Gain {:.1} dB Q {:.2}",
            i + 1,
            band.filter_type,
            freq,
            band.gain,
            band.q
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Preamp: -6.4 dB
Filter 1: ON LSC Fc 105 Hz Gain 6.5 dB Q 0.70
Filter 2: ON PK Fc 143 Hz Gain -3.1 dB Q 0.42
Filter 3: ON HSC Fc 10000 Hz Gain -2.0 dB Q 0.70
";

    #[test]
    fn test_parse_sample() {
        let profile = parse_parametric_eq(SAMPLE).unwrap();
        assert_eq!(profile.preamp, -6.4);
        assert_eq!(profile.len(), 3);

        assert_eq!(profile.bands[0], EqBand::new(FilterType::LowShelf, 105.0, 0.70, 6.5));
        assert_eq!(profile.bands[1], EqBand::peaking(143.0, 0.42, -3.1));
        assert_eq!(profile.bands[2].filter_type, FilterType::HighShelf);
    }

    #[test]
    fn test_parse_skips_comments_blank_and_off() {
        let text = "# generated\n\nPreamp: -1 dB\nFilter 1: OFF PK Fc 100 Hz Gain 1 dB Q 1\nFilter 2: ON PK Fc 200 Hz Gain 2 dB Q 1\n";
        let profile = parse_parametric_eq(text).unwrap();
        assert_eq!(profile.preamp, -1.0);
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.bands[0].freq, 200.0);
    }

    #[test]
    fn test_parse_without_preamp() {
        let profile = parse_parametric_eq("Filter 1: ON PK Fc 50 Hz Gain 1.5 dB Q 2.0").unwrap();
        assert_eq!(profile.preamp, 0.0);
        assert_eq!(profile.bands[0].gain, 1.5);
    }

    #[test]
    fn test_parse_rejects_unknown_line() {
        let err = parse_parametric_eq("Preamp: 0 dB\nhello world\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedLine(_)));
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        let err = parse_parametric_eq("Filter 1: ON PK Fc abc Hz Gain 1 dB Q 1").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidNumber {
                field: "Fc",
                value: "abc".to_string()
            }
        );
        assert_eq!(err.to_string(), "line 1: invalid Fc value 'abc'");
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let err = parse_parametric_eq("Filter 1: ON LPQ Fc 100 Hz Q 0.7").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnknownFilterType(_)));
    }

    #[test]
    fn test_parse_rejects_missing_q() {
        let err = parse_parametric_eq("Filter 1: ON PK Fc 100 Hz Gain 2 dB").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingField("Q"));
    }

    #[test]
    fn test_parse_rejects_missing_gain() {
        let err = parse_parametric_eq("Preamp: -3 dB\nFilter 1: ON PK Fc 100 Hz Q 0.7").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.kind, ParseErrorKind::MissingField("Gain"));
    }

    #[test]
    fn test_parse_rejects_non_positive_q() {
        let err = parse_parametric_eq("Filter 1: ON PK Fc 100 Hz Gain 2 dB Q 0").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NonPositive { field: "Q", value: 0.0 });
    }

    #[test]
    fn test_format_matches_autoeq_layout() {
        let profile = parse_parametric_eq(SAMPLE).unwrap();
        let text = format_parametric_eq(&profile);
        assert_eq!(text, SAMPLE);
    }

    #[test]
    fn test_format_fractional_frequency() {
        let profile = EqProfile::from_bands(vec![EqBand::peaking(62.5, 1.0, 0.0)]);
        let text = format_parametric_eq(&profile);
        assert!(text.contains("Fc 62.5 Hz"), "got: {text}");
        assert!(text.starts_with("Preamp: 0.0 dB\n"));
    }
}
