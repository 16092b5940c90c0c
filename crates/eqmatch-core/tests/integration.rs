//! Integration tests for eqmatch-core.
//!
//! End-to-end paths from AutoEq text to a serialized difference.

use eqmatch_core::{
    BandDelta, EqBand, EqProfile, difference, format_parametric_eq, parse_parametric_eq,
};

#[test]
fn single_band_gain_delta() {
    let input = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 3.0)]);
    let output = EqProfile::from_bands(vec![EqBand::peaking(100.0, 0.7, 5.5)]);

    let diff = difference(&input, &output).unwrap();
    assert_eq!(
        diff.to_vec(),
        vec![BandDelta { freq: 100.0, q: 0.7, gain: 2.5 }]
    );
}

#[test]
fn identical_two_band_profiles_cancel() {
    let input = EqProfile::from_bands(vec![
        EqBand::peaking(1000.0, 1.0, -2.0),
        EqBand::peaking(5000.0, 0.5, 1.0),
    ]);
    let output = input.clone();

    let diff = difference(&input, &output).unwrap();
    assert_eq!(
        diff.to_vec(),
        vec![
            BandDelta { freq: 1000.0, q: 1.0, gain: 0.0 },
            BandDelta { freq: 5000.0, q: 0.5, gain: 0.0 },
        ]
    );
}

#[test]
fn difference_from_autoeq_text() {
    let mine = parse_parametric_eq(
        "Preamp: -5.0 dB\n\
         Filter 1: ON LSC Fc 105 Hz Gain 4.0 dB Q 0.70\n\
         Filter 2: ON PK Fc 1000 Hz Gain -1.5 dB Q 1.20\n",
    )
    .unwrap();
    let target = parse_parametric_eq(
        "Preamp: -3.0 dB\n\
         Filter 1: ON LSC Fc 105 Hz Gain 1.0 dB Q 0.70\n\
         Filter 2: ON PK Fc 1000 Hz Gain 0.5 dB Q 1.20\n",
    )
    .unwrap();

    let diff = difference(&mine, &target).unwrap();
    let json = serde_json::to_string(&diff).unwrap();
    assert_eq!(
        json,
        r#"[{"freq":105.0,"q":0.7,"gain":-3.0},{"freq":1000.0,"q":1.2,"gain":2.0}]"#
    );
}

#[test]
fn simulate_round_trips_through_text() {
    let mine = parse_parametric_eq("Preamp: -4.0 dB\nFilter 1: ON PK Fc 200 Hz Gain 3.0 dB Q 1.00\n")
        .unwrap();
    let target = parse_parametric_eq("Preamp: -2.0 dB\nFilter 1: ON PK Fc 200 Hz Gain 1.0 dB Q 0.50\n")
        .unwrap();

    let sim = mine.simulate(&target);
    let text = format_parametric_eq(&sim);
    assert_eq!(text, "Preamp: -6.0 dB\nFilter 1: ON PK Fc 200 Hz Gain 2.0 dB Q 0.75\n");

    let reparsed = parse_parametric_eq(&text).unwrap();
    assert_eq!(reparsed, sim);
}
