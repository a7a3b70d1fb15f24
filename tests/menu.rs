use std::io::Cursor;

use fourier_demo::{
    Config, SimConfig,
    cli::menu::{INVALID, run_menu},
};

fn run(input: &str) -> String {
    let cfg = Config::builder().dims(40, 9).build().unwrap();
    let mut out = Vec::new();
    run_menu(
        Cursor::new(input.as_bytes().to_vec()),
        &mut out,
        &SimConfig::default(),
        &cfg,
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn quit_immediately_prints_menu_once() {
    let out = run("q\n");
    assert_eq!(out.matches("Fourier Transform Demo").count(), 1);
    assert!(out.contains("1. Sine Wave\n2. Square Wave\n3. Sawtooth Wave\nq. Quit\n"));
    assert!(out.ends_with("Select waveform: "));
}

#[test]
fn invalid_selection_reprompts() {
    let out = run("7\n  Q  \n");
    assert_eq!(out.matches(INVALID).count(), 1);
    assert_eq!(out.matches("Select waveform: ").count(), 2);
    assert!(!out.contains("==="));
}

#[test]
fn each_selection_draws_two_charts() {
    let out = run("1\n2\n3\nq\n");
    for name in ["Sine Wave", "Square Wave", "Sawtooth Wave"] {
        assert!(out.contains(&format!("=== Time Domain - {name} ===")), "{name}");
        assert!(
            out.contains(&format!("=== Frequency Domain - {name} (magnitude) ===")),
            "{name}"
        );
    }
    assert_eq!(out.matches(&format!("+{}", "-".repeat(40))).count(), 6);
    assert_eq!(out.matches("Select waveform: ").count(), 4);
}

#[test]
fn end_of_input_leaves_the_loop() {
    let out = run("2\n");
    assert!(out.contains("Square Wave (magnitude)"));
    assert_eq!(out.matches("Select waveform: ").count(), 2);
}

#[test]
fn sine_time_chart_spans_unit_amplitude() {
    let out = run("1\nq\n");
    let time_chart: Vec<&str> = out
        .lines()
        .skip_while(|l| !l.contains("Time Domain"))
        .skip(2)
        .take(9)
        .collect();
    assert!(time_chart[0].starts_with("   1.00 |"), "{:?}", time_chart[0]);
    // midpoint of a symmetric signal may print as -0.00
    let mid = time_chart[4].trim_start().trim_start_matches('-');
    assert!(mid.starts_with("0.00 |"), "{:?}", time_chart[4]);
    assert!(time_chart[8].starts_with("  -1.00 |"), "{:?}", time_chart[8]);
    for row in &time_chart {
        assert_eq!(row.chars().count(), 7 + 2 + 40);
    }
}
