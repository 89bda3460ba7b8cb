// Host-side tests for argument parsing and text output.
// The binary has no library target, so we include its modules directly.

#![allow(dead_code)]
mod cli {
    include!("../src/cli.rs");
}
mod output {
    include!("../src/output.rs");
}

use clap::Parser;
use cli::Args;
use lens_core::*;

fn parse(args: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("fireworks-lens").chain(args.iter().copied()))
}

#[test]
fn defaults_match_the_calculator() {
    let args = parse(&[]).unwrap();
    assert_eq!(args.params(), ShootingParameters::default());
    assert_eq!(args.profile(), FireworkProfile::default());
    assert_eq!(args.model, BurstModel::Simple);
    assert!(!args.json && !args.table);
}

#[test]
fn freeform_profile_from_flags() {
    let args = parse(&["--launch-height", "300", "--spread-shaku", "2", "--model", "banded"]).unwrap();
    assert_eq!(
        args.profile(),
        FireworkProfile::Freeform {
            launch_height_m: 300.0,
            spread_shaku: 2.0,
        }
    );
    assert_eq!(args.model, BurstModel::Banded);
}

#[test]
fn shell_accepts_number_with_suffix() {
    let args = parse(&["--shell", "30号", "--sensor", "aps-c"]).unwrap();
    assert_eq!(args.profile(), FireworkProfile::Preset(ShellSize::by_number(30).unwrap()));
    assert_eq!(args.sensor, SensorFormat::ApsC);
}

#[test]
fn degenerate_values_are_rejected() {
    assert!(parse(&["--distance", "0"]).is_err());
    assert!(parse(&["--distance", "-20"]).is_err());
    assert!(parse(&["--distance", "far"]).is_err());
    assert!(parse(&["--ground-ratio", "100"]).is_err());
    assert!(parse(&["--ground-ratio", "-5"]).is_err());
    assert!(parse(&["--spread-shaku", "-1", "--launch-height", "200"]).is_err());
    assert!(parse(&["--shell", "7"]).is_err());
    assert!(parse(&["--sensor", "medium-format"]).is_err());
    assert!(parse(&["--shell", "10", "--launch-height", "300"]).is_err());
}

#[test]
fn spread_needs_a_launch_height() {
    assert!(parse(&["--spread-shaku", "2"]).is_err());
    assert!(parse(&["--shell", "10", "--spread-shaku", "2"]).is_err());
    assert!(parse(&["--launch-height", "250", "--spread-shaku", "2"]).is_ok());
}

#[test]
fn report_mentions_lens_and_split() {
    let args = parse(&["-d", "500", "-g", "30", "--launch-height", "300"]).unwrap();
    let calc = Calculator::new(args.params(), args.profile(), args.model);
    let text = output::format_report(&calc);
    assert!(text.contains("Recommended lens : 27 mm"), "{text}");
    assert!(text.contains("Sky / ground     : 70% / 30%"), "{text}");
    assert!(!text.contains("Note"), "{text}");
}

#[test]
fn report_notes_clamped_framing() {
    let args = parse(&["-d", "50", "--launch-height", "1000"]).unwrap();
    let calc = Calculator::new(args.params(), args.profile(), args.model);
    let text = output::format_report(&calc);
    assert!(text.contains("Recommended lens : 1 mm"), "{text}");
    assert!(text.contains("Note"), "{text}");
}

#[test]
fn report_notes_capped_lens() {
    let args = parse(&["-d", "1e308"]).unwrap();
    let calc = Calculator::new(args.params(), args.profile(), args.model);
    let text = output::format_report(&calc);
    assert!(text.contains(&format!("Recommended lens : {MAX_FOCAL_LENGTH_MM} mm")), "{text}");
    assert!(text.contains("longest lens"), "{text}");
}

#[test]
fn table_has_a_row_per_shell() {
    let table = output::format_table(800.0, 30.0, BurstModel::Simple);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 2 + SHELL_SIZES.len());
    assert!(lines[1].contains("full") && lines[1].contains("m43"));
    for (line, shell) in lines[2..].iter().zip(SHELL_SIZES) {
        assert!(line.starts_with(shell.name), "{line}");
        assert_eq!(line.matches("mm").count(), SensorFormat::ALL.len());
    }
}

#[test]
fn json_report_serializes() {
    let calc = Calculator::default();
    let json = serde_json::to_value(calc.report()).unwrap();
    assert_eq!(
        json["result"]["focal_length_mm"].as_u64(),
        Some(calc.result().focal_length_mm as u64)
    );
    assert_eq!(json["params"]["sensor"], "full-frame");
    assert_eq!(json["profile"]["kind"], "preset");
    assert_eq!(json["model"], "simple");
}
