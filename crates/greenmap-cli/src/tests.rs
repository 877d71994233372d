use clap::Parser;

use super::*;

#[test]
fn parses_search_command() {
    let cli = Cli::try_parse_from(["greenmap-cli", "search", "jardim da estrela"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Search { ref query } if query == "jardim da estrela"));
}

#[test]
fn parses_score_with_negative_longitude() {
    let cli = Cli::try_parse_from([
        "greenmap-cli", "score", "--lat", "38.7369", "--lon", "-9.1427", "--buffer", "750",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Commands::Score { point, buffer } => {
            assert!((point.lat - 38.7369).abs() < f64::EPSILON);
            assert!((point.lon + 9.1427).abs() < f64::EPSILON);
            assert_eq!(buffer, Some(750.0));
        }
        other => panic!("expected Score, got {other:?}"),
    }
}

#[test]
fn feedback_requires_a_choice() {
    let result = Cli::try_parse_from(["greenmap-cli", "feedback", "--lat", "1", "--lon", "2"]);
    assert!(result.is_err());
}

#[test]
fn feedback_rejects_both_choices() {
    let result = Cli::try_parse_from([
        "greenmap-cli", "feedback", "--lat", "1", "--lon", "2", "--like", "--dislike",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_feedback_dislike() {
    let cli = Cli::try_parse_from([
        "greenmap-cli", "feedback", "--lat", "1", "--lon", "2", "--dislike",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Feedback {
            like: false,
            dislike: true,
            ..
        }
    ));
}

#[test]
fn center_defaults_viewport() {
    let cli = Cli::try_parse_from(["greenmap-cli", "center", "--lat", "38.7", "--lon", "-9.1"])
        .expect("expected valid cli args");
    match cli.command {
        Commands::Center {
            zoom,
            width,
            height,
            ..
        } => {
            assert!(zoom.is_none());
            assert!((width - 1280.0).abs() < f64::EPSILON);
            assert!((height - 720.0).abs() < f64::EPSILON);
        }
        other => panic!("expected Center, got {other:?}"),
    }
}

#[test]
fn non_finite_coordinates_are_rejected() {
    for (lat, lon) in [("NaN", "-9.1"), ("38.7", "inf"), ("-inf", "0")] {
        let result = Cli::try_parse_from(["greenmap-cli", "score", "--lat", lat, "--lon", lon]);
        assert!(result.is_err(), "expected {lat},{lon} to be rejected");
    }
}

#[test]
fn non_finite_zoom_is_rejected() {
    let result = Cli::try_parse_from([
        "greenmap-cli", "center", "--lat", "38.7", "--lon", "-9.1", "--zoom", "NaN",
    ]);
    assert!(result.is_err());
}

#[test]
fn finite_f64_trims_and_parses() {
    assert_eq!(finite_f64(" 38.5 "), Ok(38.5));
    assert!(finite_f64("north").is_err());
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["greenmap-cli"]).is_err());
}
