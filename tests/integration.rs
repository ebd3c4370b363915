use std::io::Write;
use std::process::{Command, Stdio};

use regionhue::pipeline::hue::{angular_distance, hue_for_name, SequentialState, GOLDEN_ANGLE};
use regionhue::pipeline::oklab::oklch_to_hex;
use regionhue::pipeline::service::ColorRequest;
use regionhue::{color_for_name, decode_hex, generate_sequence, Color, PaletteService};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn hex_re() -> regex::Regex {
    regex::Regex::new(r"^#[0-9a-f]{6}$").unwrap()
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_regionhue"))
        .args(args)
        .output()
        .expect("failed to run binary")
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn empty_sequence_is_empty() {
    assert!(generate_sequence(0, None).is_empty());
}

#[test]
fn single_seeded_color_matches_hand_computed_value() {
    // seed 0 -> hue 137.508, L 0.72, C 0.12
    assert_eq!(generate_sequence(1, Some(0.0)), ["#7fb66b"]);
    assert_eq!(oklch_to_hex(0.72, 0.12, 137.508).as_deref(), Some("#7fb66b"));
}

#[test]
fn malformed_hex_decodes_to_none() {
    assert_eq!(decode_hex("#ZZZZZZ"), None);
}

#[test]
fn known_hex_decodes_to_bytes() {
    assert_eq!(decode_hex("#1a2b3c"), Some(Color::new(26, 43, 60)));
}

#[test]
fn empty_name_still_gets_a_color() {
    assert_eq!(hue_for_name(""), 0.0);
    assert_eq!(color_for_name("", 0), "#e183a2");
}

#[test]
fn seeded_sequences_repeat() {
    assert_eq!(generate_sequence(50, Some(200.0)), generate_sequence(50, Some(200.0)));
}

#[test]
fn slovakia_hue_reference() {
    assert_eq!(hue_for_name("Slovakia"), 266.37603759765625);
    assert_eq!(color_for_name("Slovakia", 0), "#82a2f0");
}

#[test]
fn parallel_palettes_do_not_share_a_cursor() {
    let service = PaletteService::default();
    let expected = service.generate_sequence(64, Some(90.0));
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| service.generate_sequence(64, Some(90.0))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sequence_has_n_valid_hex_colors(n in 0usize..=300, seed in 0.0f64..360.0) {
            let colors = generate_sequence(n, Some(seed));
            prop_assert_eq!(colors.len(), n);
            let re = hex_re();
            for hex in &colors {
                prop_assert!(re.is_match(hex), "invalid hex: '{}'", hex);
            }
        }

        #[test]
        fn named_colors_are_deterministic(name in ".{0,24}", index in 0usize..1000) {
            let first = color_for_name(&name, index);
            prop_assert_eq!(&first, &color_for_name(&name, index));
            prop_assert!(hex_re().is_match(&first), "invalid hex: '{}'", first);
        }

        #[test]
        fn grayscale_is_never_rejected(l in 0.0f64..=1.0, h in 0.0f64..360.0) {
            prop_assert!(oklch_to_hex(l, 0.0, h).is_some());
        }

        #[test]
        fn consecutive_hues_are_separated(seed in 0.0f64..360.0, steps in 1usize..200) {
            let mut state = SequentialState::new(seed);
            for _ in 0..steps {
                let before = state.last_hue();
                let step = state.advance();
                let single = (before + GOLDEN_ANGLE) % 360.0;
                prop_assert!(
                    angular_distance(step.hue, before) >= 20.0
                        || (step.extra_step
                            && (step.hue - (single + GOLDEN_ANGLE) % 360.0).abs() < 1e-9),
                    "hue {} too close to {}",
                    step.hue,
                    before
                );
            }
        }

        #[test]
        fn sequential_requests_follow_the_walk(seed in 0.0f64..360.0, n in 1usize..50) {
            let service = PaletteService::default();
            let mut state = service.sequential_state(Some(seed));
            let by_request: Vec<Color> = (0..n)
                .map(|index| {
                    service
                        .resolve(ColorRequest::Sequential { index, state: &mut state })
                        .color
                })
                .collect();
            prop_assert_eq!(by_request, service.generate_sequence(n, Some(seed)));
        }

        #[test]
        fn hex_round_trip_normalizes(
            bytes in proptest::array::uniform3(0u8..=255u8),
            upper in any::<bool>(),
            hash in any::<bool>(),
        ) {
            let canonical = format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2]);
            let mut input = canonical[1..].to_string();
            if upper {
                input = input.to_uppercase();
            }
            if hash {
                input.insert(0, '#');
            }
            let decoded = decode_hex(&input).unwrap();
            prop_assert_eq!(decoded.to_hex(), canonical);
        }

        #[test]
        fn decode_never_panics(input in ".*") {
            let _ = decode_hex(&input);
        }
    }
}

// ---------------------------------------------------------------------------
// CLI integration tests (run the actual binary)
// ---------------------------------------------------------------------------

#[test]
fn cli_sequence_prints_one_hex_per_line() {
    let output = run_cli(&["sequence", "6", "--seed", "0"]);
    assert!(output.status.success(), "binary exited with error");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        ["#7fb66b", "#7a88d8", "#b16430", "#1dbcb6", "#b674b5", "#857d10"]
    );
}

#[test]
fn cli_names_from_arguments() {
    let output = run_cli(&["names", "Slovakia", "Czechia", "Austria"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Slovakia\t#82a2f0\nCzechia\t#5ca261\nAustria\t#b65a5f\n"
    );
}

#[test]
fn cli_names_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_regionhue"))
        .arg("names")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Slovakia\n\nCzechia\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.starts_with("Slovakia\t#82a2f0\n"));
}

#[test]
fn cli_sequential_names_use_the_walk() {
    let output = run_cli(&["names", "A", "B", "--sequential", "--seed", "0"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "A\t#7fb66b\nB\t#7a88d8\n");
}

#[test]
fn cli_decode() {
    let output = run_cli(&["decode", "#1A2B3C"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "26 43 60\n");
}

#[test]
fn cli_decode_malformed_fails() {
    let output = run_cli(&["decode", "#ZZZZZZ"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid hex color"),
        "expected hex error, got: {stderr}"
    );
}

#[test]
fn cli_preview_labels_colors() {
    let output = run_cli(&["names", "Slovakia", "--preview"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // #82a2f0 as a 24-bit background
    assert!(stdout.contains("48;2;130;162;240"), "got: {stdout:?}");
    assert!(stdout.contains(" Slovakia "));
}

#[test]
fn cli_help_output() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("regionhue"));
    assert!(stdout.contains("sequence"));
    assert!(stdout.contains("names"));
    assert!(stdout.contains("decode"));
    assert!(stdout.contains("--preview"));
}
