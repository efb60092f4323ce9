//! Integration tests for CLI argument handling
//!
//! Drives the compiled binary for flag parsing; validation logic is covered
//! through the library crate without starting the TUI.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_jobdeck"))
        .args(args)
        .output()
        .expect("Failed to execute jobdeck")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("jobdeck"), "Help should mention jobdeck");
    assert!(
        stdout.contains("window-mins"),
        "Help should mention --window-mins"
    );
    assert!(stdout.contains("limit"), "Help should mention --limit");
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("jobdeck"));
}

#[test]
fn test_non_numeric_limit_is_rejected_by_clap() {
    let output = run_cli(&["--limit", "lots"]);
    assert!(!output.status.success(), "Expected a parse error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("limit") || stderr.contains("invalid"),
        "Should complain about the limit value: {}",
        stderr
    );
}

#[test]
fn test_zero_limit_is_rejected_before_the_tui_starts() {
    let output = run_cli(&["--limit", "0"]);
    assert!(
        !output.status.success(),
        "A zero call limit must fail validation"
    );
}

#[test]
fn test_out_of_range_threshold_is_rejected() {
    let output = run_cli(&["--warn-threshold", "2.0"]);
    assert!(!output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Validation tests that don't require running the binary

    use clap::Parser;
    use jobdeck::cli::{Cli, StartupConfig};

    #[test]
    fn test_cli_no_args_uses_defaults() {
        let cli = Cli::parse_from(["jobdeck"]);
        assert!(cli.window_mins.is_none());
        assert!(cli.limit.is_none());
        assert!(cli.warn_threshold.is_none());
        assert!(cli.country.is_none());
        assert!(cli.results.is_none());
    }

    #[test]
    fn test_cli_all_flags_parse() {
        let cli = Cli::parse_from([
            "jobdeck",
            "--window-mins",
            "15",
            "--limit",
            "250",
            "--warn-threshold",
            "0.8",
            "--country",
            "gb",
            "--results",
            "25",
        ]);

        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.feed.freshness_window, chrono::Duration::minutes(15));
        assert_eq!(config.feed.monthly_call_limit, 250);
        assert_eq!(config.query.country, "gb");
        assert_eq!(config.query.results_per_page, 25);
    }

    #[test]
    fn test_warn_margin_follows_flags() {
        let cli = Cli::parse_from(["jobdeck", "--limit", "100", "--warn-threshold", "0.9"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.feed.warn_margin(), 10);
    }
}
