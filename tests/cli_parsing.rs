//! Tests for CLI subcommand parsing.

use clap::Parser;
use mail_provider::config::{Cli, Command};
use mail_provider::ExportFormat;
use std::path::PathBuf;

#[test]
fn test_check_defaults() {
    let cli = Cli::try_parse_from(["mail_provider", "check", "example.it"]).expect("parses");
    match &cli.command {
        Command::Check(cmd) => {
            assert_eq!(cmd.domain, "example.it");
            assert!(cmd.institution.is_none());
            assert!(cmd.entity.is_none());
            assert_eq!(cmd.format, ExportFormat::Text);
        }
        other => panic!("expected check, got {other:?}"),
    }

    let config = cli.config();
    assert_eq!(config.dns_timeout_secs, 5);
    assert_eq!(config.dns_attempts, 2);
    assert_eq!(config.spf_filter, "SPF");
    assert_eq!(config.dmarc_filter, "TXT");
    assert_eq!(config.format, ExportFormat::Text);
    assert!(config.output.is_none());
}

#[test]
fn test_check_with_metadata() {
    let cli = Cli::try_parse_from([
        "mail_provider",
        "check",
        "@Example.IT",
        "--institution",
        "Comune di Prova",
        "--entity",
        "Comune",
        "--format",
        "json",
    ])
    .expect("parses");
    let Command::Check(cmd) = &cli.command else {
        panic!("expected check");
    };
    assert_eq!(cmd.domain, "@Example.IT");
    assert_eq!(cmd.institution.as_deref(), Some("Comune di Prova"));
    assert_eq!(cmd.entity.as_deref(), Some("Comune"));
    assert_eq!(cli.config().format, ExportFormat::Json);
}

#[test]
fn test_batch_options() {
    let cli = Cli::try_parse_from([
        "mail_provider",
        "batch",
        "domains.csv",
        "--exclude-dns-errors",
        "--format",
        "json",
        "--output",
        "out.json",
        "--max-concurrency",
        "25",
    ])
    .expect("parses");
    let Command::Batch(cmd) = &cli.command else {
        panic!("expected batch");
    };
    assert_eq!(cmd.file, PathBuf::from("domains.csv"));

    let config = cli.config();
    assert!(!config.include_failures);
    assert_eq!(config.format, ExportFormat::Json);
    assert_eq!(config.output, Some(PathBuf::from("out.json")));
    assert_eq!(config.max_concurrency, 25);
}

#[test]
fn test_batch_defaults_include_failures() {
    let cli = Cli::try_parse_from(["mail_provider", "batch", "domains.csv"]).expect("parses");
    let config = cli.config();
    assert!(config.include_failures);
    assert_eq!(config.format, ExportFormat::Csv);
    assert_eq!(config.max_concurrency, 10);
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from([
        "mail_provider",
        "batch",
        "domains.csv",
        "--dns-timeout-secs",
        "2",
        "--dns-attempts",
        "3",
        "--dmarc-filter",
        "",
        "--catalog",
        "catalog.json",
        "--log-level",
        "debug",
    ])
    .expect("parses");
    let config = cli.config();
    assert_eq!(config.dns_timeout_secs, 2);
    assert_eq!(config.dns_attempts, 3);
    assert_eq!(config.dmarc_filter, "");
    assert_eq!(config.catalog, Some(PathBuf::from("catalog.json")));
    assert_eq!(log::LevelFilter::from(config.log_level), log::LevelFilter::Debug);
}

#[test]
fn test_binary_formats_accepted() {
    for (value, expected) in [("excel", ExportFormat::Excel), ("pdf", ExportFormat::Pdf)] {
        let cli = Cli::try_parse_from(["mail_provider", "batch", "f.csv", "--format", value])
            .expect("parses");
        assert_eq!(cli.config().format, expected);
    }
}

#[test]
fn test_invalid_format_rejected() {
    assert!(Cli::try_parse_from(["mail_provider", "batch", "f.csv", "--format", "xlsx"]).is_err());
}

#[test]
fn test_missing_subcommand_rejected() {
    assert!(Cli::try_parse_from(["mail_provider"]).is_err());
}

#[test]
fn test_check_requires_domain() {
    assert!(Cli::try_parse_from(["mail_provider", "check"]).is_err());
}
