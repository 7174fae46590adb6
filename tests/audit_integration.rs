//! End-to-end tests: CSV in, lookups through in-memory resolvers, CSV out.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use dnssec_audit::dns::{DnssecAnswer, DnssecLookup, SecurityStatus, TxtLookup};
use dnssec_audit::{run_audit, run_audit_with, Config};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{event_row, write_events};

#[derive(Default)]
struct TableDnssec {
    answers: HashMap<&'static str, DnssecAnswer>,
}

impl DnssecLookup for TableDnssec {
    async fn lookup_a(&self, domain: &str) -> Result<DnssecAnswer> {
        self.answers
            .get(domain)
            .cloned()
            .ok_or_else(|| anyhow!("request timed out"))
    }
}

#[derive(Default)]
struct TableTxt {
    entries: HashMap<&'static str, Vec<String>>,
}

impl TxtLookup for TableTxt {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        self.entries
            .get(domain)
            .cloned()
            .ok_or_else(|| anyhow!("SERVFAIL"))
    }
}

fn config_for(dir: &TempDir, input: &Path) -> Config {
    Config {
        input: input.to_path_buf(),
        output: dir.path().join("results.csv"),
        batch_delay_ms: 0,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_secure_domain_with_marker_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = write_events(&dir, &[event_row("['example.com','TXT']")]);
    let config = config_for(&dir, &input);

    let mut dnssec = TableDnssec::default();
    dnssec.answers.insert(
        "example.com",
        DnssecAnswer::secure(vec!["93.184.216.34".to_string()]),
    );
    let mut txt = TableTxt::default();
    txt.entries.insert("example.com", vec!["ENS1xyz".to_string()]);

    let report = run_audit_with(&config, &dnssec, &txt).await.unwrap();

    assert_eq!(report.total_domains, 1);
    assert_eq!(report.dnssec_secure, 1);
    assert_eq!(report.txt_markers, 1);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "Domain,DNSSEC,TXTRecord\nexample.com,true,ENS1xyz\n"
    );
}

#[tokio::test]
async fn test_domain_failing_both_lookups_is_still_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_events(&dir, &[event_row("['broken.example','TXT']")]);
    let config = config_for(&dir, &input);

    let report = run_audit_with(&config, &TableDnssec::default(), &TableTxt::default())
        .await
        .unwrap();

    assert_eq!(report.total_domains, 1);
    assert_eq!(report.lookup_errors, 2);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "Domain,DNSSEC,TXTRecord\nbroken.example,false,\n"
    );
}

#[tokio::test]
async fn test_mixed_input_batches_and_filters() {
    let dir = TempDir::new().unwrap();
    let rows = vec![
        event_row("['a.example','TXT']"),
        event_row("['b.example','TXT']"),
        event_row("['a.example','TXT']"),
        event_row("['user@c.example','TXT']"),
        event_row("['.d.example','TXT']"),
        event_row("['e.example','TXT']"),
        "too,short".to_string(),
    ];
    let input = write_events(&dir, &rows);
    let config = Config {
        batch_size: 2,
        ..config_for(&dir, &input)
    };

    let mut dnssec = TableDnssec::default();
    dnssec.answers.insert(
        "a.example",
        DnssecAnswer::secure(vec!["192.0.2.1".to_string()]),
    );
    dnssec.answers.insert(
        "b.example",
        DnssecAnswer::unverified(
            SecurityStatus::Bogus,
            vec!["RRSIG signature verification failed".to_string()],
        ),
    );
    let mut txt = TableTxt::default();
    txt.entries.insert(
        "b.example",
        vec!["v=spf1 -all".to_string(), "ENS1 0xb".to_string()],
    );
    txt.entries.insert("e.example", vec!["unrelated".to_string()]);

    let report = run_audit_with(&config, &dnssec, &txt).await.unwrap();

    assert_eq!(report.total_domains, 3);
    assert_eq!(report.batches, 2);
    assert_eq!(report.dnssec_secure, 1);
    assert_eq!(report.txt_markers, 1);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "Domain,DNSSEC,TXTRecord\n\
         a.example,true,\n\
         b.example,false,ENS1 0xb\n\
         e.example,false,\n"
    );
}

#[tokio::test]
async fn test_empty_input_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let input = write_events(&dir, &[]);
    let config = config_for(&dir, &input);

    let report = run_audit_with(&config, &TableDnssec::default(), &TableTxt::default())
        .await
        .unwrap();

    assert_eq!(report.total_domains, 0);
    assert_eq!(report.batches, 0);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "Domain,DNSSEC,TXTRecord\n"
    );
}

#[tokio::test]
async fn test_custom_column_and_pattern() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("custom.csv");
    fs::write(&input, "1,<custom.example>\n2,<custom.example>\n").unwrap();
    let config = Config {
        domain_column: 1,
        column_pattern: r"^<(.+)>$".to_string(),
        ..config_for(&dir, &input)
    };

    let report = run_audit_with(&config, &TableDnssec::default(), &TableTxt::default())
        .await
        .unwrap();
    assert_eq!(report.total_domains, 1);
    assert!(fs::read_to_string(&config.output)
        .unwrap()
        .contains("custom.example,false,"));
}

#[tokio::test]
async fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, &dir.path().join("missing.csv"));

    let err = run_audit_with(&config, &TableDnssec::default(), &TableTxt::default())
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("Failed to open input file"));
    assert!(!config.output.exists());
}

#[tokio::test]
async fn test_invalid_configuration_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_events(&dir, &[event_row("['example.com','TXT']")]);

    let zero_batch = Config {
        batch_size: 0,
        ..config_for(&dir, &input)
    };
    assert!(
        run_audit_with(&zero_batch, &TableDnssec::default(), &TableTxt::default())
            .await
            .is_err()
    );

    let no_group = Config {
        column_pattern: r"\[.*\]".to_string(),
        ..config_for(&dir, &input)
    };
    let err = run_audit_with(&no_group, &TableDnssec::default(), &TableTxt::default())
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("no capture group"));
}

#[tokio::test]
async fn test_run_audit_rejects_invalid_configuration_before_reading_input() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        batch_size: 0,
        ..config_for(&dir, &dir.path().join("missing.csv"))
    };

    let err = run_audit(config).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Invalid configuration"), "got: {message}");
    assert!(message.contains("batch size must be at least 1"));
    assert!(!message.contains("Failed to open input file"));
}
