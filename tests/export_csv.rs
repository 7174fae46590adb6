//! Tests for CSV report export.

use std::fs;

use dnssec_audit::export::write_report_to_path;
use dnssec_audit::lookup::DomainRecord;
use tempfile::TempDir;

fn record(domain: &str, secure: bool, marker: Option<&str>) -> DomainRecord {
    DomainRecord {
        domain: domain.to_string(),
        dnssec_secure: secure,
        txt_marker: marker.map(str::to_string),
    }
}

#[test]
fn test_export_writes_header_and_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("results.csv");

    let records = vec![
        record("example.com", true, Some("ENS1xyz")),
        record("example.org", false, None),
        record("example.net", false, Some("ENS1 0xabc")),
    ];
    let written = write_report_to_path(&output, &records).expect("Failed to export");
    assert_eq!(written, 3);

    let mut reader = csv::Reader::from_path(&output).expect("Failed to read export");
    let headers = reader.headers().expect("Missing header").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ["Domain", "DNSSEC", "TXTRecord"]);

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "example.com");
    assert_eq!(&rows[0][1], "true");
    assert_eq!(&rows[0][2], "ENS1xyz");
    assert_eq!(&rows[1][1], "false");
    assert_eq!(&rows[1][2], "");
    assert_eq!(&rows[2][2], "ENS1 0xabc");
}

#[test]
fn test_export_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("results.csv");
    fs::write(&output, "stale content that is longer than the new report\n").unwrap();

    write_report_to_path(&output, &[record("a.example", true, None)]).expect("Failed to export");

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Domain,DNSSEC,TXTRecord\na.example,true,\n"
    );
}
