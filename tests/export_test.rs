//! Export payload wire formats and file writing

use chirp::domain::fixtures;
use chirp::domain::model::{ExportFormat, MetricSnapshot};
use chirp::modules::export::csv_export::{overview_csv, write_campaigns, write_customers};
use chirp::modules::export::{overview_filename, overview_payload, DiskSaver, FileSaver};
use chrono::Local;

fn full_snapshot() -> MetricSnapshot {
    MetricSnapshot {
        followers: 278_534,
        reach: 5_192_879,
        engagement: 98.2,
    }
}

#[test]
fn csv_report_layout_is_stable() {
    let csv = overview_csv(
        &full_snapshot(),
        &fixtures::locations(),
        &fixtures::age_groups(),
    );
    let expected = "\
Metric,Value
Followers,278534
Reach,5192879
Engagement,98.2%

Top Locations:
United States,197520
Brazil,32985
Switzerland,10254

Age Groups:
18-24,89234
25-34,156789
35-44,32511
";
    assert_eq!(csv, expected);
}

#[test]
fn filenames_carry_the_export_date() {
    let date = Local::now().format("%Y-%m-%d");
    assert_eq!(
        overview_filename(ExportFormat::Json, Local::now()),
        format!("overview-data-{date}.json")
    );
    assert_eq!(
        overview_filename(ExportFormat::Csv, Local::now()),
        format!("overview-data-{date}.csv")
    );
}

#[test]
fn json_payload_uses_camel_case_keys() {
    let payload = overview_payload(
        ExportFormat::Json,
        &full_snapshot(),
        &fixtures::locations(),
        &fixtures::age_groups(),
        Local::now(),
    );
    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
    let object = parsed.as_object().unwrap();
    for key in ["followers", "reach", "engagement", "locations", "ageGroups", "exportedAt"] {
        assert!(object.contains_key(key), "missing {key}");
    }
    // Percentages are presentation-only and stay out of the payload
    assert!(parsed["locations"][0].get("percentage").is_none());
}

#[test]
fn disk_saver_writes_into_its_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut saver = DiskSaver::new(dir.path().to_path_buf());

    saver
        .save("overview-data-2026-08-28.csv", "text/csv", b"Metric,Value\n")
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("overview-data-2026-08-28.csv")).unwrap();
    assert_eq!(written, "Metric,Value\n");
}

#[test]
fn campaign_list_export_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campaigns.csv");
    let campaigns = fixtures::campaigns();

    let count = write_campaigns(&path, &campaigns).unwrap();
    assert_eq!(count, campaigns.len());

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,platform,status,budget,spent,impressions,clicks,conversions,ctr,cpc,roas"
    );
    assert_eq!(lines.count(), campaigns.len());
}

#[test]
fn customer_list_export_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.csv");
    let customers = fixtures::customers();

    let count = write_customers(&path, &customers).unwrap();
    assert_eq!(count, customers.len());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(
        "id,name,email,location,join_date,total_spent,orders,platform,segment,satisfaction"
    ));
}
