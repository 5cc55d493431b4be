//! Tests for side-file location, loading and bin overrides

use super::*;
use crate::app::services::export_parser::side_file::{
    SideRecord, expand_records, load_side_file, parse_side_record, read_side_records,
    side_file_path,
};
use crate::{Error, Measurement};
use chrono::{TimeZone, Utc};

fn base() -> Measurement {
    Measurement::new(
        Utc.with_ymd_and_hms(2022, 9, 10, 14, 45, 0).unwrap(),
        Utc.with_ymd_and_hms(2022, 9, 10, 15, 45, 0).unwrap(),
    )
}

fn bin(spo2: f64, spo2_min: f64, spo2_max: f64) -> SideRecord {
    SideRecord {
        start_time: 1662821111851,
        end_time: 1662821170851,
        spo2: Some(spo2),
        spo2_min: Some(spo2_min),
        spo2_max: Some(spo2_max),
    }
}

#[test]
fn test_side_file_path_layout() {
    let path = side_file_path(
        Path::new("/exports/samsunghealth_20230602/oxygen.csv"),
        "jsons",
        TEST_TITLE,
        "f3a9c1e2.binning.json",
    );

    assert_eq!(
        path,
        Path::new("/exports/samsunghealth_20230602/jsons")
            .join(TEST_TITLE)
            .join("f")
            .join("f3a9c1e2.binning.json")
    );
}

#[test]
fn test_side_file_path_relative_export() {
    let path = side_file_path(Path::new("oxygen.csv"), "jsons", "title", "abc.json");
    assert_eq!(path, Path::new("jsons/title/a/abc.json"));
}

#[test]
fn test_side_file_path_multibyte_first_char() {
    let path = side_file_path(Path::new("/x/oxygen.csv"), "jsons", "title", "été.json");
    assert_eq!(path, Path::new("/x/jsons/title/é/été.json"));
}

#[test]
fn test_midpoint_from_min_and_max() {
    let derived = parse_side_record(&base(), &bin(0.0, 90.0, 95.0)).unwrap();

    assert_eq!(derived.min, Some(90.0));
    assert_eq!(derived.max, Some(95.0));
    assert_eq!(derived.average, Some(92.5));
    assert_eq!(derived.start, Utc.timestamp_millis_opt(1662821111851).unwrap());
    assert_eq!(derived.end, Utc.timestamp_millis_opt(1662821170851).unwrap());
}

#[test]
fn test_empty_bin_inherits_average_and_clears_range() {
    let base = base()
        .with_average(Some(98.0))
        .with_auxiliary_rate(Some(60.0))
        .with_min(Some(91.0))
        .with_max(Some(99.0))
        .with_low_duration(Some(4.0));

    let derived = parse_side_record(&base, &bin(0.0, 0.0, 0.0)).unwrap();

    assert_eq!(derived.min, None);
    assert_eq!(derived.max, None);
    assert_eq!(derived.average, Some(98.0));
    assert_eq!(derived.auxiliary_rate, Some(60.0));
    assert_eq!(derived.low_duration, Some(4.0));
    // The base record itself is untouched
    assert_eq!(base.min, Some(91.0));
}

#[test]
fn test_bin_average_wins_over_midpoint() {
    let derived = parse_side_record(&base(), &bin(97.0, 90.0, 95.0)).unwrap();
    assert_eq!(derived.average, Some(97.0));
    assert_eq!(derived.min, Some(90.0));
}

#[test]
fn test_inherited_average_wins_over_midpoint() {
    let base = base().with_average(Some(96.0));
    let derived = parse_side_record(&base, &bin(0.0, 90.0, 95.0)).unwrap();
    assert_eq!(derived.average, Some(96.0));
}

#[test]
fn test_min_without_max_clears_both() {
    let base = base().with_min(Some(91.0)).with_max(Some(99.0));
    let derived = parse_side_record(&base, &bin(0.0, 90.0, 0.0)).unwrap();

    assert_eq!(derived.min, None);
    assert_eq!(derived.max, None);
    assert_eq!(derived.average, None);
    assert!(!derived.is_sufficient());
}

#[test]
fn test_out_of_range_timestamp_yields_nothing() {
    let record = SideRecord {
        start_time: i64::MAX,
        ..bin(97.0, 0.0, 0.0)
    };
    assert!(parse_side_record(&base(), &record).is_none());
}

#[test]
fn test_expand_records_keeps_sufficient_in_order() {
    let records = vec![
        SideRecord {
            start_time: 3000,
            end_time: 4000,
            ..bin(0.0, 94.0, 96.0)
        },
        SideRecord {
            start_time: 1000,
            end_time: 2000,
            ..bin(0.0, 0.0, 0.0)
        },
        SideRecord {
            start_time: 0,
            end_time: 1000,
            ..bin(99.0, 0.0, 0.0)
        },
    ];

    let derived = expand_records(&base(), &records);

    assert_eq!(derived.len(), 2);
    assert_eq!(derived[0].average, Some(95.0));
    assert_eq!(derived[1].average, Some(99.0));
    assert_eq!(derived[1].start, Utc.timestamp_millis_opt(0).unwrap());
}

#[test]
fn test_read_side_records_optional_fields() {
    let export = TestExport::new(&[]);
    let path = export.write_side_file(
        "a.json",
        r#"[{"start_time":1000,"end_time":2000},{"spo2":null,"spo2_min":91.5,"spo2_max":97,"start_time":2000,"end_time":3000}]"#,
    );

    let records = read_side_records(&path).unwrap().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].spo2, None);
    assert_eq!(records[0].spo2_min, None);
    assert_eq!(records[1].spo2, None);
    assert_eq!(records[1].spo2_min, Some(91.5));
    assert_eq!(records[1].spo2_max, Some(97.0));
}

#[test]
fn test_absent_side_file() {
    let export = TestExport::new(&[]);
    let path = export.dir.path().join("jsons").join("missing.json");

    assert!(read_side_records(&path).unwrap().is_none());
    assert!(load_side_file(&base(), &path).unwrap().is_empty());
}

#[test]
fn test_load_side_file_all_insufficient() {
    let export = TestExport::new(&[]);
    let path = export.write_side_file(
        "z.json",
        r#"[{"spo2":0,"spo2_max":0,"spo2_min":0,"start_time":1000,"end_time":2000}]"#,
    );

    assert!(load_side_file(&base(), &path).unwrap().is_empty());
}

#[test]
fn test_side_file_must_be_an_array() {
    let export = TestExport::new(&[]);
    let path = export.write_side_file("o.json", r#"{"start_time":1000,"end_time":2000}"#);

    let err = read_side_records(&path).unwrap_err();
    match err {
        Error::SideFileFormat { path: reported, .. } => {
            assert_eq!(reported, path.display().to_string());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
