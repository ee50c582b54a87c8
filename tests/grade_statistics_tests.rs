use climb_stats::StatsError;
use climb_stats::grades::{
    GRADE_CATALOG_CONFIG_JSON_SCHEMA_V1, Grade, GradeCatalog, GradeCatalogConfig, GradeHistogram,
    GradeRef, GradeScale, GradeTable,
};

#[test]
fn grade_ref_decodes_stored_codes() {
    let catalog = GradeCatalog::builtin();
    let stored = GradeRef {
        scale_code: 3,
        grade_index: 9,
    };
    let grade = stored.decode(&catalog).expect("valid grade ref");
    assert_eq!(grade.scale, GradeScale::Usa);
    assert_eq!(grade.index, 9);
    assert_eq!(grade.label(&catalog), Some("5.8"));
    assert_eq!(grade.bucket(&catalog), Some("5.8"));
    assert_eq!(GradeRef::from(grade), stored);
}

#[test]
fn grade_ref_rejects_unknown_scale_code() {
    let catalog = GradeCatalog::builtin();
    let err = GradeRef {
        scale_code: 42,
        grade_index: 0,
    }
    .decode(&catalog)
    .expect_err("unknown scale");
    assert!(matches!(err, StatsError::UnknownGradeScale(42)));
}

#[test]
fn grade_ref_rejects_out_of_range_index() {
    let catalog = GradeCatalog::builtin();
    for grade_index in [-1, 35, i64::MAX] {
        let err = GradeRef {
            scale_code: 3,
            grade_index,
        }
        .decode(&catalog)
        .expect_err("index out of range");
        assert!(matches!(err, StatsError::InvalidData(_)), "{grade_index}");
    }
}

#[test]
fn grade_from_label_uses_first_duplicate() {
    let catalog = GradeCatalog::builtin();
    let grade = Grade::from_label(&catalog, GradeScale::Usa, "5.8").expect("5.8");
    assert_eq!(grade.index, 8);
    assert!(Grade::from_label(&catalog, GradeScale::Usa, "5.16a").is_err());
}

#[test]
fn histogram_counts_hueco_grades_per_bucket() {
    let catalog = GradeCatalog::builtin();
    let histogram =
        GradeHistogram::from_labels(&catalog, GradeScale::Hueco, ["V3", "V3", "V5"]).expect("histogram");

    assert_eq!(histogram.buckets.len(), 18);
    assert_eq!(histogram.counts.len(), histogram.buckets.len());
    assert_eq!(histogram.counts[3], 2);
    assert_eq!(histogram.counts[5], 1);
    assert_eq!(histogram.total(), 3);

    let trimmed = histogram.trimmed();
    assert_eq!(trimmed.buckets, vec!["V3", "V4", "V5"]);
    assert_eq!(trimmed.counts, vec![2, 0, 1]);
    assert_eq!(trimmed.endpoint_labels(), Some(("V3", "V5")));
}

#[test]
fn histogram_merges_fontainebleau_grades_sharing_a_bucket() {
    let catalog = GradeCatalog::builtin();
    let histogram = GradeHistogram::from_labels(
        &catalog,
        GradeScale::Fontainebleau,
        ["6A", "6A+", "7A"],
    )
    .expect("histogram");

    assert_eq!(histogram.buckets.len(), 17);
    assert!(!histogram.buckets.iter().any(|bucket| bucket == "V15"));
    let v3 = histogram
        .buckets
        .iter()
        .position(|bucket| bucket == "V3")
        .expect("V3 bucket");
    let v6 = histogram
        .buckets
        .iter()
        .position(|bucket| bucket == "V6")
        .expect("V6 bucket");
    assert_eq!(histogram.counts[v3], 2);
    assert_eq!(histogram.counts[v6], 1);
    assert_eq!(histogram.total(), 3);
}

#[test]
fn histogram_rejects_grades_of_another_scale() {
    let catalog = GradeCatalog::builtin();
    let grade = Grade::from_label(&catalog, GradeScale::Fontainebleau, "6A").expect("6A");
    let err = GradeHistogram::from_grades(&catalog, GradeScale::Hueco, [grade])
        .expect_err("scale mismatch");
    assert!(matches!(err, StatsError::InvalidData(_)));

    let out_of_range = Grade {
        scale: GradeScale::Hueco,
        index: 99,
    };
    assert!(GradeHistogram::from_grades(&catalog, GradeScale::Hueco, [out_of_range]).is_err());
}

#[test]
fn empty_histogram_trims_to_nothing() {
    let catalog = GradeCatalog::builtin();
    let histogram =
        GradeHistogram::from_grades(&catalog, GradeScale::Nor, Vec::new()).expect("histogram");
    assert_eq!(histogram.total(), 0);
    let trimmed = histogram.trimmed();
    assert!(trimmed.buckets.is_empty());
    assert!(trimmed.counts.is_empty());
    assert_eq!(trimmed.endpoint_labels(), None);
}

#[test]
fn catalog_config_json_round_trip_applies_overrides() {
    let table = GradeTable::new(
        vec!["easy".to_owned(), "hard".to_owned()],
        vec!["low".to_owned(), "high".to_owned()],
    );
    let config = GradeCatalogConfig::default().with_override(GradeScale::Bra, table);
    assert_eq!(config.schema_version, GRADE_CATALOG_CONFIG_JSON_SCHEMA_V1);

    let json = config.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"BRA\""));
    let restored = GradeCatalogConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);

    let catalog = restored.build().expect("build catalog");
    assert_eq!(catalog.bucket_of(GradeScale::Bra, "easy").expect("easy"), "low");
    assert_eq!(catalog.labels(GradeScale::Hueco).len(), 18);
}

#[test]
fn catalog_config_without_overrides_builds_builtin_catalog() {
    let config = GradeCatalogConfig::from_json_str("{}").expect("defaults");
    assert_eq!(config.schema_version, GRADE_CATALOG_CONFIG_JSON_SCHEMA_V1);
    assert_eq!(config.build().expect("catalog"), GradeCatalog::builtin());
}

#[test]
fn catalog_config_rejects_unknown_schema_version() {
    let err = GradeCatalogConfig::from_json_str(r#"{"schema_version": 2}"#)
        .expect_err("unsupported schema");
    assert!(matches!(err, StatsError::InvalidData(_)));
}

#[test]
fn catalog_config_rejects_invalid_override() {
    let json = r#"{
        "schema_version": 1,
        "overrides": { "Hueco": { "labels": ["V0", "V1"], "normalized_labels": ["V0"] } }
    }"#;
    let config = GradeCatalogConfig::from_json_str(json).expect("parse config");
    let err = config.build().expect_err("lengths differ");
    assert!(matches!(
        err,
        StatsError::InvalidGradeTable {
            scale: GradeScale::Hueco,
            ..
        }
    ));
}
