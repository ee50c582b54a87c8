use climb_stats::StatsError;
use climb_stats::grades::{Discipline, GradeCatalog, GradeCategory, GradeScale, GradeTable};

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_owned()).collect()
}

#[test]
fn every_scale_has_as_many_normalized_labels_as_labels() {
    let catalog = GradeCatalog::builtin();
    for scale in GradeScale::ALL {
        assert!(!catalog.labels(scale).is_empty(), "{scale} must not be empty");
        assert_eq!(
            catalog.labels(scale).len(),
            catalog.normalized_labels(scale).len(),
            "{scale}"
        );
    }
}

#[test]
fn categories_partition_all_scales() {
    let catalog = GradeCatalog::builtin();
    let bouldering = catalog.scales_in(GradeCategory::Bouldering);
    let free = catalog.scales_in(GradeCategory::FreeClimbing);

    assert_eq!(bouldering.len() + free.len(), GradeScale::ALL.len());
    for scale in GradeScale::ALL {
        let in_bouldering = bouldering.contains(&scale);
        let in_free = free.contains(&scale);
        assert!(in_bouldering ^ in_free, "{scale} must be in exactly one category");
        let expected = if in_bouldering {
            GradeCategory::Bouldering
        } else {
            GradeCategory::FreeClimbing
        };
        assert_eq!(catalog.category_of(scale), expected);
    }
    assert_eq!(bouldering[0], GradeScale::Hueco);
    assert_eq!(free[0], GradeScale::Usa);
}

#[test]
fn index_of_returns_first_occurrence_for_every_label() {
    let catalog = GradeCatalog::builtin();
    for scale in GradeScale::ALL {
        let labels = catalog.labels(scale);
        for (i, label) in labels.iter().enumerate() {
            let first = labels.iter().position(|entry| entry == label).expect("present");
            let found = catalog.index_of(scale, label).expect("label must resolve");
            assert_eq!(found, first, "{scale} {label}");
            assert!(found <= i);
        }
    }
}

#[test]
fn usa_duplicate_five_eight_resolves_to_first_occurrence() {
    let catalog = GradeCatalog::builtin();
    let labels = catalog.labels(GradeScale::Usa);
    let occurrences: Vec<usize> = labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.as_str() == "5.8")
        .map(|(i, _)| i)
        .collect();
    assert_eq!(occurrences, vec![8, 9]);

    assert_eq!(catalog.index_of(GradeScale::Usa, "5.8").expect("5.8"), 8);
    assert_eq!(catalog.index_of(GradeScale::Usa, "5.9").expect("5.9"), 10);
}

#[test]
fn index_of_unknown_label_is_not_found() {
    let catalog = GradeCatalog::builtin();
    let err = catalog
        .index_of(GradeScale::Hueco, "V18")
        .expect_err("V18 does not exist");
    assert!(matches!(
        err,
        StatsError::GradeNotFound { scale: GradeScale::Hueco, ref label } if label == "V18"
    ));
}

#[test]
fn hueco_buckets_are_its_own_labels() {
    let catalog = GradeCatalog::builtin();
    assert_eq!(
        catalog.labels(GradeScale::Hueco),
        catalog.normalized_labels(GradeScale::Hueco)
    );
}

#[test]
fn fontainebleau_grades_collapse_into_hueco_buckets() {
    let catalog = GradeCatalog::builtin();
    let scale = GradeScale::Fontainebleau;
    for label in ["1", "2", "3", "4", "4+"] {
        assert_eq!(catalog.bucket_of(scale, label).expect("bucket"), "V0");
    }
    assert_eq!(catalog.bucket_of(scale, "5").expect("bucket"), "V1");
    assert_eq!(catalog.bucket_of(scale, "6A").expect("bucket"), "V3");
    assert_eq!(catalog.bucket_of(scale, "8C+").expect("bucket"), "V16");
    assert_eq!(catalog.bucket_of(scale, "9A").expect("bucket"), "V17");
}

#[test]
fn unaligned_dankyu_label_is_kept_as_its_own_bucket() {
    let catalog = GradeCatalog::builtin();
    let scale = GradeScale::Dankyu;
    assert_eq!(catalog.labels(scale)[2], " 5 kyuu");
    assert_eq!(catalog.normalized_labels(scale)[2], " 5 kyuu");
    assert_eq!(catalog.bucket_of(scale, "7 kyuu").expect("bucket"), "V0");
    assert_eq!(catalog.bucket_of(scale, "4 kyuu").expect("bucket"), "V3");
    assert_eq!(catalog.bucket_of(scale, "5 dan").expect("bucket"), "V14");
}

#[test]
fn alignment_rows_share_length_within_a_category() {
    let catalog = GradeCatalog::builtin();
    for category in GradeCategory::ALL {
        let scales = catalog.scales_in(category);
        let expected = catalog.alignment(scales[0]).len();
        for &scale in scales {
            assert_eq!(catalog.alignment(scale).len(), expected, "{scale}");
        }
    }
    assert_eq!(catalog.alignment(GradeScale::Hueco).len(), 26);
    assert_eq!(catalog.alignment(GradeScale::Usa).len(), 47);
}

#[test]
fn normalized_index_uses_first_alignment_column() {
    let catalog = GradeCatalog::builtin();
    assert_eq!(catalog.normalized_index(GradeScale::Hueco, "V0").expect("V0"), 0);
    assert_eq!(catalog.normalized_index(GradeScale::Hueco, "V3").expect("V3"), 7);
    assert!(catalog.normalized_index(GradeScale::Dankyu, " 5 kyuu").is_err());
}

#[test]
fn convert_maps_grades_through_alignment_columns() {
    let catalog = GradeCatalog::builtin();
    assert_eq!(
        catalog
            .convert(GradeScale::Fontainebleau, "6A", GradeScale::Hueco)
            .expect("convert"),
        "V3"
    );
    assert_eq!(
        catalog
            .convert(GradeScale::Hueco, "V3", GradeScale::Fontainebleau)
            .expect("convert"),
        "6A"
    );
    assert_eq!(
        catalog
            .convert(GradeScale::Usa, "5.10a", GradeScale::Fr)
            .expect("convert"),
        "6a"
    );
}

#[test]
fn convert_rejects_scales_of_different_categories() {
    let catalog = GradeCatalog::builtin();
    let err = catalog
        .convert(GradeScale::Hueco, "V3", GradeScale::Usa)
        .expect_err("categories differ");
    assert!(matches!(
        err,
        StatsError::IncompatibleScales {
            from: GradeScale::Hueco,
            to: GradeScale::Usa
        }
    ));
}

#[test]
fn examples_preview_first_six_labels() {
    let catalog = GradeCatalog::builtin();
    assert_eq!(catalog.examples(GradeScale::Hueco), "V0, V1, V2, V3, V4, V5...");
    assert_eq!(catalog.examples(GradeScale::Uiaa), "I, II, III, IV, IV+, V-...");
}

#[test]
fn substituted_table_replaces_only_its_scale() {
    let table = GradeTable::new(owned(&["easy", "hard"]), owned(&["low", "high"]));
    let catalog = GradeCatalog::builtin()
        .with_table(GradeScale::Nor, table)
        .expect("valid table");

    assert_eq!(catalog.labels(GradeScale::Nor), owned(&["easy", "hard"]).as_slice());
    assert_eq!(catalog.index_of(GradeScale::Nor, "hard").expect("hard"), 1);
    assert_eq!(catalog.bucket_of(GradeScale::Nor, "hard").expect("bucket"), "high");
    assert_eq!(
        catalog.labels(GradeScale::Fin),
        GradeCatalog::builtin().labels(GradeScale::Fin)
    );
}

#[test]
fn mismatched_table_lengths_are_rejected() {
    let table = GradeTable::new(owned(&["a", "b"]), owned(&["x"]));
    let err = GradeCatalog::builtin()
        .with_table(GradeScale::Sa, table)
        .expect_err("lengths differ");
    assert!(matches!(
        err,
        StatsError::InvalidGradeTable {
            scale: GradeScale::Sa,
            ..
        }
    ));

    let empty = GradeTable::new(Vec::new(), Vec::new());
    assert!(GradeCatalog::builtin().with_table(GradeScale::Sa, empty).is_err());
}

#[test]
fn from_tables_requires_every_scale() {
    let mut tables = indexmap::IndexMap::new();
    tables.insert(
        GradeScale::Hueco,
        GradeTable::new(owned(&["V0"]), owned(&["V0"])),
    );
    let err = GradeCatalog::from_tables(tables).expect_err("missing scales");
    assert!(matches!(err, StatsError::InvalidGradeTable { .. }));
}

#[test]
fn disciplines_offer_their_category_scales() {
    for discipline in Discipline::ALL {
        let scales = discipline.grade_scales();
        assert_eq!(scales, discipline.grade_category().scales());
        for scale in scales {
            assert_eq!(scale.category(), discipline.grade_category());
        }
    }
    assert_eq!(Discipline::Bouldering.grade_scales()[0], GradeScale::Hueco);
    assert_eq!(Discipline::SportClimbing.grade_scales()[0], GradeScale::Usa);
}

#[test]
fn substituted_alignment_drives_conversion() {
    let table = GradeTable::new(owned(&["soft", "hard"]), owned(&["V0", "V5"]))
        .with_alignment(owned(&["soft", "soft", "hard"]));
    let catalog = GradeCatalog::builtin()
        .with_table(GradeScale::Dankyu, table)
        .expect("valid table");

    assert_eq!(catalog.normalized_index(GradeScale::Dankyu, "hard").expect("hard"), 2);
    assert_eq!(
        catalog
            .convert(GradeScale::Dankyu, "hard", GradeScale::Hueco)
            .expect("convert"),
        "V0"
    );
    assert_eq!(
        catalog
            .convert(GradeScale::Hueco, "V1", GradeScale::Dankyu)
            .expect_err("column beyond the substituted row")
            .to_string(),
        "grade `V1` not found in Hueco scale"
    );
}

#[test]
fn scales_and_disciplines_have_display_names() {
    assert_eq!(GradeScale::Usa.to_string(), "USA");
    assert_eq!("fontainebleau".parse::<GradeScale>().expect("parse"), GradeScale::Fontainebleau);
    assert_eq!(Discipline::ViaFerrata.name(), "Via Ferrata");
}
