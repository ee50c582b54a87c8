//! Built-in grade data.
//!
//! `*_LABELS` are each scale's grades in ascending difficulty. `*_ALIGNMENT`
//! rows line scales of one category up column by column: column `k` of every
//! bouldering row (26 columns) or free-climbing row (47 columns) denotes the
//! same difficulty. Entries are kept exactly as collected, including the
//! duplicated USA "5.8" and the Dankyu " 5 kyuu" spelling.

use super::GradeScale;

const HUECO_LABELS: [&str; 18] = [
    "V0", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9", "V10", "V11", "V12", "V13",
    "V14", "V15", "V16", "V17",
];

const HUECO_ALIGNMENT: [&str; 26] = [
    "V0", "V0", "V0", "V0", "V0", "V1", "V2", "V3", "V3", "V4", "V4", "V5", "V5", "V6",
    "V7", "V8", "V8", "V9", "V10", "V11", "V12", "V13", "V14", "V15", "V16", "V17",
];

const FONTAINEBLEAU_LABELS: [&str; 25] = [
    "1", "2", "3", "4", "4+", "5", "5+", "6A", "6A+", "6B", "6B+", "6C", "6C+", "7A", "7A+",
    "7B", "7B+", "7C", "7C+", "8A", "8A+", "8B", "8B+", "8C+", "9A",
];

const FONTAINEBLEAU_ALIGNMENT: [&str; 26] = [
    "1", "2", "3", "4", "4+", "5", "5+", "6A", "6A+", "6B", "6B+", "6C", "6C+", "7A", "7A+",
    "7B", "7B+", "7C", "7C+", "8A", "8A+", "8B", "8B+", "8C", "8C+", "9A",
];

const DANKYU_LABELS: [&str; 12] = [
    "7 kyuu", "6 kyuu", " 5 kyuu", "4 kyuu", "3 kyuu", "2 kyuu", "1 kyuu", "1 dan", "2 dan",
    "3 dan", "4 dan", "5 dan",
];

const DANKYU_ALIGNMENT: [&str; 26] = [
    "7 kyuu", "7 kyuu", "7 kyuu", "7 kyuu", "6 kyuu", "5 kyuu", "5 kyuu", "4 kyuu",
    "3 kyuu", "2 kyuu", "2 kyuu", "2 kyuu", "1 kyuu", "1 kyuu", "1 dan", "1 dan", "2 dan",
    "2 dan", "3 dan", "3 dan", "4 dan", "4 dan", "5 dan", "5 dan", "5 dan", "5 dan",
];

const USA_LABELS: [&str; 35] = [
    "5.0", "5.1", "5.2", "5.3", "5.4", "5.5", "5.6", "5.7", "5.8", "5.8", "5.9", "5.10a",
    "5.10b", "5.10c", "5.10d", "5.11a", "5.11b", "5.11c", "5.11d", "5.12a", "5.12b",
    "5.12c", "5.12d", "5.13a", "5.13b", "5.13c", "5.13d", "5.14a", "5.14b", "5.14c",
    "5.14d", "5.15a", "5.15b", "5.15c", "5.15d",
];

const USA_ALIGNMENT: [&str; 47] = [
    "5.0", "5.0", "5.0", "5.0", "5.1", "5.1", "5.2", "5.3", "5.3", "5.4", "5.5", "5.5",
    "5.5", "5.6", "5.7", "5.7", "5.8", "5.9", "5.9", "5.10a", "5.10b", "5.10c", "5.10d",
    "5.11a", "5.11b", "5.11c", "5.11d", "5.12a", "5.12a", "5.12b", "5.12c", "5.12d",
    "5.12d", "5.13a", "5.13b", "5.13c", "5.13c", "5.13d", "5.14a", "5.14a", "5.14b",
    "5.14c", "5.14d", "5.15a", "5.15b", "5.15c", "5.15d",
];

const FR_LABELS: [&str; 32] = [
    "1", "2", "3", "4a", "4b", "4c", "5a", "5b", "5c", "6a", "6a+", "6b", "6b+", "6c",
    "6c+", "7a", "7a+", "7b", "7b+", "7c", "7c+", "8a", "8a+", "8b", "8b+", "8c", "8c+",
    "9a", "9a+", "9b", "9b+", "9c",
];

const FR_ALIGNMENT: [&str; 47] = [
    "1", "1", "1", "1", "2", "2", "2", "3", "3", "4a", "4b", "4b", "4b", "4c", "5a", "5a",
    "5b", "5c", "5c", "6a", "6a+", "6b", "6b+", "6c", "6c", "6c+", "7a", "7a+", "7a+", "7b",
    "7b+", "7c", "7c", "7c+", "8a", "8a+", "8a+", "8b", "8b+", "8b+", "8c", "8c+", "9a",
    "9a+", "9b", "9b+", "9c",
];

const UIAA_LABELS: [&str; 28] = [
    "I", "II", "III", "IV", "IV+", "V-", "V", "V+", "VI-", "VI", "VI+", "VII-", "VII",
    "VII+", "VIII-", "VIII", "VIII+", "IX-", "IX", "IX+", "X-", "X", "X+", "XI-", "XI",
    "XI+", "XII-", "XII",
];

const UIAA_ALIGNMENT: [&str; 47] = [
    "I", "I", "I", "I", "II", "II", "II", "III", "III", "IV", "IV+", "IV+", "V-", "V", "V+",
    "V+", "VI-", "VI", "VI", "VI+", "VII-", "VII", "VII+", "VII+", "VIII-", "VIII-", "VIII",
    "VIII+", "VIII+", "VIII+", "IX-", "IX", "IX", "IX+", "IX+", "X-", "X-", "X", "X+", "X+",
    "X+", "XI-", "XI", "XI+", "XI+", "XII-", "XII",
];

const AUS_LABELS: [&str; 39] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30",
    "31", "32", "33", "34", "35", "36", "37", "38", "39",
];

const AUS_ALIGNMENT: [&str; 47] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "12", "13", "14", "15",
    "16", "17", "17", "18", "19", "20", "20", "21", "22", "23", "23", "24", "24", "25",
    "26", "27", "27", "28", "29", "30", "30", "31", "32", "32", "33", "34", "35", "36",
    "37", "38", "39",
];

const SA_LABELS: [&str; 40] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30",
    "31", "32", "33", "34", "35", "36", "37", "38", "39", "40",
];

const SA_ALIGNMENT: [&str; 47] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "22", "23", "24", "25", "26", "26", "27",
    "28", "29", "29", "30", "31", "32", "32", "33", "34", "34", "35", "36", "37", "38",
    "39", "40", "40",
];

const FIN_LABELS: [&str; 28] = [
    "1", "2", "3", "4", "5-", "5", "5+", "6-", "6", "6+", "7-", "7", "7+", "8-", "8", "8+",
    "9-", "9", "9+", "10-", "10", "10+", "11-", "11", "11+", "12-", "12", "12+",
];

const FIN_ALIGNMENT: [&str; 47] = [
    "1", "1", "1", "1", "2", "2", "2", "3", "3", "3", "4", "4", "4", "4", "5-", "5-", "5",
    "5+", "5+", "5+", "6-", "6", "6", "6+", "6+", "7-", "7", "7+", "7+", "8-", "8", "8+",
    "8+", "9-", "9", "9+", "9+", "10-", "10", "10", "10+", "11-", "11", "11+", "12-", "12",
    "12+",
];

const NOR_LABELS: [&str; 25] = [
    "1", "2", "3", "4", "5-", "5", "5+", "6-", "6", "6+", "7-", "7", "7+", "8-", "8", "8+",
    "9-", "9", "9+", "10-", "10", "10+", "11-", "11", "11+",
];

const NOR_ALIGNMENT: [&str; 47] = [
    "1", "1", "1", "1", "2", "2", "2", "3", "3", "3", "4", "4", "4", "4", "5-", "5-", "5",
    "5+", "5+", "6-", "6-", "6", "6+", "6+", "7-", "7", "7+", "7+", "8-", "8-", "8", "8",
    "8+", "8+", "9-", "9-", "9", "9", "9", "9+", "9+", "10-", "10", "10+", "11-", "11",
    "11+",
];

const BRA_LABELS: [&str; 29] = [
    "I", "I sup", "II", "II sup", "III", "III sup", "IV", "IV sup", "V", "VI", "VI sup",
    "7a", "7b", "7c", "8a", "8b", "8c", "9a", "9b", "9c", "10a", "10b", "10c", "11a", "11b",
    "11c", "12a", "12b", "12c",
];

const BRA_ALIGNMENT: [&str; 47] = [
    "I", "I", "I sup", "I sup", "II", "II", "II sup", "II sup", "II sup", "III", "III sup",
    "III sup", "III sup", "IV", "IV", "IV", "IV sup", "V", "V", "VI", "VI", "VI sup",
    "VI sup", "7a", "7b", "7c", "7c", "8a", "8a", "8b", "8c", "9a", "9a", "9b", "9c", "10a",
    "10a", "10b", "10c", "10c", "11a", "11b", "11c", "12a", "12b", "12c", "12c",
];

#[must_use]
pub(crate) fn builtin_labels(scale: GradeScale) -> &'static [&'static str] {
    match scale {
        GradeScale::Hueco => &HUECO_LABELS,
        GradeScale::Fontainebleau => &FONTAINEBLEAU_LABELS,
        GradeScale::Dankyu => &DANKYU_LABELS,
        GradeScale::Usa => &USA_LABELS,
        GradeScale::Fr => &FR_LABELS,
        GradeScale::Uiaa => &UIAA_LABELS,
        GradeScale::Aus => &AUS_LABELS,
        GradeScale::Sa => &SA_LABELS,
        GradeScale::Fin => &FIN_LABELS,
        GradeScale::Nor => &NOR_LABELS,
        GradeScale::Bra => &BRA_LABELS,
    }
}

#[must_use]
pub(crate) fn builtin_alignment(scale: GradeScale) -> &'static [&'static str] {
    match scale {
        GradeScale::Hueco => &HUECO_ALIGNMENT,
        GradeScale::Fontainebleau => &FONTAINEBLEAU_ALIGNMENT,
        GradeScale::Dankyu => &DANKYU_ALIGNMENT,
        GradeScale::Usa => &USA_ALIGNMENT,
        GradeScale::Fr => &FR_ALIGNMENT,
        GradeScale::Uiaa => &UIAA_ALIGNMENT,
        GradeScale::Aus => &AUS_ALIGNMENT,
        GradeScale::Sa => &SA_ALIGNMENT,
        GradeScale::Fin => &FIN_ALIGNMENT,
        GradeScale::Nor => &NOR_ALIGNMENT,
        GradeScale::Bra => &BRA_ALIGNMENT,
    }
}
