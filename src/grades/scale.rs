use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// A named system for expressing climbing difficulty.
///
/// Discriminants are the stable integer codes used when a scale is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum GradeScale {
    /// USA "V" grades.
    Hueco = 0,
    /// European bouldering grades.
    Fontainebleau = 1,
    /// Japanese kyu/dan grades.
    Dankyu = 2,
    /// Yosemite Decimal System.
    #[serde(rename = "USA")]
    Usa = 3,
    /// French sport grades.
    #[serde(rename = "FR")]
    Fr = 4,
    #[serde(rename = "UIAA")]
    Uiaa = 5,
    /// Australian (Ewbank).
    #[serde(rename = "AUS")]
    Aus = 6,
    /// South African.
    #[serde(rename = "SA")]
    Sa = 7,
    #[serde(rename = "FIN")]
    Fin = 8,
    #[serde(rename = "NOR")]
    Nor = 9,
    /// Brazilian.
    #[serde(rename = "BRA")]
    Bra = 10,
}

impl GradeScale {
    pub const ALL: [GradeScale; 11] = [
        GradeScale::Hueco,
        GradeScale::Fontainebleau,
        GradeScale::Dankyu,
        GradeScale::Usa,
        GradeScale::Fr,
        GradeScale::Uiaa,
        GradeScale::Aus,
        GradeScale::Sa,
        GradeScale::Fin,
        GradeScale::Nor,
        GradeScale::Bra,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GradeScale::Hueco => "Hueco",
            GradeScale::Fontainebleau => "Fontainebleau",
            GradeScale::Dankyu => "Dankyu",
            GradeScale::Usa => "USA",
            GradeScale::Fr => "FR",
            GradeScale::Uiaa => "UIAA",
            GradeScale::Aus => "AUS",
            GradeScale::Sa => "SA",
            GradeScale::Fin => "FIN",
            GradeScale::Nor => "NOR",
            GradeScale::Bra => "BRA",
        }
    }

    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Position of the scale in [`GradeScale::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn category(self) -> GradeCategory {
        match self {
            GradeScale::Hueco | GradeScale::Fontainebleau | GradeScale::Dankyu => {
                GradeCategory::Bouldering
            }
            GradeScale::Usa
            | GradeScale::Fr
            | GradeScale::Uiaa
            | GradeScale::Aus
            | GradeScale::Sa
            | GradeScale::Fin
            | GradeScale::Nor
            | GradeScale::Bra => GradeCategory::FreeClimbing,
        }
    }
}

impl fmt::Display for GradeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradeScale {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeScale::ALL
            .into_iter()
            .find(|scale| scale.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatsError::InvalidData(format!("unknown grade scale name: `{s}`")))
    }
}

impl TryFrom<i64> for GradeScale {
    type Error = StatsError;

    fn try_from(code: i64) -> StatsResult<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| GradeScale::ALL.get(index).copied())
            .ok_or(StatsError::UnknownGradeScale(code))
    }
}

/// Disjoint partition of grade scales by climbing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeCategory {
    Bouldering,
    FreeClimbing,
}

const BOULDERING_SCALES: [GradeScale; 3] = [
    GradeScale::Hueco,
    GradeScale::Fontainebleau,
    GradeScale::Dankyu,
];

const FREE_CLIMBING_SCALES: [GradeScale; 8] = [
    GradeScale::Usa,
    GradeScale::Fr,
    GradeScale::Uiaa,
    GradeScale::Aus,
    GradeScale::Sa,
    GradeScale::Fin,
    GradeScale::Nor,
    GradeScale::Bra,
];

impl GradeCategory {
    pub const ALL: [GradeCategory; 2] = [GradeCategory::Bouldering, GradeCategory::FreeClimbing];

    /// Scales of this category in declared order; the first one is the default.
    #[must_use]
    pub const fn scales(self) -> &'static [GradeScale] {
        match self {
            GradeCategory::Bouldering => &BOULDERING_SCALES,
            GradeCategory::FreeClimbing => &FREE_CLIMBING_SCALES,
        }
    }

    #[must_use]
    pub const fn default_scale(self) -> GradeScale {
        self.scales()[0]
    }
}

/// Climbing discipline a session or climb is logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    Bouldering,
    TopRoping,
    SportClimbing,
    TradClimbing,
    Alpine,
    ViaFerrata,
    AidClimbing,
}

impl Discipline {
    pub const ALL: [Discipline; 7] = [
        Discipline::Bouldering,
        Discipline::TopRoping,
        Discipline::SportClimbing,
        Discipline::TradClimbing,
        Discipline::Alpine,
        Discipline::ViaFerrata,
        Discipline::AidClimbing,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Discipline::Bouldering => "Bouldering",
            Discipline::TopRoping => "Top Roping",
            Discipline::SportClimbing => "Sport Climbing",
            Discipline::TradClimbing => "Trad Climbing",
            Discipline::Alpine => "Alpine",
            Discipline::ViaFerrata => "Via Ferrata",
            Discipline::AidClimbing => "Aid Climbing",
        }
    }

    #[must_use]
    pub const fn grade_category(self) -> GradeCategory {
        match self {
            Discipline::Bouldering => GradeCategory::Bouldering,
            _ => GradeCategory::FreeClimbing,
        }
    }

    /// Scales a climb of this discipline may be graded in; the first is the default.
    #[must_use]
    pub const fn grade_scales(self) -> &'static [GradeScale] {
        self.grade_category().scales()
    }
}
