use serde::{Deserialize, Serialize};

use super::error::{CalendarError, Result};
use super::pillar::{FourPillars, Pillar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// 0 for male, 1 for female.
    pub fn code(self) -> i64 {
        match self {
            Gender::Male => 0,
            Gender::Female => 1,
        }
    }
}

/// Direction in which the major luck cycles run through the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Birth data as supplied by the calling service.
///
/// `birth_location` is carried through untouched; no calculation reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    #[serde(default)]
    pub gender: Option<Gender>,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_location: String,
}

impl BirthInput {
    pub fn new(
        gender: Gender,
        birth_date: impl Into<String>,
        birth_time: impl Into<String>,
        birth_location: impl Into<String>,
    ) -> Self {
        Self {
            gender: Some(gender),
            birth_date: birth_date.into(),
            birth_time: birth_time.into(),
            birth_location: birth_location.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CalendarError::malformed("input", e.to_string()))
    }
}

/// Starting age, direction and the major luck cycle (大运) pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckCycleResult {
    /// Never below 1.
    pub start_age: u32,
    /// Month remainder left over by the starting-age computation.
    pub start_month: u32,
    /// Traditional phrasing, e.g. `"9岁4月行运"`.
    pub label: String,
    pub direction: Direction,
    pub cycles: Vec<Pillar>,
}

/// The complete chart returned to the calling service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaziChart {
    pub user_input: BirthInput,
    pub solar_time: String,
    pub lunar_date: String,
    pub bazi: FourPillars,
    pub start_age: u32,
    pub direction: Direction,
    pub da_yun: Vec<String>,
}

impl BaziChart {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CalendarError::InvariantViolation(e.to_string()))
    }
}
