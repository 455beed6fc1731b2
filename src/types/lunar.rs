use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::pillar::Pillar;

/// A date in the Chinese lunisolar calendar.
///
/// `day` never exceeds the length (29 or 30) of the month it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

/// A solar term falling on the converted date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarTerm {
    /// 1-based position in the 24-term table (1 = 小寒).
    pub index: usize,
    pub name: &'static str,
}

/// Result of converting one Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDetails {
    pub solar_date: NaiveDate,
    pub lunar: LunarDate,
    pub animal: &'static str,
    /// Year whose sexagenary label was used; differs from `lunar.year`
    /// before Li Chun.
    pub sexagenary_year_number: i32,
    pub year_pillar: Pillar,
    pub month_pillar: Pillar,
    pub day_pillar: Pillar,
    pub term: Option<SolarTerm>,
}

impl LunarDetails {
    pub fn is_term(&self) -> bool {
        self.term.is_some()
    }
}
