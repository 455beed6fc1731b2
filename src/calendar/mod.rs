//! Gregorian to lunisolar conversion and sexagenary labelling.
//!
//! Everything here is a pure function of its arguments and [`TABLES`].

pub mod lunar;
pub mod sexagenary;
pub mod solar;

use chrono::NaiveDate;
use tracing::trace;

use crate::tables::{StaticTables, FIRST_YEAR, SOLAR_TERM_NAMES, TABLES};
use crate::types::{CalendarError, LunarDate, LunarDetails, Result, SolarTerm};

pub use lunar::LunarMonth;
pub use sexagenary::{animal_for_year, cycle, sexagenary, sexagenary_year, CYCLE_LENGTH};
pub use solar::{day_offset_from_epoch, is_leap_year, solar_month_length};

/// `day_offset_from_epoch` of 1900-01-31, lunar 1900-01-01.
pub const EPOCH_OFFSET: i64 = 31;

/// Term index of 立春.
const LI_CHUN: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct LunisolarConverter {
    tables: &'static StaticTables,
}

impl Default for LunisolarConverter {
    fn default() -> Self {
        Self { tables: &TABLES }
    }
}

impl LunisolarConverter {
    pub fn new(tables: &'static StaticTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'static StaticTables {
        self.tables
    }

    /// Convert a Gregorian date (1900-01-31 ..= 2100-12-31) to its lunar date
    /// and year/month/day pillars.
    pub fn solar_to_lunar(&self, year: i32, month: u32, day: u32) -> Result<LunarDetails> {
        if !StaticTables::contains_year(year) {
            return Err(CalendarError::out_of_range("year", year));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::out_of_range("month", month));
        }
        let solar_date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| CalendarError::out_of_range("day", day))?;

        let day_offset = day_offset_from_epoch(year, month, day)?;
        let mut offset = day_offset - EPOCH_OFFSET;
        if offset < 0 {
            return Err(CalendarError::out_of_range("days since 1900-01-31", offset));
        }

        // 1. Lunar year
        let mut lunar_year = FIRST_YEAR;
        loop {
            let length = i64::from(self.lunar_year_length(lunar_year)?);
            if offset < length {
                break;
            }
            offset -= length;
            lunar_year += 1;
        }

        // 2. Lunar month and day
        let (lunar_month, day_index) = self.locate_month(lunar_year, offset)?;
        let lunar = LunarDate {
            year: lunar_year,
            month: lunar_month.month,
            day: day_index as u32 + 1,
            is_leap_month: lunar_month.is_leap,
        };

        // 3. Year pillar turns over at Li Chun
        let li_chun = self.solar_term_day(year, LI_CHUN)?;
        let sexagenary_year_number = if month < 2 || (month == 2 && day < li_chun) {
            year - 1
        } else {
            lunar_year
        };

        // 4. Month pillar turns over at the month's first term
        let first_node = self.solar_term_day(year, month as usize * 2 - 1)?;
        let second_node = self.solar_term_day(year, month as usize * 2)?;
        let mut month_offset = i64::from(year - FIRST_YEAR) * 12 + i64::from(month) + 11;
        if day >= first_node {
            month_offset += 1;
        }

        let term = if day == second_node {
            Some(month as usize * 2)
        } else if day == first_node {
            Some(month as usize * 2 - 1)
        } else {
            None
        }
        .map(|index| SolarTerm {
            index,
            name: SOLAR_TERM_NAMES[index - 1],
        });

        trace!(
            %solar_date,
            lunar_year,
            lunar_month = lunar.month,
            lunar_day = lunar.day,
            leap = lunar.is_leap_month,
            "converted solar date"
        );

        Ok(LunarDetails {
            solar_date,
            lunar,
            animal: animal_for_year(lunar_year),
            sexagenary_year_number,
            year_pillar: sexagenary_year(sexagenary_year_number),
            month_pillar: sexagenary(month_offset),
            day_pillar: sexagenary(day_offset + 9),
            term,
        })
    }
}
