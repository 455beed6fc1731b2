use crate::types::{CalendarError, Result};

use super::LunisolarConverter;

const LEAP_MONTH_MASK: u32 = 0xf;
const LONG_LEAP_FLAG: u32 = 0x10000;

fn regular_month_days(info: u32, month: u32) -> u32 {
    if info & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

/// One month of a lunar year in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    pub month: u32,
    pub is_leap: bool,
    pub days: u32,
}

impl LunisolarConverter {
    /// Leap month number of `year`, 0 when the year has none.
    pub fn leap_month(&self, year: i32) -> Result<u32> {
        Ok(self.tables().year_info(year)? & LEAP_MONTH_MASK)
    }

    /// Length of the leap month of `year`, 0 when the year has none.
    pub fn leap_month_length(&self, year: i32) -> Result<u32> {
        let info = self.tables().year_info(year)?;
        Ok(match (info & LEAP_MONTH_MASK, info & LONG_LEAP_FLAG) {
            (0, _) => 0,
            (_, 0) => 29,
            _ => 30,
        })
    }

    /// Length of regular month `month` (1..=12) of lunar `year`.
    pub fn month_length(&self, year: i32, month: u32) -> Result<u32> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid("month", month));
        }
        Ok(regular_month_days(self.tables().year_info(year)?, month))
    }

    /// Length of `month` of `year`, reading the leap month when `is_leap` is set.
    pub fn lunar_month_length(&self, year: i32, month: u32, is_leap: bool) -> Result<u32> {
        if !is_leap {
            return self.month_length(year, month);
        }
        if month == 0 || self.leap_month(year)? != month {
            return Err(CalendarError::invalid("leap month", month));
        }
        self.leap_month_length(year)
    }

    /// Total days of lunar `year`, leap month included.
    pub fn lunar_year_length(&self, year: i32) -> Result<u32> {
        let info = self.tables().year_info(year)?;
        let regular: u32 = (1..=12).map(|m| regular_month_days(info, m)).sum();
        Ok(regular + self.leap_month_length(year)?)
    }

    /// Months of lunar `year` in order, the leap month right after its base month.
    pub fn months(&self, year: i32) -> Result<Vec<LunarMonth>> {
        let info = self.tables().year_info(year)?;
        let leap = info & LEAP_MONTH_MASK;
        let leap_days = self.leap_month_length(year)?;

        let mut months = Vec::with_capacity(13);
        for month in 1..=12 {
            months.push(LunarMonth {
                month,
                is_leap: false,
                days: regular_month_days(info, month),
            });
            if month == leap {
                months.push(LunarMonth {
                    month,
                    is_leap: true,
                    days: leap_days,
                });
            }
        }
        Ok(months)
    }

    /// Split a day offset from the first day of lunar `year` into the month
    /// it falls in and the zero-based day within that month.
    ///
    /// An offset landing exactly on the end of the leap base month is day 0
    /// of the leap month.
    pub(crate) fn locate_month(&self, year: i32, offset: i64) -> Result<(LunarMonth, i64)> {
        let mut remaining = offset;
        for month in self.months(year)? {
            let days = i64::from(month.days);
            if remaining < days {
                return Ok((month, remaining));
            }
            remaining -= days;
        }
        Err(CalendarError::InvariantViolation(format!(
            "day offset {offset} exceeds lunar year {year}"
        )))
    }
}
