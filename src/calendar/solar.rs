use crate::tables::{FIRST_YEAR, SOLAR_MONTH_DAYS, SOLAR_TERM_NAMES};
use crate::types::{CalendarError, Direction, Result};

use super::LunisolarConverter;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in Gregorian `month` of `year`.
pub fn solar_month_length(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::invalid("month", month));
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(SOLAR_MONTH_DAYS[month as usize - 1])
}

// Leap years in 1..year.
fn leap_years_before(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Day count such that 1900-01-01 is 1 and 1900-01-31 is 31.
pub fn day_offset_from_epoch(year: i32, month: u32, day: u32) -> Result<i64> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::invalid("month", month));
    }
    let year_days = i64::from(year - FIRST_YEAR) * 365
        + leap_years_before(year)
        - leap_years_before(FIRST_YEAR);

    let mut month_days: u32 = SOLAR_MONTH_DAYS[..month as usize - 1].iter().sum();
    if month > 2 && is_leap_year(year) {
        month_days += 1;
    }

    Ok(year_days + i64::from(month_days) + i64::from(day))
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month < 12 {
        (year, month + 1)
    } else {
        (year + 1, 1)
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month > 1 {
        (year, month - 1)
    } else {
        (year - 1, 12)
    }
}

impl LunisolarConverter {
    /// Day of month of the `n`-th (1..=24) solar term of `year`.
    pub fn solar_term_day(&self, year: i32, n: usize) -> Result<u32> {
        if !(1..=SOLAR_TERM_NAMES.len()).contains(&n) {
            return Err(CalendarError::out_of_range("solar term index", n as i64));
        }
        let days = self.tables().solar_term_days(year)?;
        Ok(u32::from(days[n - 1]))
    }

    /// Day of month of the first term (节) of a Gregorian month.
    fn month_node(&self, year: i32, month: u32) -> Result<u32> {
        self.tables().month_opening_term_day(year, month)
    }

    /// Distance in days to the month-opening solar term reached by walking
    /// from the date in `direction`.
    ///
    /// A date that falls on the term itself is at distance 0 either way.
    pub fn nearest_solar_term_distance(
        &self,
        year: i32,
        month: u32,
        day: u32,
        direction: Direction,
    ) -> Result<u32> {
        let node = self.month_node(year, month)?;

        let (term_year, term_month, term_day) = match direction {
            Direction::Forward if day > node => {
                let (y, m) = next_month(year, month);
                (y, m, self.month_node(y, m)?)
            }
            Direction::Backward if day < node => {
                let (y, m) = previous_month(year, month);
                (y, m, self.month_node(y, m)?)
            }
            _ => (year, month, node),
        };

        let from = day_offset_from_epoch(year, month, day)?;
        let to = day_offset_from_epoch(term_year, term_month, term_day)?;
        u32::try_from((from - to).unsigned_abs()).map_err(|_| {
            CalendarError::InvariantViolation(format!("term distance {} days", from - to))
        })
    }
}
