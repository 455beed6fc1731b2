//! Immutable calendar data.
//!
//! The per-year tables live in [`dataset`] as plain integer literals compiled
//! into the binary. [`TABLES`] is the single shared view over them; it is never
//! mutated and can be read from any thread.

pub mod dataset;
pub mod versioning;

use crate::types::{CalendarError, Result};

pub use versioning::DatasetVersion;

pub const FIRST_YEAR: i32 = 1900;
pub const LAST_YEAR: i32 = 2100;
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

/// Gregorian month lengths in a common year.
pub const SOLAR_MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

pub const ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Index 0 is 小寒, the first term of January; 立春 is index 2.
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// Branch index of each clock hour. 23:00 and 00:00 both open 子.
pub const HOUR_BRANCHES: [usize; 24] = [
    0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 0,
];

/// Read-only view over the embedded per-year data.
#[derive(Debug)]
pub struct StaticTables {
    year_info: &'static [u32; YEAR_COUNT],
    solar_term_days: &'static [[u8; 24]; YEAR_COUNT],
    next_xiao_han_day: u8,
}

pub static TABLES: StaticTables = StaticTables {
    year_info: &dataset::YEAR_INFO,
    solar_term_days: &dataset::SOLAR_TERM_DAYS,
    next_xiao_han_day: dataset::NEXT_XIAO_HAN_DAY,
};

impl StaticTables {
    pub fn contains_year(year: i32) -> bool {
        (FIRST_YEAR..=LAST_YEAR).contains(&year)
    }

    fn slot(year: i32) -> Result<usize> {
        if !Self::contains_year(year) {
            return Err(CalendarError::out_of_range("year", year));
        }
        Ok((year - FIRST_YEAR) as usize)
    }

    /// Packed lunar layout of `year`:
    /// - bits 0..=3: leap month number, 0 when the year has none
    /// - bits 15..=4: months 1..=12, month `m` at `0x10000 >> m`, set = 30 days
    /// - bit 16: set when the leap month has 30 days
    pub fn year_info(&self, year: i32) -> Result<u32> {
        Ok(self.year_info[Self::slot(year)?])
    }

    /// Day of month of the 24 solar terms of Gregorian `year`.
    pub fn solar_term_days(&self, year: i32) -> Result<&'static [u8; 24]> {
        let table: &'static [[u8; 24]; YEAR_COUNT] = self.solar_term_days;
        Ok(&table[Self::slot(year)?])
    }

    /// Day of the month-opening term (节) of a Gregorian month.
    ///
    /// Covers every month of 1900..=2100 plus January 2101, so a date late
    /// in December 2100 still has a following term.
    pub fn month_opening_term_day(&self, year: i32, month: u32) -> Result<u32> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid("month", month));
        }
        if year == LAST_YEAR + 1 && month == 1 {
            return Ok(u32::from(self.next_xiao_han_day));
        }
        let days = self.solar_term_days(year)?;
        Ok(u32::from(days[month as usize * 2 - 2]))
    }

    pub(crate) fn raw_year_info(&self) -> &'static [u32; YEAR_COUNT] {
        self.year_info
    }

    pub(crate) fn raw_solar_term_days(&self) -> &'static [[u8; 24]; YEAR_COUNT] {
        self.solar_term_days
    }

    pub(crate) fn raw_next_xiao_han_day(&self) -> u8 {
        self.next_xiao_han_day
    }
}
