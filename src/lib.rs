//! Chinese lunisolar calendar conversion and Four Pillars (BaZi) charts.
//!
//! `bazi-core` converts Gregorian dates between 1900-01-31 and 2100-12-31 to
//! the Chinese lunisolar calendar, labels year, month, day and hour with
//! sexagenary stem/branch pairs, and derives the major luck cycles. All data
//! is compiled in and versioned by content hash; every operation is a pure
//! function, so identical inputs always produce identical charts.
//!
//! ```
//! use bazi_core::{BirthInput, ChartCalculator, ChartConfig, Gender};
//!
//! let calculator = ChartCalculator::new(ChartConfig::v0()).unwrap();
//! let input = BirthInput::new(Gender::Male, "1990-01-01", "08:00", "Beijing");
//! let chart = calculator.calculate(&input).unwrap();
//! assert_eq!(chart.lunar_date, "己巳年 腊月初五");
//! ```

pub mod calendar;
pub mod chart;
pub mod config;
pub mod tables;
pub mod types;

pub use calendar::LunisolarConverter;
pub use chart::ChartCalculator;
pub use config::ChartConfig;
pub use tables::{DatasetVersion, StaticTables, TABLES};
pub use types::{
    BaziChart, BirthInput, Branch, CalendarError, Direction, FourPillars, Gender,
    LuckCycleResult, LunarDate, LunarDetails, Pillar, Result, SolarTerm, Stem,
};
