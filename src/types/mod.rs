pub mod chart;
pub mod error;
pub mod lunar;
pub mod pillar;

pub use chart::{BaziChart, BirthInput, Direction, Gender, LuckCycleResult};
pub use error::{CalendarError, Result};
pub use lunar::{LunarDate, LunarDetails, SolarTerm};
pub use pillar::{Branch, FourPillars, Pillar, Stem};
