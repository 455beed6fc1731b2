//! Four Pillars chart calculation on top of the lunisolar converter.

pub mod format;
pub mod hour;
pub mod luck;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use tracing::{debug, instrument};

use crate::calendar::LunisolarConverter;
use crate::config::ChartConfig;
use crate::types::{
    BaziChart, BirthInput, CalendarError, FourPillars, Gender, LuckCycleResult, LunarDetails,
    Result,
};

pub use format::{day_name, lunar_date_label, month_name};
pub use hour::{hour_pillar, hour_pillar_for_label};
pub use luck::{
    da_yun_sequence, luck_cycle_direction, starting_luck_age, StartingAge, LUCK_CYCLE_COUNT,
};

#[derive(Debug, Clone)]
pub struct ChartCalculator {
    converter: LunisolarConverter,
    config: ChartConfig,
}

impl Default for ChartCalculator {
    fn default() -> Self {
        Self {
            converter: LunisolarConverter::default(),
            config: ChartConfig::v0(),
        }
    }
}

impl ChartCalculator {
    /// Validate `config` and check the embedded tables against its
    /// dataset version.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        let converter = LunisolarConverter::default();
        let version = converter.tables().verify(&config.dataset_version)?;
        debug!(dataset = version.as_str(), "chart calculator ready");
        Ok(Self { converter, config })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn converter(&self) -> &LunisolarConverter {
        &self.converter
    }

    /// Direction, starting age and luck pillars for an already converted date.
    pub fn luck_cycles(&self, details: &LunarDetails, gender: Gender) -> Result<LuckCycleResult> {
        let direction = luck_cycle_direction(details.lunar.year, gender);

        let date = details.solar_date;
        let days = self.converter.nearest_solar_term_distance(
            date.year(),
            date.month(),
            date.day(),
            direction,
        )?;
        let start = starting_luck_age(days, details.lunar.month);

        let month_index = details.month_pillar.cycle_index().ok_or_else(|| {
            CalendarError::InvariantViolation(format!(
                "month pillar {} is not in the sexagenary cycle",
                details.month_pillar
            ))
        })?;

        Ok(LuckCycleResult {
            start_age: start.years,
            start_month: start.months,
            label: start.label,
            direction,
            cycles: da_yun_sequence(month_index, direction, LUCK_CYCLE_COUNT),
        })
    }

    #[instrument(skip(self, input), fields(birth_date = %input.birth_date, birth_time = %input.birth_time))]
    pub fn calculate(&self, input: &BirthInput) -> Result<BaziChart> {
        let date = parse_birth_date(&input.birth_date)?;
        let time = parse_birth_time(&input.birth_time)?;
        if input.birth_location.trim().is_empty() {
            return Err(CalendarError::malformed(
                "birthLocation",
                input.birth_location.as_str(),
            ));
        }
        let gender = input.gender.unwrap_or(self.config.default_gender);

        let details = self
            .converter
            .solar_to_lunar(date.year(), date.month(), date.day())?;
        let luck = self.luck_cycles(&details, gender)?;
        let hour = hour_pillar(time.hour(), details.day_pillar.stem)?;

        let bazi = FourPillars {
            year: details.year_pillar,
            month: details.month_pillar,
            day: details.day_pillar,
            hour,
        };
        let lunar_date = lunar_date_label(details.year_pillar, &details.lunar);

        debug!(
            %lunar_date,
            direction = ?luck.direction,
            start_age = luck.start_age,
            "chart calculated"
        );

        Ok(BaziChart {
            user_input: input.clone(),
            solar_time: input.birth_time.clone(),
            lunar_date,
            bazi,
            start_age: luck.start_age,
            direction: luck.direction,
            da_yun: luck.cycles.iter().map(ToString::to_string).collect(),
        })
    }

    /// JSON in, JSON out.
    pub fn calculate_json(&self, input: &str) -> Result<String> {
        let input = BirthInput::from_json(input)?;
        self.calculate(&input)?.to_json()
    }
}

fn parse_birth_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::malformed("birthDate", value));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| CalendarError::malformed("birthDate", value))
}

fn parse_birth_time(value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::malformed("birthTime", value));
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| CalendarError::malformed("birthTime", value))
}
