//! Major luck cycles (大运): direction, starting age and the pillar sequence.

use crate::types::{Direction, Gender, Pillar};

/// Number of major luck cycles in a chart.
pub const LUCK_CYCLE_COUNT: usize = 8;

/// Yang-year males and yin-year females run forward, the rest backward.
///
/// Parity is taken from the lunar year number, so an even year is yang.
pub fn luck_cycle_direction(lunar_year: i32, gender: Gender) -> Direction {
    if (i64::from(lunar_year).rem_euclid(2) + gender.code()) % 2 == 1 {
        Direction::Backward
    } else {
        Direction::Forward
    }
}

/// Age at which the first luck cycle begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingAge {
    pub years: u32,
    pub months: u32,
    pub label: String,
}

/// Three days to the term count as one year of age, each remaining day as
/// four months; the lunar month of birth is added to the months and a
/// remainder of 13 or more rolls into the next year.
///
/// A result below one year is raised to 1 and labelled `"1岁行运"`.
pub fn starting_luck_age(days_to_term: u32, lunar_month: u32) -> StartingAge {
    let mut years = days_to_term / 3;
    let mut months = (days_to_term % 3) * 4 + lunar_month;
    if months >= 13 {
        years += 1;
        months -= 12;
    }

    if years == 0 {
        return StartingAge {
            years: 1,
            months,
            label: "1岁行运".to_string(),
        };
    }

    StartingAge {
        years,
        months,
        label: format!("{years}岁{months}月行运"),
    }
}

/// The `count` pillars after (or before) `month_index` in the 60-cycle.
///
/// The month pillar itself is never part of the sequence.
pub fn da_yun_sequence(month_index: usize, direction: Direction, count: usize) -> Vec<Pillar> {
    let start = month_index as i64;
    (1..=count as i64)
        .map(|i| Pillar::from_cycle(start + direction.step() * i))
        .collect()
}
