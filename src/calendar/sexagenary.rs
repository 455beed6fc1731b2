//! Arithmetic over the 60-element stem/branch cycle.

use crate::tables::ANIMALS;
use crate::types::{Branch, Pillar, Stem};

pub const CYCLE_LENGTH: i64 = 60;

/// Pillar at `offset` in the cycle; `sexagenary(n) == sexagenary(n + 60)`.
pub fn sexagenary(offset: i64) -> Pillar {
    Pillar::from_cycle(offset)
}

/// Year pillar of a lunar year, counted so that 4 CE is 甲子.
pub fn sexagenary_year(lunar_year: i32) -> Pillar {
    let mut stem_key = (lunar_year - 3).rem_euclid(10);
    if stem_key == 0 {
        stem_key = 10;
    }
    let mut branch_key = (lunar_year - 3).rem_euclid(12);
    if branch_key == 0 {
        branch_key = 12;
    }
    Pillar::new(
        Stem::ALL[(stem_key - 1) as usize],
        Branch::ALL[(branch_key - 1) as usize],
    )
}

/// Zodiac animal of a lunar year.
pub fn animal_for_year(year: i32) -> &'static str {
    ANIMALS[(year - 4).rem_euclid(12) as usize]
}

/// The 60 pillars in cycle order, starting at 甲子.
pub fn cycle() -> impl Iterator<Item = Pillar> {
    (0..CYCLE_LENGTH).map(Pillar::from_cycle)
}
