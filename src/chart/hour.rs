use tracing::warn;

use crate::tables::HOUR_BRANCHES;
use crate::types::{Branch, CalendarError, Pillar, Result, Stem};

/// Hour pillar for a clock hour (0..=23) on a day with stem `day_stem`.
///
/// The branch comes from [`HOUR_BRANCHES`], so 23:00 is 子 like 00:00. The
/// stem starts from the day stem's group of five: 甲/己 days open 子 hour
/// with 甲, 乙/庚 with 丙, and so on.
pub fn hour_pillar(hour: u32, day_stem: Stem) -> Result<Pillar> {
    let branch_index = HOUR_BRANCHES
        .get(hour as usize)
        .copied()
        .ok_or_else(|| CalendarError::invalid("hour", hour))?;

    let stem_index = (day_stem.index() % 5) * 2 + branch_index;
    Ok(Pillar::new(
        Stem::from_index(stem_index as i64),
        Branch::ALL[branch_index],
    ))
}

/// Same as [`hour_pillar`] but takes the day stem as its label.
///
/// An unknown label is counted as 甲.
pub fn hour_pillar_for_label(hour: u32, day_stem: &str) -> Result<Pillar> {
    let stem = Stem::from_label(day_stem).unwrap_or_else(|| {
        warn!(day_stem, "unknown day stem, counting hour stems from 甲");
        Stem::Jia
    });
    hour_pillar(hour, stem)
}
