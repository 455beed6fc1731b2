use std::collections::HashSet;

use bazi_core::calendar::{
    animal_for_year, cycle, day_offset_from_epoch, sexagenary, sexagenary_year,
    LunisolarConverter, CYCLE_LENGTH,
};
use bazi_core::{Branch, Pillar, Stem};
use chrono::{Datelike, Duration, NaiveDate};

#[test]
fn cycle_has_sixty_distinct_pillars() {
    let pillars: Vec<Pillar> = cycle().collect();
    assert_eq!(pillars.len(), 60);
    assert_eq!(pillars[0].to_string(), "甲子");
    assert_eq!(pillars[1].to_string(), "乙丑");
    assert_eq!(pillars[10].to_string(), "甲戌");
    assert_eq!(pillars[59].to_string(), "癸亥");

    let unique: HashSet<Pillar> = pillars.iter().copied().collect();
    assert_eq!(unique.len(), 60);

    for (i, pillar) in pillars.iter().enumerate() {
        assert_eq!(pillar.cycle_index(), Some(i));
    }
}

#[test]
fn sexagenary_has_period_sixty() {
    for offset in -120..=120 {
        assert_eq!(sexagenary(offset), sexagenary(offset + CYCLE_LENGTH));
        assert_eq!(
            sexagenary(offset).stem,
            Stem::from_index(offset),
            "offset {offset}"
        );
        assert_eq!(sexagenary(offset).branch, Branch::from_index(offset));
    }
}

#[test]
fn mismatched_parity_is_not_in_cycle() {
    let pillar = Pillar::new(Stem::Jia, Branch::Chou);
    assert_eq!(pillar.cycle_index(), None);
}

#[test]
fn pillar_labels() {
    let pillar = Pillar::from_label("丙寅").unwrap();
    assert_eq!(pillar, Pillar::new(Stem::Bing, Branch::Yin));
    assert_eq!(pillar.to_string(), "丙寅");

    assert_eq!(Pillar::from_label("甲"), None);
    assert_eq!(Pillar::from_label("甲子丑"), None);
    assert_eq!(Pillar::from_label("子甲"), None);
}

#[test]
fn sexagenary_years() {
    assert_eq!(sexagenary_year(1984).to_string(), "甲子");
    assert_eq!(sexagenary_year(1989).to_string(), "己巳");
    assert_eq!(sexagenary_year(1900).to_string(), "庚子");
    assert_eq!(sexagenary_year(2024).to_string(), "甲辰");
    assert_eq!(sexagenary_year(2043).to_string(), "癸亥");
    for year in 1900..=2100 {
        assert_eq!(sexagenary_year(year), sexagenary_year(year + 60));
    }
}

#[test]
fn zodiac_animals() {
    assert_eq!(animal_for_year(1900), "鼠");
    assert_eq!(animal_for_year(1989), "蛇");
    assert_eq!(animal_for_year(2024), "龙");
    assert_eq!(animal_for_year(2031), "猪");
}

#[test]
fn day_pillars() {
    // 1900-01-01 is a 甲戌 day.
    let offset = day_offset_from_epoch(1900, 1, 1).unwrap();
    assert_eq!(sexagenary(offset + 9).to_string(), "甲戌");

    let converter = LunisolarConverter::default();
    let day = |y, m, d| converter.solar_to_lunar(y, m, d).unwrap().day_pillar.to_string();
    assert_eq!(day(1900, 1, 31), "甲辰");
    assert_eq!(day(1990, 1, 1), "丙寅");
    assert_eq!(day(2000, 1, 1), "戊午");
}

#[test]
fn day_pillar_repeats_every_sixty_days() {
    let converter = LunisolarConverter::default();
    let mut date = NaiveDate::from_ymd_opt(1900, 1, 31).unwrap();
    let end = NaiveDate::from_ymd_opt(2100, 10, 1).unwrap();
    while date <= end {
        let later = date + Duration::days(60);
        let a = converter
            .solar_to_lunar(date.year(), date.month(), date.day())
            .unwrap();
        let b = converter
            .solar_to_lunar(later.year(), later.month(), later.day())
            .unwrap();
        assert_eq!(a.day_pillar, b.day_pillar, "{date}");
        date += Duration::days(97);
    }
}

#[test]
fn year_pillar_changes_at_li_chun() {
    let converter = LunisolarConverter::default();

    // After the lunar new year but before 立春.
    let details = converter.solar_to_lunar(2025, 1, 29).unwrap();
    assert_eq!(details.lunar.year, 2025);
    assert_eq!(details.sexagenary_year_number, 2024);
    assert_eq!(details.year_pillar.to_string(), "甲辰");
    assert_eq!(details.animal, "蛇");

    let details = converter.solar_to_lunar(2024, 2, 10).unwrap();
    assert_eq!(details.sexagenary_year_number, 2024);
    assert_eq!(details.year_pillar.to_string(), "甲辰");

    let details = converter.solar_to_lunar(1990, 1, 1).unwrap();
    assert_eq!(details.year_pillar.to_string(), "己巳");
}
