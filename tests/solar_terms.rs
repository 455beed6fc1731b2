use bazi_core::calendar::LunisolarConverter;
use bazi_core::{CalendarError, Direction, Pillar, TABLES};

#[test]
fn term_days_for_known_years() {
    let converter = LunisolarConverter::default();
    let days: Vec<u32> = (1..=6)
        .map(|n| converter.solar_term_day(1990, n).unwrap())
        .collect();
    assert_eq!(days, [5, 20, 4, 19, 6, 21]);

    // 立春
    assert_eq!(converter.solar_term_day(2024, 3).unwrap(), 4);
    assert_eq!(converter.solar_term_day(2025, 3).unwrap(), 3);
    // 冬至 2021 falls a few minutes after midnight Beijing time.
    assert_eq!(converter.solar_term_day(2021, 24).unwrap(), 21);
}

#[test]
fn term_index_out_of_range() {
    let converter = LunisolarConverter::default();
    assert_eq!(
        converter.solar_term_day(2000, 0),
        Err(CalendarError::OutOfRange {
            field: "solar term index",
            value: 0
        })
    );
    assert!(converter.solar_term_day(2000, 25).is_err());
    assert!(converter.solar_term_day(2101, 1).is_err());
}

#[test]
fn term_days_fall_in_their_half_month() {
    let converter = LunisolarConverter::default();
    for year in 1900..=2100 {
        for n in 1..=24 {
            let day = converter.solar_term_day(year, n).unwrap();
            if n % 2 == 1 {
                assert!((3..=9).contains(&day), "{year} term {n} on day {day}");
            } else {
                assert!((18..=24).contains(&day), "{year} term {n} on day {day}");
            }
        }
    }
}

#[test]
fn term_detection() {
    let converter = LunisolarConverter::default();

    let li_chun = converter.solar_to_lunar(2024, 2, 4).unwrap();
    assert!(li_chun.is_term());
    let term = li_chun.term.unwrap();
    assert_eq!(term.index, 3);
    assert_eq!(term.name, "立春");

    let yu_shui = converter.solar_to_lunar(2024, 2, 19).unwrap().term.unwrap();
    assert_eq!(yu_shui.name, "雨水");

    let xiao_han = converter.solar_to_lunar(1990, 1, 5).unwrap().term.unwrap();
    assert_eq!((xiao_han.index, xiao_han.name), (1, "小寒"));

    assert!(!converter.solar_to_lunar(2024, 2, 5).unwrap().is_term());
}

#[test]
fn month_pillar_turns_on_first_term() {
    let converter = LunisolarConverter::default();
    let before = converter.solar_to_lunar(2024, 2, 3).unwrap();
    let on = converter.solar_to_lunar(2024, 2, 4).unwrap();
    assert_eq!(before.month_pillar, Pillar::from_label("乙丑").unwrap());
    assert_eq!(on.month_pillar, Pillar::from_label("丙寅").unwrap());

    let before = converter.solar_to_lunar(1990, 1, 4).unwrap();
    let on = converter.solar_to_lunar(1990, 1, 5).unwrap();
    assert_eq!(before.month_pillar.to_string(), "丙子");
    assert_eq!(on.month_pillar.to_string(), "丁丑");
}

#[test]
fn nearest_term_distance() {
    let converter = LunisolarConverter::default();

    // On the term itself the distance is zero in both directions.
    assert_eq!(
        converter
            .nearest_solar_term_distance(2024, 2, 4, Direction::Forward)
            .unwrap(),
        0
    );
    assert_eq!(
        converter
            .nearest_solar_term_distance(2024, 2, 4, Direction::Backward)
            .unwrap(),
        0
    );

    // Feb 3 walks back to 小寒 on Jan 6, or forward one day to 立春.
    assert_eq!(
        converter
            .nearest_solar_term_distance(2024, 2, 3, Direction::Backward)
            .unwrap(),
        28
    );
    assert_eq!(
        converter
            .nearest_solar_term_distance(2024, 2, 3, Direction::Forward)
            .unwrap(),
        1
    );

    assert_eq!(
        converter
            .nearest_solar_term_distance(1990, 1, 1, Direction::Forward)
            .unwrap(),
        4
    );
    assert_eq!(
        converter
            .nearest_solar_term_distance(1990, 1, 1, Direction::Backward)
            .unwrap(),
        25
    );
    // Crosses into the next year's 小寒.
    assert_eq!(
        converter
            .nearest_solar_term_distance(2024, 12, 20, Direction::Forward)
            .unwrap(),
        16
    );
}

#[test]
fn nearest_term_at_table_edges() {
    let converter = LunisolarConverter::default();
    let err = converter
        .nearest_solar_term_distance(1900, 1, 2, Direction::Backward)
        .unwrap_err();
    assert!(matches!(err, CalendarError::OutOfRange { field: "year", .. }));

    // After 大雪 2100 the next term is 小寒 on 2101-01-05.
    assert_eq!(
        converter
            .nearest_solar_term_distance(2100, 12, 31, Direction::Forward)
            .unwrap(),
        5
    );
    assert_eq!(
        converter
            .nearest_solar_term_distance(2100, 12, 20, Direction::Forward)
            .unwrap(),
        16
    );
    assert_eq!(
        converter
            .nearest_solar_term_distance(2100, 12, 7, Direction::Forward)
            .unwrap(),
        0
    );
}

#[test]
fn month_opening_terms() {
    assert_eq!(TABLES.month_opening_term_day(2024, 2).unwrap(), 4);
    assert_eq!(TABLES.month_opening_term_day(1990, 1).unwrap(), 5);
    assert_eq!(TABLES.month_opening_term_day(2101, 1).unwrap(), 5);
    assert!(TABLES.month_opening_term_day(2101, 2).is_err());
    assert!(TABLES.month_opening_term_day(1899, 12).is_err());
    assert!(TABLES.month_opening_term_day(2000, 13).is_err());
}
