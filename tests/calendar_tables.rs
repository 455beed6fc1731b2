use bazi_core::calendar::LunisolarConverter;
use bazi_core::tables::dataset::DATASET_SHA256;
use bazi_core::tables::{DatasetVersion, StaticTables, FIRST_YEAR, LAST_YEAR, TABLES};
use bazi_core::CalendarError;

#[test]
fn embedded_tables_hash_to_pinned_version() {
    let fingerprint = TABLES.fingerprint();
    assert_eq!(fingerprint.as_str(), DATASET_SHA256);
    assert!(fingerprint.as_str().starts_with("sha256:"));
    assert_eq!(fingerprint.as_str().len(), "sha256:".len() + 64);

    let verified = TABLES.verify(&DatasetVersion::pinned()).unwrap();
    assert_eq!(verified, fingerprint);
}

#[test]
fn verify_rejects_foreign_version() {
    let err = TABLES
        .verify(&DatasetVersion::new("sha256:0000"))
        .unwrap_err();
    assert!(matches!(err, CalendarError::InvariantViolation(_)));
}

#[test]
fn table_range_is_1900_to_2100() {
    assert!(StaticTables::contains_year(FIRST_YEAR));
    assert!(StaticTables::contains_year(LAST_YEAR));
    assert!(!StaticTables::contains_year(1899));
    assert!(!StaticTables::contains_year(2101));

    assert_eq!(
        TABLES.year_info(1899),
        Err(CalendarError::OutOfRange {
            field: "year",
            value: 1899
        })
    );
    assert!(TABLES.solar_term_days(2101).is_err());
}

#[test]
fn lunar_year_lengths_are_plausible() {
    let converter = LunisolarConverter::default();
    for year in FIRST_YEAR..=LAST_YEAR {
        let length = converter.lunar_year_length(year).unwrap();
        assert!(
            (353..=385).contains(&length),
            "lunar year {year} has {length} days"
        );

        let leap = converter.leap_month(year).unwrap();
        if leap == 0 {
            assert!(length <= 355, "common year {year} has {length} days");
            assert_eq!(converter.leap_month_length(year).unwrap(), 0);
        } else {
            assert!(length >= 383, "leap year {year} has {length} days");
            assert!(leap <= 12);
        }

        let months = converter.months(year).unwrap();
        let total: u32 = months.iter().map(|m| m.days).sum();
        assert_eq!(total, length);
        assert_eq!(months.len(), if leap == 0 { 12 } else { 13 });
    }
}

#[test]
fn known_leap_months() {
    let converter = LunisolarConverter::default();
    assert_eq!(converter.leap_month(1900).unwrap(), 8);
    assert_eq!(converter.leap_month(2017).unwrap(), 6);
    assert_eq!(converter.leap_month(2020).unwrap(), 4);
    assert_eq!(converter.leap_month(2023).unwrap(), 2);
    assert_eq!(converter.leap_month(2033).unwrap(), 11);
    assert_eq!(converter.leap_month(2024).unwrap(), 0);

    assert_eq!(converter.leap_month_length(2017).unwrap(), 30);
    assert_eq!(converter.leap_month_length(2020).unwrap(), 29);

    assert_eq!(converter.lunar_year_length(1900).unwrap(), 384);
    assert_eq!(converter.lunar_year_length(2017).unwrap(), 384);
    assert_eq!(converter.lunar_year_length(2018).unwrap(), 354);
}

#[test]
fn month_mask_bit_order() {
    let converter = LunisolarConverter::default();
    // 1900 = 0x04bd8: months 1..=12 read from bit 15 down to bit 4.
    let lengths: Vec<u32> = (1..=12)
        .map(|m| converter.month_length(1900, m).unwrap())
        .collect();
    assert_eq!(lengths, [29, 30, 29, 29, 30, 29, 30, 30, 30, 30, 29, 30]);

    let months = converter.months(1900).unwrap();
    assert_eq!((months[8].month, months[8].is_leap), (8, true));
    assert_eq!(months[8].days, 29);
}

#[test]
fn month_length_rejects_bad_month() {
    let converter = LunisolarConverter::default();
    assert_eq!(
        converter.month_length(2000, 0),
        Err(CalendarError::InvalidArgument {
            field: "month",
            value: 0
        })
    );
    assert!(converter.month_length(2000, 13).is_err());
    assert!(converter.lunar_month_length(2024, 3, true).is_err());
    assert_eq!(converter.lunar_month_length(2017, 6, true).unwrap(), 30);
}
