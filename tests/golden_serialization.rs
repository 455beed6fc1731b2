use bazi_core::{
    BaziChart, BirthInput, Branch, Direction, FourPillars, Gender, LunarDate,
    LunisolarConverter, Pillar, Stem,
};
use serde_json::Value;

fn pillar(label: &str) -> Pillar {
    Pillar::from_label(label).unwrap()
}

#[test]
fn golden_chart_key_order() {
    let chart = BaziChart {
        user_input: BirthInput::new(Gender::Male, "1990-01-01", "08:00", "Beijing"),
        solar_time: "08:00".to_string(),
        lunar_date: "己巳年 腊月初五".to_string(),
        bazi: FourPillars {
            year: pillar("己巳"),
            month: pillar("丙子"),
            day: pillar("丙寅"),
            hour: pillar("壬辰"),
        },
        start_age: 9,
        direction: Direction::Backward,
        da_yun: vec!["乙亥".to_string()],
    };

    let json_str = chart.to_json().unwrap();

    // "userInput" -> "solarTime" -> "lunarDate" -> "bazi" -> "startAge" -> "direction" -> "daYun"
    let keys = [
        "\"userInput\":",
        "\"solarTime\":",
        "\"lunarDate\":",
        "\"bazi\":",
        "\"startAge\":",
        "\"direction\":",
        "\"daYun\":",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json_str.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json_str}");

    // "year" -> "month" -> "day" -> "hour", each {"gan","zhi"}
    let bazi = &json_str[json_str.find("\"bazi\":").unwrap()..];
    let year = bazi.find("\"year\":").unwrap();
    let month = bazi.find("\"month\":").unwrap();
    let day = bazi.find("\"day\":").unwrap();
    let hour = bazi.find("\"hour\":").unwrap();
    assert!(year < month && month < day && day < hour);
    assert!(bazi.starts_with(r#""bazi":{"year":{"gan":"己","zhi":"巳"}"#));

    let parsed: Value = serde_json::from_str(&json_str).unwrap();
    let back: BaziChart = serde_json::from_value(parsed).unwrap();
    assert_eq!(back, chart);
}

#[test]
fn golden_input_serialization() {
    let input = BirthInput::new(Gender::Female, "2000-02-04", "00:30", "Shanghai");
    let json_str = serde_json::to_string(&input).unwrap();
    assert_eq!(
        json_str,
        r#"{"gender":"Female","birthDate":"2000-02-04","birthTime":"00:30","birthLocation":"Shanghai"}"#
    );
}

#[test]
fn golden_lunar_details_serialization() {
    let details = LunisolarConverter::default()
        .solar_to_lunar(2024, 2, 4)
        .unwrap();
    let value = serde_json::to_value(&details).unwrap();

    assert_eq!(value["solarDate"], "2024-02-04");
    assert_eq!(
        value["lunar"],
        serde_json::json!({"year": 2023, "month": 12, "day": 25, "isLeapMonth": false})
    );
    assert_eq!(value["monthPillar"]["gan"], "丙");
    assert_eq!(value["monthPillar"]["zhi"], "寅");
    assert_eq!(value["term"]["name"], "立春");
    assert_eq!(value["term"]["index"], 3);
}

#[test]
fn stems_and_branches_serialize_as_characters() {
    assert_eq!(serde_json::to_string(&Stem::Gui).unwrap(), "\"癸\"");
    assert_eq!(serde_json::to_string(&Branch::Hai).unwrap(), "\"亥\"");
    assert_eq!(
        serde_json::from_str::<Pillar>(r#"{"gan":"甲","zhi":"子"}"#).unwrap(),
        Pillar::new(Stem::Jia, Branch::Zi)
    );
    assert!(serde_json::from_str::<Stem>("\"X\"").is_err());

    let date = LunarDate {
        year: 2017,
        month: 6,
        day: 1,
        is_leap_month: true,
    };
    assert_eq!(
        serde_json::to_string(&date).unwrap(),
        r#"{"year":2017,"month":6,"day":1,"isLeapMonth":true}"#
    );
}
