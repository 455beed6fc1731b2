//! Traditional names for lunar months and days.

use crate::types::{LunarDate, Pillar};

/// Chinese numerals; index 0 is 十 so that `d % 10` indexes day names.
const NUMERALS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Month name including 月. Months 1, 11 and 12 are 正月, 冬月 and 腊月;
/// a leap month is prefixed with 闰.
///
/// ```
/// use bazi_core::chart::format::month_name;
///
/// assert_eq!(month_name(11, false).as_deref(), Some("冬月"));
/// assert_eq!(month_name(6, true).as_deref(), Some("闰六月"));
/// assert_eq!(month_name(13, false), None);
/// ```
pub fn month_name(month: u32, is_leap: bool) -> Option<String> {
    let base = match month {
        1 => "正",
        2..=10 => NUMERALS[(month % 10) as usize],
        11 => "冬",
        12 => "腊",
        _ => return None,
    };
    let prefix = if is_leap { "闰" } else { "" };
    Some(format!("{prefix}{base}月"))
}

/// Day name: 初一..初十, 十一..十九, 二十, 廿一..廿九, 三十.
pub fn day_name(day: u32) -> Option<String> {
    let tens = match day {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => return None,
    };
    Some(format!("{tens}{}", NUMERALS[(day % 10) as usize]))
}

/// `"{year pillar}年 {month}{day}"`, e.g. `"己巳年 腊月初五"`.
pub fn lunar_date_label(year_pillar: Pillar, lunar: &LunarDate) -> String {
    let month = month_name(lunar.month, lunar.is_leap_month)
        .unwrap_or_else(|| format!("{}月", lunar.month));
    let day = day_name(lunar.day).unwrap_or_else(|| lunar.day.to_string());
    format!("{year_pillar}年 {month}{day}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Branch, Stem};

    #[test]
    fn month_names() {
        let names: Vec<String> = (1..=12).filter_map(|m| month_name(m, false)).collect();
        assert_eq!(
            names,
            [
                "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月",
                "冬月", "腊月"
            ]
        );
        assert_eq!(month_name(0, false), None);
        assert_eq!(month_name(1, true).as_deref(), Some("闰正月"));
    }

    #[test]
    fn day_names() {
        assert_eq!(day_name(1).as_deref(), Some("初一"));
        assert_eq!(day_name(10).as_deref(), Some("初十"));
        assert_eq!(day_name(11).as_deref(), Some("十一"));
        assert_eq!(day_name(19).as_deref(), Some("十九"));
        assert_eq!(day_name(20).as_deref(), Some("二十"));
        assert_eq!(day_name(21).as_deref(), Some("廿一"));
        assert_eq!(day_name(29).as_deref(), Some("廿九"));
        assert_eq!(day_name(30).as_deref(), Some("三十"));
        assert_eq!(day_name(0), None);
        assert_eq!(day_name(31), None);
    }

    #[test]
    fn full_label() {
        let lunar = LunarDate {
            year: 1989,
            month: 12,
            day: 5,
            is_leap_month: false,
        };
        let year = Pillar::new(Stem::Ji, Branch::Si);
        assert_eq!(lunar_date_label(year, &lunar), "己巳年 腊月初五");

        let leap = LunarDate {
            year: 2017,
            month: 6,
            day: 1,
            is_leap_month: true,
        };
        let year = Pillar::new(Stem::Ding, Branch::You);
        assert_eq!(lunar_date_label(year, &leap), "丁酉年 闰六月初一");
    }
}
