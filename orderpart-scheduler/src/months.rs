use chrono::{Datelike, Days, Months, NaiveDate};

use orderpart_error::{Result, internal_err};

/// 같은 달의 1일
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// 다음 달 1일
pub fn first_day_of_next_month(date: NaiveDate) -> Result<NaiveDate> {
    first_day_of_month(date)
        .checked_add_months(Months::new(1))
        .ok_or_else(|| internal_err(format!("{date} 의 다음달을 계산할 수 없음")))
}

/// `months` 달 전의 같은 날
///
/// 해당 일이 없는 달이면 그 달의 마지막 날로 맞춘다 (3/31 -> 2/29).
pub fn months_before(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_sub_months(Months::new(months))
        .ok_or_else(|| internal_err(format!("{date} 의 {months}개월 전을 계산할 수 없음")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_month_starts_on_first() {
        assert_eq!(first_day_of_next_month(ymd(2024, 5, 3)).unwrap(), ymd(2024, 6, 1));
        assert_eq!(first_day_of_next_month(ymd(2024, 1, 31)).unwrap(), ymd(2024, 2, 1));
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(first_day_of_next_month(ymd(2024, 12, 3)).unwrap(), ymd(2025, 1, 1));
    }

    #[test]
    fn months_before_keeps_day_of_month() {
        assert_eq!(months_before(ymd(2024, 3, 15), 1).unwrap(), ymd(2024, 2, 15));
        assert_eq!(months_before(ymd(2024, 3, 15), 2).unwrap(), ymd(2024, 1, 15));
        assert_eq!(months_before(ymd(2024, 1, 10), 2).unwrap(), ymd(2023, 11, 10));
    }

    #[test]
    fn months_before_clamps_to_month_end() {
        assert_eq!(months_before(ymd(2024, 3, 31), 1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(months_before(ymd(2023, 5, 31), 1).unwrap(), ymd(2023, 4, 30));
    }

    #[test]
    fn first_day_of_month_truncates() {
        assert_eq!(first_day_of_month(ymd(2024, 2, 29)), ymd(2024, 2, 1));
        assert_eq!(first_day_of_month(ymd(2024, 2, 1)), ymd(2024, 2, 1));
    }
}
