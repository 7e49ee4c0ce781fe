use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use cron::Schedule;

use orderpart_error::{Result, internal_err};

/// 시간 소스
///
/// 날짜 계산과 cron 평가는 모두 구현체의 로컬 시간대를 따른다.
pub trait Clock: Send + Sync {
    /// 현재 시각
    fn now(&self) -> DateTime<Utc>;

    /// 로컬 기준 오늘 날짜
    fn today(&self) -> NaiveDate;

    /// `date` 의 로컬 00:00 을 절대시각으로 변환
    fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<Utc>>;

    /// `after` 이후 로컬 시간대 기준 다음 cron 실행 시각
    fn next_fire(&self, schedule: &Schedule, after: DateTime<Utc>) -> Option<DateTime<Utc>>;
}

/// 프로세스 로컬 시간대를 쓰는 시계
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn start_of_day(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        local_midnight(&Local, date)
    }

    fn next_fire(&self, schedule: &Schedule, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        schedule
            .after(&after.with_timezone(&Local))
            .next()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// 시간대 `tz` 에서 `date` 의 자정
///
/// 자정이 서머타임 전환으로 존재하지 않으면 그 다음 유효한 정시를 쓴다.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<DateTime<Utc>> {
    let midnight = date.and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .map(|t| t.with_timezone(&Utc))
        .ok_or_else(|| internal_err(format!("{date} 의 로컬 자정을 계산할 수 없음")))
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn midnight_in_fixed_offset() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let instant = local_midnight(&kst, date).unwrap();

        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 2, 29, 15, 0, 0).unwrap());
    }

    #[test]
    fn system_clock_midnight_is_local_day_start() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let instant = SystemClock.start_of_day(date).unwrap();

        let local = instant.with_timezone(&Local);
        assert_eq!(local.date_naive(), date);
    }
}
