use std::ops::Range;

use chrono::NaiveDate;
use rand::Rng;

use orderpart_db::NewUserOrder;
use orderpart_error::Result;

use crate::clock::Clock;
use crate::months::first_day_of_month;

/// 샘플 주문 user_id 범위
pub const USER_ID_RANGE: Range<i64> = 1_000..10_000;
/// 샘플 주문 금액 범위
pub const AMOUNT_RANGE: Range<f64> = 1_000.0..3_000.0;

/// `month` 에 해당하는 샘플 주문 생성
///
/// created_at 은 그 달 1일의 로컬 자정이다.
pub fn generate_user_order<R: Rng>(
    rng: &mut R,
    clock: &dyn Clock,
    month: NaiveDate,
) -> Result<NewUserOrder> {
    Ok(NewUserOrder {
        user_id: rng.gen_range(USER_ID_RANGE),
        amount: rng.gen_range(AMOUNT_RANGE),
        created_at: clock.start_of_day(first_day_of_month(month))?,
    })
}
