/// 테이블 생성 쿼리
pub const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS user_orders (
        order_id BIGINT GENERATED ALWAYS AS IDENTITY,
        user_id BIGINT NOT NULL,
        amount DOUBLE PRECISION NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        PRIMARY KEY (order_id, created_at)
    ) PARTITION BY RANGE (created_at)";

/// 월 파티션 생성 함수
/// 입력 날짜가 속한 달의 `user_orders_YYYY_MM` 파티션을 없을때만 생성
pub const CREATE_PARTITION_FUNCTION: &str = "
    CREATE OR REPLACE FUNCTION create_user_orders_partition(p_month DATE)
    RETURNS VOID AS $$
    DECLARE
        start_date DATE := date_trunc('month', p_month)::date;
        end_date DATE := (date_trunc('month', p_month) + INTERVAL '1 month')::date;
        partition_name TEXT := format('user_orders_%s', to_char(start_date, 'YYYY_MM'));
    BEGIN
        EXECUTE format(
            'CREATE TABLE IF NOT EXISTS %I PARTITION OF user_orders FOR VALUES FROM (%L) TO (%L)',
            partition_name, start_date, end_date
        );
    END;
    $$ LANGUAGE plpgsql";

/// 파티션 생성 함수 호출
pub const CALL_CREATE_PARTITION: &str = "SELECT create_user_orders_partition($1::date)";

/// 주문 저장
pub const INSERT_ORDER: &str = "
    INSERT INTO user_orders (user_id, amount, created_at)
    VALUES ($1, $2, $3)
    RETURNING order_id, user_id, amount, created_at";

/// 생성시각 범위 조회 (양끝 포함)
pub const SELECT_BY_CREATED_AT_BETWEEN: &str = "
    SELECT order_id, user_id, amount, created_at
    FROM user_orders
    WHERE created_at BETWEEN $1 AND $2
    ORDER BY created_at, order_id";

