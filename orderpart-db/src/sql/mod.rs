pub mod user_orders;
