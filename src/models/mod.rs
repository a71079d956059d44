pub mod row;
pub mod weekday;
