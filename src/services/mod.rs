pub mod render;
pub mod schedule;
pub mod thai_date;
pub mod timerange;
