pub mod calculator;
pub mod date_range;
pub mod export_range;
