/// Reserved district code meaning "no district filter". Must never appear in
/// the address table as a real district.
pub const ALL_DISTRICTS: &str = "All";

pub const HEADCOUNT_MIN: u8 = 1;
pub const HEADCOUNT_MAX: u8 = 4;

/// Length of the default booking window opened at session start.
pub const DEFAULT_RANGE_DAYS: u64 = 4;
