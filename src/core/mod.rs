pub mod edit;
pub mod free_time;
pub mod gaps;
pub mod schedule;
