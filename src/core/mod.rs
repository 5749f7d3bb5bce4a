pub mod backup;
pub mod calculator;
pub mod entry;
pub mod log;
pub mod logic;
pub mod payment;
