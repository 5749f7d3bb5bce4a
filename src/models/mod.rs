pub mod candidate;
pub mod client;
pub mod hour_log_entry;
pub mod payment_status;
pub mod period;
pub mod summary;
pub mod time_value;
pub mod work_record;
