pub mod app_state;
pub mod clock_state;
pub mod log_action;
pub mod log_entry;
pub mod log_filter;
pub mod status;
pub mod wire_time;
