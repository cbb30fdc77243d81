pub mod audit;
pub mod clock;
pub mod log_store;
pub mod session;
pub mod timer;
