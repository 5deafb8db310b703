pub mod cache;
pub mod constants;
pub mod services;
pub mod testing;
