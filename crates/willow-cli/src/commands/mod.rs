pub mod breathe;
pub mod config;
pub mod patterns;
pub mod quote;
