pub mod arc;
pub mod config;
