pub mod config;
pub mod pipeline;
pub mod sweep;
pub mod types;
