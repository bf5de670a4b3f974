pub mod config;
pub mod engine;
pub mod leet;
pub mod types;
