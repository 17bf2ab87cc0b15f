pub mod cli;
pub mod config;
pub mod errors;
pub mod mongo;
pub mod provision;
pub mod services;
pub mod types;
pub mod utils;
