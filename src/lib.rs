pub mod cli;
pub mod client;
pub mod config;
pub mod device;
pub mod error;
pub mod export;
pub mod runner;

pub use error::{Error, Result};
