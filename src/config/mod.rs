pub mod config;
pub mod loader;
pub mod schema;

pub use config::{Config, Options};
pub use schema::FileConfig;
