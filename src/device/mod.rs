pub mod display;
pub mod loader;
pub mod schema;

pub use schema::{Column, ColumnSet, DeviceRecord, DeviceTable};
