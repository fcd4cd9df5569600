pub mod librenms_client;
pub mod response;

pub use librenms_client::{LibreNMSClient, fetch_devices};
pub use response::ApiResponse;
