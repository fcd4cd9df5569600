pub mod exporter;
pub mod format;

pub use exporter::export;
pub use format::ExportFormat;
