// Portfolio access: loading with demo fallback, photo replacement, page and API handlers.

pub mod handlers;
pub mod loader;
pub mod photo;

pub use loader::RecordSource;
