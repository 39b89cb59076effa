// Portfolio Generation: extraction (simulated), identifier allocation, persistence.
// Extraction goes through the ProfileExtractor trait only.

pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod ids;
