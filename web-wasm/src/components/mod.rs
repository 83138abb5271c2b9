pub mod analysis_results;
pub mod confidence_meter;
pub mod header;
pub mod upload_area;
