//! ECO Q-Net Common Library
//!
//! CLIとWeb(WASM)で共有される型とダッシュボードロジック

pub mod types;
pub mod error;
pub mod recommendations;
pub mod backend;
pub mod simulated;
pub mod presenter;
pub mod dashboard;
pub mod upload;

pub use types::{AnalysisResult, Category, Priority, ResultSource};
pub use error::{Error, Result};
pub use recommendations::generate_recommendations;
pub use backend::{
    BackendContract, DEFAULT_API_URL, DEFAULT_ESCALATION_FIELD, FILE_FIELD,
    parse_predict_response, parse_predict_value, predict_url,
};
pub use simulated::{
    FallbackPolicy, SIMULATED_SCENARIO_COUNT, recover, scenario_index, simulated_result,
};
pub use presenter::{PriorityConfig, PriorityIcon, confidence_percent, meter_width_percent, priority_config};
pub use dashboard::{Dashboard, DashboardState, TransitionError, UploadTicket};
pub use upload::{is_image_media_type, media_type_for_extension};
