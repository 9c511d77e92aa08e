//! Display model implementations for table and JSON output

mod app;
mod common;
mod recovery_point;
mod staged_resource;

pub use app::AppDisplay;
pub use recovery_point::RecoveryPointDisplay;
pub use staged_resource::StagedResourceDisplay;
