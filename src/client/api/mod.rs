//! API trait definitions split by resource
//!
//! - [`AppApi`] - Application CRUD and name lookup
//! - [`RecoveryPointApi`] - Recovery points and their staged resources
//!
//! The [`ArpioApi`](super::ArpioApi) super-trait combines both.

mod app;
mod recovery_point;

pub use app::{AppApi, find_app_by_name};
pub use recovery_point::RecoveryPointApi;
