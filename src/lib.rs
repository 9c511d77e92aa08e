//! Client library for the Arpio disaster recovery API
//!
//! The [`client`] module holds the typed API surface: applications, recovery
//! points and the resources staged in them. [`codec`] implements the
//! discriminator-keyed JSON encoding shared by selection rules and staged
//! resource extras.

pub mod client;
pub mod codec;
pub mod config;
pub mod error;

pub use client::{AppApi, ArpioApi, ArpioClient, ClientSettings, RecoveryPointApi};
pub use error::{ApiError, ConfigError, Error, Result};
