//! Application API trait
//!
//! This trait covers application management:
//! - CRUD on applications in the client's account
//! - Lookup by display name, optionally waiting for the app to appear

use async_trait::async_trait;

use crate::client::models::{App, AppType};
use crate::client::poll::{PollPolicy, poll_until_found};
use crate::error::{ApiError, Result};

/// Application operations for the Arpio API
#[async_trait]
pub trait AppApi: Send + Sync {
    /// Account every application call is scoped to.
    fn account_id(&self) -> &str;

    /// Build an unsaved infrastructure-as-code app for this account.
    ///
    /// Nothing is sent to the service; use [`AppApi::create_app`] for that.
    fn new_app(&self) -> App {
        App {
            app_type: AppType::Terraform,
            ..App::new(self.account_id())
        }
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create an application. The returned app carries its service-assigned
    /// `app_id`.
    async fn create_app(&self, app: &App) -> Result<App>;

    /// List all applications, in the order the service returns them.
    async fn list_apps(&self) -> Result<Vec<App>>;

    /// Get an application by ID. `None` if it does not exist.
    async fn get_app(&self, app_id: &str) -> Result<Option<App>>;

    /// Update the mutable properties of an existing application.
    async fn update_app(&self, app: &App) -> Result<App>;

    /// Delete an application. Deleting a missing app succeeds.
    async fn delete_app(&self, app_id: &str) -> Result<()>;

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Get the one and only app with this name, or `None` if there is none.
    ///
    /// More than one app with the name is an error the operator must fix.
    async fn get_app_by_name(&self, name: &str) -> Result<Option<App>> {
        let apps = self.list_apps().await?;
        find_app_by_name(apps, name)
    }

    /// Like [`AppApi::get_app_by_name`], but keeps looking until the policy's
    /// timeout passes and treats "no such app" as an error.
    async fn must_get_app_by_name(&self, name: &str, policy: PollPolicy) -> Result<App> {
        poll_until_found(policy, "app", || self.get_app_by_name(name))
            .await?
            .ok_or_else(|| ApiError::AppNotFound(name.to_string()).into())
    }
}

/// Pick the single app named `name` out of a listing.
pub fn find_app_by_name(apps: Vec<App>, name: &str) -> Result<Option<App>> {
    let mut found = None;
    for app in apps.into_iter().filter(|a| a.name == name) {
        if found.is_some() {
            return Err(ApiError::AmbiguousName(name.to_string()).into());
        }
        found = Some(app);
    }
    Ok(found)
}
