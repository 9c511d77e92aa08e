//! Arpio API client

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ConfigError, Result};

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod poll;
pub mod transport;

pub use api::{AppApi, RecoveryPointApi, find_app_by_name};
#[cfg(test)]
pub use mock::MockArpioClient;
pub use models::*;
pub use poll::{APP_POLL_PERIOD, PollPolicy, RECOVERY_POINT_POLL_PERIOD, poll_until_found};
pub use transport::{ARPIO_API_URL, ApiRequest, BuildInfo, HttpTransport, Transport};

/// Arpio API client trait
///
/// Combines every resource trait so callers can take `&dyn ArpioApi`.
pub trait ArpioApi: AppApi + RecoveryPointApi {}

impl<T: AppApi + RecoveryPointApi> ArpioApi for T {}

/// Connection information for [`ArpioClient::new`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_url: String,
    pub account_id: String,
    pub api_key_id: String,
    pub api_key_secret: String,
    pub build: BuildInfo,
}

impl ClientSettings {
    pub fn new(
        api_url: impl Into<String>,
        api_key_id: impl Into<String>,
        api_key_secret: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            account_id: account_id.into(),
            api_key_id: api_key_id.into(),
            api_key_secret: api_key_secret.into(),
            build: BuildInfo::default(),
        }
    }

    /// Report a specific version and commit in the User-Agent header.
    pub fn with_build(mut self, version: impl Into<String>, commit: impl Into<String>) -> Self {
        self.build = BuildInfo {
            version: version.into(),
            commit: commit.into(),
        };
        self
    }
}

/// Arpio API client, scoped to one account
pub struct ArpioClient<T: Transport = HttpTransport> {
    transport: T,
    account_id: String,
}

impl ArpioClient<HttpTransport> {
    /// Create a client that talks HTTP to the configured API URL.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let transport = HttpTransport::new(
            &settings.api_url,
            &settings.api_key_id,
            &settings.api_key_secret,
            &settings.build,
        )?;
        Self::with_transport(transport, settings.account_id.clone())
    }
}

impl<T: Transport> ArpioClient<T> {
    /// Create a client over any transport.
    pub fn with_transport(transport: T, account_id: impl Into<String>) -> Result<Self> {
        let account_id = account_id.into();
        if account_id.is_empty() {
            return Err(ConfigError::Missing("account_id").into());
        }
        Ok(Self {
            transport,
            account_id,
        })
    }

    fn apps_path(&self) -> String {
        format!("/accounts/{}/applications", self.account_id)
    }

    fn app_path(&self, app_id: &str) -> String {
        format!("{}/{}", self.apps_path(), app_id)
    }

    fn sync_pair_path(&self, sync_pair: &SyncPair) -> String {
        format!(
            "/accounts/{}/syncPairs/{}/{}/{}/{}",
            self.account_id,
            sync_pair.source.account_id,
            sync_pair.source.region,
            sync_pair.target.account_id,
            sync_pair.target.region,
        )
    }

    fn recovery_point_path(&self, sync_pair: &SyncPair, recovery_point_id: &str) -> String {
        format!(
            "{}/recoveryPoints/{}",
            self.sync_pair_path(sync_pair),
            recovery_point_id
        )
    }

    /// Execute a request and decode the JSON response.
    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let body = self.transport.execute(request).await?;
        serde_json::from_slice(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }

    async fn send_json<B, R>(&self, request: ApiRequest, body: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        self.fetch(request.with_json(body)?).await
    }
}

/// Treat a 404 as an absent resource.
fn found<R>(result: Result<R>) -> Result<Option<R>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[async_trait]
impl<T: Transport> AppApi for ArpioClient<T> {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    async fn create_app(&self, app: &App) -> Result<App> {
        self.send_json(ApiRequest::post(self.apps_path()), app).await
    }

    async fn list_apps(&self) -> Result<Vec<App>> {
        self.fetch(ApiRequest::get(self.apps_path())).await
    }

    async fn get_app(&self, app_id: &str) -> Result<Option<App>> {
        found(self.fetch(ApiRequest::get(self.app_path(app_id))).await)
    }

    async fn update_app(&self, app: &App) -> Result<App> {
        let app_id = app.app_id.as_deref().ok_or_else(|| {
            ApiError::InvalidRequest("cannot update an app that has no appId".to_string())
        })?;
        self.send_json(ApiRequest::put(self.app_path(app_id)), app)
            .await
    }

    async fn delete_app(&self, app_id: &str) -> Result<()> {
        match self
            .transport
            .execute(ApiRequest::delete(self.app_path(app_id)))
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                log::debug!("App {} was already deleted", app_id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<T: Transport> RecoveryPointApi for ArpioClient<T> {
    async fn list_recovery_points(
        &self,
        sync_pair: &SyncPair,
        window: &TimestampWindow,
    ) -> Result<Vec<RecoveryPoint>> {
        let path = format!("{}/recoveryPoints", self.sync_pair_path(sync_pair));
        self.fetch(ApiRequest::get(path).with_query(window.query_params()))
            .await
    }

    async fn get_recovery_point(
        &self,
        sync_pair: &SyncPair,
        recovery_point_id: &str,
    ) -> Result<Option<RecoveryPoint>> {
        let path = self.recovery_point_path(sync_pair, recovery_point_id);
        found(self.fetch(ApiRequest::get(path)).await)
    }

    async fn update_recovery_point(
        &self,
        sync_pair: &SyncPair,
        recovery_point: &RecoveryPoint,
    ) -> Result<RecoveryPoint> {
        if recovery_point.recovery_point_id.is_empty() {
            return Err(ApiError::InvalidRequest(
                "cannot update a recovery point that has no recoveryPointId".to_string(),
            )
            .into());
        }
        let path = self.recovery_point_path(sync_pair, &recovery_point.recovery_point_id);
        self.send_json(ApiRequest::put(path), recovery_point).await
    }

    async fn list_recovery_point_resources(
        &self,
        sync_pair: &SyncPair,
        recovery_point_id: &str,
    ) -> Result<Vec<StagedResource>> {
        let path = format!(
            "{}/resources",
            self.recovery_point_path(sync_pair, recovery_point_id)
        );
        self.fetch(ApiRequest::get(path)).await
    }
}
