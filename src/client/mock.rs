//! Mock Arpio API client for testing
//!
//! Provides an in-memory implementation of the API traits so the derived
//! operations (name lookup, latest recovery point, polling) can be tested
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AppApi, RecoveryPointApi};
use super::models::{App, RecoveryPoint, StagedResource, SyncPair, TimestampWindow};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure state via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockArpioClient::new()
///     .with_apps(vec![App { name: "web".into(), ..App::new("acct") }])
///     .await;
///
/// let app = mock.get_app_by_name("web").await?;
/// assert!(app.is_some());
/// ```
pub struct MockArpioClient {
    account_id: String,
    /// Applications returned from list_apps/get_app
    apps: Arc<Mutex<Vec<App>>>,
    /// Recovery points returned from list_recovery_points, per sync pair
    recovery_points: Arc<Mutex<Vec<(SyncPair, RecoveryPoint)>>>,
    /// Staged resources returned from list_recovery_point_resources
    resources: Arc<Mutex<Vec<StagedResource>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Listings return nothing until this many list calls have been made
    hidden_for: Arc<Mutex<usize>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

impl Default for MockArpioClient {
    fn default() -> Self {
        Self {
            account_id: "mock-account".to_string(),
            apps: Arc::new(Mutex::new(Vec::new())),
            recovery_points: Arc::new(Mutex::new(Vec::new())),
            resources: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
            hidden_for: Arc::new(Mutex::new(0)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub create_app: usize,
    pub list_apps: usize,
    pub get_app: usize,
    pub update_app: usize,
    pub delete_app: usize,
    pub list_recovery_points: usize,
    pub get_recovery_point: usize,
    pub update_recovery_point: usize,
    pub list_recovery_point_resources: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.create_app
            + self.list_apps
            + self.get_app
            + self.update_app
            + self.delete_app
            + self.list_recovery_points
            + self.get_recovery_point
            + self.update_recovery_point
            + self.list_recovery_point_resources
    }
}

impl MockArpioClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure applications.
    pub async fn with_apps(self, apps: Vec<App>) -> Self {
        *self.apps.lock().await = apps;
        self
    }

    /// Configure recovery points for one sync pair, in listing order.
    pub async fn with_recovery_points(self, pair: &SyncPair, points: Vec<RecoveryPoint>) -> Self {
        self.recovery_points
            .lock()
            .await
            .extend(points.into_iter().map(|rp| (pair.clone(), rp)));
        self
    }

    /// Configure staged resources.
    pub async fn with_resources(self, resources: Vec<StagedResource>) -> Self {
        *self.resources.lock().await = resources;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Make listings come back empty for the first `calls` list calls,
    /// simulating resources that are not visible yet.
    pub async fn hidden_for(self, calls: usize) -> Self {
        *self.hidden_for.lock().await = calls;
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// True while listings should still look empty.
    async fn still_hidden(&self) -> bool {
        let mut hidden = self.hidden_for.lock().await;
        if *hidden > 0 {
            *hidden -= 1;
            true
        } else {
            false
        }
    }
}

#[async_trait]
impl AppApi for MockArpioClient {
    fn account_id(&self) -> &str {
        &self.account_id
    }

    async fn create_app(&self, app: &App) -> Result<App> {
        self.call_count.lock().await.create_app += 1;
        self.check_error().await?;

        let mut apps = self.apps.lock().await;
        let created = App {
            app_id: Some(format!("mock-app-{}", apps.len() + 1)),
            ..app.clone()
        };
        apps.push(created.clone());
        Ok(created)
    }

    async fn list_apps(&self) -> Result<Vec<App>> {
        self.call_count.lock().await.list_apps += 1;
        self.check_error().await?;

        if self.still_hidden().await {
            return Ok(Vec::new());
        }
        Ok(self.apps.lock().await.clone())
    }

    async fn get_app(&self, app_id: &str) -> Result<Option<App>> {
        self.call_count.lock().await.get_app += 1;
        self.check_error().await?;

        let apps = self.apps.lock().await;
        Ok(apps
            .iter()
            .find(|a| a.app_id.as_deref() == Some(app_id))
            .cloned())
    }

    async fn update_app(&self, app: &App) -> Result<App> {
        self.call_count.lock().await.update_app += 1;
        self.check_error().await?;

        let mut apps = self.apps.lock().await;
        let existing = apps
            .iter_mut()
            .find(|a| a.app_id.is_some() && a.app_id == app.app_id)
            .ok_or_else(|| ApiError::NotFound(format!("App {:?} not found", app.app_id)))?;
        *existing = app.clone();
        Ok(app.clone())
    }

    async fn delete_app(&self, app_id: &str) -> Result<()> {
        self.call_count.lock().await.delete_app += 1;
        self.check_error().await?;

        self.apps
            .lock()
            .await
            .retain(|a| a.app_id.as_deref() != Some(app_id));
        Ok(())
    }
}

#[async_trait]
impl RecoveryPointApi for MockArpioClient {
    async fn list_recovery_points(
        &self,
        sync_pair: &SyncPair,
        window: &TimestampWindow,
    ) -> Result<Vec<RecoveryPoint>> {
        self.call_count.lock().await.list_recovery_points += 1;
        self.check_error().await?;

        if self.still_hidden().await {
            return Ok(Vec::new());
        }
        Ok(self
            .recovery_points
            .lock()
            .await
            .iter()
            .filter(|(pair, rp)| pair == sync_pair && window.contains(&rp.timestamp))
            .map(|(_, rp)| rp.clone())
            .collect())
    }

    async fn get_recovery_point(
        &self,
        sync_pair: &SyncPair,
        recovery_point_id: &str,
    ) -> Result<Option<RecoveryPoint>> {
        self.call_count.lock().await.get_recovery_point += 1;
        self.check_error().await?;

        Ok(self
            .recovery_points
            .lock()
            .await
            .iter()
            .find(|(pair, rp)| pair == sync_pair && rp.recovery_point_id == recovery_point_id)
            .map(|(_, rp)| rp.clone()))
    }

    async fn update_recovery_point(
        &self,
        sync_pair: &SyncPair,
        recovery_point: &RecoveryPoint,
    ) -> Result<RecoveryPoint> {
        self.call_count.lock().await.update_recovery_point += 1;
        self.check_error().await?;

        let mut points = self.recovery_points.lock().await;
        let (_, existing) = points
            .iter_mut()
            .find(|(pair, rp)| {
                pair == sync_pair && rp.recovery_point_id == recovery_point.recovery_point_id
            })
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "Recovery point {} not found",
                    recovery_point.recovery_point_id
                ))
            })?;
        *existing = recovery_point.clone();
        Ok(recovery_point.clone())
    }

    async fn list_recovery_point_resources(
        &self,
        _sync_pair: &SyncPair,
        _recovery_point_id: &str,
    ) -> Result<Vec<StagedResource>> {
        self.call_count.lock().await.list_recovery_point_resources += 1;
        self.check_error().await?;

        Ok(self.resources.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::poll::PollPolicy;
    use crate::error::Error;
    use chrono::{DateTime, TimeZone, Utc};
    use std::time::Duration;

    const FAST: Duration = Duration::from_millis(10);

    fn app(id: &str, name: &str) -> App {
        App {
            app_id: Some(id.to_string()),
            name: name.to_string(),
            ..App::new("mock-account")
        }
    }

    fn ts(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn rp(id: &str, hour: u32) -> RecoveryPoint {
        RecoveryPoint {
            available_at: ts(hour),
            protected: false,
            recovery_point_id: id.to_string(),
            timestamp: ts(hour),
        }
    }

    fn pair() -> SyncPair {
        SyncPair::new("111", "us-east-1", "222", "us-west-2")
    }

    // ========================================================================
    // AppApi tests
    // ========================================================================

    #[tokio::test]
    async fn test_get_app_by_name_cases() {
        let mock = MockArpioClient::new()
            .with_apps(vec![app("1", "x"), app("2", "y"), app("3", "x")])
            .await;

        let err = mock.get_app_by_name("x").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::AmbiguousName(_))));

        assert!(mock.get_app_by_name("z").await.unwrap().is_none());

        let found = mock.get_app_by_name("y").await.unwrap().unwrap();
        assert_eq!(found.app_id.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_must_get_app_by_name_single_attempt() {
        let mock = MockArpioClient::new().with_apps(vec![app("1", "web")]).await.hidden_for(1).await;

        let err = mock
            .must_get_app_by_name("web", PollPolicy::once())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::AppNotFound(ref n)) if n == "web"));
        assert_eq!(mock.call_counts().await.list_apps, 1);
    }

    #[tokio::test]
    async fn test_must_get_app_by_name_waits_for_app() {
        let mock = MockArpioClient::new().with_apps(vec![app("1", "web")]).await.hidden_for(3).await;

        let policy = PollPolicy::with_timeout(Duration::from_secs(5)).interval(FAST);
        let found = mock.must_get_app_by_name("web", policy).await.unwrap();

        assert_eq!(found.app_id.as_deref(), Some("1"));
        assert_eq!(mock.call_counts().await.list_apps, 4);
    }

    #[tokio::test]
    async fn test_must_get_app_by_name_does_not_retry_errors() {
        let mock = MockArpioClient::new()
            .with_error(ApiError::ServerError("down".to_string()))
            .await;

        let policy = PollPolicy::with_timeout(Duration::from_secs(5)).interval(FAST);
        let err = mock.must_get_app_by_name("web", policy).await.unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::ServerError(_))));
        assert_eq!(mock.call_counts().await.list_apps, 1);
    }

    #[tokio::test]
    async fn test_app_crud_round_trip() {
        let mock = MockArpioClient::new();

        let mut draft = mock.new_app();
        draft.name = "web".to_string();
        let created = mock.create_app(&draft).await.unwrap();
        assert_eq!(created.app_id.as_deref(), Some("mock-app-1"));
        assert_eq!(created.account_id, "mock-account");

        let mut changed = created.clone();
        changed.rpo = 15;
        mock.update_app(&changed).await.unwrap();
        assert_eq!(mock.get_app("mock-app-1").await.unwrap().unwrap().rpo, 15);

        mock.delete_app("mock-app-1").await.unwrap();
        mock.delete_app("mock-app-1").await.unwrap();
        assert!(mock.get_app("mock-app-1").await.unwrap().is_none());

        let counts = mock.call_counts().await;
        assert_eq!(counts.delete_app, 2);
        assert_eq!(counts.total(), 6);
    }

    // ========================================================================
    // RecoveryPointApi tests
    // ========================================================================

    #[tokio::test]
    async fn test_find_latest_recovery_point() {
        let mock = MockArpioClient::new()
            .with_recovery_points(&pair(), vec![rp("t1", 1), rp("t3", 3), rp("t2", 2)])
            .await;

        let latest = mock
            .find_latest_recovery_point(&pair(), &TimestampWindow::unbounded())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.recovery_point_id, "t3");

        let bounded = TimestampWindow::new(None, Some(ts(2) + chrono::Duration::minutes(30)));
        let latest = mock
            .find_latest_recovery_point(&pair(), &bounded)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.recovery_point_id, "t2");
    }

    #[tokio::test]
    async fn test_find_latest_scoped_to_sync_pair() {
        let other = SyncPair::new("333", "eu-west-1", "444", "eu-central-1");
        let mock = MockArpioClient::new()
            .with_recovery_points(&other, vec![rp("elsewhere", 9)])
            .await;

        let latest = mock
            .find_latest_recovery_point(&pair(), &TimestampWindow::unbounded())
            .await
            .unwrap();
        assert!(latest.is_none());
    }

    #[tokio::test]
    async fn test_must_find_latest_reports_window() {
        let mock = MockArpioClient::new()
            .with_recovery_points(&pair(), vec![rp("t1", 1)])
            .await;

        let window = TimestampWindow::new(Some(ts(5)), None);
        let err = mock
            .must_find_latest_recovery_point(&pair(), &window, PollPolicy::once())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("on or after \"2024-05-01T05:00:00Z\""));
        assert_eq!(mock.call_counts().await.list_recovery_points, 1);
    }

    #[tokio::test]
    async fn test_must_find_latest_waits_for_recovery_point() {
        let mock = MockArpioClient::new()
            .with_recovery_points(&pair(), vec![rp("t1", 1)])
            .await
            .hidden_for(2)
            .await;

        let policy = PollPolicy::with_timeout(Duration::from_secs(5)).interval(FAST);
        let latest = mock
            .must_find_latest_recovery_point(&pair(), &TimestampWindow::unbounded(), policy)
            .await
            .unwrap();

        assert_eq!(latest.recovery_point_id, "t1");
        assert_eq!(mock.call_counts().await.list_recovery_points, 3);
    }

    #[tokio::test]
    async fn test_must_find_latest_times_out() {
        let mock = MockArpioClient::new();

        let policy = PollPolicy::with_timeout(Duration::from_millis(40)).interval(FAST);
        let err = mock
            .must_find_latest_recovery_point(&pair(), &TimestampWindow::unbounded(), policy)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::NoRecoveryPoint { .. })));
        assert!(mock.call_counts().await.list_recovery_points >= 2);
    }

    #[tokio::test]
    async fn test_protect_recovery_point() {
        let mock = MockArpioClient::new()
            .with_recovery_points(&pair(), vec![rp("t1", 1)])
            .await;

        let point = mock.get_recovery_point(&pair(), "t1").await.unwrap().unwrap();
        let protected = mock.protect_recovery_point(&pair(), &point).await.unwrap();
        assert!(protected.protected);
        assert_eq!(mock.call_counts().await.update_recovery_point, 1);

        // Already protected: no second update
        let again = mock.protect_recovery_point(&pair(), &protected).await.unwrap();
        assert!(again.protected);
        assert_eq!(mock.call_counts().await.update_recovery_point, 1);

        let stored = mock.get_recovery_point(&pair(), "t1").await.unwrap().unwrap();
        assert!(stored.protected);
    }

    #[tokio::test]
    async fn test_list_resources() {
        let resource = StagedResource {
            arn: "arn:aws:s3:::bucket".to_string(),
            resource_type: "AWS::S3::Bucket".to_string(),
            ..StagedResource::default()
        };
        let mock = MockArpioClient::new().with_resources(vec![resource]).await;

        let resources = mock.list_recovery_point_resources(&pair(), "t1").await.unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(mock.call_counts().await.list_recovery_point_resources, 1);
    }
}
