//! Recovery point API trait
//!
//! Recovery points are created by the service; clients list them, inspect
//! their staged resources and toggle protection.

use async_trait::async_trait;

use crate::client::models::{
    RecoveryPoint, StagedResource, SyncPair, TimestampWindow, latest_recovery_point,
};
use crate::client::poll::{PollPolicy, poll_until_found};
use crate::error::{ApiError, Result};

/// Recovery point operations for the Arpio API
#[async_trait]
pub trait RecoveryPointApi: Send + Sync {
    /// List recovery points for a sync pair whose timestamps fall in `window`.
    async fn list_recovery_points(
        &self,
        sync_pair: &SyncPair,
        window: &TimestampWindow,
    ) -> Result<Vec<RecoveryPoint>>;

    /// Get a recovery point by ID. `None` if it does not exist.
    async fn get_recovery_point(
        &self,
        sync_pair: &SyncPair,
        recovery_point_id: &str,
    ) -> Result<Option<RecoveryPoint>>;

    /// Update the mutable properties (in practice, `protected`) of a
    /// recovery point.
    async fn update_recovery_point(
        &self,
        sync_pair: &SyncPair,
        recovery_point: &RecoveryPoint,
    ) -> Result<RecoveryPoint>;

    /// List the resources staged in a recovery point.
    async fn list_recovery_point_resources(
        &self,
        sync_pair: &SyncPair,
        recovery_point_id: &str,
    ) -> Result<Vec<StagedResource>>;

    // ========================================================================
    // Derived operations
    // ========================================================================

    /// Most recent recovery point inside `window`, or `None`.
    async fn find_latest_recovery_point(
        &self,
        sync_pair: &SyncPair,
        window: &TimestampWindow,
    ) -> Result<Option<RecoveryPoint>> {
        let points = self.list_recovery_points(sync_pair, window).await?;
        Ok(latest_recovery_point(points))
    }

    /// Like [`RecoveryPointApi::find_latest_recovery_point`], but keeps
    /// looking until the policy's timeout passes and treats "nothing found" as
    /// an error describing how to widen the window.
    async fn must_find_latest_recovery_point(
        &self,
        sync_pair: &SyncPair,
        window: &TimestampWindow,
        policy: PollPolicy,
    ) -> Result<RecoveryPoint> {
        poll_until_found(policy, "recovery point", || {
            self.find_latest_recovery_point(sync_pair, window)
        })
        .await?
        .ok_or_else(|| {
            ApiError::NoRecoveryPoint {
                start: window.start,
                end: window.end,
            }
            .into()
        })
    }

    /// Mark a recovery point protected so the service never garbage collects
    /// it. Already-protected points are returned as-is without a request.
    async fn protect_recovery_point(
        &self,
        sync_pair: &SyncPair,
        recovery_point: &RecoveryPoint,
    ) -> Result<RecoveryPoint> {
        if recovery_point.protected {
            return Ok(recovery_point.clone());
        }

        let protected = RecoveryPoint {
            protected: true,
            ..recovery_point.clone()
        };
        self.update_recovery_point(sync_pair, &protected).await
    }
}
