//! Arpio API data models
//!
//! Domain types exchanged with the Arpio API, organized by resource type.

mod app;
mod recovery_point;
mod selection_rule;
mod staged_resource;
mod sync_pair;

use serde::{Deserialize, Deserializer};

pub use app::{App, AppType};
pub use recovery_point::{RecoveryPoint, TimestampWindow, format_timestamp, latest_recovery_point};
pub use selection_rule::{ARN_RULE_TYPE, ArnRule, SelectionRule, TAG_RULE_TYPE, TagRule};
pub use staged_resource::{
    BACKUP_RECOVERY_POINT_EXTRA_TYPE, BACKUP_VAULT_EXTRA_TYPE, BackupRecoveryPointExtra,
    BackupVaultExtra, EC2_IMAGE_EXTRA_TYPE, EC2_SNAPSHOT_EXTRA_TYPE, Ec2ImageExtra,
    Ec2SnapshotExtra, Environment, KMS_KEY_EXTRA_TYPE, KmsKeyExtra,
    RDS_DB_CLUSTER_SNAPSHOT_EXTRA_TYPE, RDS_DB_SNAPSHOT_EXTRA_TYPE, RDS_OPTION_GROUP_EXTRA_TYPE,
    RdsDbClusterSnapshotExtra, RdsDbSnapshotExtra, RdsOptionGroupExtra, StagedExtra,
    StagedResource,
};
pub use sync_pair::{SyncEndpoint, SyncPair};

/// Decode an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
